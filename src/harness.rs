use crate::config::{ConfigLoader, HarnessConfig};
use crate::registry::TestRegistry;
use crate::runner::{ConsoleReporter, Reporter, RunStatus, TestRunner};
use crate::{Result, logger};
use colored::Colorize;
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::info;

/// 启动失败（配置错误、注册表溢出）时的退出码
pub const STARTUP_FAILURE: u8 = 2;

/// 测试程序入口，`test_main!()` 展开后调用的就是它
///
/// 退出码: 0 全部通过，1 有断言失败，2 启动失败（此时没有任何用例被执行）
pub fn run() -> ExitCode {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(None);
            return startup_failure(e);
        }
    };
    logger::init_logger(config.log.as_deref());

    match try_run(&config) {
        Ok(status) => status.into(),
        Err(e) => startup_failure(e),
    }
}

/// 按给定配置收集、执行并报告所有声明的用例
pub fn try_run(config: &HarnessConfig) -> Result<RunStatus> {
    let registry = TestRegistry::collect(config.capacity)?;

    if let Some(color) = config.color.forced() {
        colored::control::set_override(color);
    }
    let reporter = Rc::new(RefCell::new(ConsoleReporter::stdout()));

    info!("Running {} test cases", registry.len());
    let summary = TestRunner::new(&registry).run(Rc::clone(&reporter));
    let status = reporter.borrow_mut().report(&summary);

    info!(
        "Finished: {} assertions, {} failed",
        summary.counters.assertions, summary.counters.failed_assertions
    );
    Ok(status)
}

fn startup_failure(err: crate::AttounitError) -> ExitCode {
    eprintln!("{}: {}", "error".red().bold(), err);
    ExitCode::from(STARTUP_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    #[test]
    fn test_try_run_without_declarations() {
        // 库自身的单元测试二进制里没有 test_case! 声明
        let config = HarnessConfig {
            color: ColorChoice::Never,
            ..Default::default()
        };
        assert_eq!(try_run(&config).unwrap(), RunStatus::Passed);
    }
}

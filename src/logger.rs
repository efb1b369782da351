use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 优先使用 RUST_LOG 环境变量，其次是配置中的级别，默认: warn
/// 日志写到 stderr，stdout 只留给测试报告
///
/// 示例:
/// - RUST_LOG=debug cargo test --test selftest
pub fn init_logger(default_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.unwrap_or("warn")));

    // 重复初始化（例如同一进程多次调用 run）时忽略错误
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    tracing::debug!("Logger initialized");
}

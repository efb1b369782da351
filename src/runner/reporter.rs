use crate::assertion::AssertionFailure;
use crate::registry::TestCase;
use crate::runner::types::{RunStatus, RunSummary};
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

const FOOTER: &str = "=========================================================";

/// 测试报告输出
///
/// 失败细节在断言发生时立即输出，摘要在全部用例结束后输出。
pub trait Reporter {
    /// 一次断言失败
    fn assertion_failed(&mut self, failure: &AssertionFailure<'_>);

    /// 用例的某个阶段发生 panic
    fn case_panicked(&mut self, case: &TestCase, message: &str) {
        let _ = (case, message);
    }

    /// 打印摘要并给出最终结果
    fn report(&mut self, summary: &RunSummary) -> RunStatus;
}

/// 终端报告，默认写到 stdout
///
/// 是否着色由 `colored` 决定（环境检测或 `colored::control::set_override`）
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write test report: {}", e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn assertion_failed(&mut self, failure: &AssertionFailure<'_>) {
        let outcome = failure.outcome;

        self.emit(format_args!(
            "{} in {}",
            "✗ Assertion failed".red().bold(),
            outcome.site
        ));
        self.emit(format_args!(
            "\tSuite: {}, Case: {}",
            failure.suite, failure.case
        ));
        self.emit(format_args!("\t{}", outcome.site.expression));
        self.emit(format_args!("\tExpected {}", outcome.expectation()));
    }

    fn case_panicked(&mut self, case: &TestCase, message: &str) {
        let header = "✗ Test case panicked".red().bold();
        match case.location {
            Some((file, line)) => self.emit(format_args!("{} in {}:{}", header, file, line)),
            None => self.emit(format_args!("{}", header)),
        }
        self.emit(format_args!("\tSuite: {}, Case: {}", case.suite, case.name));
        self.emit(format_args!("\t{}", message));
    }

    fn report(&mut self, summary: &RunSummary) -> RunStatus {
        let status = summary.status();
        let counters = &summary.counters;

        match status {
            RunStatus::Passed => {
                self.emit(format_args!("{}", FOOTER.green().bold()));
                self.emit(format_args!(
                    "{} ({} assertions in {} test cases)",
                    "✓ All assertions passed".green().bold(),
                    counters.assertions,
                    summary.total_cases
                ));
            }
            RunStatus::Failed => {
                let mut banner = format!("✗ {} assertions failed", counters.failed_assertions);
                if counters.panicked_cases > 0 {
                    banner.push_str(&format!(", {} test cases panicked", counters.panicked_cases));
                }
                self.emit(format_args!("{}", FOOTER.red().bold()));
                self.emit(format_args!("{}", banner.red().bold()));
            }
        }

        if let Err(e) = self.out.flush() {
            warn!("Failed to flush test report: {}", e);
        }
        status
    }
}

//! 一个极简的单元测试框架
//!
//! 用例在声明处自动注册，无需维护用例清单；`test_main!()` 按声明顺序执行所有用例，
//! 统计断言并以退出码报告结果。
//!
//! ```ignore
//! mod math {
//!     attounit::test_suite!(math);
//!
//!     attounit::test_case!(addition, {
//!         attounit::assert_equal!(2 + 2, 4);
//!     });
//! }
//!
//! attounit::test_main!();
//! ```
//!
//! 需要在 Cargo.toml 中为对应的测试目标设置 `harness = false`。

pub mod assertion;
pub mod config;
pub mod error;
pub mod harness;
pub mod logger;
pub mod registry;
pub mod runner;
pub mod utils;

mod macros;

// Re-export commonly used types
pub use error::{AttounitError, Result};
pub use harness::run;
pub use registry::{Suite, TestCase, TestRegistry};
pub use runner::{ConsoleReporter, Reporter, RunStatus, RunSummary, TestRunner};

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}

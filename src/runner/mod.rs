pub mod executor;
pub mod reporter;
pub mod types;

pub use executor::TestRunner;
pub use reporter::{ConsoleReporter, Reporter};
pub use types::{RunCounters, RunStatus, RunSummary};

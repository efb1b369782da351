/// 断言模块 - 求值、记录并把失败交给 Reporter
pub mod evaluator;
mod recorder;
mod types;

pub use evaluator::{equal, greater, is_true, less, not_equal, not_null, null};
pub use recorder::{Tally, current_case, record};
pub(crate) use recorder::CaseScope;
pub use types::{AssertionFailure, AssertionOutcome, Operands, Predicate, Site};

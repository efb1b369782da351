use crate::assertion::types::{AssertionFailure, AssertionOutcome};
use crate::runner::Reporter;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// 单个用例内的断言计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub assertions: usize,
    pub failed: usize,
}

/// 正在执行的用例
struct ActiveCase {
    suite: String,
    name: String,
    tally: Tally,
    reporter: Rc<RefCell<dyn Reporter>>,
}

thread_local! {
    static ACTIVE: RefCell<Option<ActiveCase>> = const { RefCell::new(None) };
}

/// 用例作用域：存在期间，本线程上的断言都记到这个用例名下
pub(crate) struct CaseScope {
    _private: (),
}

impl CaseScope {
    /// 进入用例作用域
    pub(crate) fn enter(suite: &str, name: &str, reporter: Rc<RefCell<dyn Reporter>>) -> Self {
        ACTIVE.with(|slot| {
            let previous = slot.borrow_mut().replace(ActiveCase {
                suite: suite.to_string(),
                name: name.to_string(),
                tally: Tally::default(),
                reporter,
            });
            if let Some(previous) = previous {
                warn!(
                    "test case {}::{} started while {}::{} was still active",
                    suite, name, previous.suite, previous.name
                );
            }
        });
        Self { _private: () }
    }

    /// 离开作用域并取回计数
    pub(crate) fn finish(self) -> Tally {
        ACTIVE
            .with(|slot| slot.borrow_mut().take())
            .map(|active| active.tally)
            .unwrap_or_default()
    }
}

impl Drop for CaseScope {
    fn drop(&mut self) {
        // finish() 之后再清一次是无害的
        ACTIVE.with(|slot| {
            slot.borrow_mut().take();
        });
    }
}

/// 记录一次断言结果，返回是否通过
///
/// 失败会立即交给当前用例的 Reporter 输出。
/// 在用例之外调用时不计数，只打印警告。
pub fn record(outcome: AssertionOutcome) -> bool {
    let passed = outcome.passed;

    ACTIVE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(active) = slot.as_mut() else {
            warn!(
                "assertion `{}` at {} evaluated outside of a running test case",
                outcome.site.expression, outcome.site
            );
            return;
        };

        active.tally.assertions += 1;
        if !passed {
            active.tally.failed += 1;
            let failure = AssertionFailure {
                suite: &active.suite,
                case: &active.name,
                outcome: &outcome,
            };
            active.reporter.borrow_mut().assertion_failed(&failure);
        }
    });

    passed
}

/// 当前正在执行的 (套件, 用例)
pub fn current_case() -> Option<(String, String)> {
    ACTIVE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|active| (active.suite.clone(), active.name.clone()))
    })
}

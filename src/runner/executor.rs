use crate::assertion::CaseScope;
use crate::registry::{TestCase, TestRegistry};
use crate::runner::reporter::Reporter;
use crate::runner::types::{RunCounters, RunSummary};
use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use tracing::{debug, warn};

/// 按注册顺序依次执行用例
pub struct TestRunner<'a> {
    registry: &'a TestRegistry,
}

impl<'a> TestRunner<'a> {
    pub fn new(registry: &'a TestRegistry) -> Self {
        Self { registry }
    }

    /// 执行所有用例
    ///
    /// 每个用例依次执行 setup → body → teardown。断言失败不会中断后续断言和用例，
    /// 只影响计数。某个阶段 panic 时：setup panic 则跳过 body，teardown 总会执行。
    pub fn run<R: Reporter + 'static>(&self, reporter: Rc<RefCell<R>>) -> RunSummary {
        let reporter: Rc<RefCell<dyn Reporter>> = reporter;
        let mut counters = RunCounters::default();

        for (index, case) in self.registry.iter().enumerate() {
            counters.current = Some(index);
            debug!("Running test case {}::{}", case.suite, case.name);

            let scope = CaseScope::enter(&case.suite, &case.name, Rc::clone(&reporter));
            let panicked = Self::execute_one(case, &reporter);
            let tally = scope.finish();

            counters.absorb(tally);
            counters.cases_run += 1;
            if panicked {
                counters.panicked_cases += 1;
            }
        }

        counters.current = None;
        RunSummary {
            counters,
            total_cases: self.registry.len(),
        }
    }

    /// 执行单个用例，返回是否发生过 panic
    fn execute_one(case: &TestCase, reporter: &Rc<RefCell<dyn Reporter>>) -> bool {
        let mut panicked = false;

        let setup_ok = Self::guarded(case, reporter, "setup", || case.setup());
        panicked |= !setup_ok;

        if setup_ok {
            panicked |= !Self::guarded(case, reporter, "body", || case.run_body());
        }

        panicked |= !Self::guarded(case, reporter, "teardown", || case.teardown());
        panicked
    }

    fn guarded(
        case: &TestCase,
        reporter: &Rc<RefCell<dyn Reporter>>,
        phase: &str,
        f: impl FnOnce(),
    ) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(()) => true,
            Err(payload) => {
                let message = format!("{} panicked: {}", phase, panic_message(payload.as_ref()));
                warn!("Test case {}::{} {}", case.suite, case.name, message);
                reporter.borrow_mut().case_panicked(case, &message);
                false
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

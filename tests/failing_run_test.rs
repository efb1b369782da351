//! 有断言失败时整个运行的结果：其余断言和用例照常执行，最终退出码为 1

use attounit::config::{ColorChoice, HarnessConfig};
use attounit::harness::try_run;
use attounit::RunStatus;
use std::sync::atomic::Ordering;

mod failing {
    use std::sync::atomic::{AtomicBool, Ordering};

    pub static AFTER_FAILURE: AtomicBool = AtomicBool::new(false);
    pub static NEXT_CASE_RAN: AtomicBool = AtomicBool::new(false);

    attounit::test_suite!(failing);

    attounit::test_case!(broken_addition, {
        attounit::assert_equal!(2 + 2, 5);
        AFTER_FAILURE.store(true, Ordering::SeqCst);
        attounit::assert_true!(1 < 2);
    });

    attounit::test_case!(still_runs, {
        NEXT_CASE_RAN.store(true, Ordering::SeqCst);
        attounit::assert_less!(1, 2);
    });
}

#[test]
fn test_failing_run_exits_with_one() {
    let config = HarnessConfig {
        color: ColorChoice::Never,
        ..Default::default()
    };

    let status = try_run(&config).unwrap();
    assert_eq!(status, RunStatus::Failed);
    assert_eq!(status.code(), 1);

    assert!(failing::AFTER_FAILURE.load(Ordering::SeqCst));
    assert!(failing::NEXT_CASE_RAN.load(Ordering::SeqCst));
}

use attounit::config::{ColorChoice, HarnessConfig};
use attounit::harness::try_run;
use attounit::{AttounitError, TestRegistry};
use std::sync::atomic::Ordering;

mod collected {
    use std::sync::atomic::{AtomicBool, Ordering};

    /// 任何用例体被执行都会置位
    pub static BODY_RAN: AtomicBool = AtomicBool::new(false);

    fn touch() {
        BODY_RAN.store(true, Ordering::SeqCst);
    }

    attounit::test_suite!(collected);

    attounit::test_case!(declared_first, {
        touch();
    });

    // 一次展开出多个用例，它们的 line!() 相同
    macro_rules! declare_cases {
        ($($name:ident),* $(,)?) => {
            $(
                attounit::test_case!($name, {
                    touch();
                });
            )*
        };
    }

    declare_cases!(generated_a, generated_b, generated_c);

    attounit::test_case!(same_line_x, { touch(); }); attounit::test_case!(same_line_y, { touch(); });

    attounit::test_case!(declared_last, {
        touch();
    });
}

#[test]
fn test_collect_keeps_declaration_order() {
    let registry = TestRegistry::collect(TestRegistry::DEFAULT_CAPACITY).unwrap();
    let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "declared_first",
            "generated_a",
            "generated_b",
            "generated_c",
            "same_line_x",
            "same_line_y",
            "declared_last",
        ]
    );
    assert!(registry.iter().all(|c| c.suite == "collected"));
    assert!(!collected::BODY_RAN.load(Ordering::SeqCst));
}

#[test]
fn test_collect_past_capacity() {
    let err = TestRegistry::collect(1).unwrap_err();
    match err {
        AttounitError::RegistryOverflow {
            capacity,
            suite,
            name,
        } => {
            assert_eq!(capacity, 1);
            assert_eq!(suite, "collected");
            assert_eq!(name, "generated_a");
        }
        other => panic!("Expected RegistryOverflow, got {:?}", other),
    }
}

#[test]
fn test_overflow_stops_before_any_case_runs() {
    let config = HarnessConfig {
        capacity: 1,
        color: ColorChoice::Never,
        ..Default::default()
    };

    let result = try_run(&config);
    assert!(matches!(
        result,
        Err(AttounitError::RegistryOverflow { capacity: 1, .. })
    ));
    assert!(!collected::BODY_RAN.load(Ordering::SeqCst));
}

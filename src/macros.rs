//! 声明用例和断言用的宏
//!
//! 一个模块对应一个套件：`test_suite!` 绑定套件名和钩子，
//! 之后同一模块里的 `test_case!` 都属于这个套件。

/// 声明当前模块的测试套件
///
/// ```ignore
/// attounit::test_suite!(math);
/// attounit::test_suite!(db, before_each = reset_db, after_each = close_db);
/// ```
#[macro_export]
macro_rules! test_suite {
    ($name:ident $(, before_each = $setup:expr)? $(, after_each = $teardown:expr)? $(,)?) => {
        #[allow(non_camel_case_types, dead_code)]
        struct __AttounitSuite;

        impl $crate::registry::Suite for __AttounitSuite {
            const NAME: &'static str = stringify!($name);
            $(
                fn before_each() {
                    ($setup)()
                }
            )?
            $(
                fn after_each() {
                    ($teardown)()
                }
            )?
        }
    };
}

/// 声明一个用例并自动注册到当前模块的套件
///
/// ```ignore
/// attounit::test_case!(addition, {
///     attounit::assert_equal!(2 + 2, 4);
/// });
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:ident, $body:block $(,)?) => {
        fn $name() $body

        $crate::__private::inventory::submit! {
            $crate::registry::TestDeclaration::new::<__AttounitSuite>(
                stringify!($name),
                file!(),
                line!(),
                $name,
            )
        }
    };
}

/// 生成 `fn main()`，执行所有已声明的用例
#[macro_export]
macro_rules! test_main {
    () => {
        fn main() -> ::std::process::ExitCode {
            $crate::run()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __site {
    ($text:expr) => {
        $crate::assertion::Site::new(file!(), line!(), $text)
    };
}

#[macro_export]
macro_rules! assert_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_equal_fmt!($a, $b, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_equal_fmt {
    ($a:expr, $b:expr, $fmt:expr $(,)?) => {
        $crate::assertion::equal(
            &$a,
            &$b,
            &$fmt,
            $crate::__site!(concat!(stringify!($a), " == ", stringify!($b))),
        )
    };
}

#[macro_export]
macro_rules! assert_not_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_not_equal_fmt!($a, $b, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_not_equal_fmt {
    ($a:expr, $b:expr, $fmt:expr $(,)?) => {
        $crate::assertion::not_equal(
            &$a,
            &$b,
            &$fmt,
            $crate::__site!(concat!(stringify!($a), " != ", stringify!($b))),
        )
    };
}

#[macro_export]
macro_rules! assert_greater {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_greater_fmt!($a, $b, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_greater_fmt {
    ($a:expr, $b:expr, $fmt:expr $(,)?) => {
        $crate::assertion::greater(
            &$a,
            &$b,
            &$fmt,
            $crate::__site!(concat!(stringify!($a), " > ", stringify!($b))),
        )
    };
}

#[macro_export]
macro_rules! assert_less {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_less_fmt!($a, $b, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_less_fmt {
    ($a:expr, $b:expr, $fmt:expr $(,)?) => {
        $crate::assertion::less(
            &$a,
            &$b,
            &$fmt,
            $crate::__site!(concat!(stringify!($a), " < ", stringify!($b))),
        )
    };
}

/// 断言 `Option` 为 `None`
#[macro_export]
macro_rules! assert_null {
    ($val:expr $(,)?) => {
        $crate::assert_null_fmt!($val, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_null_fmt {
    ($val:expr, $fmt:expr $(,)?) => {
        $crate::assertion::null(
            &$val,
            &$fmt,
            $crate::__site!(concat!(stringify!($val), " is none")),
        )
    };
}

/// 断言 `Option` 为 `Some`
#[macro_export]
macro_rules! assert_not_null {
    ($val:expr $(,)?) => {
        $crate::assert_not_null_fmt!($val, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_not_null_fmt {
    ($val:expr, $fmt:expr $(,)?) => {
        $crate::assertion::not_null(
            &$val,
            &$fmt,
            $crate::__site!(concat!(stringify!($val), " is some")),
        )
    };
}

#[macro_export]
macro_rules! assert_true {
    ($val:expr $(,)?) => {
        $crate::assert_true_fmt!($val, $crate::utils::DebugFormat)
    };
}

#[macro_export]
macro_rules! assert_true_fmt {
    ($val:expr, $fmt:expr $(,)?) => {
        $crate::assertion::is_true($val, &$fmt, $crate::__site!(stringify!($val)))
    };
}

use crate::assertion::recorder::record;
use crate::assertion::types::{AssertionOutcome, Operands, Predicate, Site};
use crate::utils::ValueFormatter;

/// 二元断言的公共路径：记录结果，失败时用 `format` 渲染两个操作数
pub fn check_binary<A, B, F>(
    passed: bool,
    predicate: Predicate,
    lhs: &A,
    rhs: &B,
    format: &F,
    site: Site,
) -> bool
where
    A: ?Sized,
    B: ?Sized,
    F: ValueFormatter<A> + ValueFormatter<B> + ?Sized,
{
    let operands = if passed {
        Operands::Binary(String::new(), String::new())
    } else {
        Operands::Binary(format.format_value(lhs), format.format_value(rhs))
    };

    record(AssertionOutcome {
        passed,
        site,
        predicate,
        operands,
    })
}

/// 一元断言的公共路径
pub fn check_unary<T, F>(passed: bool, predicate: Predicate, value: &T, format: &F, site: Site) -> bool
where
    T: ?Sized,
    F: ValueFormatter<T> + ?Sized,
{
    let rendered = if passed {
        String::new()
    } else {
        format.format_value(value)
    };

    record(AssertionOutcome {
        passed,
        site,
        predicate,
        operands: Operands::Unary(rendered),
    })
}

pub fn equal<A, B, F>(lhs: &A, rhs: &B, format: &F, site: Site) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
    F: ValueFormatter<A> + ValueFormatter<B> + ?Sized,
{
    check_binary(lhs == rhs, Predicate::Equal, lhs, rhs, format, site)
}

pub fn not_equal<A, B, F>(lhs: &A, rhs: &B, format: &F, site: Site) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
    F: ValueFormatter<A> + ValueFormatter<B> + ?Sized,
{
    check_binary(lhs != rhs, Predicate::NotEqual, lhs, rhs, format, site)
}

pub fn greater<A, B, F>(lhs: &A, rhs: &B, format: &F, site: Site) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
    F: ValueFormatter<A> + ValueFormatter<B> + ?Sized,
{
    check_binary(lhs > rhs, Predicate::Greater, lhs, rhs, format, site)
}

pub fn less<A, B, F>(lhs: &A, rhs: &B, format: &F, site: Site) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
    F: ValueFormatter<A> + ValueFormatter<B> + ?Sized,
{
    check_binary(lhs < rhs, Predicate::Less, lhs, rhs, format, site)
}

/// 期望值缺失（`None`）。有值时用 `format` 渲染内部的值
pub fn null<T, F>(value: &Option<T>, format: &F, site: Site) -> bool
where
    F: ValueFormatter<T> + ?Sized,
{
    let passed = value.is_none();
    let rendered = render_option(passed, value, format);
    check_unary(passed, Predicate::Null, rendered.as_str(), &as_is, site)
}

/// 期望值存在（`Some`）
pub fn not_null<T, F>(value: &Option<T>, format: &F, site: Site) -> bool
where
    F: ValueFormatter<T> + ?Sized,
{
    let passed = value.is_some();
    let rendered = render_option(passed, value, format);
    check_unary(passed, Predicate::NotNull, rendered.as_str(), &as_is, site)
}

pub fn is_true<F>(value: bool, format: &F, site: Site) -> bool
where
    F: ValueFormatter<bool> + ?Sized,
{
    check_unary(value, Predicate::True, &value, format, site)
}

fn render_option<T, F>(passed: bool, value: &Option<T>, format: &F) -> String
where
    F: ValueFormatter<T> + ?Sized,
{
    match value {
        _ if passed => String::new(),
        Some(inner) => format!("Some({})", format.format_value(inner)),
        None => "None".to_string(),
    }
}

fn as_is(value: &str) -> String {
    value.to_string()
}

use std::fmt;

/// 断言操作数的显示方式
///
/// 断言失败时，操作数通过它转换成文本。默认使用 [`DebugFormat`]，
/// `_fmt` 系列宏允许调用者传入自己的格式器，任何 `Fn(&T) -> String` 都可以直接使用。
pub trait ValueFormatter<T: ?Sized> {
    fn format_value(&self, value: &T) -> String;
}

/// `{:?}` 格式（默认）
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugFormat;

/// `{}` 格式
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormat;

/// `{:#x}` 格式，适合位掩码、地址之类的整数
#[derive(Debug, Clone, Copy, Default)]
pub struct HexFormat;

impl<T: fmt::Debug + ?Sized> ValueFormatter<T> for DebugFormat {
    fn format_value(&self, value: &T) -> String {
        format!("{:?}", value)
    }
}

impl<T: fmt::Display + ?Sized> ValueFormatter<T> for DisplayFormat {
    fn format_value(&self, value: &T) -> String {
        value.to_string()
    }
}

impl<T: fmt::LowerHex + ?Sized> ValueFormatter<T> for HexFormat {
    fn format_value(&self, value: &T) -> String {
        format!("{:#x}", value)
    }
}

impl<T: ?Sized, F> ValueFormatter<T> for F
where
    F: Fn(&T) -> String,
{
    fn format_value(&self, value: &T) -> String {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formats() {
        assert_eq!(DebugFormat.format_value("abc"), "\"abc\"");
        assert_eq!(DisplayFormat.format_value("abc"), "abc");
        assert_eq!(HexFormat.format_value(&255u32), "0xff");
        assert_eq!(DebugFormat.format_value(&Some(3)), "Some(3)");
    }

    #[test]
    fn test_closure_format() {
        let two_places = |v: &f64| format!("{:.2}", v);
        assert_eq!(two_places.format_value(&1.0), "1.00");
    }
}

use crate::registry::TestRegistry;
use serde::Deserialize;

/// 何时输出带颜色的报告
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// 交给 colored 按终端和环境变量自行判断
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// 需要强制覆盖时返回 Some，Auto 返回 None
    pub fn forced(&self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

/// attounit.toml 的内容
///
/// ```toml
/// capacity = 4096
/// color = "never"
/// log = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// 注册表容量
    pub capacity: usize,

    pub color: ColorChoice,

    /// 默认日志级别（RUST_LOG 优先）
    pub log: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            capacity: TestRegistry::DEFAULT_CAPACITY,
            color: ColorChoice::Auto,
            log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_choice() {
        assert_eq!(ColorChoice::parse("always"), Some(ColorChoice::Always));
        assert_eq!(ColorChoice::parse(" Never "), Some(ColorChoice::Never));
        assert_eq!(ColorChoice::parse("auto"), Some(ColorChoice::Auto));
        assert_eq!(ColorChoice::parse("sometimes"), None);
        assert_eq!(ColorChoice::Always.forced(), Some(true));
        assert_eq!(ColorChoice::Never.forced(), Some(false));
        assert_eq!(ColorChoice::Auto.forced(), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: HarnessConfig = toml::from_str(r#"color = "never""#).unwrap();
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.capacity, 2048);
        assert_eq!(config.log, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<HarnessConfig>("colour = \"never\"").is_err());
    }
}

use crate::config::types::{ColorChoice, HarnessConfig};
use crate::{AttounitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "attounit.toml";

    /// 加载最终配置：配置文件 + 环境变量覆盖
    pub fn load() -> Result<HarnessConfig> {
        let config = match Self::find_and_load()? {
            Some((path, config)) => {
                debug!("Loaded harness config from {}", path.display());
                config
            }
            None => HarnessConfig::default(),
        };

        Self::apply_env(config, |key| std::env::var(key).ok())
    }

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<HarnessConfig> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: HarnessConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/attounit/
    ///
    /// 找到但无法解析的文件视为错误，不会静默跳过
    pub fn find_and_load() -> Result<Option<(PathBuf, HarnessConfig)>> {
        let candidate = Self::find_in_current_dir().or_else(Self::find_in_user_dir);

        match candidate {
            Some(path) => {
                let config = Self::load_from_path(&path)?;
                Ok(Some((path, config)))
            }
            None => Ok(None),
        }
    }

    fn find_in_current_dir() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    fn find_in_user_dir() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let config_path = home.join(".config").join("attounit").join(Self::CONFIG_FILE);
        config_path.exists().then_some(config_path)
    }

    /// 应用环境变量覆盖
    ///
    /// - ATTOUNIT_CAPACITY: 注册表容量
    /// - ATTOUNIT_COLOR: auto / always / never
    /// - ATTOUNIT_LOG: 默认日志级别
    /// - NO_COLOR: 存在且非空时关闭颜色（ATTOUNIT_COLOR 优先）
    pub fn apply_env<F>(mut config: HarnessConfig, lookup: F) -> Result<HarnessConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ATTOUNIT_CAPACITY") {
            config.capacity = value.trim().parse().map_err(|_| {
                AttounitError::Config(format!("ATTOUNIT_CAPACITY is not a number: {}", value))
            })?;
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = ColorChoice::Never;
        }

        if let Some(value) = lookup("ATTOUNIT_COLOR") {
            config.color = ColorChoice::parse(&value).ok_or_else(|| {
                AttounitError::Config(format!(
                    "ATTOUNIT_COLOR must be auto, always or never, got {}",
                    value
                ))
            })?;
        }

        if let Some(value) = lookup("ATTOUNIT_LOG") {
            config.log = Some(value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_path() {
        let config_content = r#"
capacity = 16
color = "always"
log = "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = ConfigLoader::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.capacity, 16);
        assert_eq!(config.color, ColorChoice::Always);
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"capacity = \"lots\"").unwrap();
        temp_file.flush().unwrap();

        let err = ConfigLoader::load_from_path(temp_file.path()).unwrap_err();
        assert!(matches!(err, AttounitError::TomlError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigLoader::apply_env(
            HarnessConfig::default(),
            env(&[
                ("ATTOUNIT_CAPACITY", "8"),
                ("ATTOUNIT_COLOR", "always"),
                ("ATTOUNIT_LOG", "trace"),
            ]),
        )
        .unwrap();

        assert_eq!(config.capacity, 8);
        assert_eq!(config.color, ColorChoice::Always);
        assert_eq!(config.log.as_deref(), Some("trace"));
    }

    #[test]
    fn test_no_color() {
        let config =
            ConfigLoader::apply_env(HarnessConfig::default(), env(&[("NO_COLOR", "1")])).unwrap();
        assert_eq!(config.color, ColorChoice::Never);

        // 空值不生效
        let config =
            ConfigLoader::apply_env(HarnessConfig::default(), env(&[("NO_COLOR", "")])).unwrap();
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = ConfigLoader::apply_env(
            HarnessConfig::default(),
            env(&[("ATTOUNIT_CAPACITY", "many")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ATTOUNIT_CAPACITY"));

        let err = ConfigLoader::apply_env(
            HarnessConfig::default(),
            env(&[("ATTOUNIT_COLOR", "rainbow")]),
        )
        .unwrap_err();
        assert!(matches!(err, AttounitError::Config(_)));
    }
}

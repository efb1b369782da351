use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttounitError {
    #[error("测试注册表已满 (容量 {capacity})，无法注册 {suite}::{name}")]
    RegistryOverflow {
        capacity: usize,
        suite: String,
        name: String,
    },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML 解析错误: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type for attounit crate
pub type Result<T> = std::result::Result<T, AttounitError>;

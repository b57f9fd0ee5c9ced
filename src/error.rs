//! 统一错误类型模块
//!
//! 提供 simplehash 库中所有操作的错误类型定义。
//!
//! 错误分为几个互不混淆的类别：
//!
//! - [`FormatError`]: token 结构不合法（被篡改、来自其他系统或已损坏）
//! - [`ValidationError`]: 调用方传入了不合法的参数（空密码、零迭代次数等）
//! - [`ConfigError`]: [`HashConfig`](crate::config::HashConfig) 配置不合法
//! - [`CryptoError`]: 随机数源或密钥派生原语本身失败
//!
//! 注意：密码不匹配 **不是** 错误，`verify` 会返回 `Ok(false)`。

use thiserror::Error as ThisError;

/// simplehash 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// simplehash 库的错误类型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// token 格式错误
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// 参数验证错误
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// 加密错误
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl Error {
    /// 创建一个自定义验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(ValidationError::Custom(msg.into()))
    }

    /// 是否为 token 格式错误
    ///
    /// 调用方通常需要区分“token 损坏/来自其他方案”与“密码错误”。
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// token 格式相关错误
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FormatError {
    /// 字段数量不对
    #[error("expected {expected} fields, found {actual}")]
    FieldCount { expected: usize, actual: usize },
    /// 算法标识不匹配
    #[error("unknown algorithm tag: {0:?}")]
    UnknownAlgorithm(String),
    /// 迭代次数不是正整数
    #[error("invalid iteration count: {0:?}")]
    InvalidIterations(String),
    /// 字段为空
    #[error("field '{0}' is empty")]
    EmptyField(&'static str),
    /// Base64 解码失败
    #[error("field '{field}' is not valid base64: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },
}

/// 参数验证相关错误
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// 密码为空
    #[error("password cannot be empty")]
    EmptyPassword,
    /// 迭代次数为零
    #[error("iteration count must be greater than 0")]
    ZeroIterations,
    /// 派生长度为零
    #[error("output length must be greater than 0")]
    ZeroOutputLength,
    /// 自定义验证错误
    #[error("{0}")]
    Custom(String),
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConfigError {
    /// 无效的配置值
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// 加密相关错误
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CryptoError {
    /// 随机数生成失败
    #[error("random number generation failed: {0}")]
    RngFailed(String),
    /// 密钥派生失败
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}

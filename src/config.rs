//! 哈希配置模块
//!
//! [`HashConfig`] 集中保存默认迭代次数、盐长度、哈希长度、分隔符和算法标识。
//! 配置在构造 [`SimpleHasher`](crate::password::SimpleHasher) 时注入，
//! 测试可以直接覆盖，不需要修改任何全局状态。
//!
//! ## 示例
//!
//! ```rust
//! use simplehash::config::HashConfig;
//!
//! let config = HashConfig::new()
//!     .with_iterations(100_000)
//!     .with_hash_size(64);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// 默认迭代次数
pub const DEFAULT_ITERATIONS: u32 = 50_000;

/// 默认盐长度（字节）
pub const DEFAULT_SALT_SIZE: usize = 16;

/// 默认哈希长度（字节）
pub const DEFAULT_HASH_SIZE: usize = 32;

/// 默认字段分隔符
pub const DEFAULT_DELIMITER: char = '$';

/// 默认算法标识
pub const DEFAULT_ALGORITHM_TAG: &str = "Rfc2898DeriveBytes";

/// 密码哈希配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// 新 token 使用的迭代次数
    pub iterations: u32,
    /// 新 token 使用的盐长度（字节）
    pub salt_size: usize,
    /// 新 token 使用的哈希长度（字节）
    pub hash_size: usize,
    /// token 字段分隔符
    pub delimiter: char,
    /// token 第一个字段必须等于的算法标识
    pub algorithm_tag: String,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            salt_size: DEFAULT_SALT_SIZE,
            hash_size: DEFAULT_HASH_SIZE,
            delimiter: DEFAULT_DELIMITER,
            algorithm_tag: DEFAULT_ALGORITHM_TAG.to_string(),
        }
    }
}

impl HashConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 低迭代次数的配置，只适合测试
    pub fn fast() -> Self {
        Self::default().with_iterations(100)
    }

    /// 设置迭代次数
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// 设置盐长度
    pub fn with_salt_size(mut self, salt_size: usize) -> Self {
        self.salt_size = salt_size;
        self
    }

    /// 设置哈希长度
    pub fn with_hash_size(mut self, hash_size: usize) -> Self {
        self.hash_size = hash_size;
        self
    }

    /// 设置字段分隔符
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 设置算法标识
    pub fn with_algorithm_tag(mut self, tag: impl Into<String>) -> Self {
        self.algorithm_tag = tag.into();
        self
    }

    /// 校验配置
    ///
    /// 分隔符不能出现在 base64 字母表、十进制数字或算法标识中，
    /// 否则编码后的 token 无法被无歧义地切分。
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(ConfigError::invalid("iterations", "must be greater than 0").into());
        }
        if self.salt_size == 0 {
            return Err(ConfigError::invalid("salt_size", "must be greater than 0").into());
        }
        if self.hash_size == 0 {
            return Err(ConfigError::invalid("hash_size", "must be greater than 0").into());
        }
        if self.algorithm_tag.is_empty() {
            return Err(ConfigError::invalid("algorithm_tag", "cannot be empty").into());
        }
        if self.delimiter.is_ascii_alphanumeric() || matches!(self.delimiter, '+' | '/' | '=') {
            return Err(ConfigError::invalid(
                "delimiter",
                format!("{:?} collides with base64 or decimal output", self.delimiter),
            )
            .into());
        }
        if self.algorithm_tag.contains(self.delimiter) {
            return Err(ConfigError::invalid(
                "algorithm_tag",
                format!("must not contain the delimiter {:?}", self.delimiter),
            )
            .into());
        }
        Ok(())
    }
}

//! # SimpleHash
//!
//! 加盐、迭代的 PBKDF2 密码哈希库。
//!
//! 哈希结果（算法标识、迭代次数、盐、派生哈希）编码为一个以 `$` 分隔的字符串，
//! 可以直接持久化，之后无需任何外部状态即可验证。
//!
//! ## 功能特性
//!
//! - **密码哈希**: PBKDF2-HMAC-SHA1，每次生成新的 16 字节随机盐
//! - **Token 编解码**: 严格校验的四字段格式，格式错误与密码错误分开报告
//! - **迭代次数可调**: token 自带迭代次数，调高默认值不会让旧 token 失效
//! - **耗时估算**: 测量一次哈希的耗时，辅助选择迭代次数
//! - **常量时间比较**: 验证时使用常量时间比较，派生缓冲区自动清零
//!
//! ## 示例
//!
//! ```rust
//! use simplehash::{HashConfig, SimpleHasher};
//!
//! let hasher = SimpleHasher::new(HashConfig::new().with_iterations(1000)).unwrap();
//!
//! // 哈希密码
//! let token = hasher.compute("my_secure_password").unwrap();
//!
//! // 验证密码
//! assert!(hasher.verify("my_secure_password", &token).unwrap());
//! assert!(!hasher.verify("wrong_password", &token).unwrap());
//!
//! // 格式错误是 Err，而不是 Ok(false)
//! assert!(hasher.verify("my_secure_password", "wrongstring").is_err());
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod password;
pub mod random;

pub use config::HashConfig;
pub use error::{Error, Result};

// ============================================================================
// 密码相关导出
// ============================================================================

pub use password::{
    HashToken, PasswordHashScheme, SimpleHasher, compute, compute_with_iterations, estimate,
    verify,
};

// ============================================================================
// 工具函数导出
// ============================================================================

pub use random::{constant_time_compare, generate_random_bytes};

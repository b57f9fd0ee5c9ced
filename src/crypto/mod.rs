//! 密码学工具模块
//!
//! ## 功能
//!
//! - **PBKDF2**: PBKDF2-HMAC-SHA1 密钥派生，派生缓冲区自动清零
//!
//! ## 示例
//!
//! ```rust
//! use simplehash::crypto::{Pbkdf2, pbkdf2_hmac_sha1};
//!
//! // 使用便捷函数
//! let key = pbkdf2_hmac_sha1("secret", b"salt", 1000, 32).unwrap();
//!
//! // 使用派生上下文
//! let key2 = Pbkdf2::new("secret", b"salt").derive(1000, 32).unwrap();
//! assert_eq!(key, key2);
//! ```

pub mod pbkdf2;

pub use pbkdf2::{Pbkdf2, pbkdf2_hmac_sha1};

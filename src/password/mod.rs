//! 密码哈希模块
//!
//! 提供基于 PBKDF2 的加盐迭代密码哈希，以及自描述的 token 编解码。
//!
//! ## Token 格式
//!
//! ```text
//! Rfc2898DeriveBytes$<iterations>$<base64(salt)>$<base64(hash)>
//! ```
//!
//! token 携带生成时的迭代次数，提高默认迭代次数不会让旧 token 失效。
//!
//! ## 示例
//!
//! ### 使用默认配置
//!
//! ```rust
//! use simplehash::password::{compute_with_iterations, verify};
//!
//! let token = compute_with_iterations("my_secure_password", 1000).unwrap();
//! assert!(verify("my_secure_password", &token).unwrap());
//! ```
//!
//! ### 区分格式错误与密码错误
//!
//! ```rust
//! use simplehash::Error;
//! use simplehash::password::verify;
//!
//! match verify("my_password", "not-a-valid-token") {
//!     Ok(true) => println!("welcome"),
//!     Ok(false) => println!("wrong password"),
//!     Err(Error::Format(e)) => println!("corrupted token: {}", e),
//!     Err(e) => println!("error: {}", e),
//! }
//! ```

mod hasher;
pub mod token;

pub use hasher::{
    PasswordHashScheme, SimpleHasher, compute, compute_with_iterations, estimate, verify,
};
pub use token::HashToken;

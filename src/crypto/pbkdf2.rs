//! PBKDF2 密钥派生模块
//!
//! 提供 PBKDF2-HMAC-SHA1 实现（RFC 8018），也就是 `Rfc2898DeriveBytes`
//! 使用的伪随机函数。内部哈希函数固定为 SHA-1，不写入 token：
//! 不同内部哈希算出的 token 外观相同但互不兼容。
//!
//! PBKDF2 用于校验型的密码哈希时，SHA-1 的碰撞问题不影响安全性；
//! 安全强度主要由迭代次数决定。
//!
//! ## 示例
//!
//! ```rust
//! use simplehash::crypto::pbkdf2::Pbkdf2;
//!
//! let kdf = Pbkdf2::new("my-password", b"16-byte-salt-val");
//! let key = kdf.derive(1000, 32).unwrap();
//! assert_eq!(key.len(), 32);
//! ```

use hmac::Hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result, ValidationError};

type HmacSha1 = Hmac<Sha1>;

/// PBKDF2 派生上下文
///
/// 持有密码（UTF-8 字节）和盐的副本，二者以及每次派生的输出都放在
/// [`Zeroizing`] 缓冲区中，离开作用域时（包括错误路径）自动清零。
pub struct Pbkdf2 {
    password: Zeroizing<Vec<u8>>,
    salt: Zeroizing<Vec<u8>>,
}

impl Pbkdf2 {
    /// 创建派生上下文
    ///
    /// 密码统一按 UTF-8 编码为字节，compute 与 verify 必须使用同一编码。
    pub fn new(password: &str, salt: &[u8]) -> Self {
        Self {
            password: Zeroizing::new(password.as_bytes().to_vec()),
            salt: Zeroizing::new(salt.to_vec()),
        }
    }

    /// 上下文中的盐
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// 派生指定长度的密钥
    ///
    /// # Errors
    ///
    /// - `iterations` 为 0
    /// - `output_len` 为 0
    pub fn derive(&self, iterations: u32, output_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        if iterations == 0 {
            return Err(ValidationError::ZeroIterations.into());
        }
        if output_len == 0 {
            return Err(ValidationError::ZeroOutputLength.into());
        }

        let mut output = Zeroizing::new(vec![0u8; output_len]);
        pbkdf2::pbkdf2::<HmacSha1>(&self.password, &self.salt, iterations, &mut output)
            .map_err(|e| CryptoError::DerivationFailed(e.to_string()))?;
        Ok(output)
    }
}

impl std::fmt::Debug for Pbkdf2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pbkdf2")
            .field("password", &"[REDACTED]")
            .field("salt_len", &self.salt.len())
            .finish()
    }
}

/// 使用 PBKDF2-HMAC-SHA1 派生密钥
///
/// # Example
///
/// ```rust
/// use simplehash::crypto::pbkdf2::pbkdf2_hmac_sha1;
///
/// let key = pbkdf2_hmac_sha1("password", b"salt", 1, 20).unwrap();
/// assert_eq!(key.len(), 20);
/// ```
pub fn pbkdf2_hmac_sha1(
    password: &str,
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    Pbkdf2::new(password, salt).derive(iterations, output_len)
}

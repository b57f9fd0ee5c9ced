//! 安全随机数与比较模块
//!
//! 提供密码学安全的随机字节生成（用于盐值）以及常量时间比较。

use rand::{TryRngCore, rngs::OsRng};
use subtle::ConstantTimeEq;

use crate::error::{CryptoError, Result};

/// 生成指定长度的随机字节数组
///
/// 使用操作系统提供的密码学安全随机数生成器 (CSPRNG)，可在多个线程中并发调用。
///
/// # Example
///
/// ```rust
/// use simplehash::random::generate_random_bytes;
///
/// let bytes = generate_random_bytes(16).unwrap();
/// assert_eq!(bytes.len(), 16);
/// ```
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(bytes)
}

/// 常量时间比较两个字节切片
///
/// 长度不同时直接返回 `false`（长度本身不是秘密）。
///
/// # Example
///
/// ```rust
/// use simplehash::random::constant_time_compare;
///
/// assert!(constant_time_compare(b"secret_hash", b"secret_hash"));
/// assert!(!constant_time_compare(b"secret_hash", b"other_hash!"));
/// ```
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

//! 哈希 token 编解码
//!
//! token 由四个字段组成，以分隔符（默认 `$`）连接：
//!
//! ```text
//! <algorithm_tag>$<iterations>$<base64(salt)>$<base64(hash)>
//! ```
//!
//! Base64 使用标准字母表并带填充。base64 字母表不包含 `$`，
//! 因此字段内容不需要转义。
//!
//! 解码是严格校验而不是宽松解析：任何不合法的输入都返回
//! [`FormatError`]，不会退化成默认值。

use std::fmt;
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::config::HashConfig;
use crate::error::{Error, FormatError, Result};

/// token 的字段数量
pub const FIELD_COUNT: usize = 4;

/// 解码后的哈希 token
///
/// 算法标识只在解码时校验，不保存在结构体中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashToken {
    /// 生成时使用的迭代次数
    pub iterations: u32,
    /// 盐
    pub salt: Vec<u8>,
    /// 派生出的哈希
    pub hash: Vec<u8>,
}

impl HashToken {
    /// 创建 token
    pub fn new(iterations: u32, salt: impl Into<Vec<u8>>, hash: impl Into<Vec<u8>>) -> Self {
        Self {
            iterations,
            salt: salt.into(),
            hash: hash.into(),
        }
    }

    /// 按配置中的算法标识和分隔符编码为字符串
    pub fn encode(&self, config: &HashConfig) -> String {
        encode(&self.hash, &self.salt, self.iterations, config)
    }

    /// 从字符串解码并校验
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplehash::config::HashConfig;
    /// use simplehash::password::HashToken;
    ///
    /// let config = HashConfig::default();
    /// let token = HashToken::decode("Rfc2898DeriveBytes$500$c2FsdA==$aGFzaA==", &config).unwrap();
    /// assert_eq!(token.iterations, 500);
    /// assert_eq!(token.salt, b"salt");
    /// assert_eq!(token.hash, b"hash");
    ///
    /// assert!(HashToken::decode("wrongstring", &config).is_err());
    /// ```
    pub fn decode(token: &str, config: &HashConfig) -> Result<Self> {
        decode(token, config)
    }
}

impl fmt::Display for HashToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(&HashConfig::default()))
    }
}

impl FromStr for HashToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s, &HashConfig::default())
    }
}

/// 将哈希、盐和迭代次数编码为 token 字符串
pub fn encode(hash: &[u8], salt: &[u8], iterations: u32, config: &HashConfig) -> String {
    let delimiter = config.delimiter;
    format!(
        "{}{delimiter}{}{delimiter}{}{delimiter}{}",
        config.algorithm_tag,
        iterations,
        STANDARD.encode(salt),
        STANDARD.encode(hash),
    )
}

/// 解码并校验 token 字符串
///
/// # Errors
///
/// - 字段数量不是 4
/// - 第一个字段不等于配置的算法标识
/// - 迭代次数不是正的十进制整数
/// - 盐或哈希字段为空或不是合法的 base64
pub fn decode(token: &str, config: &HashConfig) -> Result<HashToken> {
    let fields: Vec<&str> = token.split(config.delimiter).collect();
    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount {
            expected: FIELD_COUNT,
            actual: fields.len(),
        }
        .into());
    }

    if fields[0] != config.algorithm_tag {
        return Err(FormatError::UnknownAlgorithm(fields[0].to_string()).into());
    }

    let iterations = parse_iterations(fields[1])?;
    let salt = decode_base64("salt", fields[2])?;
    let hash = decode_base64("hash", fields[3])?;

    Ok(HashToken {
        iterations,
        salt,
        hash,
    })
}

fn parse_iterations(field: &str) -> Result<u32> {
    // u32::from_str 接受前导 '+'，这里只允许纯数字
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidIterations(field.to_string()).into());
    }
    match field.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FormatError::InvalidIterations(field.to_string()).into()),
    }
}

fn decode_base64(name: &'static str, field: &str) -> Result<Vec<u8>> {
    if field.is_empty() {
        return Err(FormatError::EmptyField(name).into());
    }
    STANDARD.decode(field).map_err(|e| {
        Error::from(FormatError::InvalidBase64 {
            field: name,
            reason: e.to_string(),
        })
    })
}

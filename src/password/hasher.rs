//! 密码哈希实现
//!
//! 提供密码哈希、验证和耗时估算的核心功能。

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::token::{self, HashToken};
use crate::config::HashConfig;
use crate::crypto::pbkdf2::Pbkdf2;
use crate::error::{Result, ValidationError};
use crate::random::{constant_time_compare, generate_random_bytes};

/// 密码哈希方案
///
/// 调用方只需要这四个操作，可以持有 `Box<dyn PasswordHashScheme>`
/// 以便在测试中替换实现。
pub trait PasswordHashScheme: Send + Sync {
    /// 使用默认迭代次数哈希密码，返回 token
    fn compute(&self, password: &str) -> Result<String>;

    /// 使用指定迭代次数哈希密码，返回 token
    fn compute_with_iterations(&self, password: &str, iterations: u32) -> Result<String>;

    /// 验证密码是否与 token 匹配
    fn verify(&self, password: &str, token: &str) -> Result<bool>;

    /// 测量一次完整 compute 的耗时
    fn estimate(&self, password: &str, iterations: u32) -> Result<Duration>;
}

/// PBKDF2 密码哈希器
///
/// 不持有可变状态，可以在多个线程间共享。
#[derive(Debug, Clone, Default)]
pub struct SimpleHasher {
    config: HashConfig,
}

impl SimpleHasher {
    /// 创建新的密码哈希器
    ///
    /// # Errors
    ///
    /// 配置不合法时返回 `Error::Config`
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplehash::config::HashConfig;
    /// use simplehash::password::SimpleHasher;
    ///
    /// let hasher = SimpleHasher::new(HashConfig::new().with_iterations(10_000)).unwrap();
    /// assert_eq!(hasher.config().iterations, 10_000);
    /// ```
    pub fn new(config: HashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 当前配置
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// 使用配置的默认迭代次数哈希密码
    ///
    /// 每次调用都会生成新的盐，同一密码两次调用得到不同的 token。
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplehash::config::HashConfig;
    /// use simplehash::password::SimpleHasher;
    ///
    /// let hasher = SimpleHasher::new(HashConfig::fast()).unwrap();
    /// let token = hasher.compute("my_password").unwrap();
    /// assert!(token.starts_with("Rfc2898DeriveBytes$100$"));
    /// ```
    pub fn compute(&self, password: &str) -> Result<String> {
        self.compute_with_iterations(password, self.config.iterations)
    }

    /// 使用指定迭代次数哈希密码
    ///
    /// # Errors
    ///
    /// - 密码为空
    /// - `iterations` 为 0
    /// - 随机数源失败
    pub fn compute_with_iterations(&self, password: &str, iterations: u32) -> Result<String> {
        ensure_password(password)?;
        if iterations == 0 {
            return Err(ValidationError::ZeroIterations.into());
        }

        let salt = generate_random_bytes(self.config.salt_size)?;
        let kdf = Pbkdf2::new(password, &salt);
        let hash = kdf.derive(iterations, self.config.hash_size)?;

        debug!(
            iterations,
            salt_size = salt.len(),
            hash_size = hash.len(),
            "computed password hash"
        );

        Ok(token::encode(&hash, kdf.salt(), iterations, &self.config))
    }

    /// 验证密码
    ///
    /// 使用 token 中的盐和迭代次数重新派生，派生长度等于 token 中哈希的长度，
    /// 然后做常量时间比较。
    ///
    /// # Returns
    ///
    /// 密码正确返回 `Ok(true)`，密码错误返回 `Ok(false)`
    ///
    /// # Errors
    ///
    /// - token 格式不合法时返回 `Error::Format`，不会折叠成 `Ok(false)`
    /// - 密码为空时返回 `Error::Validation`
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplehash::config::HashConfig;
    /// use simplehash::password::SimpleHasher;
    ///
    /// let hasher = SimpleHasher::new(HashConfig::fast()).unwrap();
    /// let token = hasher.compute("my_password").unwrap();
    ///
    /// assert!(hasher.verify("my_password", &token).unwrap());
    /// assert!(!hasher.verify("wrong_password", &token).unwrap());
    /// assert!(hasher.verify("my_password", "wrongstring").unwrap_err().is_format());
    /// ```
    pub fn verify(&self, password: &str, token: &str) -> Result<bool> {
        ensure_password(password)?;
        let parsed = self.parse(token)?;

        let candidate =
            Pbkdf2::new(password, &parsed.salt).derive(parsed.iterations, parsed.hash.len())?;
        let matched = constant_time_compare(&candidate, &parsed.hash);

        debug!(
            iterations = parsed.iterations,
            hash_size = parsed.hash.len(),
            matched,
            "verified password hash"
        );
        Ok(matched)
    }

    /// 测量一次完整 compute 调用的耗时
    ///
    /// 用于选择迭代次数，compute/verify 内部不使用。
    pub fn estimate(&self, password: &str, iterations: u32) -> Result<Duration> {
        let start = Instant::now();
        self.compute_with_iterations(password, iterations)?;
        let elapsed = start.elapsed();

        debug!(
            iterations,
            elapsed_us = elapsed.as_micros() as u64,
            "estimated hash cost"
        );
        Ok(elapsed)
    }

    /// 检查 token 是否需要重新生成
    ///
    /// 当配置的迭代次数提高、或盐/哈希长度变大后，旧 token 仍然可以验证，
    /// 但应在用户下次登录成功时用新参数重新哈希。
    ///
    /// # Errors
    ///
    /// token 格式不合法时返回 `Error::Format`
    pub fn needs_rehash(&self, token: &str) -> Result<bool> {
        let parsed = self.parse(token)?;
        Ok(parsed.iterations < self.config.iterations
            || parsed.salt.len() < self.config.salt_size
            || parsed.hash.len() < self.config.hash_size)
    }

    fn parse(&self, token: &str) -> Result<HashToken> {
        token::decode(token, &self.config).inspect_err(|e| {
            warn!(error = %e, "rejected malformed password hash token");
        })
    }
}

impl PasswordHashScheme for SimpleHasher {
    fn compute(&self, password: &str) -> Result<String> {
        SimpleHasher::compute(self, password)
    }

    fn compute_with_iterations(&self, password: &str, iterations: u32) -> Result<String> {
        SimpleHasher::compute_with_iterations(self, password, iterations)
    }

    fn verify(&self, password: &str, token: &str) -> Result<bool> {
        SimpleHasher::verify(self, password, token)
    }

    fn estimate(&self, password: &str, iterations: u32) -> Result<Duration> {
        SimpleHasher::estimate(self, password, iterations)
    }
}

fn ensure_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }
    Ok(())
}

// ============================================================================
// 便捷函数
// ============================================================================

/// 使用默认配置（50000 次迭代）哈希密码
///
/// # Example
///
/// ```rust,no_run
/// use simplehash::password::compute;
///
/// let token = compute("my_secure_password").unwrap();
/// println!("Token: {}", token);
/// ```
pub fn compute(password: &str) -> Result<String> {
    SimpleHasher::default().compute(password)
}

/// 使用默认配置和指定迭代次数哈希密码
pub fn compute_with_iterations(password: &str, iterations: u32) -> Result<String> {
    SimpleHasher::default().compute_with_iterations(password, iterations)
}

/// 使用默认配置验证密码
///
/// # Example
///
/// ```rust
/// use simplehash::password::{compute_with_iterations, verify};
///
/// let token = compute_with_iterations("my_secure_password", 500).unwrap();
///
/// assert!(verify("my_secure_password", &token).unwrap());
/// assert!(!verify("wrong_password", &token).unwrap());
/// ```
pub fn verify(password: &str, token: &str) -> Result<bool> {
    SimpleHasher::default().verify(password, token)
}

/// 使用默认配置测量一次 compute 的耗时
pub fn estimate(password: &str, iterations: u32) -> Result<Duration> {
    SimpleHasher::default().estimate(password, iterations)
}

//! 集成测试：密码哈希与 token 验证
//!
//! 覆盖 compute/verify/estimate 的完整使用场景。

use std::time::Duration;

use simplehash::error::{Error, FormatError, ValidationError};
use simplehash::{HashConfig, HashToken, SimpleHasher};

const TEST_PASSWORD: &str = "TestPassword";
const ITERATIONS: u32 = 500;

fn hasher() -> SimpleHasher {
    SimpleHasher::new(HashConfig::fast()).expect("fast config should be valid")
}

/// 测试 compute 之后 verify 返回 true
#[test]
fn test_verify_after_compute_returns_true() {
    let hasher = hasher();
    let token = hasher.compute_with_iterations(TEST_PASSWORD, ITERATIONS).unwrap();
    assert!(hasher.verify(TEST_PASSWORD, &token).unwrap());
}

/// 测试错误密码返回 false 而不是错误
#[test]
fn test_verify_with_wrong_password_returns_false() {
    let hasher = hasher();
    let token = hasher.compute_with_iterations(TEST_PASSWORD, ITERATIONS).unwrap();

    let result = hasher.verify(&format!("{}1", TEST_PASSWORD), &token);
    assert_eq!(result, Ok(false));
}

/// 测试 Unicode 密码
#[test]
fn test_verify_after_compute_unicode_password() {
    let hasher = hasher();
    let password = "Unicode_привет_øæ";

    let token = hasher.compute_with_iterations(password, ITERATIONS).unwrap();
    assert!(hasher.verify(password, &token).unwrap());
}

/// 测试不指定迭代次数时使用默认值
#[test]
fn test_compute_without_iterations_uses_default() {
    let token = simplehash::compute(TEST_PASSWORD).unwrap();
    let fields: Vec<&str> = token.split('$').collect();
    assert_eq!(fields[1], "50000");

    assert!(simplehash::verify(TEST_PASSWORD, &token).unwrap());
}

/// 测试 token 字符串的结构
#[test]
fn test_compute_generates_proper_string() {
    let token = hasher().compute_with_iterations(TEST_PASSWORD, ITERATIONS).unwrap();
    let fields: Vec<&str> = token.split('$').collect();

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], "Rfc2898DeriveBytes");
    assert_eq!(fields[1], ITERATIONS.to_string());
    assert!(!fields[2].is_empty());
    assert!(!fields[3].is_empty());

    let parsed: HashToken = token.parse().unwrap();
    assert_eq!(parsed.iterations, ITERATIONS);
    assert_eq!(parsed.salt.len(), 16);
    assert_eq!(parsed.hash.len(), 32);
}

/// 测试错误的算法标识返回格式错误
#[test]
fn test_verify_with_wrong_algorithm_is_format_error() {
    let err = hasher().verify(TEST_PASSWORD, "wrongstring").unwrap_err();
    assert!(err.is_format());

    let err = hasher()
        .verify(
            TEST_PASSWORD,
            "wrongstring$500$AAAAAAAAAAAAAAAAAAAAAA==$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::UnknownAlgorithm("wrongstring".to_string()))
    );
}

/// 测试格式不合法的 token 返回错误而不是 false
#[test]
fn test_verify_with_malformed_token_is_error() {
    let hasher = hasher();
    for token in [
        "not-a-valid-token",
        "",
        "Rfc2898DeriveBytes$500",
        "Rfc2898DeriveBytes$zero$c2FsdA==$aGFzaA==",
        "Rfc2898DeriveBytes$0$c2FsdA==$aGFzaA==",
        "Rfc2898DeriveBytes$500$%%%$aGFzaA==",
        "Rfc2898DeriveBytes$500$c2FsdA==$",
    ] {
        let result = hasher.verify(TEST_PASSWORD, token);
        assert!(
            matches!(result, Err(Error::Format(_))),
            "token {:?} gave {:?}",
            token,
            result
        );
    }
}

/// 测试篡改过的哈希验证失败
#[test]
fn test_tampered_hash_returns_false() {
    let hasher = hasher();
    let token = hasher.compute(TEST_PASSWORD).unwrap();

    let mut parsed = HashToken::decode(&token, hasher.config()).unwrap();
    parsed.hash[0] ^= 0x01;
    let tampered = parsed.encode(hasher.config());

    assert!(!hasher.verify(TEST_PASSWORD, &tampered).unwrap());
}

/// 测试截断的哈希仍按其自身长度验证
#[test]
fn test_truncated_hash_verifies_by_stored_length() {
    let hasher = hasher();
    let token = hasher.compute(TEST_PASSWORD).unwrap();

    let mut parsed = HashToken::decode(&token, hasher.config()).unwrap();
    parsed.hash.truncate(20);
    let truncated = parsed.encode(hasher.config());

    // PBKDF2 输出的前缀不依赖总长度
    assert!(hasher.verify(TEST_PASSWORD, &truncated).unwrap());
    assert!(!hasher.verify("other", &truncated).unwrap());
}

/// 测试参数校验错误与格式错误不同
#[test]
fn test_argument_errors_are_not_format_errors() {
    let hasher = hasher();
    assert_eq!(
        hasher.compute("").unwrap_err(),
        Error::Validation(ValidationError::EmptyPassword)
    );
    assert_eq!(
        hasher.compute_with_iterations(TEST_PASSWORD, 0).unwrap_err(),
        Error::Validation(ValidationError::ZeroIterations)
    );
}

/// 测试迭代次数升级后旧 token 仍可验证
#[test]
fn test_iteration_upgrade_keeps_old_tokens_valid() {
    let old = SimpleHasher::new(HashConfig::new().with_iterations(50)).unwrap();
    let token = old.compute(TEST_PASSWORD).unwrap();

    let upgraded = SimpleHasher::new(HashConfig::new().with_iterations(200)).unwrap();
    assert!(upgraded.verify(TEST_PASSWORD, &token).unwrap());
    assert!(upgraded.needs_rehash(&token).unwrap());

    let rehashed = upgraded.compute(TEST_PASSWORD).unwrap();
    assert!(!upgraded.needs_rehash(&rehashed).unwrap());
}

/// 测试自定义分隔符和算法标识
#[test]
fn test_custom_config_round_trip() {
    let config = HashConfig::fast()
        .with_delimiter(':')
        .with_algorithm_tag("pbkdf2-sha1");
    let hasher = SimpleHasher::new(config).unwrap();

    let token = hasher.compute(TEST_PASSWORD).unwrap();
    assert!(token.starts_with("pbkdf2-sha1:100:"));
    assert!(hasher.verify(TEST_PASSWORD, &token).unwrap());

    // 默认哈希器不认识这种 token
    assert!(simplehash::verify(TEST_PASSWORD, &token).unwrap_err().is_format());
}

/// 测试耗时估算
#[test]
fn test_estimate_returns_reasonable_time() {
    let estimate = hasher().estimate(TEST_PASSWORD, 50).unwrap();
    assert!(estimate < Duration::from_secs(1));
}

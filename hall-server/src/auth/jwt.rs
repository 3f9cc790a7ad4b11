//! JWT 令牌服务
//!
//! 处理 JWT 令牌的生成、验证和解析。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT 密钥 (应至少 32 字节)
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match load_jwt_secret() {
            Ok(key) => String::from_utf8(key).unwrap_or_else(|_| {
                tracing::error!("JWT secret contains invalid UTF-8 characters");
                generate_secure_printable_jwt_secret()
            }),
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT configuration error: {}, using generated key", e);
                    generate_secure_printable_jwt_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("🚨 FATAL: JWT_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440), // 默认 24 小时
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "hall-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "hall-admin".to_string()),
        }
    }
}

/// 存储在令牌中的 JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 账号 ID (Subject)
    pub sub: String,
    /// 用户名
    pub username: String,
    /// 显示名
    pub display_name: String,
    /// 令牌类型
    pub token_type: String,
    /// 过期时间戳
    pub exp: i64,
    /// 签发时间戳
    pub iat: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
}

/// 当前登录用户上下文，由认证中间件/提取器注入
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            display_name: claims.display_name,
        }
    }
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// 生成可打印的安全 JWT 密钥 (用于开发环境)
pub fn generate_secure_printable_jwt_secret() -> String {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

    let rng = SystemRandom::new();
    let mut key = String::new();

    for _ in 0..64 {
        // 生成64个字符的密钥
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            // 如果随机数生成失败，使用固定的安全密钥
            return "HallBookingDevelopmentSecureKey2026!".to_string();
        }
        let idx = (byte[0] as usize) % allowed_chars.len();
        key.push(allowed_chars.chars().nth(idx).unwrap());
    }

    key
}

/// 从环境变量安全地加载 JWT 密钥
fn load_jwt_secret() -> Result<Vec<u8>, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret.into_bytes())
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!(
                    "⚠️  JWT_SECRET not set! Generating secure temporary key for development."
                );
                let printable_key = generate_secure_printable_jwt_secret();
                Ok(printable_key.into_bytes())
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production!".to_string(),
                ))
            }
        }
    }
}

/// JWT 令牌服务
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// 使用默认配置创建新的 JWT 服务
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// 使用指定配置创建新的 JWT 服务
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为账号生成新令牌
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        display_name: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-test-secret-test-secret!".to_string(),
            expiration_minutes: 60,
            issuer: "hall-server".to_string(),
            audience: "hall-admin".to_string(),
        })
    }

    #[test]
    fn round_trips_claims() {
        let svc = test_service();
        let token = svc.generate_token("account:abc", "admin", "Admin").unwrap();
        let claims = svc.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "account:abc");
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn rejects_token_from_other_secret() {
        let svc = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-another-secret-12345".to_string(),
            ..svc.config.clone()
        });
        let token = other.generate_token("account:abc", "admin", "Admin").unwrap();
        assert!(svc.validate_token(&token).is_err());
    }

    #[test]
    fn extracts_bearer_tokens() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}

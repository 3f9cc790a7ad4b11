use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 服务器配置 - 预订站点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/hall-booking | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | NOTIFY_EMAIL | (空) | 新预订通知收件人 |
/// | NOTIFY_TIMEOUT_MS | 10000 | 通知发送超时(毫秒) |
/// | SMTP_HOST | (空) | SMTP 服务器地址 |
/// | SMTP_PORT | 587 | SMTP 端口 |
/// | SMTP_USERNAME | (空) | SMTP 用户名 |
/// | SMTP_PASSWORD | (空) | SMTP 密码 |
/// | SMTP_FROM_EMAIL | SMTP_USERNAME | 发件地址 |
/// | SMTP_FROM_NAME | Hall Booking | 发件人显示名 |
/// | ADMIN_USERNAME | admin | 初始管理员用户名 |
/// | ADMIN_PASSWORD | (未设置) | 初始管理员密码 (仅首次启动建号) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/hall HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、上传文件、静态页面、日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 新预订通知收件地址 (空 = 不发通知)
    pub notify_email: String,
    /// 通知发送超时 (毫秒)
    pub notify_timeout_ms: u64,
    /// SMTP 外发配置 (未配置时通知静默跳过)
    pub smtp: Option<SmtpConfig>,
    /// 初始管理员用户名
    pub admin_username: String,
    /// 初始管理员密码，仅在 account 表为空时用于建号
    pub admin_password: Option<String>,
}

/// SMTP 外发配置
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

impl SmtpConfig {
    /// 从环境变量加载；SMTP_HOST 未设置时返回 None
    fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        if host.trim().is_empty() {
            return None;
        }
        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            from_email: std::env::var("SMTP_FROM_EMAIL").unwrap_or_else(|_| username.clone()),
            from_name: std::env::var("SMTP_FROM_NAME")
                .unwrap_or_else(|_| "Hall Booking".to_string()),
            password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            username,
        })
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/hall-booking".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            notify_email: std::env::var("NOTIFY_EMAIL").unwrap_or_default(),
            notify_timeout_ms: std::env::var("NOTIFY_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            smtp: SmtpConfig::from_env(),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 上传文件目录 (work_dir/uploads)
    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads")
    }

    /// 评价照片目录 (work_dir/uploads/feedback)
    pub fn feedback_images_dir(&self) -> PathBuf {
        self.uploads_dir().join("feedback")
    }

    /// 静态页面目录 (work_dir/public)
    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("public")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.feedback_images_dir())?;
        std::fs::create_dir_all(self.public_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

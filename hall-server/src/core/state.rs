use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::Account;
use crate::db::repository::AccountRepository;
use crate::notify::{BookingNotifier, NoopNotifier, SmtpNotifier};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是预订服务的核心数据结构，使用 Arc 实现浅拷贝，
/// 每个请求 clone 的成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | notifier | Arc<dyn BookingNotifier> | 预订通知 (best-effort) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 预订通知服务
    pub notifier: Arc<dyn BookingNotifier>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        notifier: Arc<dyn BookingNotifier>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            notifier,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database)
    /// 3. 初始管理员账号 (仅 account 表为空且配置了 ADMIN_PASSWORD)
    /// 4. 通知服务 (SMTP 已配置时启用，否则静默跳过)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let notifier: Arc<dyn BookingNotifier> =
            match (&config.smtp, config.notify_email.trim().is_empty()) {
                (Some(smtp), false) => {
                    Arc::new(SmtpNotifier::new(smtp.clone(), config.notify_email.clone()))
                }
                _ => {
                    tracing::info!(
                        "SMTP not configured, booking notifications disabled"
                    );
                    Arc::new(NoopNotifier)
                }
            };

        Self::initialize_with_notifier(config, notifier).await
    }

    /// 初始化服务器状态，注入自定义通知实现
    ///
    /// 测试场景用它替换 SMTP 通知
    pub async fn initialize_with_notifier(
        config: &Config,
        notifier: Arc<dyn BookingNotifier>,
    ) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::default());

        let state = Self::new(config.clone(), db, jwt_service, notifier);
        state.seed_admin_account().await?;

        Ok(state)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 首次启动建号：account 表为空且设置了 ADMIN_PASSWORD 时创建管理员
    async fn seed_admin_account(&self) -> Result<(), AppError> {
        let Some(password) = self.config.admin_password.as_deref() else {
            return Ok(());
        };

        let repo = AccountRepository::new(self.get_db());
        if repo
            .count()
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            > 0
        {
            return Ok(());
        }

        let hash_pass = Account::hash_password(password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        repo.create(&self.config.admin_username, &self.config.admin_username, &hash_pass)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(
            username = %self.config.admin_username,
            "Created initial admin account"
        );
        Ok(())
    }
}

//! Hall Booking Server - 婚宴场地预订网站后端
//!
//! # 架构概述
//!
//! 本模块是预订网站的服务端入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (booking / feedback / account)
//! - **认证** (`auth`): JWT + Argon2 管理员登录
//! - **HTTP API** (`api`): 预订、评价、登录接口
//! - **购物车解码** (`cart`): 菜单页 cart 参数 → 表单预填
//! - **邮件通知** (`notify`): 新预订的运营邮件 (best-effort)
//!
//! # 模块结构
//!
//! ```text
//! hall-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── auth/          # JWT 认证
//! ├── api/           # HTTP 路由和处理器
//! ├── cart/          # 购物车解码
//! ├── notify/        # SMTP 通知
//! ├── utils/         # 错误、日志、校验等工具
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod core;
pub mod db;
pub mod notify;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use cart::decode_cart;
pub use crate::core::{Config, Server, ServerState};
pub use notify::{BookingNotifier, NotifyError, SmtpNotifier};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: dotenv + 日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.as_deref(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  __      ____
   / / / /___ _/ / /
  / /_/ / __ `/ / /
 / __  / /_/ / / /
/_/ /_/\__,_/_/_/
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}

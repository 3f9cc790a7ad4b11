//! 认证授权模块
//!
//! 提供 JWT 认证和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`MaybeUser`] - 可选登录提取器 (公共接口挂接提交人)

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use extractor::MaybeUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;

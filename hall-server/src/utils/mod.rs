//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResponse`] - API 响应结构
//! - [`parse_int_loose`] - 宽松整数归一化
//! - 日志、校验、时间等工具

pub mod error;
pub mod logger;
pub mod numeric;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use numeric::parse_int_loose;
pub use result::AppResult;

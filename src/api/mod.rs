// ==========================================
// AFOCS 电报生成系统 - API 层
// ==========================================
// 职责: 提供电报生成接口,供命令行或外部表单调用
// ==========================================

pub mod error;
pub mod telex_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use telex_api::TelexApi;

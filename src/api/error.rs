// ==========================================
// AFOCS 电报生成系统 - API层错误类型
// ==========================================
// 职责: 汇总调用方可见的错误，所有错误信息必须包含显式原因
// ==========================================

use crate::engine::error::CalcError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 调用方输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 行李 ULD 计算失败（类型/比例/人数）
    #[error("行李 ULD 计算失败: {0}")]
    Calculation(#[from] CalcError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

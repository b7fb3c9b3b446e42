// ==========================================
// AFOCS 电报生成系统 - 请求校验器
// ==========================================
// 职责: 进入流水线前的调用方输入校验
// 说明: 文本字段缺失不在此处报错（抽取层落占位值）
// ==========================================

use crate::api::error::{ApiError, ApiResult};

/// 校验 AFOCS 文本非空，返回 TRIM 后的文本
pub fn require_afocs_text(raw_text: &str) -> ApiResult<&str> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput("AFOCS 文本为空".to_string()));
    }
    Ok(trimmed)
}

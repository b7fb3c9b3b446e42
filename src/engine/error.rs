// ==========================================
// AFOCS 电报生成系统 - 计算引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 这些错误来自调用方的显式配置，而不是噪声文本，因此不做静默默认
// ==========================================

use thiserror::Error;

/// 行李 ULD 计算错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("不支持的行李 ULD 类型: '{0}'（仅支持 AKE / ALF / AKH）")]
    UnsupportedBagType(String),

    #[error("比例参数无效 ({name}): {value}，必须大于 0")]
    InvalidRatio { name: &'static str, value: i32 },

    #[error("旅客总数无效: {0}，不能为负数")]
    NegativePaxTotal(i64),
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalcError>;

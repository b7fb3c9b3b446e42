// ==========================================
// AFOCS 电报生成系统 - 引擎层
// ==========================================
// 职责: 机型显示规则 / 行李 ULD 计算 / ULD 合计
// 红线: 所有规则必须可解释（输出命中的规则）
// ==========================================

pub mod bag_load;
pub mod error;
pub mod ship_type;
pub mod uld_merge;

// 重导出核心引擎
pub use bag_load::{
    compute_bag_requirement, BagDecision, BagLoadConfig, BagLoadEngine, DecisionEntry,
    ALF_PAX_PER_ULD, FORCED_AKH_SHIP_TYPES,
};
pub use error::{CalcError, CalcResult};
pub use ship_type::normalize_ship_type;
pub use uld_merge::{is_uld_tokens_only, merge_same_type_tokens, totals_line};

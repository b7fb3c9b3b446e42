// ==========================================
// AFOCS 电报生成系统 - 领域模型层
// ==========================================
// 职责: 定义航班事实、ULD 类型、电报请求/结果
// 红线: 不含解析逻辑,不含计算逻辑
// ==========================================

pub mod flight;
pub mod telex;
pub mod types;

// 重导出核心类型
pub use flight::FlightFacts;
pub use telex::{BagRequirement, TelexOutput, TelexRequest, NO_CARGO_MARKER};
pub use types::{BagRule, BagType};

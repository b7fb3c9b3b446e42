// ==========================================
// AFOCS 电报生成系统 - 核心库
// ==========================================
// 输入: AFOCS 航班运行自由文本
// 输出: ULD 协调电报 (QD ... GTTL)
// 系统定位: 纯计算流水线 (无网络、无持久化)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 抽取层 - 自由文本 → 航班事实
pub mod extractor;

// 引擎层 - 业务规则
pub mod engine;

// 渲染层 - 固定格式电报
pub mod render;

// 配置层 - 预设与默认值
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 流水线入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{BagRequirement, BagRule, BagType, FlightFacts, TelexOutput, TelexRequest};

// 抽取
pub use extractor::{extract, AfocsExtractor, FactExtractor};

// 引擎
pub use engine::{
    compute_bag_requirement, merge_same_type_tokens, normalize_ship_type, totals_line,
    BagLoadEngine, CalcError,
};

// 渲染
pub use render::render_message;

// 配置
pub use config::{ConfigManager, TelexConfig};

// API
pub use api::{ApiError, ApiResult, TelexApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "AFOCS 电报生成系统";

// ==========================================
// AFOCS 电报生成系统 - 抽取层
// ==========================================
// 职责: AFOCS 自由文本 → 航班事实
// ==========================================

// 模块声明
pub mod afocs_extractor;
pub mod extractor_trait;
pub mod field_rules;

// 重导出核心类型
pub use afocs_extractor::{extract, AfocsExtractor};
pub use extractor_trait::{FactExtractor, FieldRule};
pub use field_rules::{
    FlightNumberRule, LocalDateRule, PaxCounts, PaxRule, RouteCapture, RouteRule,
    LOCAL_DATE_MARKER,
};

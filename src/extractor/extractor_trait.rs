// ==========================================
// AFOCS 电报生成系统 - 抽取层 Trait
// ==========================================
// 职责: 定义抽取接口（不包含实现）
// ==========================================

use crate::domain::flight::FlightFacts;

// ==========================================
// FactExtractor Trait
// ==========================================
// 用途: 原始文本 → 航班事实
// 实现者: AfocsExtractor
pub trait FactExtractor: Send + Sync {
    /// 抽取航班事实
    ///
    /// # 红线
    /// - 永不失败: 缺失或格式错误的字段一律落为占位值
    /// - 纯函数: 结果只取决于输入文本
    fn extract(&self, raw_text: &str) -> FlightFacts;
}

// ==========================================
// FieldRule Trait
// ==========================================
// 用途: 单条字段抽取规则，规则之间互相独立
// 实现者: FlightNumberRule, LocalDateRule, RouteRule, PaxRule
pub trait FieldRule: Send + Sync {
    /// 规则名（用于日志）
    fn name(&self) -> &'static str;

    /// 在文本上执行规则并写入 facts
    ///
    /// # 返回
    /// - true: 命中，字段已写入
    /// - false: 未命中，facts 保持默认占位值
    fn apply(&self, text: &str, facts: &mut FlightFacts) -> bool;
}

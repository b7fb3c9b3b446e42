// ==========================================
// AFOCS 电报生成系统 - AFOCS 文本抽取器
// ==========================================
// 职责: 按顺序执行字段规则，产出完整的 FlightFacts
// 红线: 永不失败,缺失字段保留占位值以便人工在电报中发现并修正
// ==========================================

use crate::domain::flight::FlightFacts;
use crate::extractor::extractor_trait::{FactExtractor, FieldRule};
use crate::extractor::field_rules::{FlightNumberRule, LocalDateRule, PaxRule, RouteRule};
use tracing::{debug, instrument};

pub struct AfocsExtractor {
    rules: Vec<Box<dyn FieldRule>>,
}

impl AfocsExtractor {
    /// 使用标准规则集创建抽取器
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(FlightNumberRule),
            Box::new(LocalDateRule),
            Box::new(RouteRule),
            Box::new(PaxRule),
        ])
    }

    /// 使用自定义规则集创建抽取器
    pub fn with_rules(rules: Vec<Box<dyn FieldRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for AfocsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FactExtractor for AfocsExtractor {
    #[instrument(skip_all, fields(text_len = raw_text.len()))]
    fn extract(&self, raw_text: &str) -> FlightFacts {
        let mut facts = FlightFacts::default();

        for rule in &self.rules {
            if !rule.apply(raw_text, &mut facts) {
                debug!(rule = rule.name(), "字段未命中，使用占位值");
            }
        }

        facts
    }
}

/// 使用标准规则集抽取（便捷函数）
pub fn extract(raw_text: &str) -> FlightFacts {
    AfocsExtractor::new().extract(raw_text)
}

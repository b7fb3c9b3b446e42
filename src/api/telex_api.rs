// ==========================================
// AFOCS 电报生成系统 - 电报 API
// ==========================================
// 职责: 抽取 → 机型显示 → 行李计算 → 渲染 的一次性流水线
// 红线: 无跨调用状态; 同一输入必得同一输出
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::domain::telex::{TelexOutput, TelexRequest};
use crate::engine::bag_load::BagLoadEngine;
use crate::engine::ship_type::normalize_ship_type;
use crate::extractor::{AfocsExtractor, FactExtractor};
use crate::render::TelexSlots;
use tracing::{info, instrument};

pub struct TelexApi {
    extractor: Box<dyn FactExtractor>,
    bag_engine: BagLoadEngine,
}

impl TelexApi {
    /// 使用标准抽取规则与默认行李规则
    pub fn new() -> Self {
        Self::with_parts(Box::new(AfocsExtractor::new()), BagLoadEngine::default())
    }

    pub fn with_parts(extractor: Box<dyn FactExtractor>, bag_engine: BagLoadEngine) -> Self {
        Self {
            extractor,
            bag_engine,
        }
    }

    /// 生成电报
    ///
    /// # 错误
    /// - AFOCS 文本为空 → InvalidInput
    /// - 行李类型无法识别 / 比例 <= 0 → Calculation
    #[instrument(skip_all, fields(bag_type = %request.bag_type))]
    pub fn generate(&self, afocs_text: &str, request: &TelexRequest) -> ApiResult<TelexOutput> {
        let text = validator::require_afocs_text(afocs_text)?;

        let facts = self.extractor.extract(text);
        let ship_type = normalize_ship_type(&facts.ship_type_raw);

        let bag = self.bag_engine.compute(
            &facts.ship_type_raw,
            i64::from(facts.pax_total_t),
            &request.bag_type,
            request.ratio_ake,
            request.ratio_akh,
        )?;

        let slots = TelexSlots::build(&facts, request, &bag, &ship_type);
        let text = slots.render();

        info!(
            flight = %facts.flight_number,
            ship = %ship_type,
            bag = %bag.label,
            rule = %bag.rule,
            "电报生成完成"
        );

        Ok(TelexOutput {
            facts,
            ship_type,
            bag,
            totals: slots.totals,
            text,
        })
    }
}

impl Default for TelexApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// AFOCS 电报生成系统 - 行李 ULD 计算引擎
// ==========================================
// 规则（按优先级，命中即返回）:
// 1) 机型 ∈ 强制集合 {321, 32Q} → 强制 AKH, ceil(T / ratio_akh)
// 2) 用户选择 AKE → ceil(T / ratio_ake) + LD3
// 3) 用户选择 ALF → ceil(T / 80) + LD6（固定除数，不受调用方比例影响）
// 4) 用户选择 AKH → ceil(T / ratio_akh) + LD3-45
// 5) 其他 → 调用方错误
// ==========================================

use crate::domain::telex::BagRequirement;
use crate::domain::types::{BagRule, BagType};
use crate::engine::error::{CalcError, CalcResult};
use tracing::{debug, instrument};

/// ALF 每个 LD6 承载的旅客数
pub const ALF_PAX_PER_ULD: i32 = 80;

/// 强制 AKH 的机型
pub const FORCED_AKH_SHIP_TYPES: &[&str] = &["321", "32Q"];

/// 行李计算配置
#[derive(Debug, Clone)]
pub struct BagLoadConfig {
    /// 强制使用 AKH 的机型代码（大写）
    pub forced_akh_ship_types: Vec<String>,
    /// ALF 固定除数
    pub alf_pax_per_uld: i32,
}

impl Default for BagLoadConfig {
    fn default() -> Self {
        Self {
            forced_akh_ship_types: FORCED_AKH_SHIP_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            alf_pax_per_uld: ALF_PAX_PER_ULD,
        }
    }
}

/// 决策条目，DECISION_ORDER 中越靠前优先级越高
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionEntry {
    /// 机型强制覆盖
    ForcedShipType,
    /// 用户显式选择
    UserChoice,
}

pub const DECISION_ORDER: &[DecisionEntry] =
    &[DecisionEntry::ForcedShipType, DecisionEntry::UserChoice];

/// 决策结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagDecision {
    /// 命中规则
    Matched(BagRule),
    /// 无法识别的用户选择（已 TRIM + UPPER）
    Invalid(String),
}

/// BagLoadEngine - 行李 ULD 计算引擎
pub struct BagLoadEngine {
    config: BagLoadConfig,
}

impl BagLoadEngine {
    pub fn new(config: BagLoadConfig) -> Self {
        Self { config }
    }

    /// 按 DECISION_ORDER 判定规则
    pub fn decide(&self, ship_type_raw: &str, bag_type_choice: &str) -> BagDecision {
        for entry in DECISION_ORDER {
            if let Some(decision) = self.evaluate(*entry, ship_type_raw, bag_type_choice) {
                return decision;
            }
        }
        BagDecision::Invalid(bag_type_choice.trim().to_uppercase())
    }

    fn evaluate(
        &self,
        entry: DecisionEntry,
        ship_type_raw: &str,
        bag_type_choice: &str,
    ) -> Option<BagDecision> {
        match entry {
            DecisionEntry::ForcedShipType => {
                let ship_key = ship_type_raw.trim().to_uppercase();
                self.config
                    .forced_akh_ship_types
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(&ship_key))
                    .then_some(BagDecision::Matched(BagRule::ForcedAkh))
            }
            DecisionEntry::UserChoice => match bag_type_choice.parse::<BagType>().ok()? {
                BagType::Ake => Some(BagDecision::Matched(BagRule::ExplicitAke)),
                BagType::Alf => Some(BagDecision::Matched(BagRule::ExplicitAlf)),
                BagType::Akh => Some(BagDecision::Matched(BagRule::ExplicitAkh)),
            },
        }
    }

    /// 计算行李 ULD 需求
    ///
    /// # 参数
    /// - `ship_type_raw`: 抽取到的原始机型
    /// - `pax_total`: 旅客总数 T
    /// - `bag_type_choice`: 用户选择（AKE / ALF / AKH）
    /// - `ratio_ake`: 每个 LD3 的旅客数
    /// - `ratio_akh`: 每个 LD3-45 的旅客数
    ///
    /// 只校验命中规则实际使用的比例参数。
    #[instrument(skip(self))]
    pub fn compute(
        &self,
        ship_type_raw: &str,
        pax_total: i64,
        bag_type_choice: &str,
        ratio_ake: i32,
        ratio_akh: i32,
    ) -> CalcResult<BagRequirement> {
        if pax_total < 0 {
            return Err(CalcError::NegativePaxTotal(pax_total));
        }

        let rule = match self.decide(ship_type_raw, bag_type_choice) {
            BagDecision::Matched(rule) => rule,
            BagDecision::Invalid(choice) => return Err(CalcError::UnsupportedBagType(choice)),
        };

        let divisor = match rule {
            BagRule::ForcedAkh | BagRule::ExplicitAkh => validate_ratio("ratio_akh", ratio_akh)?,
            BagRule::ExplicitAke => validate_ratio("ratio_ake", ratio_ake)?,
            BagRule::ExplicitAlf => validate_ratio("alf_pax_per_uld", self.config.alf_pax_per_uld)?,
        };

        let count = ceil_div(pax_total, divisor);
        let requirement = BagRequirement::new(count, rule);

        debug!(rule = %rule, divisor, label = %requirement.label, "行李 ULD 规则命中");
        Ok(requirement)
    }
}

impl Default for BagLoadEngine {
    fn default() -> Self {
        Self::new(BagLoadConfig::default())
    }
}

/// 使用默认配置计算（便捷函数）
pub fn compute_bag_requirement(
    ship_type_raw: &str,
    pax_total: i64,
    bag_type_choice: &str,
    ratio_ake: i32,
    ratio_akh: i32,
) -> CalcResult<BagRequirement> {
    BagLoadEngine::default().compute(ship_type_raw, pax_total, bag_type_choice, ratio_ake, ratio_akh)
}

fn validate_ratio(name: &'static str, value: i32) -> CalcResult<i32> {
    if value <= 0 {
        Err(CalcError::InvalidRatio { name, value })
    } else {
        Ok(value)
    }
}

/// 整数向上取整除法；pax_total 为 0 时结果为 0
///
/// 调用前需保证 pax_total >= 0 且 divisor > 0
fn ceil_div(pax_total: i64, divisor: i32) -> u64 {
    let pax_total = pax_total.unsigned_abs();
    let divisor = u64::from(divisor.unsigned_abs());
    if pax_total == 0 {
        return 0;
    }
    let quotient = pax_total / divisor;
    if pax_total % divisor != 0 {
        quotient + 1
    } else {
        quotient
    }
}

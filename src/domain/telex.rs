// ==========================================
// AFOCS 电报生成系统 - 电报请求与结果
// ==========================================
// 职责: 调用方输入 (TelexRequest) / 行李需求 (BagRequirement) / 输出 (TelexOutput)
// 红线: 核心不跨调用保存任何状态
// ==========================================

use crate::domain::flight::FlightFacts;
use crate::domain::types::{BagRule, BagType};
use serde::{Deserialize, Serialize};

/// 无货物标记（不区分大小写）
pub const NO_CARGO_MARKER: &str = "NIL";

/// 表单默认: 每个 LD3 承载的旅客数
pub const DEFAULT_RATIO_AKE: i32 = 40;
/// 表单默认: 每个 LD3-45 承载的旅客数
pub const DEFAULT_RATIO_AKH: i32 = 30;

/// 收件地址槽位数
pub const ADDRESSEE_SLOTS: usize = 6;

/// 调用方输入（原样传入，每次调用独立）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelexRequest {
    /// 收件地址 to1..to6，空串表示该槽位不使用
    pub addressees: [String; ADDRESSEE_SLOTS],
    /// 货物重量（原样输出）
    pub weight: String,
    /// 署名
    pub name: String,
    /// 货物 ULD 描述，或 NIL
    pub cargo_uld: String,
    /// 用户选择的行李 ULD 类型（AKE / ALF / AKH）
    pub bag_type: String,
    pub ratio_ake: i32,
    pub ratio_akh: i32,
}

impl Default for TelexRequest {
    fn default() -> Self {
        Self {
            addressees: Default::default(),
            weight: String::new(),
            name: String::new(),
            cargo_uld: NO_CARGO_MARKER.to_string(),
            bag_type: BagType::Ake.as_str().to_string(),
            ratio_ake: DEFAULT_RATIO_AKE,
            ratio_akh: DEFAULT_RATIO_AKH,
        }
    }
}

impl TelexRequest {
    /// 货物描述是否为无货物标记
    pub fn has_no_cargo(&self) -> bool {
        self.cargo_uld.trim().eq_ignore_ascii_case(NO_CARGO_MARKER)
    }
}

/// 行李 ULD 需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagRequirement {
    /// 数量
    pub count: u64,
    /// 数量 + ULD 记号，例如 5LD3
    pub label: String,
    /// 产出该需求的规则
    pub rule: BagRule,
}

impl BagRequirement {
    pub fn new(count: u64, rule: BagRule) -> Self {
        Self {
            count,
            label: format!("{}{}", count, rule.bag_type().uld_token()),
            rule,
        }
    }

    /// 规则分类描述，例如 "AKH (forced)"
    pub fn classification(&self) -> String {
        self.rule.to_string()
    }
}

/// 一次生成的完整结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelexOutput {
    pub facts: FlightFacts,
    /// 显示用机型（A333 / B773 ...）
    pub ship_type: String,
    pub bag: BagRequirement,
    /// TTL 行内容
    pub totals: String,
    /// 电报全文
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_requirement_label() {
        assert_eq!(BagRequirement::new(5, BagRule::ExplicitAke).label, "5LD3");
        assert_eq!(BagRequirement::new(2, BagRule::ExplicitAlf).label, "2LD6");
        let forced = BagRequirement::new(4, BagRule::ForcedAkh);
        assert_eq!(forced.label, "4LD3-45");
        assert_eq!(forced.classification(), "AKH (forced)");
    }

    #[test]
    fn test_has_no_cargo() {
        let mut req = TelexRequest::default();
        assert!(req.has_no_cargo());
        req.cargo_uld = " nil ".to_string();
        assert!(req.has_no_cargo());
        req.cargo_uld = "2LD3".to_string();
        assert!(!req.has_no_cargo());
    }
}

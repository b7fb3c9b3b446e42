// ==========================================
// AFOCS 电报生成系统 - 领域类型定义
// ==========================================
// 依据: ULD 类型代码 (AKE / ALF / AKH)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 行李 ULD 类型 (Bag Type)
// ==========================================
// 表单可选的三种集装器类型; 其余输入一律视为调用方错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BagType {
    Ake, // 标准箱 LD3
    Alf, // 宽体/板型 LD6
    Akh, // 45 英寸 LD3-45
}

impl BagType {
    pub const ALL: [BagType; 3] = [BagType::Ake, BagType::Alf, BagType::Akh];

    /// 表单代码
    pub fn as_str(&self) -> &'static str {
        match self {
            BagType::Ake => "AKE",
            BagType::Alf => "ALF",
            BagType::Akh => "AKH",
        }
    }

    /// 电报中使用的 ULD 记号
    pub fn uld_token(&self) -> &'static str {
        match self {
            BagType::Ake => "LD3",
            BagType::Alf => "LD6",
            BagType::Akh => "LD3-45",
        }
    }
}

impl fmt::Display for BagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BagType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AKE" => Ok(BagType::Ake),
            "ALF" => Ok(BagType::Alf),
            "AKH" => Ok(BagType::Akh),
            other => Err(format!("未知行李 ULD 类型: {}", other)),
        }
    }
}

// ==========================================
// 行李规则来源 (Bag Rule)
// ==========================================
// 记录是哪条规则产出了行李 ULD 需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BagRule {
    ForcedAkh,   // 机型强制 AKH
    ExplicitAke, // 用户选择 AKE
    ExplicitAlf, // 用户选择 ALF
    ExplicitAkh, // 用户选择 AKH
}

impl BagRule {
    pub fn bag_type(&self) -> BagType {
        match self {
            BagRule::ForcedAkh | BagRule::ExplicitAkh => BagType::Akh,
            BagRule::ExplicitAke => BagType::Ake,
            BagRule::ExplicitAlf => BagType::Alf,
        }
    }

    pub fn is_forced(&self) -> bool {
        matches!(self, BagRule::ForcedAkh)
    }
}

impl fmt::Display for BagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagRule::ForcedAkh => write!(f, "AKH (forced)"),
            BagRule::ExplicitAke => write!(f, "AKE"),
            BagRule::ExplicitAlf => write!(f, "ALF"),
            BagRule::ExplicitAkh => write!(f, "AKH"),
        }
    }
}

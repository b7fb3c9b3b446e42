// ==========================================
// AFOCS 电报生成系统 - 电报配置
// ==========================================
// 职责: 收件地址预设 (NRT / HND) + 表单默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::telex::{TelexRequest, ADDRESSEE_SLOTS, DEFAULT_RATIO_AKE, DEFAULT_RATIO_AKH};
use crate::domain::types::BagType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PRESET_NRT: &str = "NRT";
pub const PRESET_HND: &str = "HND";

/// 收件地址预设
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddresseePreset {
    /// 最多 6 个，不足部分视为空槽位
    pub addressees: Vec<String>,
}

impl AddresseePreset {
    pub fn new(addressees: &[&str]) -> Self {
        Self {
            addressees: addressees.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 展开为固定 6 个槽位
    pub fn to_slots(&self) -> [String; ADDRESSEE_SLOTS] {
        let mut slots: [String; ADDRESSEE_SLOTS] = Default::default();
        for (slot, value) in slots.iter_mut().zip(self.addressees.iter()) {
            *slot = value.trim().to_string();
        }
        slots
    }
}

/// 电报配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelexConfig {
    /// 默认预设名
    pub default_preset: String,
    /// 预设名（大写） → 收件地址
    pub presets: BTreeMap<String, AddresseePreset>,
    pub default_bag_type: BagType,
    pub default_ratio_ake: i32,
    pub default_ratio_akh: i32,
}

impl Default for TelexConfig {
    fn default() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            PRESET_NRT.to_string(),
            AddresseePreset::new(&["ICNODOZ", "NRTOJNH", "NRTKKOZ", "NRTFFOZ", "CDGCSXH", ""]),
        );
        presets.insert(
            PRESET_HND.to_string(),
            AddresseePreset::new(&["HNDFFNH", "HNDKKNH", "HNDOINH", "HNDAGNH", "NRTFFOZ", ""]),
        );

        Self {
            default_preset: PRESET_NRT.to_string(),
            presets,
            default_bag_type: BagType::Ake,
            default_ratio_ake: DEFAULT_RATIO_AKE,
            default_ratio_akh: DEFAULT_RATIO_AKH,
        }
    }
}

impl TelexConfig {
    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_ratio_ake <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "default_ratio_ake".to_string(),
                message: format!("必须大于 0，实际 {}", self.default_ratio_ake),
            });
        }
        if self.default_ratio_akh <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "default_ratio_akh".to_string(),
                message: format!("必须大于 0，实际 {}", self.default_ratio_akh),
            });
        }

        for (name, preset) in &self.presets {
            if preset.addressees.len() > ADDRESSEE_SLOTS {
                return Err(ConfigError::InvalidValue {
                    key: format!("presets.{}", name),
                    message: format!(
                        "收件地址最多 {} 个，实际 {}",
                        ADDRESSEE_SLOTS,
                        preset.addressees.len()
                    ),
                });
            }
        }

        self.preset(&self.default_preset)?;
        Ok(())
    }

    /// 按名称查找预设（不区分大小写）
    pub fn preset(&self, name: &str) -> ConfigResult<&AddresseePreset> {
        let key = name.trim();
        self.presets
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
            .ok_or_else(|| ConfigError::UnknownPreset(key.to_string()))
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// 以预设与默认值生成请求模板
    ///
    /// `preset` 为 None 时使用 default_preset
    pub fn request_template(&self, preset: Option<&str>) -> ConfigResult<TelexRequest> {
        let preset = self.preset(preset.unwrap_or(self.default_preset.as_str()))?;

        Ok(TelexRequest {
            addressees: preset.to_slots(),
            bag_type: self.default_bag_type.as_str().to_string(),
            ratio_ake: self.default_ratio_ake,
            ratio_akh: self.default_ratio_akh,
            ..TelexRequest::default()
        })
    }
}

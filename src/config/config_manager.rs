// ==========================================
// AFOCS 电报生成系统 - 配置管理器
// ==========================================
// 职责: 配置加载、来源解析、导出
// 存储: JSON 文件（可选），缺失字段回落到内置默认
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::telex_config::TelexConfig;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "AFOCS_TELEX_CONFIG";

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 内置默认
    BuiltIn,
    /// 从文件加载
    File(PathBuf),
    /// 从 JSON 字符串加载
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::BuiltIn => write!(f, "built-in"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Inline => write!(f, "inline"),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: TelexConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 使用内置默认配置
    pub fn built_in() -> Self {
        Self {
            config: TelexConfig::default(),
            source: ConfigSource::BuiltIn,
        }
    }

    /// 从已有配置创建（会校验）
    pub fn from_config(config: TelexConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: ConfigSource::Inline,
        })
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: TelexConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// 从 JSON 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = ConfigSource::File(path.to_path_buf());
        info!(path = %path.display(), "已加载配置文件");
        Ok(manager)
    }

    /// 解析配置来源
    ///
    /// # 顺序
    /// 1. 显式路径（文件必须存在）
    /// 2. 环境变量 AFOCS_TELEX_CONFIG（文件必须存在）
    /// 3. 用户配置目录下的 afocs-telex/config.json（存在时）
    /// 4. 内置默认
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, env_path, Self::default_config_path())
    }

    fn resolve_with(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env_path {
            return Self::load(path);
        }

        match default_path {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                debug!("未找到配置文件，使用内置默认配置");
                Ok(Self::built_in())
            }
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("afocs-telex").join("config.json"))
    }

    pub fn config(&self) -> &TelexConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 导出当前配置（格式化 JSON）
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let manager = ConfigManager::from_json_str(r#"{ "default_ratio_ake": 45 }"#).unwrap();
        let config = manager.config();
        assert_eq!(config.default_ratio_ake, 45);
        assert_eq!(config.default_ratio_akh, 30);
        assert_eq!(config.default_preset, "NRT");
        assert_eq!(manager.source(), &ConfigSource::Inline);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ConfigManager::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_without_files_is_built_in() {
        let manager = ConfigManager::resolve_with(None, None, None).unwrap();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);

        let missing = PathBuf::from("/nonexistent/afocs-telex/config.json");
        let manager = ConfigManager::resolve_with(None, None, Some(missing)).unwrap();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);
    }

    #[test]
    fn test_resolve_env_path_must_exist() {
        let missing = PathBuf::from("/nonexistent/afocs-telex/env.json");
        assert!(matches!(
            ConfigManager::resolve_with(None, Some(missing), None),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_export_round_trips_defaults() {
        let manager = ConfigManager::built_in();
        let json = manager.to_json().unwrap();
        let reloaded = ConfigManager::from_json_str(&json).unwrap();
        assert_eq!(reloaded.config(), manager.config());
    }
}

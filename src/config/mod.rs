// ==========================================
// AFOCS 电报生成系统 - 配置层
// ==========================================
// 职责: 收件地址预设与表单默认值
// 存储: JSON 文件（可选）
// ==========================================

pub mod config_manager;
pub mod error;
pub mod telex_config;

// 重导出核心配置管理器
pub use config_manager::{ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use error::{ConfigError, ConfigResult};
pub use telex_config::{AddresseePreset, TelexConfig, PRESET_HND, PRESET_NRT};

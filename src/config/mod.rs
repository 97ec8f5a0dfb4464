// ==========================================
// 餐厅点单系统 - 配置层
// ==========================================
// 职责: 分类器配置管理,支持环境变量覆写
// 存储: JSON 配置文件
// ==========================================

pub mod classifier_config;
pub mod config_manager;

// 重导出核心配置管理器
pub use classifier_config::{ClassifierConfig, DEFAULT_BADGE_CLASS};
pub use config_manager::{
    get_default_config_path, resolve_config_path, ConfigError, ConfigManager, CONFIG_PATH_ENV,
    LOCALE_ENV,
};

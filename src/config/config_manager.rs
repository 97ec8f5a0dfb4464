// ==========================================
// 餐厅点单系统 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、默认路径
// 存储: JSON 配置文件
// ==========================================
// 覆写优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::classifier_config::ClassifierConfig;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "RESTAURANT_STATUS_CONFIG";

/// 默认语言覆写环境变量
pub const LOCALE_ENV: &str = "RESTAURANT_STATUS_LOCALE";

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, error={source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: path={path}, error={source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    #[error("无效的徽标样式类: {0}")]
    InvalidBadgeClass(String),
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    config: ClassifierConfig,
}

impl ConfigManager {
    /// 从内存配置创建（会执行校验与归一化）
    pub fn from_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            path: None,
            config: config.normalized()?,
        })
    }

    /// 从配置文件加载
    ///
    /// # 返回
    /// - 文件不存在: 默认配置
    /// - 文件存在但格式错误: ConfigError::Parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_display = path.display().to_string();

        let config = match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str::<ClassifierConfig>(&raw).map_err(|source| {
                ConfigError::Parse {
                    path: path_display.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path_display, "配置文件不存在，使用默认配置");
                ClassifierConfig::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path_display,
                    source,
                })
            }
        };

        let config = config.normalized()?;
        tracing::info!(
            path = %path_display,
            default_locale = %config.default_locale,
            badge_class = %config.badge_class,
            "配置加载完成"
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    /// 从配置文件加载，并应用语言覆写
    pub fn load_with_overrides(
        path: impl AsRef<Path>,
        locale_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut manager = Self::load(path)?;
        if let Some(locale) = locale_override.map(str::trim).filter(|l| !l.is_empty()) {
            manager.apply_locale_override(locale)?;
        }
        Ok(manager)
    }

    /// 按环境变量加载
    ///
    /// # 环境变量
    /// - RESTAURANT_STATUS_CONFIG: 配置文件路径（默认见 get_default_config_path）
    /// - RESTAURANT_STATUS_LOCALE: 覆写默认语言
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok());
        let locale = std::env::var(LOCALE_ENV).ok();
        Self::load_with_overrides(path, locale.as_deref())
    }

    /// 覆写默认语言
    pub fn apply_locale_override(&mut self, locale: &str) -> Result<(), ConfigError> {
        let updated = ClassifierConfig {
            default_locale: locale.to_string(),
            ..self.config.clone()
        }
        .normalized()?;

        tracing::info!(
            from = %self.config.default_locale,
            to = %updated.default_locale,
            "默认语言已覆写"
        );
        self.config = updated;
        Ok(())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// 配置来源文件（内存配置为 None）
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// ==========================================
// 默认配置路径辅助函数
// ==========================================

/// 解析配置文件路径（显式指定优先，空白值视为未指定）
pub fn resolve_config_path(explicit: Option<String>) -> PathBuf {
    match explicit.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => get_default_config_path(),
    }
}

/// 获取默认配置文件路径
///
/// # 返回
/// - 用户配置目录/restaurant-status/config.json
/// - 无法获取用户配置目录时: ./restaurant_status.json
pub fn get_default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("restaurant-status").join("config.json"),
        None => PathBuf::from("./restaurant_status.json"),
    }
}

// ==========================================
// 餐厅点单系统 - 分类器配置
// ==========================================
// 职责: 默认语言与徽标样式类，加载后归一化并校验
// ==========================================

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::i18n;

/// 默认徽标样式类
pub const DEFAULT_BADGE_CLASS: &str = "badge";

/// 状态分类配置（持久化对象）
///
/// 存储位置：JSON 配置文件（见 ConfigManager）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// 默认语言（es/en，可写作 es-MX 等形式，加载时归一化）
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// 徽标基础样式类（拼接在状态样式类之前）
    #[serde(default = "default_badge_class")]
    pub badge_class: String,
}

fn default_locale() -> String {
    i18n::DEFAULT_LOCALE.to_string()
}

fn default_badge_class() -> String {
    DEFAULT_BADGE_CLASS.to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            badge_class: default_badge_class(),
        }
    }
}

impl ClassifierConfig {
    /// 校验并归一化配置
    ///
    /// - default_locale 经语言协商后必须受支持
    /// - badge_class 去除首尾空白后非空，且只含字母/数字/`-`/`_`/空格
    pub fn normalized(self) -> Result<Self, ConfigError> {
        let locale = i18n::negotiate_locale(&self.default_locale)
            .ok_or_else(|| ConfigError::UnsupportedLocale(self.default_locale.clone()))?;

        let badge_class = self.badge_class.trim();
        let valid = !badge_class.is_empty()
            && badge_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ');
        if !valid {
            return Err(ConfigError::InvalidBadgeClass(self.badge_class.clone()));
        }

        Ok(Self {
            default_locale: locale.to_string(),
            badge_class: badge_class.to_string(),
        })
    }
}

// ==========================================
// 餐厅点单系统 - 状态分类引擎
// ==========================================
// 职责: (分类域, 状态码) → 标签 / 样式类 / 说明 / 徽标
// 红线: 纯函数,永不失败,未知状态码就地回退
// ==========================================
// 回退策略（三个分类域一致）:
// - 标签: 原样返回输入状态码
// - 说明: 空串
// - 样式类: 分类域默认类 (btn-secondary / pending / pending)
// - 行高亮类: 空串
// ==========================================

use crate::config::ClassifierConfig;
use crate::domain::status::StatusDisplay;
use crate::domain::types::StatusDomain;
use crate::engine::status_table::{self, StatusEntry};
use crate::i18n;

/// 行高亮类前缀（厨房显示屏）
pub const ROW_CLASS_PREFIX: &str = "status-";

// ==========================================
// StatusClassifier - 状态分类引擎
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClassifier {
    locale: String,
    badge_class: String,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl StatusClassifier {
    /// 创建分类引擎
    ///
    /// 配置应已通过 ClassifierConfig::normalized 校验
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            locale: config.default_locale.clone(),
            badge_class: config.badge_class.clone(),
        }
    }

    /// 当前语言
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 绑定到另一种语言的分类引擎
    ///
    /// 不支持的语言保留当前语言
    pub fn for_locale(&self, requested: &str) -> Self {
        let locale = match i18n::negotiate_locale(requested) {
            Some(l) => l.to_string(),
            None => {
                tracing::warn!(requested, fallback = %self.locale, "不支持的语言，沿用默认语言");
                self.locale.clone()
            }
        };

        Self {
            locale,
            badge_class: self.badge_class.clone(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 本地化标签（未知状态码原样返回）
    pub fn label_for(&self, domain: StatusDomain, code: &str) -> String {
        match lookup(domain, code) {
            Some(entry) => i18n::t(&entry.label_key(), &self.locale),
            None => code.to_string(),
        }
    }

    /// UI 样式类
    pub fn css_class_for(&self, domain: StatusDomain, code: &str) -> &'static str {
        lookup(domain, code)
            .map(|e| e.css_class)
            .unwrap_or_else(|| status_table::fallback_css_class(domain))
    }

    /// 说明文字（订单域及未知状态码返回空串）
    pub fn description_for(&self, domain: StatusDomain, code: &str) -> String {
        match lookup(domain, code) {
            Some(entry) if entry.has_description => {
                i18n::t(&entry.description_key(), &self.locale)
            }
            _ => String::new(),
        }
    }

    /// 厨房显示屏行高亮类（仅订单菜品域）
    pub fn row_class_for(&self, domain: StatusDomain, code: &str) -> String {
        if domain != StatusDomain::Item {
            return String::new();
        }
        lookup(domain, code)
            .map(|e| format!("{}{}", ROW_CLASS_PREFIX, e.css_class))
            .unwrap_or_default()
    }

    /// 完整展示元数据
    pub fn display_for(&self, domain: StatusDomain, code: &str) -> StatusDisplay {
        match lookup(domain, code) {
            Some(entry) => self.display_entry(entry),
            None => StatusDisplay {
                domain,
                code: code.to_string(),
                label: code.to_string(),
                css_class: status_table::fallback_css_class(domain).to_string(),
                description: String::new(),
                recognized: false,
            },
        }
    }

    /// 分类域内全部已知状态（用于图例/筛选下拉）
    pub fn statuses_for(&self, domain: StatusDomain) -> Vec<StatusDisplay> {
        status_table::entries_for(domain)
            .map(|e| self.display_entry(e))
            .collect()
    }

    /// 徽标 HTML 片段
    ///
    /// `<span class="{badge} {css}">{label}</span>`，
    /// include_description 且存在说明时追加 `<small class="status-description">`
    pub fn badge_markup(
        &self,
        domain: StatusDomain,
        code: &str,
        include_description: bool,
    ) -> String {
        let display = self.display_for(domain, code);
        let mut markup = format!(
            r#"<span class="{} {}">{}</span>"#,
            escape_html(&self.badge_class),
            display.css_class,
            escape_html(&display.label)
        );

        if include_description && display.has_description() {
            markup.push_str(&format!(
                r#" <small class="status-description">{}</small>"#,
                escape_html(&display.description)
            ));
        }

        markup
    }

    fn display_entry(&self, entry: &StatusEntry) -> StatusDisplay {
        StatusDisplay {
            domain: entry.domain,
            code: entry.code.to_string(),
            label: i18n::t(&entry.label_key(), &self.locale),
            css_class: entry.css_class.to_string(),
            description: if entry.has_description {
                i18n::t(&entry.description_key(), &self.locale)
            } else {
                String::new()
            },
            recognized: true,
        }
    }
}

/// 查表，未识别的状态码记录 debug 日志后返回 None
fn lookup(domain: StatusDomain, code: &str) -> Option<&'static StatusEntry> {
    match status_table::resolve(domain, code) {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::debug!(error = %err, "状态码回退到默认展示");
            None
        }
    }
}

/// HTML 转义（徽标片段中的文本与属性值）
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持西班牙语（默认）和英语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 所有翻译均显式传入 locale，不读写 rust-i18n 的全局 locale
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "es";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];

/// 语言协商
///
/// 接受 "en"、"en-US"、"es_MX"、"EN" 等形式，按主语言子标签匹配
///
/// # 返回
/// - Some(locale): 支持的语言代码
/// - None: 不支持
pub fn negotiate_locale(requested: &str) -> Option<&'static str> {
    let primary = requested
        .trim()
        .split(|c: char| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    SUPPORTED_LOCALES.into_iter().find(|l| *l == primary)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use restaurant_status::i18n::t;
/// let msg = t("summary.empty", "en");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use restaurant_status::i18n::t_with_args;
/// let args = [("status", "Listo"), ("done", "2"), ("active", "3")];
/// let msg = t_with_args("summary.progress", "es", &args);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别与输出格式
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志格式环境变量（text / json）
pub const LOG_FORMAT_ENV: &str = "RESTAURANT_STATUS_LOG_FORMAT";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text, // 人读格式（默认）
    Json, // 结构化 JSON（便于日志采集）
}

impl LogFormat {
    /// 从字符串解析（未知值回退为 Text）
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=restaurant_status=trace
/// - RESTAURANT_STATUS_LOG_FORMAT: text（默认）或 json
///
/// # 示例
/// ```no_run
/// use restaurant_status::logging;
/// logging::init();
/// ```
pub fn init() {
    let format = std::env::var(LOG_FORMAT_ENV)
        .map(|v| LogFormat::from_str(&v))
        .unwrap_or(LogFormat::Text);
    init_with_format(format);
}

/// 按指定格式初始化日志系统（重复初始化时静默忽略）
pub fn init_with_format(format: LogFormat) {
    // 从环境变量读取日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("日志系统已初始化，忽略重复初始化: {}", e);
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

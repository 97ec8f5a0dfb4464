// ==========================================
// 餐厅点单系统 - 状态分类核心库
// ==========================================
// 职责: 桌台/订单/订单菜品状态 → 标签、样式类、说明、徽标
// 技术栈: Rust + rust-i18n + tracing
// 系统定位: 纯函数分类服务 (渲染由前端负责)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 类型与值对象
pub mod domain;

// 引擎层 - 分类规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ItemStatusSummary, OrderItem, OrderItemStatus, OrderStatus, StatusDisplay, StatusDomain,
    TableStatus,
};

// 引擎
pub use engine::{StatusClassifier, StatusSummarizer};

// API
pub use api::{ApiError, ApiResult, RequestContext, StatusApi};

// 应用
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Restaurant Status";

// ==========================================
// 餐厅点单系统 - 领域模型层
// ==========================================
// 职责: 定义状态类型、展示值对象、菜品 DTO
// 红线: 不含翻译逻辑,不含分类引擎逻辑
// ==========================================

pub mod order;
pub mod status;
pub mod types;

// 重导出核心类型
pub use order::{ItemStatusSummary, OrderItem};
pub use status::StatusDisplay;
pub use types::{OrderItemStatus, OrderStatus, StatusDomain, TableStatus};

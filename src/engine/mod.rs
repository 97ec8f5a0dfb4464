// ==========================================
// 餐厅点单系统 - 引擎层
// ==========================================
// 职责: 状态分类、菜品生命周期、状态汇总
// 红线: 纯函数,无共享可变状态,不做渲染
// ==========================================

pub mod item_lifecycle;
pub mod status_classifier;
pub mod status_summary;
pub mod status_table;

// 重导出核心引擎
pub use item_lifecycle::LifecycleError;
pub use status_classifier::{escape_html, StatusClassifier};
pub use status_summary::StatusSummarizer;
pub use status_table::{ClassifyError, StatusEntry, STATUS_TABLE};

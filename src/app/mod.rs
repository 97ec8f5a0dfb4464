// ==========================================
// 餐厅点单系统 - 应用层
// ==========================================
// 职责: 组装配置与 API,供前端/命令行入口使用
// ==========================================

pub mod state;

// 重导出
pub use crate::config::get_default_config_path;
pub use state::AppState;

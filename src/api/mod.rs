// ==========================================
// 餐厅点单系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供前端/命令行调用
// ==========================================

pub mod context;
pub mod error;
pub mod status_api;

// 重导出核心类型
pub use context::RequestContext;
pub use error::{map_api_error, ApiError, ApiResult, ErrorResponse};
pub use status_api::StatusApi;

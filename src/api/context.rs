// ==========================================
// 餐厅点单系统 - 请求上下文
// ==========================================
// 每次调用显式传入，不使用模块级“当前用户”缓存
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 请求上下文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub request_id: String,         // 请求ID
    pub user_id: Option<String>,    // 操作人（未登录为 None）
    pub locale: String,             // 请求语言（原样保存，由 API 层协商）
    pub received_at: NaiveDateTime, // 接收时间 (UTC)
}

impl RequestContext {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            user_id: None,
            locale: locale.into(),
            received_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// 日志用操作人标识
    pub fn actor(&self) -> &str {
        self.user_id.as_deref().unwrap_or("anonymous")
    }
}

/// 未指定语言，由 API 层使用配置的默认语言
impl Default for RequestContext {
    fn default() -> Self {
        Self::new(String::new())
    }
}

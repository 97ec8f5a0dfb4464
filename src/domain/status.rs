// ==========================================
// 餐厅点单系统 - 状态展示值对象
// ==========================================
// 由 (分类域, 状态码) 确定性派生，无生命周期
// ==========================================

use crate::domain::types::StatusDomain;
use serde::{Deserialize, Serialize};

/// 状态展示元数据（供前端渲染）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDisplay {
    pub domain: StatusDomain, // 分类域
    pub code: String,         // 原始状态码
    pub label: String,        // 本地化标签
    pub css_class: String,    // UI 样式类
    pub description: String,  // 说明（无说明时为空串）
    pub recognized: bool,     // 是否为已知状态码
}

impl StatusDisplay {
    /// 是否带有说明文字
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

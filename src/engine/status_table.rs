// ==========================================
// 餐厅点单系统 - 状态映射表
// ==========================================
// 单一数据驱动表，按 (分类域, 状态码) 索引
// 回退策略只在此处决定
// ==========================================
// 翻译键: status.{domain}.{code}.label / .description
// ==========================================

use crate::domain::types::StatusDomain;
use crate::domain::types::StatusDomain::{Item, Order, Table};
use thiserror::Error;

/// 状态分类错误
///
/// 分类器内部就地恢复，不向调用方传播
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("未识别的状态码: domain={domain}, code={code}")]
    UnrecognizedStatusCode { domain: StatusDomain, code: String },
}

/// 映射表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub domain: StatusDomain,
    pub code: &'static str,
    pub css_class: &'static str,
    pub has_description: bool,
}

impl StatusEntry {
    const fn new(
        domain: StatusDomain,
        code: &'static str,
        css_class: &'static str,
        has_description: bool,
    ) -> Self {
        Self {
            domain,
            code,
            css_class,
            has_description,
        }
    }

    pub fn label_key(&self) -> String {
        format!("status.{}.{}.label", self.domain.key(), self.code)
    }

    pub fn description_key(&self) -> String {
        format!("status.{}.{}.description", self.domain.key(), self.code)
    }
}

/// 状态映射表
pub static STATUS_TABLE: &[StatusEntry] = &[
    // ===== 桌台 =====
    StatusEntry::new(Table, "Disponible", "btn-success", true),
    StatusEntry::new(Table, "Ocupada", "btn-warning", true),
    StatusEntry::new(Table, "Reservada", "btn-info", true),
    StatusEntry::new(Table, "EnEspera", "btn-secondary", true),
    StatusEntry::new(Table, "Atendida", "btn-primary", true),
    StatusEntry::new(Table, "EnPreparacion", "btn-warning", true),
    StatusEntry::new(Table, "Servida", "btn-info", true),
    StatusEntry::new(Table, "ParaPago", "btn-success", true),
    StatusEntry::new(Table, "Pagada", "btn-success", true),
    StatusEntry::new(Table, "Bloqueada", "btn-danger", true),
    // ===== 订单 =====
    StatusEntry::new(Order, "Pending", "pending", false),
    StatusEntry::new(Order, "SentToKitchen", "sent-to-kitchen", false),
    StatusEntry::new(Order, "Preparing", "preparing", false),
    StatusEntry::new(Order, "Ready", "ready", false),
    StatusEntry::new(Order, "Served", "served", false),
    StatusEntry::new(Order, "ReadyToPay", "ready-to-pay", false),
    StatusEntry::new(Order, "Completed", "completed", false),
    StatusEntry::new(Order, "Cancelled", "cancelled", false),
    // ===== 订单菜品 =====
    StatusEntry::new(Item, "Pending", "pending", true),
    StatusEntry::new(Item, "Preparing", "preparing", true),
    StatusEntry::new(Item, "Ready", "ready", true),
    StatusEntry::new(Item, "Served", "served", true),
    StatusEntry::new(Item, "Cancelled", "cancelled", true),
];

/// 查找状态码对应的条目（状态码去除首尾空白后精确匹配）
pub fn resolve(domain: StatusDomain, code: &str) -> Result<&'static StatusEntry, ClassifyError> {
    let trimmed = code.trim();
    STATUS_TABLE
        .iter()
        .find(|e| e.domain == domain && e.code == trimmed)
        .ok_or_else(|| ClassifyError::UnrecognizedStatusCode {
            domain,
            code: code.to_string(),
        })
}

/// 指定分类域的全部条目（保持表内顺序）
pub fn entries_for(domain: StatusDomain) -> impl Iterator<Item = &'static StatusEntry> {
    STATUS_TABLE.iter().filter(move |e| e.domain == domain)
}

/// 未知状态码的回退样式类
pub fn fallback_css_class(domain: StatusDomain) -> &'static str {
    match domain {
        Table => "btn-secondary",
        Order | Item => "pending",
    }
}

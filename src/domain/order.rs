// ==========================================
// 餐厅点单系统 - 订单菜品领域模型
// ==========================================
// 职责: 厨房显示所需的菜品 DTO 与状态汇总结果
// ==========================================

use crate::domain::types::OrderStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderItem - 订单菜品
// ==========================================
// status 保留前端传入的原始状态码，由引擎层解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,       // 菜品行ID
    pub product_name: String,  // 菜品名称
    pub quantity: u32,         // 数量
    pub status: String,        // 状态码
    #[serde(default)]
    pub notes: Option<String>, // 备注（少辣/不要葱等）
}

impl OrderItem {
    pub fn new(
        item_id: impl Into<String>,
        product_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            product_name: product_name.into(),
            quantity: 1,
            status: status.into(),
            notes: None,
        }
    }
}

// ==========================================
// ItemStatusSummary - 菜品状态汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatusSummary {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub served: usize,
    pub cancelled: usize,
    pub unrecognized: usize, // 未知状态码（按 Pending 参与汇总）
    pub overall: OrderStatus, // 汇总后的订单状态
    pub label: String,        // 本地化汇总标签
}

impl ItemStatusSummary {
    /// 未取消的菜品数
    pub fn active(&self) -> usize {
        self.total - self.cancelled
    }

    /// 已出餐（Ready + Served）的菜品数
    pub fn done(&self) -> usize {
        self.ready + self.served
    }
}

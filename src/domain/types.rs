// ==========================================
// 餐厅点单系统 - 领域类型定义
// ==========================================
// 状态码为封闭集合: 桌台 / 订单 / 订单菜品
// 序列化格式: 与前端一致的原始状态码 (PascalCase)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 状态分类域 (Status Domain)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusDomain {
    Table, // 桌台
    Order, // 订单
    Item,  // 订单菜品
}

impl fmt::Display for StatusDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl StatusDomain {
    pub const ALL: [StatusDomain; 3] =
        [StatusDomain::Table, StatusDomain::Order, StatusDomain::Item];

    /// 从字符串解析分类域（大小写不敏感，兼容西语别名）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" | "mesa" => Some(StatusDomain::Table),
            "order" | "pedido" => Some(StatusDomain::Order),
            "item" | "order-item" | "order_item" => Some(StatusDomain::Item),
            _ => None,
        }
    }

    /// 规范键（用于翻译键拼接）
    pub fn key(&self) -> &'static str {
        match self {
            StatusDomain::Table => "table",
            StatusDomain::Order => "order",
            StatusDomain::Item => "item",
        }
    }
}

// ==========================================
// 桌台状态 (Table Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Disponible,    // 空闲
    Ocupada,       // 占用
    Reservada,     // 已预订
    EnEspera,      // 等待服务
    Atendida,      // 点单中
    EnPreparacion, // 厨房制作中
    Servida,       // 已上菜
    ParaPago,      // 待结账
    Pagada,        // 已结账
    Bloqueada,     // 维护锁定
}

impl TableStatus {
    pub const ALL: [TableStatus; 10] = [
        TableStatus::Disponible,
        TableStatus::Ocupada,
        TableStatus::Reservada,
        TableStatus::EnEspera,
        TableStatus::Atendida,
        TableStatus::EnPreparacion,
        TableStatus::Servida,
        TableStatus::ParaPago,
        TableStatus::Pagada,
        TableStatus::Bloqueada,
    ];

    /// 从状态码解析（未知状态码返回 None）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code.trim())
    }

    /// 原始状态码
    pub fn code(&self) -> &'static str {
        match self {
            TableStatus::Disponible => "Disponible",
            TableStatus::Ocupada => "Ocupada",
            TableStatus::Reservada => "Reservada",
            TableStatus::EnEspera => "EnEspera",
            TableStatus::Atendida => "Atendida",
            TableStatus::EnPreparacion => "EnPreparacion",
            TableStatus::Servida => "Servida",
            TableStatus::ParaPago => "ParaPago",
            TableStatus::Pagada => "Pagada",
            TableStatus::Bloqueada => "Bloqueada",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 菜品状态的超集: 另含 送厨 / 待支付 / 已完成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,       // 待处理
    SentToKitchen, // 已送厨
    Preparing,     // 制作中
    Ready,         // 已出餐
    Served,        // 已上菜
    ReadyToPay,    // 待支付
    Completed,     // 已完成
    Cancelled,     // 已取消
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::SentToKitchen,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::ReadyToPay,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code.trim())
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::SentToKitchen => "SentToKitchen",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Served => "Served",
            OrderStatus::ReadyToPay => "ReadyToPay",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 订单菜品状态 (Order Item Status)
// ==========================================
// 生命周期: Pending → Preparing → Ready → Served (Cancelled 为终态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderItemStatus {
    Pending,   // 未送厨
    Preparing, // 制作中
    Ready,     // 可上菜
    Served,    // 已上菜
    Cancelled, // 已取消
}

impl OrderItemStatus {
    pub const ALL: [OrderItemStatus; 5] = [
        OrderItemStatus::Pending,
        OrderItemStatus::Preparing,
        OrderItemStatus::Ready,
        OrderItemStatus::Served,
        OrderItemStatus::Cancelled,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code.trim())
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderItemStatus::Pending => "Pending",
            OrderItemStatus::Preparing => "Preparing",
            OrderItemStatus::Ready => "Ready",
            OrderItemStatus::Served => "Served",
            OrderItemStatus::Cancelled => "Cancelled",
        }
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderItemStatus::Served | OrderItemStatus::Cancelled)
    }
}

impl fmt::Display for OrderItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 餐厅点单系统 - 订单菜品生命周期
// ==========================================
// 流转: Pending → Preparing → Ready → Served
// 取消: Pending / Preparing → Cancelled
// 终态: Served, Cancelled
// ==========================================

use thiserror::Error;

use crate::domain::types::OrderItemStatus;

/// 生命周期错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("未识别的菜品状态码: {0}")]
    UnrecognizedStatusCode(String),

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidTransition {
        from: OrderItemStatus,
        to: OrderItemStatus,
    },
}

/// 是否允许从 from 流转到 to（同状态不算流转）
pub fn can_transition(from: OrderItemStatus, to: OrderItemStatus) -> bool {
    use OrderItemStatus::*;

    if from.is_terminal() {
        return false;
    }
    matches!(
        (from, to),
        (Pending, Preparing)
            | (Pending, Cancelled)
            | (Preparing, Ready)
            | (Preparing, Cancelled)
            | (Ready, Served)
    )
}

/// 正常流程的下一状态（终态返回 None）
pub fn next(status: OrderItemStatus) -> Option<OrderItemStatus> {
    allowed_targets(status)
        .into_iter()
        .find(|to| *to != OrderItemStatus::Cancelled)
}

/// 从 from 可到达的全部状态
pub fn allowed_targets(from: OrderItemStatus) -> Vec<OrderItemStatus> {
    OrderItemStatus::ALL
        .into_iter()
        .filter(|to| can_transition(from, *to))
        .collect()
}

/// 校验状态码流转
///
/// # 返回
/// - Ok(to): 目标状态
/// - Err(UnrecognizedStatusCode): 任一状态码未知
/// - Err(InvalidTransition): 流转不被允许
pub fn validate_transition(
    from_code: &str,
    to_code: &str,
) -> Result<OrderItemStatus, LifecycleError> {
    let from = OrderItemStatus::from_code(from_code)
        .ok_or_else(|| LifecycleError::UnrecognizedStatusCode(from_code.to_string()))?;
    let to = OrderItemStatus::from_code(to_code)
        .ok_or_else(|| LifecycleError::UnrecognizedStatusCode(to_code.to_string()))?;

    if !can_transition(from, to) {
        return Err(LifecycleError::InvalidTransition { from, to });
    }
    Ok(to)
}

// ==========================================
// 餐厅点单系统 - 菜品状态汇总引擎
// ==========================================
// 职责: 由订单内各菜品状态推导订单整体状态与汇总标签
// 输入: OrderItem 列表（原始状态码）
// 输出: ItemStatusSummary
// ==========================================
// 汇总规则（顺序执行，命中即返回）:
// 1) 无菜品 → Pending
// 2) 全部取消 → Cancelled
// 3) 未取消菜品全部 Served → Served
// 4) 未取消菜品全部 Ready/Served → Ready
// 5) 任一未取消菜品已开始制作 → Preparing
// 6) 其他 → Pending
// 未知状态码计入 unrecognized，按 Pending 参与汇总
// ==========================================

use tracing::instrument;

use crate::domain::order::{ItemStatusSummary, OrderItem};
use crate::domain::types::{OrderItemStatus, OrderStatus, StatusDomain};
use crate::engine::status_classifier::StatusClassifier;
use crate::i18n;

// ==========================================
// StatusSummarizer - 菜品状态汇总引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StatusSummarizer {
    classifier: StatusClassifier,
}

/// 各状态计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    pending: usize,
    preparing: usize,
    ready: usize,
    served: usize,
    cancelled: usize,
    unrecognized: usize,
}

impl Counts {
    fn total(&self) -> usize {
        self.pending
            + self.preparing
            + self.ready
            + self.served
            + self.cancelled
            + self.unrecognized
    }
}

impl StatusSummarizer {
    pub fn new(classifier: StatusClassifier) -> Self {
        Self { classifier }
    }

    /// 汇总菜品状态
    #[instrument(
        skip(self, items),
        fields(count = items.len(), locale = %self.classifier.locale())
    )]
    pub fn summarize(&self, items: &[OrderItem]) -> ItemStatusSummary {
        let counts = count_statuses(items.iter().map(|i| i.status.as_str()));
        let overall = overall_status(&counts);

        let summary = ItemStatusSummary {
            total: counts.total(),
            pending: counts.pending,
            preparing: counts.preparing,
            ready: counts.ready,
            served: counts.served,
            cancelled: counts.cancelled,
            unrecognized: counts.unrecognized,
            overall,
            label: String::new(),
        };

        let label = self.summary_label(&summary);
        tracing::debug!(overall = %overall, label = %label, "菜品状态汇总完成");

        ItemStatusSummary { label, ..summary }
    }

    /// 本地化汇总标签
    fn summary_label(&self, summary: &ItemStatusSummary) -> String {
        let locale = self.classifier.locale();
        if summary.total == 0 {
            return i18n::t("summary.empty", locale);
        }

        let status = self.classifier.label_for(StatusDomain::Order, summary.overall.code());
        let done = summary.done().to_string();
        let active = summary.active().to_string();
        i18n::t_with_args(
            "summary.progress",
            locale,
            &[
                ("status", status.as_str()),
                ("done", done.as_str()),
                ("active", active.as_str()),
            ],
        )
    }
}

fn count_statuses<'a>(codes: impl Iterator<Item = &'a str>) -> Counts {
    let mut counts = Counts::default();
    for code in codes {
        match OrderItemStatus::from_code(code) {
            Some(OrderItemStatus::Pending) => counts.pending += 1,
            Some(OrderItemStatus::Preparing) => counts.preparing += 1,
            Some(OrderItemStatus::Ready) => counts.ready += 1,
            Some(OrderItemStatus::Served) => counts.served += 1,
            Some(OrderItemStatus::Cancelled) => counts.cancelled += 1,
            None => {
                tracing::debug!(code, "未识别的菜品状态码，按 Pending 汇总");
                counts.unrecognized += 1;
            }
        }
    }
    counts
}

fn overall_status(counts: &Counts) -> OrderStatus {
    let total = counts.total();
    if total == 0 {
        return OrderStatus::Pending;
    }

    let active = total - counts.cancelled;
    if active == 0 {
        return OrderStatus::Cancelled;
    }
    if counts.served == active {
        return OrderStatus::Served;
    }
    if counts.ready + counts.served == active {
        return OrderStatus::Ready;
    }
    if counts.preparing + counts.ready + counts.served > 0 {
        return OrderStatus::Preparing;
    }
    OrderStatus::Pending
}

// ==========================================
// 餐厅点单系统 - 状态 API
// ==========================================
// 职责: 供前端调用的状态展示/徽标/汇总/流转校验接口
// 架构: API 层 → Engine 层 (StatusClassifier / StatusSummarizer / item_lifecycle)
// ==========================================
// 约定:
// - 每个接口显式接收 RequestContext（语言、操作人）
// - 分类域无法解析 → ApiError::InvalidInput
// - 未知状态码 → 回退展示（流转校验除外）
// ==========================================

use tracing::instrument;

use crate::api::context::RequestContext;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::{ItemStatusSummary, OrderItem};
use crate::domain::status::StatusDisplay;
use crate::domain::types::StatusDomain;
use crate::engine::item_lifecycle;
use crate::engine::{StatusClassifier, StatusSummarizer};

// ==========================================
// StatusApi - 状态 API
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StatusApi {
    classifier: StatusClassifier,
}

impl StatusApi {
    /// 创建新的StatusApi实例
    ///
    /// # 参数
    /// - classifier: 绑定默认语言的分类引擎
    pub fn new(classifier: StatusClassifier) -> Self {
        Self { classifier }
    }

    // ==========================================
    // 展示查询接口
    // ==========================================

    /// 查询状态展示元数据
    ///
    /// # 参数
    /// - domain: 分类域（table/order/item，支持 mesa/pedido/order-item 别名）
    /// - code: 状态码
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id))]
    pub fn get_status_display(
        &self,
        ctx: &RequestContext,
        domain: &str,
        code: &str,
    ) -> ApiResult<StatusDisplay> {
        let domain = parse_domain(domain)?;
        Ok(self.classifier_for(ctx).display_for(domain, code))
    }

    /// 查询徽标 HTML 片段
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id))]
    pub fn get_badge(
        &self,
        ctx: &RequestContext,
        domain: &str,
        code: &str,
        include_description: bool,
    ) -> ApiResult<String> {
        let domain = parse_domain(domain)?;
        Ok(self
            .classifier_for(ctx)
            .badge_markup(domain, code, include_description))
    }

    /// 查询厨房显示屏行高亮类
    pub fn get_row_class(
        &self,
        ctx: &RequestContext,
        domain: &str,
        code: &str,
    ) -> ApiResult<String> {
        let domain = parse_domain(domain)?;
        Ok(self.classifier_for(ctx).row_class_for(domain, code))
    }

    /// 查询分类域内全部状态（图例/筛选）
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id))]
    pub fn list_statuses(
        &self,
        ctx: &RequestContext,
        domain: &str,
    ) -> ApiResult<Vec<StatusDisplay>> {
        let domain = parse_domain(domain)?;
        Ok(self.classifier_for(ctx).statuses_for(domain))
    }

    // ==========================================
    // 订单菜品接口
    // ==========================================

    /// 汇总订单内菜品状态
    #[instrument(skip(self, ctx, items), fields(request_id = %ctx.request_id, count = items.len()))]
    pub fn summarize_items(
        &self,
        ctx: &RequestContext,
        items: &[OrderItem],
    ) -> ApiResult<ItemStatusSummary> {
        Ok(StatusSummarizer::new(self.classifier_for(ctx)).summarize(items))
    }

    /// 校验菜品状态流转
    ///
    /// # 返回
    /// - Ok(StatusDisplay): 目标状态的展示元数据
    /// - Err(ApiError::UnrecognizedStatusCode): 状态码未知
    /// - Err(ApiError::InvalidStateTransition): 流转不被允许
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id, actor = %ctx.actor()))]
    pub fn validate_item_transition(
        &self,
        ctx: &RequestContext,
        from: &str,
        to: &str,
    ) -> ApiResult<StatusDisplay> {
        let target = item_lifecycle::validate_transition(from, to).map_err(|e| {
            tracing::info!(error = %e, "菜品状态流转被拒绝");
            ApiError::from(e)
        })?;

        Ok(self
            .classifier_for(ctx)
            .display_for(StatusDomain::Item, target.code()))
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 按请求语言绑定分类引擎（未指定语言时沿用默认语言）
    fn classifier_for(&self, ctx: &RequestContext) -> StatusClassifier {
        if ctx.locale.trim().is_empty() {
            return self.classifier.clone();
        }
        self.classifier.for_locale(&ctx.locale)
    }
}

/// 解析分类域
fn parse_domain(domain: &str) -> ApiResult<StatusDomain> {
    StatusDomain::from_str(domain)
        .ok_or_else(|| ApiError::InvalidInput(format!("未知的状态分类域: {}", domain)))
}

//! 訂單路由：根據路由上下文決定能否建立訂單草稿

use roof_core::{DeliveryMethod, EstimatorConfig, OrderDraft, RoutingContext};
use serde::{Deserialize, Serialize};

use crate::order_draft::OrderDraftBuilder;

/// 路由判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// 可下單
    Admitted,
    /// 找不到可用分店
    NoBranch,
    /// 分店庫存不足
    NotReady { unavailable_items: Vec<String> },
}

impl RoutingDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, RoutingDecision::Admitted)
    }
}

/// 訂單路由器
///
/// 不選擇分店、不查詢庫存；只做准入判定並交由 [`OrderDraftBuilder`] 建構草稿。
#[derive(Debug, Clone, Default)]
pub struct OrderRouter {
    config: EstimatorConfig,
}

impl OrderRouter {
    /// 創建訂單路由器（配置須通過驗證）
    pub fn new(config: EstimatorConfig) -> roof_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 判定是否可下單（依序短路：分店 → 備貨狀態）
    pub fn evaluate(ctx: &RoutingContext) -> RoutingDecision {
        if ctx.branch.is_none() {
            return RoutingDecision::NoBranch;
        }

        if !ctx.order_ready {
            return RoutingDecision::NotReady {
                unavailable_items: ctx.unavailable_items.clone(),
            };
        }

        RoutingDecision::Admitted
    }

    /// 建立訂單草稿；無法下單時回傳 `None`（業務上的否定結果，而非錯誤）
    ///
    /// 明細須已由目錄解析器指派 SKU。
    pub fn create_order_draft(
        &self,
        ctx: &RoutingContext,
        delivery_method: DeliveryMethod,
    ) -> Option<OrderDraft> {
        tracing::info!(
            "訂單路由：估料 {}，出貨方式 {}",
            ctx.estimate.estimate_id,
            delivery_method
        );

        match Self::evaluate(ctx) {
            RoutingDecision::Admitted => {}
            RoutingDecision::NoBranch => {
                tracing::warn!("估料 {} 無可用分店，不建立訂單", ctx.estimate.estimate_id);
                return None;
            }
            RoutingDecision::NotReady { unavailable_items } => {
                tracing::warn!(
                    "估料 {} 備貨不足，不建立訂單：{:?}",
                    ctx.estimate.estimate_id,
                    unavailable_items
                );
                return None;
            }
        }

        let branch = ctx.branch.as_ref()?;
        let draft = OrderDraftBuilder::new(self.config.tax_rate).build(
            &ctx.estimate,
            &branch.id,
            delivery_method,
        );

        tracing::info!("訂單草稿 {} 已建立，總額 {}", draft.id, draft.total);

        Some(draft)
    }
}

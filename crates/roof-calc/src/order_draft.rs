//! 訂單草稿建構

use chrono::Utc;
use roof_core::{DeliveryMethod, OrderDraft, PricedEstimate};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// 捨入至分（四捨五入，中點遠離零）
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 訂單草稿建構器
#[derive(Debug, Clone)]
pub struct OrderDraftBuilder {
    tax_rate: Decimal,
}

impl OrderDraftBuilder {
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    /// 由已定價估料建構訂單草稿
    ///
    /// 小計依實際訂購的明細重新計算，不沿用原估料總額。
    pub fn build(
        &self,
        estimate: &PricedEstimate,
        branch_id: &str,
        delivery_method: DeliveryMethod,
    ) -> OrderDraft {
        let subtotal = round_currency(estimate.subtotal());
        let estimated_tax = round_currency(subtotal * self.tax_rate);
        let total = subtotal + estimated_tax;

        tracing::debug!(
            "訂單草稿：小計 {}，稅額 {}（稅率 {}），總額 {}",
            subtotal,
            estimated_tax,
            self.tax_rate,
            total
        );

        OrderDraft {
            id: Uuid::new_v4(),
            estimate_id: estimate.estimate_id,
            branch_id: branch_id.to_string(),
            delivery_method,
            line_items: estimate.lines.clone(),
            subtotal,
            tax_rate: self.tax_rate,
            estimated_tax,
            total,
            created_at: Utc::now(),
        }
    }
}

//! 訂單草稿模型

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::material::PricedMaterialLine;
use crate::RoofError;

/// 出貨方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// 門市自取
    Pickup,
    /// 送貨到府
    Delivery,
}

impl FromStr for DeliveryMethod {
    type Err = RoofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" => Ok(DeliveryMethod::Pickup),
            "delivery" => Ok(DeliveryMethod::Delivery),
            _ => Err(RoofError::UnknownDeliveryMethod(s.to_string())),
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMethod::Pickup => f.write_str("pickup"),
            DeliveryMethod::Delivery => f.write_str("delivery"),
        }
    }
}

/// 訂單草稿（已定價、含稅、尚未送出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// 草稿ID
    pub id: Uuid,

    /// 來源估料ID
    pub estimate_id: Uuid,

    /// 出貨分店ID
    pub branch_id: String,

    /// 出貨方式
    pub delivery_method: DeliveryMethod,

    /// 訂購明細
    pub line_items: Vec<PricedMaterialLine>,

    /// 小計（捨入至分）
    pub subtotal: Decimal,

    /// 套用的稅率
    pub tax_rate: Decimal,

    /// 預估稅額（捨入至分）
    pub estimated_tax: Decimal,

    /// 總額 = 小計 + 稅額
    pub total: Decimal,

    /// 建立時間
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// 訂購明細筆數
    pub fn line_count(&self) -> usize {
        self.line_items.len()
    }

    /// 檢查是否為送貨訂單
    pub fn is_delivery(&self) -> bool {
        self.delivery_method == DeliveryMethod::Delivery
    }
}

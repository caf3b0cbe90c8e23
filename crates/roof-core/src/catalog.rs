//! 目錄／定價解析介面

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material::MaterialLineItem;
use crate::shingle::ShingleSpec;

/// 目錄條目：SKU 與權威單價
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub sku: String,
    pub unit_price: Decimal,
}

impl CatalogEntry {
    pub fn new(sku: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            unit_price,
        }
    }
}

/// 目錄解析器：為每筆物料明細指派 SKU 與單價
///
/// 由外部目錄服務實作；找不到對應條目時回傳 `None`。
pub trait CatalogResolver: Send + Sync {
    fn resolve(&self, line: &MaterialLineItem, spec: &ShingleSpec) -> Option<CatalogEntry>;
}

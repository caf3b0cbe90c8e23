//! 分店庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 分店單一 SKU 的庫存狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// 分店ID
    pub branch_id: String,

    /// SKU
    pub sku: String,

    /// 現有庫存
    pub on_hand_qty: Decimal,

    /// 已分配數量（其他訂單鎖定）
    pub allocated_qty: Decimal,

    /// 可用庫存（現有 - 已分配）
    pub available_qty: Decimal,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(branch_id: impl Into<String>, sku: impl Into<String>, on_hand_qty: Decimal) -> Self {
        Self {
            branch_id: branch_id.into(),
            sku: sku.into(),
            on_hand_qty,
            allocated_qty: Decimal::ZERO,
            available_qty: on_hand_qty,
        }
    }

    /// 建構器模式：設置已分配數量
    pub fn with_allocated_qty(mut self, allocated_qty: Decimal) -> Self {
        self.allocated_qty = allocated_qty;
        self.available_qty = self.on_hand_qty - allocated_qty;
        self
    }

    /// 檢查可用庫存是否足以滿足需求量
    pub fn covers(&self, quantity: Decimal) -> bool {
        self.available_qty >= quantity
    }

    /// 缺貨數量
    pub fn shortfall(&self, quantity: Decimal) -> Decimal {
        if self.covers(quantity) {
            Decimal::ZERO
        } else {
            quantity - self.available_qty.max(Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_record() {
        let record = InventoryRecord::new("BR-001", "SHG-ARCH", Decimal::from(100));

        assert_eq!(record.on_hand_qty, Decimal::from(100));
        assert_eq!(record.available_qty, Decimal::from(100));
        assert!(record.covers(Decimal::from(78)));
        assert_eq!(record.shortfall(Decimal::from(78)), Decimal::ZERO);
    }

    #[test]
    fn test_allocated_reduces_available() {
        let record = InventoryRecord::new("BR-001", "SHG-ARCH", Decimal::from(100))
            .with_allocated_qty(Decimal::from(60));

        assert_eq!(record.available_qty, Decimal::from(40));
        assert!(!record.covers(Decimal::from(78)));
        assert_eq!(record.shortfall(Decimal::from(78)), Decimal::from(38));
    }

    #[test]
    fn test_over_allocated_shortfall() {
        // 超量分配時可用庫存為負，缺貨量以 0 庫存計
        let record = InventoryRecord::new("BR-001", "NAIL-COIL", Decimal::from(5))
            .with_allocated_qty(Decimal::from(8));

        assert_eq!(record.available_qty, Decimal::from(-3));
        assert_eq!(record.shortfall(Decimal::from(4)), Decimal::from(4));
    }
}

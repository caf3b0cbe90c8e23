//! 記憶體內的分店／庫存查詢
//!
//! 外部分店服務的參考實作：選擇最近的營業分店並核對各 SKU 庫存。

use std::collections::HashMap;

use roof_core::{
    InventoryLookup, InventoryRecord, JobLocation, PricedEstimate, RoutingContext, SupplyBranch,
};
use rust_decimal::Decimal;

/// 分店目錄
#[derive(Debug, Clone, Default)]
pub struct BranchDirectory {
    branches: Vec<SupplyBranch>,

    /// （分店ID, SKU）→ 庫存
    stock: HashMap<(String, String), InventoryRecord>,
}

impl BranchDirectory {
    /// 創建空的分店目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加分店
    pub fn with_branch(mut self, branch: SupplyBranch) -> Self {
        self.branches.push(branch);
        self
    }

    /// 建構器模式：添加庫存記錄
    pub fn with_stock(mut self, record: InventoryRecord) -> Self {
        self.stock
            .insert((record.branch_id.clone(), record.sku.clone()), record);
        self
    }

    /// 選擇距離施工地點最近、營業中且支援出貨方式的分店
    pub fn nearest_branch(&self, job: &JobLocation) -> Option<&SupplyBranch> {
        self.branches
            .iter()
            .filter(|branch| branch.is_open && branch.supports(job.delivery_method))
            .min_by(|a, b| {
                let da = a.location.distance_miles(&job.location);
                let db = b.location.distance_miles(&job.location);
                da.total_cmp(&db)
            })
    }

    /// 查詢分店某 SKU 的庫存（無記錄視為 0）
    fn record_for(&self, branch_id: &str, sku: &str) -> InventoryRecord {
        self.stock
            .get(&(branch_id.to_string(), sku.to_string()))
            .cloned()
            .unwrap_or_else(|| InventoryRecord::new(branch_id, sku, Decimal::ZERO))
    }
}

impl InventoryLookup for BranchDirectory {
    fn resolve_routing(&self, estimate: PricedEstimate, job: &JobLocation) -> RoutingContext {
        let Some(branch) = self.nearest_branch(job) else {
            tracing::warn!("施工地點 {} 附近沒有可用分店", job.address);
            return RoutingContext {
                estimate,
                branch: None,
                inventory: Vec::new(),
                order_ready: false,
                unavailable_items: Vec::new(),
            };
        };

        tracing::debug!(
            "選定分店 {}（{:.1} 英里）",
            branch.name,
            branch.location.distance_miles(&job.location)
        );

        let mut inventory = Vec::with_capacity(estimate.lines.len());
        let mut unavailable_items = Vec::new();

        for line in &estimate.lines {
            let record = self.record_for(&branch.id, &line.sku);
            if !record.covers(line.quantity) {
                unavailable_items.push(format!(
                    "{} ({}): need {}, have {}",
                    line.category,
                    line.sku,
                    line.quantity,
                    record.available_qty.max(Decimal::ZERO)
                ));
            }
            inventory.push(record);
        }

        let order_ready = unavailable_items.is_empty();

        RoutingContext {
            estimate,
            branch: Some(branch.clone()),
            inventory,
            order_ready,
            unavailable_items,
        }
    }
}

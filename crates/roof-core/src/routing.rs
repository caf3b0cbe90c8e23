//! 供貨分店與路由上下文模型

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryRecord;
use crate::material::PricedEstimate;
use crate::order::DeliveryMethod;

/// 地理座標（十進位度數）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// 地球平均半徑（英里）
    const EARTH_RADIUS_MILES: f64 = 3958.8;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 大圓距離（英里，haversine 公式）
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Self::EARTH_RADIUS_MILES * c
    }
}

/// 供貨分店
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyBranch {
    /// 分店ID
    pub id: String,

    /// 分店名稱
    pub name: String,

    /// 地址
    pub address: String,

    /// 座標
    pub location: GeoPoint,

    /// 是否營業中
    pub is_open: bool,

    /// 是否提供送貨
    pub delivery_available: bool,
}

impl SupplyBranch {
    /// 創建新的分店（預設營業中、不提供送貨）
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        location: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            location,
            is_open: true,
            delivery_available: false,
        }
    }

    /// 建構器模式：設置營業狀態
    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// 建構器模式：設置送貨服務
    pub fn with_delivery(mut self, delivery_available: bool) -> Self {
        self.delivery_available = delivery_available;
        self
    }

    /// 檢查分店能否以指定方式出貨
    pub fn supports(&self, method: DeliveryMethod) -> bool {
        match method {
            DeliveryMethod::Pickup => true,
            DeliveryMethod::Delivery => self.delivery_available,
        }
    }
}

/// 施工地點
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    pub address: String,
    pub location: GeoPoint,
    pub delivery_method: DeliveryMethod,
}

impl JobLocation {
    pub fn new(address: impl Into<String>, location: GeoPoint, delivery_method: DeliveryMethod) -> Self {
        Self {
            address: address.into(),
            location,
            delivery_method,
        }
    }
}

/// 路由上下文（由外部分店／庫存服務產生，本核心只讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingContext {
    /// 已定價的估料
    pub estimate: PricedEstimate,

    /// 選定的分店（找不到時為 `None`）
    pub branch: Option<SupplyBranch>,

    /// 各 SKU 的庫存狀態
    pub inventory: Vec<InventoryRecord>,

    /// 是否可下單
    pub order_ready: bool,

    /// 無法供貨的品項（人類可讀）
    pub unavailable_items: Vec<String>,
}

/// 分店／庫存查詢服務
pub trait InventoryLookup: Send + Sync {
    fn resolve_routing(&self, estimate: PricedEstimate, job: &JobLocation) -> RoutingContext;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point_is_zero() {
        let point = GeoPoint::new(32.7767, -96.7970);
        assert!(point.distance_miles(&point) < 1e-9);
    }

    #[test]
    fn test_distance_dallas_to_fort_worth() {
        let dallas = GeoPoint::new(32.7767, -96.7970);
        let fort_worth = GeoPoint::new(32.7555, -97.3308);
        let miles = dallas.distance_miles(&fort_worth);
        // 實際約 31 英里
        assert!(miles > 29.0 && miles < 33.0, "距離 {} 不合理", miles);
    }

    #[test]
    fn test_branch_supports_delivery_method() {
        let branch = SupplyBranch::new("BR-1", "North", "1 Main St", GeoPoint::new(0.0, 0.0));
        assert!(branch.is_open);
        assert!(branch.supports(DeliveryMethod::Pickup));
        assert!(!branch.supports(DeliveryMethod::Delivery));

        let delivering = branch.with_delivery(true);
        assert!(delivering.supports(DeliveryMethod::Delivery));
    }
}

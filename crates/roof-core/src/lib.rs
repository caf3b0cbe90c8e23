//! # Roof Core
//!
//! 屋頂估料核心資料模型、政策表與類型定義

pub mod catalog;
pub mod claim;
pub mod config;
pub mod inventory;
pub mod material;
pub mod measurement;
pub mod order;
pub mod policy;
pub mod routing;
pub mod shingle;

// Re-export 主要類型
pub use catalog::{CatalogEntry, CatalogResolver};
pub use claim::PartialClaimData;
pub use config::EstimatorConfig;
pub use inventory::InventoryRecord;
pub use material::{
    MaterialCategory, MaterialEstimate, MaterialLineItem, MaterialUnit, PricedEstimate,
    PricedMaterialLine,
};
pub use measurement::{Complexity, Pitch, RoofMeasurements};
pub use order::{DeliveryMethod, OrderDraft};
pub use routing::{GeoPoint, InventoryLookup, JobLocation, RoutingContext, SupplyBranch};
pub use shingle::{ShingleSpec, ShingleType};

/// 估料錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RoofError {
    #[error("無效的丈量數據: {0}")]
    InvalidMeasurement(String),

    #[error("未知的瓦片類型: {0}")]
    UnknownShingleType(String),

    #[error("未知的出貨方式: {0}")]
    UnknownDeliveryMethod(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("找不到物料 SKU: {0}")]
    SkuNotFound(String),
}

pub type Result<T> = std::result::Result<T, RoofError>;

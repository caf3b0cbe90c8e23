//! 屋頂物料估算與供貨訂單路由
//!
//! 由 [`roof_core`]（資料模型）與 [`roof_calc`]（估料、定價、路由）組成。

pub use roof_calc;
pub use roof_core;

pub use roof_calc::{
    BranchDirectory, CatalogPricer, MaterialCalculator, MeasurementNormalizer, OrderRouter,
    RoutingDecision, StaticCatalog,
};
pub use roof_core::{
    DeliveryMethod, EstimatorConfig, JobLocation, MaterialEstimate, OrderDraft, PartialClaimData,
    RoofError, RoofMeasurements, ShingleSpec,
};

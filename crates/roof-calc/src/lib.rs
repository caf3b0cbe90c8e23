//! # Roof Calculation Engine
//!
//! 屋頂物料估算與訂單路由引擎

pub mod branch_lookup;
pub mod calculator;
pub mod catalog;
pub mod coverage;
pub mod normalizer;
pub mod order_draft;
pub mod pricing;
pub mod router;

// Re-export 主要類型
pub use branch_lookup::BranchDirectory;
pub use calculator::MaterialCalculator;
pub use catalog::{CatalogPricer, StaticCatalog};
pub use normalizer::{MeasurementNormalizer, NormalizedClaim};
pub use order_draft::{round_currency, OrderDraftBuilder};
pub use router::{OrderRouter, RoutingDecision};

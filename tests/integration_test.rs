//! 集成測試：理賠數據 → 估料 → 目錄定價 → 分店路由 → 訂單草稿

use roof_calc::{BranchDirectory, CatalogPricer, MaterialCalculator, OrderRouter, StaticCatalog};
use roof_core::*;
use rust_decimal::Decimal;

fn one_cent() -> Decimal {
    Decimal::new(1, 2)
}

fn assert_close(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() <= one_cent(),
        "差距超過 1 分：{} vs {}",
        actual,
        expected
    );
}

fn dallas_job(method: DeliveryMethod) -> JobLocation {
    JobLocation::new("4100 Lemmon Ave, Dallas", GeoPoint::new(32.8140, -96.8090), method)
}

/// 將已定價估料的每個 SKU 以充足庫存放入指定分店
fn stocked_directory(priced: &PricedEstimate, branch: SupplyBranch) -> BranchDirectory {
    let branch_id = branch.id.clone();
    priced
        .lines
        .iter()
        .fold(BranchDirectory::new().with_branch(branch), |dir, line| {
            dir.with_stock(InventoryRecord::new(
                branch_id.as_str(),
                line.sku.as_str(),
                line.quantity * Decimal::from(2),
            ))
        })
}

fn priced_claim(claim: &PartialClaimData) -> (MaterialEstimate, PricedEstimate) {
    let estimate = MaterialCalculator::default()
        .estimate_from_claim_data(claim)
        .unwrap();
    let priced = CatalogPricer::apply(&estimate, &StaticCatalog::standard()).unwrap();
    (estimate, priced)
}

#[test]
fn test_claim_to_order_draft() {
    // 場景：2000 平方呎、6/12、有天溝與斜脊的建築瓦屋頂
    let claim = PartialClaimData::default()
        .with_total_area(Decimal::from(2000))
        .with_pitch("6/12")
        .with_ridge_length(Decimal::from(42))
        .with_hip_length(Decimal::from(28))
        .with_valley_length(Decimal::from(16))
        .with_eave_length(Decimal::from(150))
        .with_rake_length(Decimal::from(64))
        .with_shingle_type("ARCHITECTURAL")
        .with_manufacturer("GAF");

    let (estimate, priced) = priced_claim(&claim);
    assert_eq!(estimate.measurements.complexity, Complexity::High);
    assert_eq!(estimate.shingle_spec.manufacturer, "GAF");
    assert!(estimate.has_category(MaterialCategory::ValleyFlashing));
    assert_eq!(priced.subtotal(), estimate.total_cost());

    let branch = SupplyBranch::new(
        "BR-DAL-01",
        "Dallas Central",
        "2500 Irving Blvd, Dallas",
        GeoPoint::new(32.7990, -96.8330),
    )
    .with_delivery(true);
    let directory = stocked_directory(&priced, branch);

    let ctx = directory.resolve_routing(priced, &dallas_job(DeliveryMethod::Delivery));
    assert!(ctx.order_ready);

    let draft = OrderRouter::default()
        .create_order_draft(&ctx, DeliveryMethod::Delivery)
        .unwrap();

    assert_eq!(draft.estimate_id, estimate.id);
    assert_eq!(draft.branch_id, "BR-DAL-01");
    assert_eq!(draft.line_count(), estimate.materials.len());
    assert_close(draft.subtotal, estimate.total_cost());
    assert_close(draft.estimated_tax, draft.subtotal * Decimal::new(825, 4));
    assert_close(draft.total, draft.subtotal + draft.estimated_tax);
}

#[test]
fn test_no_branch_yields_no_draft() {
    let (_, priced) = priced_claim(&PartialClaimData::default());

    // 唯一的分店只提供自取
    let directory = stocked_directory(
        &priced,
        SupplyBranch::new("BR-DAL-01", "Dallas Central", "2500 Irving Blvd", GeoPoint::new(32.7990, -96.8330)),
    );

    let ctx = directory.resolve_routing(priced, &dallas_job(DeliveryMethod::Delivery));
    assert!(ctx.branch.is_none());
    assert!(OrderRouter::default()
        .create_order_draft(&ctx, DeliveryMethod::Delivery)
        .is_none());
}

#[test]
fn test_short_stock_lists_unavailable_items() {
    let (estimate, priced) = priced_claim(&PartialClaimData::default());
    let shingles = estimate.find(MaterialCategory::Shingles).unwrap().quantity;

    let directory = stocked_directory(
        &priced,
        SupplyBranch::new("BR-DAL-01", "Dallas Central", "2500 Irving Blvd", GeoPoint::new(32.7990, -96.8330)),
    )
    .with_stock(InventoryRecord::new("BR-DAL-01", "SHG-ARCH", Decimal::from(10)));

    let ctx = directory.resolve_routing(priced, &dallas_job(DeliveryMethod::Pickup));
    assert!(!ctx.order_ready);
    assert_eq!(
        ctx.unavailable_items,
        vec![format!("Shingles (SHG-ARCH): need {}, have 10", shingles)]
    );

    for method in [DeliveryMethod::Pickup, DeliveryMethod::Delivery] {
        assert!(OrderRouter::default().create_order_draft(&ctx, method).is_none());
    }
}

#[test]
fn test_trimmed_order_reprices_subtotal() {
    let (estimate, priced) = priced_claim(&PartialClaimData::default());

    // 承包商自備起始條
    let trimmed = priced.without(MaterialCategory::StarterStrip);
    let starter = estimate.find(MaterialCategory::StarterStrip).unwrap().total_price();

    let directory = stocked_directory(
        &trimmed,
        SupplyBranch::new("BR-DAL-01", "Dallas Central", "2500 Irving Blvd", GeoPoint::new(32.7990, -96.8330)),
    );
    let ctx = directory.resolve_routing(trimmed, &dallas_job(DeliveryMethod::Pickup));

    let draft = OrderRouter::default()
        .create_order_draft(&ctx, DeliveryMethod::Pickup)
        .unwrap();
    assert_close(draft.subtotal, estimate.total_cost() - starter);
    assert_eq!(draft.line_count(), estimate.materials.len() - 1);
}

#[test]
fn test_claim_json_with_config_overrides() {
    let claim: PartialClaimData = serde_json::from_str(
        r#"{"totalArea": 1800, "pitch": "8/12", "valleyLength": 12, "shingleType": "PREMIUM"}"#,
    )
    .unwrap();
    let config = EstimatorConfig::from_json_str(
        r#"{"tax_rate": "0.0625", "pipe_boots_per_roof": 4}"#,
    )
    .unwrap();

    let estimate = MaterialCalculator::new(config.clone())
        .unwrap()
        .estimate_from_claim_data(&claim)
        .unwrap();
    assert_eq!(estimate.measurements.complexity, Complexity::Medium);
    assert_eq!(estimate.shingle_spec.shingle_type, ShingleType::Premium);
    assert_eq!(
        estimate.find(MaterialCategory::PipeBoots).unwrap().quantity,
        Decimal::from(4)
    );

    let priced = CatalogPricer::apply(&estimate, &StaticCatalog::standard()).unwrap();
    let directory = stocked_directory(
        &priced,
        SupplyBranch::new("BR-DAL-01", "Dallas Central", "2500 Irving Blvd", GeoPoint::new(32.7990, -96.8330)),
    );
    let ctx = directory.resolve_routing(priced, &dallas_job(DeliveryMethod::Pickup));

    let draft = OrderRouter::new(config)
        .unwrap()
        .create_order_draft(&ctx, DeliveryMethod::Pickup)
        .unwrap();
    assert_eq!(draft.tax_rate, Decimal::new(625, 4));
    assert_close(draft.estimated_tax, draft.subtotal * Decimal::new(625, 4));
}

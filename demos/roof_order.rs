//! # 屋頂估料到訂單草稿完整範例
//!
//! 這個範例展示完整的流程：
//! - 輸入：不完整的理賠數據
//! - 估料：正規化後計算物料清單
//! - 定價：以標準目錄指派 SKU
//! - 路由：選擇最近分店並核對庫存，建立訂單草稿

use anyhow::Result;
use roof_calc::{BranchDirectory, CatalogPricer, MaterialCalculator, OrderRouter, RoutingDecision, StaticCatalog};
use roof_core::*;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    println!("🏠 ===== 屋頂估料與下單範例 =====");
    println!();

    // ========== 1. 理賠數據 ==========
    println!("📋 步驟 1: 載入理賠數據");
    let claim: PartialClaimData = serde_json::from_str(
        r#"{
            "totalArea": 2350,
            "pitch": "7/12",
            "ridgeLength": 46,
            "hipLength": 32,
            "valleyLength": 18,
            "eaveLength": 160,
            "rakeLength": 72,
            "shingleType": "ARCHITECTURAL",
            "manufacturer": "Owens Corning",
            "color": "Driftwood"
        }"#,
    )?;
    println!("   ✓ 面積 {:?} 平方呎，坡度 {:?}", claim.total_area, claim.pitch);
    println!();

    // ========== 2. 估料 ==========
    println!("📐 步驟 2: 計算物料數量");
    let config = EstimatorConfig::new();
    let calculator = MaterialCalculator::new(config.clone())?;
    let estimate = calculator.estimate_from_claim_data(&claim)?;

    println!(
        "   複雜度 {}，損耗係數 {}，坡度係數 {}",
        estimate.measurements.complexity, estimate.waste_factor, estimate.pitch_multiplier
    );
    println!("   調整後面積 {} 平方呎", estimate.adjusted_area.round_dp(1));
    for line in &estimate.materials {
        println!(
            "   - {:<20} {:>5} {:<7} × {:>7} = {:>9}",
            line.category.label(),
            line.quantity,
            format!("{:?}", line.unit),
            line.unit_price,
            line.total_price()
        );
    }
    println!("   估料總額: {}", estimate.total_cost());
    println!();

    // ========== 3. 目錄定價 ==========
    println!("🏷️  步驟 3: 指派 SKU");
    let priced = CatalogPricer::apply(&estimate, &StaticCatalog::standard())?;
    for line in &priced.lines {
        println!("   ✓ {} → {}", line.category, line.sku);
    }
    println!();

    // ========== 4. 分店路由與訂單草稿 ==========
    let directory = demo_directory(&priced);
    let router = OrderRouter::new(config)?;

    // 先嘗試配送，備貨不足時改為自取
    for method in [DeliveryMethod::Delivery, DeliveryMethod::Pickup] {
        println!("🚚 步驟 4: 分店路由（{}）", method);
        let job = JobLocation::new("5800 Preston Rd, Plano", GeoPoint::new(33.0450, -96.7900), method);
        let ctx = directory.resolve_routing(priced.clone(), &job);

        match OrderRouter::evaluate(&ctx) {
            RoutingDecision::Admitted => println!("   ✓ 可下單"),
            RoutingDecision::NoBranch => println!("   ⚠ 無可用分店"),
            RoutingDecision::NotReady { unavailable_items } => {
                println!("   ⚠ 備貨不足:");
                for item in unavailable_items {
                    println!("     - {}", item);
                }
            }
        }

        if let Some(draft) = router.create_order_draft(&ctx, method) {
            println!();
            println!("🧾 步驟 5: 訂單草稿");
            println!("   訂單 {}（分店 {}，{}）", draft.id, draft.branch_id, draft.delivery_method);
            println!("   小計: {}", draft.subtotal);
            println!("   稅額: {}（稅率 {}）", draft.estimated_tax, draft.tax_rate);
            println!("   總額: {}", draft.total);
            break;
        }
        println!();
    }

    Ok(())
}

/// 兩家分店：Plano 只提供自取，Richardson 可配送但屋脊瓦存量不足
fn demo_directory(priced: &PricedEstimate) -> BranchDirectory {
    let plano = SupplyBranch::new(
        "BR-PLN",
        "Plano North",
        "1200 Central Pkwy, Plano",
        GeoPoint::new(33.0300, -96.7000),
    );
    let richardson = SupplyBranch::new(
        "BR-RCH",
        "Richardson",
        "900 Greenville Ave, Richardson",
        GeoPoint::new(32.9480, -96.7300),
    )
    .with_delivery(true);

    let mut directory = BranchDirectory::new().with_branch(plano).with_branch(richardson);
    for line in &priced.lines {
        let on_hand = if line.category == MaterialCategory::RidgeCap {
            Decimal::ONE
        } else {
            line.quantity * Decimal::from(3)
        };
        directory = directory
            .with_stock(InventoryRecord::new("BR-PLN", line.sku.as_str(), on_hand * Decimal::from(2)))
            .with_stock(InventoryRecord::new("BR-RCH", line.sku.as_str(), on_hand));
    }
    directory
}

//! 目錄定價：為估料明細指派 SKU 與權威單價

use std::collections::HashMap;

use roof_core::{
    CatalogEntry, CatalogResolver, MaterialCategory, MaterialEstimate, MaterialLineItem,
    PricedEstimate, PricedMaterialLine, RoofError, ShingleSpec, ShingleType,
};

use crate::pricing::PriceTable;

/// 記憶體內的靜態目錄
///
/// 以（類別, 瓦片類型）為鍵；瓦片類型為 `None` 的條目適用於所有瓦片。
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: HashMap<(MaterialCategory, Option<ShingleType>), CatalogEntry>,
}

impl StaticCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準目錄：SKU 依類別與瓦片類型命名，單價取自預設單價表
    pub fn standard() -> Self {
        let shingle_types = [
            (ShingleType::ThreeTab, "3TAB"),
            (ShingleType::Architectural, "ARCH"),
            (ShingleType::Premium, "PREM"),
        ];

        let mut catalog = Self::new();
        for (shingle_type, code) in shingle_types {
            catalog = catalog
                .with_entry(
                    MaterialCategory::Shingles,
                    Some(shingle_type),
                    CatalogEntry::new(
                        format!("SHG-{}", code),
                        PriceTable::default_unit_price(MaterialCategory::Shingles, shingle_type),
                    ),
                )
                .with_entry(
                    MaterialCategory::RidgeCap,
                    Some(shingle_type),
                    CatalogEntry::new(
                        format!("RDG-{}", code),
                        PriceTable::default_unit_price(MaterialCategory::RidgeCap, shingle_type),
                    ),
                );
        }

        let generic = [
            (MaterialCategory::Underlayment, "UND-SYN-10SQ"),
            (MaterialCategory::IceAndWaterShield, "IWS-200SF"),
            (MaterialCategory::StarterStrip, "STR-105LF"),
            (MaterialCategory::DripEdge, "DRP-10FT"),
            (MaterialCategory::Fasteners, "NAIL-COIL-7200"),
            (MaterialCategory::PipeBoots, "BOOT-3IN"),
            (MaterialCategory::ValleyFlashing, "VLY-W-10FT"),
        ];
        for (category, sku) in generic {
            catalog = catalog.with_entry(
                category,
                None,
                CatalogEntry::new(
                    sku,
                    PriceTable::default_unit_price(category, ShingleType::default()),
                ),
            );
        }

        catalog
    }

    /// 建構器模式：添加目錄條目
    pub fn with_entry(
        mut self,
        category: MaterialCategory,
        shingle_type: Option<ShingleType>,
        entry: CatalogEntry,
    ) -> Self {
        self.entries.insert((category, shingle_type), entry);
        self
    }

    /// 條目數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogResolver for StaticCatalog {
    fn resolve(&self, line: &MaterialLineItem, spec: &ShingleSpec) -> Option<CatalogEntry> {
        self.entries
            .get(&(line.category, Some(spec.shingle_type)))
            .or_else(|| self.entries.get(&(line.category, None)))
            .cloned()
    }
}

/// 目錄定價器
pub struct CatalogPricer;

impl CatalogPricer {
    /// 為估料的每筆明細指派 SKU 與權威單價
    ///
    /// 任一明細找不到目錄條目時回傳 [`RoofError::SkuNotFound`]。
    pub fn apply(
        estimate: &MaterialEstimate,
        resolver: &dyn CatalogResolver,
    ) -> roof_core::Result<PricedEstimate> {
        let lines = estimate
            .materials
            .iter()
            .map(|line| {
                let entry = resolver
                    .resolve(line, &estimate.shingle_spec)
                    .ok_or_else(|| {
                        RoofError::SkuNotFound(format!(
                            "{}（{}）",
                            line.category, estimate.shingle_spec.shingle_type
                        ))
                    })?;
                tracing::debug!("{} → SKU {} @ {}", line.category, entry.sku, entry.unit_price);
                Ok(PricedMaterialLine::from_line(line, entry))
            })
            .collect::<roof_core::Result<Vec<_>>>()?;

        Ok(PricedEstimate::new(estimate.id, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::MaterialCalculator;
    use roof_core::PartialClaimData;
    use rust_decimal::Decimal;

    fn estimate_with_valleys(shingle_type: &str) -> MaterialEstimate {
        MaterialCalculator::default()
            .estimate_from_claim_data(
                &PartialClaimData::default()
                    .with_valley_length(Decimal::from(24))
                    .with_shingle_type(shingle_type),
            )
            .unwrap()
    }

    #[test]
    fn test_standard_catalog_prices_every_line() {
        let estimate = estimate_with_valleys("ARCHITECTURAL");
        let priced = CatalogPricer::apply(&estimate, &StaticCatalog::standard()).unwrap();

        assert_eq!(priced.estimate_id, estimate.id);
        assert_eq!(priced.lines.len(), estimate.materials.len());
        assert!(priced.lines.iter().all(|line| !line.sku.is_empty()));
        // 標準目錄單價與預設單價表一致
        assert_eq!(priced.subtotal(), estimate.total_cost());
    }

    #[test]
    fn test_shingle_sku_follows_type() {
        let estimate = estimate_with_valleys("PREMIUM");
        let priced = CatalogPricer::apply(&estimate, &StaticCatalog::standard()).unwrap();

        let shingles = priced
            .lines
            .iter()
            .find(|line| line.category == MaterialCategory::Shingles)
            .unwrap();
        assert_eq!(shingles.sku, "SHG-PREM");

        let valley = priced
            .lines
            .iter()
            .find(|line| line.category == MaterialCategory::ValleyFlashing)
            .unwrap();
        assert_eq!(valley.sku, "VLY-W-10FT");
    }

    #[test]
    fn test_missing_entry_is_error() {
        let estimate = estimate_with_valleys("ARCHITECTURAL");
        let catalog = StaticCatalog::new().with_entry(
            MaterialCategory::Shingles,
            None,
            CatalogEntry::new("SHG-ANY", Decimal::from(35)),
        );

        let result = CatalogPricer::apply(&estimate, &catalog);
        assert!(matches!(result, Err(RoofError::SkuNotFound(_))));
    }

    #[test]
    fn test_type_specific_entry_preferred() {
        let estimate = estimate_with_valleys("ARCHITECTURAL");
        let catalog = StaticCatalog::standard()
            .with_entry(
                MaterialCategory::DripEdge,
                Some(ShingleType::Architectural),
                CatalogEntry::new("DRP-ARCH-BRONZE", Decimal::new(1199, 2)),
            );

        let priced = CatalogPricer::apply(&estimate, &catalog).unwrap();
        let drip = priced
            .lines
            .iter()
            .find(|line| line.category == MaterialCategory::DripEdge)
            .unwrap();
        assert_eq!(drip.sku, "DRP-ARCH-BRONZE");
        assert_eq!(drip.unit_price, Decimal::new(1199, 2));
    }
}

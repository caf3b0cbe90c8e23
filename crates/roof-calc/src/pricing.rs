//! 內部預設單價表
//!
//! 與下單前使用的外部目錄解析器分開；估料只用此表估算成本。

use roof_core::{EstimatorConfig, MaterialCategory, ShingleType};
use rust_decimal::Decimal;

/// 單價表
pub struct PriceTable;

impl PriceTable {
    /// 查詢單價：配置覆寫優先，其次為預設表
    pub fn unit_price(
        category: MaterialCategory,
        shingle_type: ShingleType,
        config: &EstimatorConfig,
    ) -> Decimal {
        config
            .price_override(category)
            .unwrap_or_else(|| Self::default_unit_price(category, shingle_type))
    }

    /// 預設單價（美元，每計量單位）
    pub fn default_unit_price(category: MaterialCategory, shingle_type: ShingleType) -> Decimal {
        match category {
            MaterialCategory::Shingles => match shingle_type {
                ShingleType::ThreeTab => Decimal::new(2999, 2),
                ShingleType::Architectural => Decimal::new(3899, 2),
                ShingleType::Premium => Decimal::new(5499, 2),
            },
            // 脊瓦與瓦片產品線搭配
            MaterialCategory::RidgeCap => match shingle_type {
                ShingleType::ThreeTab => Decimal::new(4499, 2),
                ShingleType::Architectural => Decimal::new(5999, 2),
                ShingleType::Premium => Decimal::new(7499, 2),
            },
            MaterialCategory::Underlayment => Decimal::new(8999, 2),
            MaterialCategory::IceAndWaterShield => Decimal::new(7499, 2),
            MaterialCategory::StarterStrip => Decimal::new(5299, 2),
            MaterialCategory::DripEdge => Decimal::new(899, 2),
            MaterialCategory::Fasteners => Decimal::new(4299, 2),
            MaterialCategory::PipeBoots => Decimal::new(1450, 2),
            MaterialCategory::ValleyFlashing => Decimal::new(1899, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shingle_price_depends_on_type() {
        let three_tab = PriceTable::default_unit_price(MaterialCategory::Shingles, ShingleType::ThreeTab);
        let arch = PriceTable::default_unit_price(MaterialCategory::Shingles, ShingleType::Architectural);
        let premium = PriceTable::default_unit_price(MaterialCategory::Shingles, ShingleType::Premium);

        assert!(three_tab < arch);
        assert!(arch < premium);
    }

    #[test]
    fn test_every_category_has_positive_price() {
        let mut categories = MaterialCategory::MANDATORY.to_vec();
        categories.push(MaterialCategory::ValleyFlashing);

        for category in categories {
            for shingle_type in [ShingleType::ThreeTab, ShingleType::Architectural, ShingleType::Premium] {
                assert!(PriceTable::default_unit_price(category, shingle_type) > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_override_takes_precedence() {
        let config = EstimatorConfig::new()
            .with_price_override(MaterialCategory::Underlayment, Decimal::new(7500, 2));

        assert_eq!(
            PriceTable::unit_price(MaterialCategory::Underlayment, ShingleType::Architectural, &config),
            Decimal::new(7500, 2)
        );
        assert_eq!(
            PriceTable::unit_price(MaterialCategory::Fasteners, ShingleType::Architectural, &config),
            Decimal::new(4299, 2)
        );
    }
}

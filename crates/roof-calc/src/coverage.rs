//! 各物料類別的覆蓋規則

use roof_core::{EstimatorConfig, MaterialCategory, RoofMeasurements, ShingleType};
use rust_decimal::Decimal;

/// 一「方」的面積（平方呎）
pub const SQUARE_FEET_PER_SQUARE: i64 = 100;

/// 合成底層防水卷每卷覆蓋面積（平方呎）
pub const UNDERLAYMENT_SQFT_PER_ROLL: i64 = 1000;

/// 冰水防護卷每卷長度（呎）
pub const ICE_WATER_LF_PER_ROLL: i64 = 66;

/// 起始條每捆長度（呎）
pub const STARTER_LF_PER_BUNDLE: i64 = 105;

/// 脊瓦每捆長度（呎）
pub const RIDGE_CAP_LF_PER_BUNDLE: i64 = 33;

/// 滴水邊每支長度（呎）
pub const DRIP_EDGE_LF_PER_PIECE: i64 = 10;

/// 天溝泛水板每支長度（呎）
pub const VALLEY_FLASHING_LF_PER_PIECE: i64 = 10;

/// 每盒捲釘可施作的方數
pub const SQUARES_PER_FASTENER_BOX: i64 = 15;

/// 數量計算基礎
#[derive(Debug, Clone, Copy)]
pub struct CoverageBasis<'a> {
    /// 正規化後的丈量數據
    pub measurements: &'a RoofMeasurements,

    /// 調整後面積（已含坡度與損耗）
    pub adjusted_area: Decimal,

    /// 瓦片類型
    pub shingle_type: ShingleType,
}

impl CoverageBasis<'_> {
    /// 調整後的方數
    pub fn squares(&self) -> Decimal {
        self.adjusted_area / Decimal::from(SQUARE_FEET_PER_SQUARE)
    }
}

/// 覆蓋規則計算器
pub struct CoverageCalculator;

impl CoverageCalculator {
    /// 計算指定類別的數量
    pub fn quantity(
        category: MaterialCategory,
        basis: &CoverageBasis<'_>,
        config: &EstimatorConfig,
    ) -> Decimal {
        let m = basis.measurements;
        match category {
            MaterialCategory::Shingles => {
                (basis.squares() * Decimal::from(basis.shingle_type.bundles_per_square())).ceil()
            }
            MaterialCategory::Underlayment => {
                Self::units_for(basis.adjusted_area, UNDERLAYMENT_SQFT_PER_ROLL)
            }
            MaterialCategory::IceAndWaterShield => {
                let rolls = Self::units_for(m.eave_length + m.valley_length, ICE_WATER_LF_PER_ROLL);
                rolls.max(Decimal::from(config.ice_water_minimum_rolls))
            }
            MaterialCategory::StarterStrip => {
                Self::units_for(m.perimeter_length(), STARTER_LF_PER_BUNDLE)
            }
            MaterialCategory::RidgeCap => {
                Self::units_for(m.ridge_length + m.hip_length, RIDGE_CAP_LF_PER_BUNDLE)
            }
            MaterialCategory::DripEdge => {
                Self::units_for(m.perimeter_length(), DRIP_EDGE_LF_PER_PIECE)
            }
            MaterialCategory::Fasteners => {
                (basis.squares() / Decimal::from(SQUARES_PER_FASTENER_BOX)).ceil()
            }
            MaterialCategory::PipeBoots => Decimal::from(config.pipe_boots_per_roof),
            MaterialCategory::ValleyFlashing => {
                Self::units_for(m.valley_length, VALLEY_FLASHING_LF_PER_PIECE)
            }
        }
    }

    /// 向上取整的包裝數：ceil(amount / per_unit)，負值視為 0
    fn units_for(amount: Decimal, per_unit: i64) -> Decimal {
        if amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (amount / Decimal::from(per_unit)).ceil()
    }
}

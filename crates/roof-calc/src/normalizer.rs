//! 丈量數據正規化
//!
//! 將部分理賠數據補齊為完整的丈量數據與瓦片規格，估料計算本身不處理缺省值。

use roof_core::{
    Complexity, PartialClaimData, Pitch, RoofMeasurements, ShingleSpec, ShingleType,
};
use rust_decimal::Decimal;

/// 正規化結果
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedClaim {
    pub measurements: RoofMeasurements,
    pub shingle_spec: ShingleSpec,
    /// 複雜度是否由斜脊／天溝推斷而來
    pub complexity_inferred: bool,
}

/// 丈量數據正規化器
pub struct MeasurementNormalizer;

impl MeasurementNormalizer {
    /// 預設屋頂面積（平方呎）
    pub const DEFAULT_TOTAL_AREA: i64 = 2000;

    /// 預設坡度
    pub const DEFAULT_PITCH: &'static str = "6/12";

    /// 補齊缺省欄位並推斷複雜度
    pub fn normalize(claim: &PartialClaimData) -> roof_core::Result<NormalizedClaim> {
        let total_area = claim
            .total_area
            .unwrap_or_else(|| Decimal::from(Self::DEFAULT_TOTAL_AREA));

        let pitch: Pitch = claim
            .pitch
            .as_deref()
            .unwrap_or(Self::DEFAULT_PITCH)
            .parse()?;

        let hip_length = claim.hip_length.unwrap_or(Decimal::ZERO);
        let valley_length = claim.valley_length.unwrap_or(Decimal::ZERO);

        let (complexity, complexity_inferred) = match claim.complexity.as_deref() {
            Some(explicit) => (explicit.parse::<Complexity>()?, false),
            None => (Self::infer_complexity(hip_length, valley_length), true),
        };

        let measurements = RoofMeasurements::new(total_area, pitch, complexity)
            .with_ridge_length(claim.ridge_length.unwrap_or(Decimal::ZERO))
            .with_hip_length(hip_length)
            .with_valley_length(valley_length)
            .with_eave_length(claim.eave_length.unwrap_or(Decimal::ZERO))
            .with_rake_length(claim.rake_length.unwrap_or(Decimal::ZERO));

        let shingle_type = match claim.shingle_type.as_deref() {
            Some(raw) => raw.parse::<ShingleType>()?,
            None => ShingleType::default(),
        };

        let mut shingle_spec = ShingleSpec::new(shingle_type);
        if let Some(manufacturer) = &claim.manufacturer {
            shingle_spec = shingle_spec.with_manufacturer(manufacturer.clone());
        }
        if let Some(color) = &claim.color {
            shingle_spec = shingle_spec.with_color(color.clone());
        }
        if let Some(product_line) = &claim.product_line {
            shingle_spec = shingle_spec.with_product_line(product_line.clone());
        }

        tracing::debug!(
            "理賠數據正規化：面積 {}，坡度 {}，複雜度 {}（推斷: {}），瓦片 {}",
            measurements.total_area,
            measurements.pitch,
            measurements.complexity,
            complexity_inferred,
            shingle_spec.shingle_type
        );

        Ok(NormalizedClaim {
            measurements,
            shingle_spec,
            complexity_inferred,
        })
    }

    /// 由斜脊與天溝推斷複雜度
    ///
    /// - 兩者皆無（或皆為 0）→ LOW
    /// - 僅其一為正 → MEDIUM
    /// - 兩者皆為正 → HIGH
    ///
    /// VERY_HIGH 只能明確指定，不會被推斷。
    pub fn infer_complexity(hip_length: Decimal, valley_length: Decimal) -> Complexity {
        let has_hips = hip_length > Decimal::ZERO;
        let has_valleys = valley_length > Decimal::ZERO;

        match (has_hips, has_valleys) {
            (false, false) => Complexity::Low,
            (true, true) => Complexity::High,
            _ => Complexity::Medium,
        }
    }
}

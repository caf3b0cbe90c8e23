//! 物料數量估算主計算器

use chrono::Utc;
use rayon::prelude::*;
use roof_core::{
    policy, EstimatorConfig, MaterialCategory, MaterialEstimate, MaterialLineItem,
    PartialClaimData, RoofMeasurements, ShingleSpec,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::coverage::{CoverageBasis, CoverageCalculator};
use crate::normalizer::MeasurementNormalizer;
use crate::pricing::PriceTable;

/// 物料估算器
///
/// 無狀態、無 I/O；每次呼叫獨立產生新的估料，可在任意執行緒並行使用。
#[derive(Debug, Clone, Default)]
pub struct MaterialCalculator {
    /// 估料配置
    config: EstimatorConfig,
}

impl MaterialCalculator {
    /// 創建新的物料估算器（配置須通過驗證）
    pub fn new(config: EstimatorConfig) -> roof_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 主估料入口
    pub fn calculate_materials(
        &self,
        measurements: &RoofMeasurements,
        spec: &ShingleSpec,
    ) -> roof_core::Result<MaterialEstimate> {
        tracing::info!(
            "開始估料：面積 {} 平方呎，坡度 {}，複雜度 {}，瓦片 {}",
            measurements.total_area,
            measurements.pitch,
            measurements.complexity,
            spec.shingle_type
        );

        measurements.validate()?;

        // Step 1: 查詢坡度與損耗係數
        let pitch_multiplier = policy::pitch_multiplier(measurements.pitch);
        let waste_factor = policy::waste_factor(measurements.complexity);
        tracing::debug!("坡度係數 {}，損耗係數 {}", pitch_multiplier, waste_factor);

        // Step 2: 調整後面積
        let adjusted_area = measurements.total_area * pitch_multiplier * waste_factor;
        tracing::debug!("調整後面積: {} 平方呎", adjusted_area);

        // Step 3: 逐類別計算數量與單價
        let basis = CoverageBasis {
            measurements,
            adjusted_area,
            shingle_type: spec.shingle_type,
        };

        let mut materials: Vec<MaterialLineItem> = MaterialCategory::MANDATORY
            .iter()
            .map(|&category| self.line_item(category, &basis))
            .collect();

        // 天溝泛水板只在有天溝時出現，不產生數量為 0 的明細
        if measurements.valley_length > Decimal::ZERO {
            materials.push(self.line_item(MaterialCategory::ValleyFlashing, &basis));
        }

        let estimate = MaterialEstimate {
            id: Uuid::new_v4(),
            measurements: measurements.clone(),
            shingle_spec: spec.clone(),
            materials,
            waste_factor,
            pitch_multiplier,
            adjusted_area,
            created_at: Utc::now(),
        };

        tracing::info!(
            "估料完成 {}：{} 筆明細，總額 {}",
            estimate.id,
            estimate.materials.len(),
            estimate.total_cost()
        );

        Ok(estimate)
    }

    /// 由部分理賠數據估料：先正規化，再交由 [`Self::calculate_materials`]
    pub fn estimate_from_claim_data(
        &self,
        claim: &PartialClaimData,
    ) -> roof_core::Result<MaterialEstimate> {
        let normalized = MeasurementNormalizer::normalize(claim)?;
        self.calculate_materials(&normalized.measurements, &normalized.shingle_spec)
    }

    /// 批次估料（並行），結果順序與輸入一致
    pub fn calculate_batch(
        &self,
        jobs: &[(RoofMeasurements, ShingleSpec)],
    ) -> Vec<roof_core::Result<MaterialEstimate>> {
        tracing::info!("開始批次估料：{} 件", jobs.len());

        jobs.par_iter()
            .map(|(measurements, spec)| self.calculate_materials(measurements, spec))
            .collect()
    }

    /// 獲取配置引用
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// 單一類別的明細
    fn line_item(&self, category: MaterialCategory, basis: &CoverageBasis<'_>) -> MaterialLineItem {
        let quantity = CoverageCalculator::quantity(category, basis, &self.config);
        let unit_price = PriceTable::unit_price(category, basis.shingle_type, &self.config);

        tracing::debug!("{}: {} × {}", category, quantity, unit_price);

        MaterialLineItem::new(category, quantity, unit_price)
    }
}

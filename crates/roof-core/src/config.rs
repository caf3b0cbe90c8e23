//! 估料與下單配置

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material::MaterialCategory;
use crate::RoofError;

/// 估料／下單參數配置
///
/// 坡度與損耗表為合約常數，不在此配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// 稅率（預設 8.25%，依轄區調整）
    pub tax_rate: Decimal,

    /// 每個屋頂的管道防水套數量
    pub pipe_boots_per_roof: u32,

    /// 防水卷材最少卷數
    pub ice_water_minimum_rolls: u32,

    /// 類別單價覆寫（取代內部預設單價）
    pub price_overrides: HashMap<MaterialCategory, Decimal>,
}

impl EstimatorConfig {
    /// 覆寫單價上限
    pub const MAX_UNIT_PRICE: i64 = 1_000_000;

    /// 預設稅率 8.25%
    pub fn default_tax_rate() -> Decimal {
        Decimal::new(825, 4)
    }

    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            tax_rate: Self::default_tax_rate(),
            pipe_boots_per_roof: 3,
            ice_water_minimum_rolls: 1,
            price_overrides: HashMap::new(),
        }
    }

    /// 從 JSON 字串載入配置並驗證
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RoofError::InvalidConfig(format!("配置解析失敗: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置稅率
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// 建構器模式：設置管道防水套數量
    pub fn with_pipe_boots_per_roof(mut self, count: u32) -> Self {
        self.pipe_boots_per_roof = count;
        self
    }

    /// 建構器模式：設置防水卷材最少卷數
    pub fn with_ice_water_minimum_rolls(mut self, rolls: u32) -> Self {
        self.ice_water_minimum_rolls = rolls;
        self
    }

    /// 建構器模式：覆寫類別單價
    pub fn with_price_override(mut self, category: MaterialCategory, unit_price: Decimal) -> Self {
        self.price_overrides.insert(category, unit_price);
        self
    }

    /// 查詢類別單價覆寫
    pub fn price_override(&self, category: MaterialCategory) -> Option<Decimal> {
        self.price_overrides.get(&category).copied()
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate >= Decimal::ONE {
            return Err(RoofError::InvalidConfig(format!(
                "稅率必須介於 0 與 1 之間，實際為 {}",
                self.tax_rate
            )));
        }

        let max_price = Decimal::from(Self::MAX_UNIT_PRICE);
        if let Some((category, price)) = self
            .price_overrides
            .iter()
            .find(|(_, price)| **price < Decimal::ZERO || **price > max_price)
        {
            return Err(RoofError::InvalidConfig(format!(
                "{} 的覆寫單價必須介於 0 與 {} 之間: {}",
                category,
                Self::MAX_UNIT_PRICE,
                price
            )));
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! 理賠案件的部分丈量數據
//!
//! 所有欄位皆可缺省，由正規化步驟補齊後才進入估料計算。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 部分理賠數據（JSON 鍵為 camelCase）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialClaimData {
    pub total_area: Option<Decimal>,
    pub pitch: Option<String>,
    pub ridge_length: Option<Decimal>,
    pub hip_length: Option<Decimal>,
    pub valley_length: Option<Decimal>,
    pub eave_length: Option<Decimal>,
    pub rake_length: Option<Decimal>,
    pub complexity: Option<String>,
    pub shingle_type: Option<String>,
    pub manufacturer: Option<String>,
    pub color: Option<String>,
    pub product_line: Option<String>,
}

impl PartialClaimData {
    /// 建構器模式：設置面積
    pub fn with_total_area(mut self, area: Decimal) -> Self {
        self.total_area = Some(area);
        self
    }

    /// 建構器模式：設置坡度
    pub fn with_pitch(mut self, pitch: impl Into<String>) -> Self {
        self.pitch = Some(pitch.into());
        self
    }

    pub fn with_ridge_length(mut self, length: Decimal) -> Self {
        self.ridge_length = Some(length);
        self
    }

    pub fn with_hip_length(mut self, length: Decimal) -> Self {
        self.hip_length = Some(length);
        self
    }

    pub fn with_valley_length(mut self, length: Decimal) -> Self {
        self.valley_length = Some(length);
        self
    }

    pub fn with_eave_length(mut self, length: Decimal) -> Self {
        self.eave_length = Some(length);
        self
    }

    pub fn with_rake_length(mut self, length: Decimal) -> Self {
        self.rake_length = Some(length);
        self
    }

    /// 建構器模式：明確指定複雜度（優先於推斷）
    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = Some(complexity.into());
        self
    }

    /// 建構器模式：設置瓦片類型
    pub fn with_shingle_type(mut self, shingle_type: impl Into<String>) -> Self {
        self.shingle_type = Some(shingle_type.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_product_line(mut self, product_line: impl Into<String>) -> Self {
        self.product_line = Some(product_line.into());
        self
    }
}

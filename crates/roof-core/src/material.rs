//! 物料明細與估料結果模型

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CatalogEntry;
use crate::measurement::RoofMeasurements;
use crate::shingle::ShingleSpec;

/// 物料類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialCategory {
    #[serde(rename = "Shingles")]
    Shingles,
    #[serde(rename = "Underlayment")]
    Underlayment,
    #[serde(rename = "Ice & Water Shield")]
    IceAndWaterShield,
    #[serde(rename = "Starter Strip")]
    StarterStrip,
    #[serde(rename = "Ridge Cap")]
    RidgeCap,
    #[serde(rename = "Drip Edge")]
    DripEdge,
    #[serde(rename = "Fasteners")]
    Fasteners,
    #[serde(rename = "Pipe Boots")]
    PipeBoots,
    #[serde(rename = "Valley Flashing")]
    ValleyFlashing,
}

impl MaterialCategory {
    /// 每個估料必定包含的類別（依輸出順序）
    pub const MANDATORY: [MaterialCategory; 8] = [
        MaterialCategory::Shingles,
        MaterialCategory::Underlayment,
        MaterialCategory::IceAndWaterShield,
        MaterialCategory::StarterStrip,
        MaterialCategory::RidgeCap,
        MaterialCategory::DripEdge,
        MaterialCategory::Fasteners,
        MaterialCategory::PipeBoots,
    ];

    /// 顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            MaterialCategory::Shingles => "Shingles",
            MaterialCategory::Underlayment => "Underlayment",
            MaterialCategory::IceAndWaterShield => "Ice & Water Shield",
            MaterialCategory::StarterStrip => "Starter Strip",
            MaterialCategory::RidgeCap => "Ridge Cap",
            MaterialCategory::DripEdge => "Drip Edge",
            MaterialCategory::Fasteners => "Fasteners",
            MaterialCategory::PipeBoots => "Pipe Boots",
            MaterialCategory::ValleyFlashing => "Valley Flashing",
        }
    }

    /// 計量單位
    pub fn unit(self) -> MaterialUnit {
        match self {
            MaterialCategory::Shingles
            | MaterialCategory::StarterStrip
            | MaterialCategory::RidgeCap => MaterialUnit::Bundle,
            MaterialCategory::Underlayment | MaterialCategory::IceAndWaterShield => {
                MaterialUnit::Roll
            }
            MaterialCategory::DripEdge | MaterialCategory::ValleyFlashing => MaterialUnit::Piece,
            MaterialCategory::Fasteners => MaterialUnit::Box,
            MaterialCategory::PipeBoots => MaterialUnit::Each,
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 計量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialUnit {
    /// 捆
    Bundle,
    /// 卷
    Roll,
    /// 10 呎一支
    Piece,
    /// 盒
    Box,
    /// 個
    Each,
}

/// 物料明細（尚未指派 SKU）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLineItem {
    pub category: MaterialCategory,
    pub unit: MaterialUnit,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl MaterialLineItem {
    /// 創建新的物料明細，單位由類別決定
    pub fn new(category: MaterialCategory, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            category,
            unit: category.unit(),
            quantity,
            unit_price,
        }
    }

    /// 明細金額 = 數量 × 單價
    pub fn total_price(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// 估料結果
///
/// 每次計算都會產生新的估料，返回後不再被修改。SKU 與權威單價由
/// 目錄解析器在估料與下單之間另行產生 [`PricedEstimate`]，不回寫此結構。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEstimate {
    /// 估料ID（UUID v4，每次呼叫皆不同）
    pub id: Uuid,

    /// 已正規化的丈量數據
    pub measurements: RoofMeasurements,

    /// 瓦片規格
    pub shingle_spec: ShingleSpec,

    /// 物料明細
    pub materials: Vec<MaterialLineItem>,

    /// 實際套用的損耗係數
    pub waste_factor: Decimal,

    /// 實際套用的坡度係數
    pub pitch_multiplier: Decimal,

    /// 調整後面積 = 面積 × 坡度係數 × 損耗係數
    pub adjusted_area: Decimal,

    /// 建立時間
    pub created_at: DateTime<Utc>,
}

impl MaterialEstimate {
    /// 估料總額（唯一的總額計算路徑：所有明細金額之和）
    pub fn total_cost(&self) -> Decimal {
        self.materials.iter().map(MaterialLineItem::total_price).sum()
    }

    /// 查找指定類別的明細
    pub fn find(&self, category: MaterialCategory) -> Option<&MaterialLineItem> {
        self.materials.iter().find(|line| line.category == category)
    }

    /// 檢查是否包含指定類別
    pub fn has_category(&self, category: MaterialCategory) -> bool {
        self.find(category).is_some()
    }
}

/// 已指派 SKU 與權威單價的物料明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedMaterialLine {
    pub category: MaterialCategory,
    pub unit: MaterialUnit,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub sku: String,
}

impl PricedMaterialLine {
    /// 由估料明細與目錄條目組合
    pub fn from_line(line: &MaterialLineItem, entry: CatalogEntry) -> Self {
        Self {
            category: line.category,
            unit: line.unit,
            quantity: line.quantity,
            unit_price: entry.unit_price,
            sku: entry.sku,
        }
    }

    pub fn total_price(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// 已定價的估料（供分店路由與下單使用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedEstimate {
    /// 來源估料ID
    pub estimate_id: Uuid,

    /// 已定價明細
    pub lines: Vec<PricedMaterialLine>,
}

impl PricedEstimate {
    pub fn new(estimate_id: Uuid, lines: Vec<PricedMaterialLine>) -> Self {
        Self { estimate_id, lines }
    }

    /// 未捨入的明細金額總和
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(PricedMaterialLine::total_price).sum()
    }

    /// 移除指定類別的明細（例如路由時以替代品取代）
    pub fn without(mut self, category: MaterialCategory) -> Self {
        self.lines.retain(|line| line.category != category);
        self
    }
}

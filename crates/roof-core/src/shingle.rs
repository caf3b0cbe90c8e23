//! 瓦片規格模型

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RoofError;

/// 瓦片類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShingleType {
    /// 三片式瓦
    ThreeTab,
    /// 建築瓦（層疊瓦）
    #[default]
    Architectural,
    /// 高階設計瓦
    Premium,
}

impl ShingleType {
    /// 每「方」（100 平方呎）所需捆數
    pub fn bundles_per_square(self) -> u32 {
        match self {
            ShingleType::ThreeTab => 3,
            ShingleType::Architectural => 3,
            ShingleType::Premium => 4,
        }
    }

    /// 每捆覆蓋面積（平方呎）
    pub fn coverage_per_bundle(self) -> Decimal {
        Decimal::from(100) / Decimal::from(self.bundles_per_square())
    }

    /// 外部表示法
    pub fn as_str(self) -> &'static str {
        match self {
            ShingleType::ThreeTab => "THREE_TAB",
            ShingleType::Architectural => "ARCHITECTURAL",
            ShingleType::Premium => "PREMIUM",
        }
    }
}

impl FromStr for ShingleType {
    type Err = RoofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "THREE_TAB" | "3_TAB" => Ok(ShingleType::ThreeTab),
            "ARCHITECTURAL" => Ok(ShingleType::Architectural),
            "PREMIUM" => Ok(ShingleType::Premium),
            _ => Err(RoofError::UnknownShingleType(s.to_string())),
        }
    }
}

impl fmt::Display for ShingleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 瓦片規格（除類型外僅為描述用途）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShingleSpec {
    /// 瓦片類型
    #[serde(rename = "type")]
    pub shingle_type: ShingleType,

    /// 製造商
    pub manufacturer: String,

    /// 顏色
    pub color: String,

    /// 產品線
    pub product_line: String,
}

impl ShingleSpec {
    /// 創建新的瓦片規格
    pub fn new(shingle_type: ShingleType) -> Self {
        Self {
            shingle_type,
            ..Self::default()
        }
    }

    /// 建構器模式：設置製造商
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// 建構器模式：設置顏色
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// 建構器模式：設置產品線
    pub fn with_product_line(mut self, product_line: impl Into<String>) -> Self {
        self.product_line = product_line.into();
        self
    }
}

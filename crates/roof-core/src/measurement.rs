//! 屋頂丈量模型

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RoofError;

/// 屋頂坡度（每 12 單位水平距離的垂直升高，記作 "rise/12"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch(u8);

impl Pitch {
    /// 支援的最大升高
    pub const MAX_RISE: u8 = 24;

    /// 水平基準距離
    pub const RUN: u8 = 12;

    /// 創建坡度，升高超出 0..=24 時回傳錯誤
    pub fn new(rise: u8) -> crate::Result<Self> {
        if rise > Self::MAX_RISE {
            return Err(RoofError::InvalidMeasurement(format!(
                "坡度升高 {} 超出範圍 0-{}",
                rise,
                Self::MAX_RISE
            )));
        }
        Ok(Self(rise))
    }

    /// 垂直升高
    pub fn rise(self) -> u8 {
        self.0
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(6)
    }
}

impl FromStr for Pitch {
    type Err = RoofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RoofError::InvalidMeasurement(format!("無法識別的坡度表示: {:?}", s));

        let (rise, run) = s.split_once('/').ok_or_else(invalid)?;
        let rise: u8 = rise.trim().parse().map_err(|_| invalid())?;
        let run: u8 = run.trim().parse().map_err(|_| invalid())?;

        if run != Self::RUN {
            return Err(invalid());
        }

        Self::new(rise)
    }
}

impl TryFrom<String> for Pitch {
    type Error = RoofError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::RUN)
    }
}

/// 屋頂複雜度等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Complexity {
    /// 無斜脊、無天溝
    Low,
    /// 斜脊或天溝其一
    Medium,
    /// 斜脊與天溝皆有
    High,
    /// 多面、多層次屋頂
    VeryHigh,
}

impl Complexity {
    /// 外部表示法（"LOW"、"VERY_HIGH" 等）
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "LOW",
            Complexity::Medium => "MEDIUM",
            Complexity::High => "HIGH",
            Complexity::VeryHigh => "VERY_HIGH",
        }
    }
}

impl FromStr for Complexity {
    type Err = RoofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Complexity::Low),
            "MEDIUM" => Ok(Complexity::Medium),
            "HIGH" => Ok(Complexity::High),
            "VERY_HIGH" => Ok(Complexity::VeryHigh),
            _ => Err(RoofError::InvalidMeasurement(format!(
                "無法識別的複雜度等級: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 屋頂丈量數據
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofMeasurements {
    /// 屋頂水平投影面積（平方呎）
    pub total_area: Decimal,

    /// 坡度
    pub pitch: Pitch,

    /// 屋脊長度（呎）
    pub ridge_length: Decimal,

    /// 斜脊長度（呎）
    pub hip_length: Decimal,

    /// 天溝長度（呎）
    pub valley_length: Decimal,

    /// 簷口長度（呎）
    pub eave_length: Decimal,

    /// 山牆邊長度（呎）
    pub rake_length: Decimal,

    /// 複雜度等級
    pub complexity: Complexity,
}

impl RoofMeasurements {
    /// 屋頂面積上限（平方呎）
    pub const MAX_TOTAL_AREA: i64 = 10_000_000;

    /// 單項長度上限（呎）
    pub const MAX_LENGTH: i64 = 1_000_000;

    /// 創建新的丈量數據（所有長度預設為 0）
    pub fn new(total_area: Decimal, pitch: Pitch, complexity: Complexity) -> Self {
        Self {
            total_area,
            pitch,
            ridge_length: Decimal::ZERO,
            hip_length: Decimal::ZERO,
            valley_length: Decimal::ZERO,
            eave_length: Decimal::ZERO,
            rake_length: Decimal::ZERO,
            complexity,
        }
    }

    /// 建構器模式：設置屋脊長度
    pub fn with_ridge_length(mut self, length: Decimal) -> Self {
        self.ridge_length = length;
        self
    }

    /// 建構器模式：設置斜脊長度
    pub fn with_hip_length(mut self, length: Decimal) -> Self {
        self.hip_length = length;
        self
    }

    /// 建構器模式：設置天溝長度
    pub fn with_valley_length(mut self, length: Decimal) -> Self {
        self.valley_length = length;
        self
    }

    /// 建構器模式：設置簷口長度
    pub fn with_eave_length(mut self, length: Decimal) -> Self {
        self.eave_length = length;
        self
    }

    /// 建構器模式：設置山牆邊長度
    pub fn with_rake_length(mut self, length: Decimal) -> Self {
        self.rake_length = length;
        self
    }

    /// 驗證丈量數據：面積必須為正，所有長度不可為負，且皆不超過上限
    ///
    /// 上限確保後續的係數相乘與數量計算不會溢位。
    pub fn validate(&self) -> crate::Result<()> {
        if self.total_area <= Decimal::ZERO {
            return Err(RoofError::InvalidMeasurement(format!(
                "屋頂面積必須大於 0，實際為 {}",
                self.total_area
            )));
        }

        if self.total_area > Decimal::from(Self::MAX_TOTAL_AREA) {
            return Err(RoofError::InvalidMeasurement(format!(
                "屋頂面積不可超過 {} 平方呎，實際為 {}",
                Self::MAX_TOTAL_AREA,
                self.total_area
            )));
        }

        let lengths = [
            ("ridgeLength", self.ridge_length),
            ("hipLength", self.hip_length),
            ("valleyLength", self.valley_length),
            ("eaveLength", self.eave_length),
            ("rakeLength", self.rake_length),
        ];
        for (name, value) in lengths {
            if value < Decimal::ZERO {
                return Err(RoofError::InvalidMeasurement(format!(
                    "{} 不可為負數，實際為 {}",
                    name, value
                )));
            }
            if value > Decimal::from(Self::MAX_LENGTH) {
                return Err(RoofError::InvalidMeasurement(format!(
                    "{} 不可超過 {} 呎，實際為 {}",
                    name,
                    Self::MAX_LENGTH,
                    value
                )));
            }
        }

        Ok(())
    }

    /// 簷口加山牆邊的周長（滴水邊、起始條使用）
    pub fn perimeter_length(&self) -> Decimal {
        self.eave_length + self.rake_length
    }
}

//! 坡度與損耗政策表
//!
//! 靜態、可版本化的查找表。數值為合約常數，不在呼叫時計算。

use rust_decimal::Decimal;

use crate::measurement::{Complexity, Pitch};

/// 坡度係數表（萬分位），索引為每 12 吋水平距離的垂直升高
///
/// 每一項為 `sqrt(1 + (rise / 12)^2)` 四捨五入至小數點後四位
const PITCH_MULTIPLIER_TEN_THOUSANDTHS: [i64; (Pitch::MAX_RISE as usize) + 1] = [
    10000, 10035, 10138, 10308, 10541, 10833, 11180, 11577, 12019, 12500, 13017, 13566, 14142,
    14743, 15366, 16008, 16667, 17341, 18028, 18727, 19437, 20156, 20883, 21619, 22361,
];

/// 查詢坡度係數（斜面長度 / 水平投影長度）
pub fn pitch_multiplier(pitch: Pitch) -> Decimal {
    Decimal::new(PITCH_MULTIPLIER_TEN_THOUSANDTHS[pitch.rise() as usize], 4)
}

/// 查詢複雜度對應的損耗係數
pub fn waste_factor(complexity: Complexity) -> Decimal {
    match complexity {
        Complexity::Low => Decimal::new(110, 2),
        Complexity::Medium => Decimal::new(115, 2),
        Complexity::High => Decimal::new(120, 2),
        Complexity::VeryHigh => Decimal::new(125, 2),
    }
}

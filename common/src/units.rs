//! 単位変換
//!
//! 体積（基準: ml）と重量（基準: g）の2つの静的テーブルで変換する。
//! テーブルをまたぐ変換（体積 ⇔ 重量）は行わない。

use crate::error::ConversionError;
use std::fmt;

/// 単位の系統
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Weight,
}

/// 変換可能な単位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Milliliter,
    Liter,
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    Pint,
    Quart,
    Gallon,
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Milliliter,
        Unit::Liter,
        Unit::Cup,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::FluidOunce,
        Unit::Pint,
        Unit::Quart,
        Unit::Gallon,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Ounce,
        Unit::Pound,
    ];

    /// 入力キー
    pub fn key(&self) -> &'static str {
        match self {
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::FluidOunce => "fl-oz",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
        }
    }

    /// 表示名（キーとは別）
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Milliliter => "ml",
            Unit::Liter => "L",
            Unit::Cup => "cups",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::FluidOunce => "fl oz",
            Unit::Pint => "pints",
            Unit::Quart => "quarts",
            Unit::Gallon => "gallons",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lbs",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Gram | Unit::Kilogram | Unit::Ounce | Unit::Pound => Dimension::Weight,
            _ => Dimension::Volume,
        }
    }

    /// 基準単位（ml / g）への倍率
    pub fn multiplier(&self) -> f64 {
        match self {
            Unit::Milliliter => 1.0,
            Unit::Liter => 1000.0,
            Unit::Cup => 240.0,
            Unit::Tablespoon => 15.0,
            Unit::Teaspoon => 5.0,
            Unit::FluidOunce => 29.5735,
            Unit::Pint => 473.176,
            Unit::Quart => 946.353,
            Unit::Gallon => 3785.41,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Ounce => 28.3495,
            Unit::Pound => 453.592,
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|u| u.key() == key)
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 変換結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_magnitude(self.value), self.unit.display_name())
    }
}

/// 数値を変換して生の値を返す
pub fn convert_value(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConversionError::InvalidInput(value));
    }

    if from.dimension() != to.dimension() {
        return Err(ConversionError::IncompatibleUnits {
            from: from.key().to_string(),
            to: to.key().to_string(),
        });
    }

    let base = value * from.multiplier();
    Ok(base / to.multiplier())
}

/// 単位キー文字列で変換し、表示用文字列を返す
///
/// ```
/// use recipe_lookup_common::units::convert;
///
/// assert_eq!(convert(1.0, "cup", "ml").unwrap(), "240.0 ml");
/// assert_eq!(convert(2.0, "kg", "lb").unwrap(), "4.41 lbs");
/// ```
pub fn convert(value: f64, from: &str, to: &str) -> Result<String, ConversionError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConversionError::InvalidInput(value));
    }
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    let converted = convert_value(value, from, to)?;
    Ok(Conversion { value: converted, unit: to }.to_string())
}

/// 桁数に応じた精度で整形
///
/// - 1000以上: 小数0桁
/// - 10以上: 1桁
/// - 1以上: 2桁
/// - 1未満: 3桁
pub fn format_magnitude(value: f64) -> String {
    let decimals = if value >= 1000.0 {
        0
    } else if value >= 10.0 {
        1
    } else if value >= 1.0 {
        2
    } else {
        3
    };
    format!("{:.*}", decimals, round_half_up(value, decimals))
}

/// 四捨五入（0.5は切り上げ）
pub(crate) fn round_half_up(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // 2進表現の誤差で x.4999.. になった場合を救う
    let nudged = scaled + scaled.abs() * f64::EPSILON * 4.0;
    nudged.round() / factor
}

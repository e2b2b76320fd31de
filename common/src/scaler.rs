//! 人数に応じた分量スケーリング
//!
//! "1 1/2 cups" のような自由記述の分量を先頭の数値と残りのテキストに分け、
//! 数値だけを倍率でスケールして元のテキストを付け直す。
//! 数値として読めない分量はそのまま返す。

use crate::types::Ingredient;
use crate::units::round_half_up;
use regex::Regex;

/// パース済みの分量
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// 数値部分
    pub magnitude: f64,
    /// 数値の後ろのテキスト（先頭の空白も保持）
    pub suffix: String,
}

impl Quantity {
    /// 分量文字列をパース
    ///
    /// 優先順位: 分数 `a/b` → 帯分数 `a b/c` → 小数・整数
    /// （`/` の前後の空白は許容）
    pub fn parse(measure: &str) -> Option<Self> {
        lazy_static::lazy_static! {
            static ref FRACTION_RE: Regex = Regex::new(r"(?s)^\s*(\d+)\s*/\s*(\d+)(.*)$").unwrap();
            static ref MIXED_RE: Regex = Regex::new(r"(?s)^\s*(\d+)\s+(\d+)\s*/\s*(\d+)(.*)$").unwrap();
            static ref DECIMAL_RE: Regex = Regex::new(r"(?s)^\s*(\d+(?:\.\d+)?|\.\d+)(.*)$").unwrap();
        }

        let (magnitude, suffix) = if let Some(cap) = FRACTION_RE.captures(measure) {
            let num: f64 = cap[1].parse().ok()?;
            let den: f64 = cap[2].parse().ok()?;
            (num / den, cap[3].to_string())
        } else if let Some(cap) = MIXED_RE.captures(measure) {
            let whole: f64 = cap[1].parse().ok()?;
            let num: f64 = cap[2].parse().ok()?;
            let den: f64 = cap[3].parse().ok()?;
            (whole + num / den, cap[4].to_string())
        } else if let Some(cap) = DECIMAL_RE.captures(measure) {
            let value: f64 = cap[1].parse().ok()?;
            (value, cap[2].to_string())
        } else {
            return None;
        };

        // 1/0 など
        if !magnitude.is_finite() {
            return None;
        }

        Some(Self { magnitude, suffix })
    }

    /// 倍率を掛けた新しい分量
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            magnitude: self.magnitude * ratio,
            suffix: self.suffix.clone(),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", format_scaled(self.magnitude), self.suffix)
    }
}

/// スケール後の数値を整形
///
/// 整数ならそのまま、それ以外は小数1桁（四捨五入）。
/// 丸めた結果が整数になった場合は ".0" を付けない。
pub fn format_scaled(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    let rounded = round_half_up(value, 1);
    if rounded.fract() == 0.0 {
        format!("{}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// 分量文字列を倍率でスケール
///
/// 数値として読めない場合・倍率が不正な場合は元の文字列を返す。
///
/// ```
/// use recipe_lookup_common::scaler::scale_measure;
///
/// assert_eq!(scale_measure("2 cups", 1.5), "3 cups");
/// assert_eq!(scale_measure("a pinch of salt", 3.0), "a pinch of salt");
/// ```
pub fn scale_measure(measure: &str, ratio: f64) -> String {
    if !ratio.is_finite() || ratio <= 0.0 {
        return measure.to_string();
    }

    match Quantity::parse(measure) {
        Some(quantity) => {
            let scaled = quantity.scaled(ratio);
            if scaled.magnitude.is_finite() {
                scaled.to_string()
            } else {
                measure.to_string()
            }
        }
        None => measure.to_string(),
    }
}

/// 材料リスト全体をスケール
pub fn scale_ingredients(ingredients: &[Ingredient], ratio: f64) -> Vec<Ingredient> {
    ingredients
        .iter()
        .map(|ing| Ingredient {
            measure: scale_measure(&ing.measure, ratio),
            name: ing.name.clone(),
        })
        .collect()
}

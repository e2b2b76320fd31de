//! レシピ表示用の射影
//!
//! Recipe の欠けたフィールドを既定値で埋め、表示に必要な値だけを取り出す。
//! 描画先には依存しない。

use crate::types::{NutrientValue, Nutrition, Recipe};

pub const DEFAULT_TITLE: &str = "Delicious Recipe";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/900x400?text=Recipe+Image";
pub const DEFAULT_PREP_TIME: &str = "30 mins";
pub const DEFAULT_COOK_TIME: &str = "45 mins";
pub const DEFAULT_CATEGORY: &str = "World Cuisine";

const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "fish", "shrimp", "prawn", "meat", "turkey", "duck",
];

/// 食事区分バッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryBadge {
    Vegan,
    Vegetarian,
    NonVeg,
}

impl DietaryBadge {
    pub fn label(&self) -> &'static str {
        match self {
            DietaryBadge::Vegan => "Vegan",
            DietaryBadge::Vegetarian => "Vegetarian",
            DietaryBadge::NonVeg => "Non-Veg",
        }
    }

    /// タグ・カテゴリ・名前から判定（判定できなければNone）
    pub fn classify(recipe: &Recipe) -> Option<Self> {
        let name = recipe.name.to_lowercase();
        let category = recipe.category.as_deref().unwrap_or("").to_lowercase();

        let marked = |tag: &str, lower: &str| {
            recipe.tags.iter().any(|t| t == tag || t == lower)
                || category.contains(lower)
                || name.contains(lower)
        };

        if marked("Vegan", "vegan") {
            return Some(DietaryBadge::Vegan);
        }
        if marked("Vegetarian", "vegetarian") {
            return Some(DietaryBadge::Vegetarian);
        }

        let has_meat = |text: &str| MEAT_KEYWORDS.iter().any(|meat| text.contains(meat));
        if has_meat(&name) || has_meat(&category) {
            return Some(DietaryBadge::NonVeg);
        }

        None
    }
}

/// 栄養表の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionRow {
    pub label: &'static str,
    pub value: String,
}

/// 表示用レシピ
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView {
    pub title: String,
    pub image_url: String,
    pub prep_time: String,
    pub cook_time: String,
    pub category: String,
    pub description: Option<String>,
    pub badge: Option<DietaryBadge>,
    pub instructions: Vec<String>,
    pub nutrition: Vec<NutritionRow>,
    pub youtube_url: Option<String>,
}

impl RecipeView {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: non_empty(Some(&recipe.name)).unwrap_or(DEFAULT_TITLE).to_string(),
            image_url: non_empty(recipe.image_url.as_ref())
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            prep_time: non_empty(recipe.prep_time.as_ref())
                .unwrap_or(DEFAULT_PREP_TIME)
                .to_string(),
            cook_time: non_empty(recipe.cook_time.as_ref())
                .unwrap_or(DEFAULT_COOK_TIME)
                .to_string(),
            category: non_empty(recipe.category.as_ref())
                .or_else(|| non_empty(recipe.area.as_ref()))
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            description: describe(recipe),
            badge: DietaryBadge::classify(recipe),
            instructions: recipe.instructions.clone(),
            nutrition: recipe.nutrition.as_ref().map(nutrition_rows).unwrap_or_default(),
            youtube_url: non_empty(recipe.youtube_url.as_ref()).map(str::to_string),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// 説明文（なければ「A {category} dish from {area}」）
fn describe(recipe: &Recipe) -> Option<String> {
    if let Some(description) = non_empty(recipe.description.as_ref()) {
        return Some(description.to_string());
    }

    match (non_empty(recipe.category.as_ref()), non_empty(recipe.area.as_ref())) {
        (Some(category), Some(area)) => Some(format!("A {} dish from {}", category, area)),
        _ => None,
    }
}

/// 栄養情報を表示行に展開
pub fn nutrition_rows(nutrition: &Nutrition) -> Vec<NutritionRow> {
    let text = |value: &Option<NutrientValue>| value.as_ref().map(|v| v.to_string());
    let or = |value: &Option<NutrientValue>, default: &str| {
        text(value).unwrap_or_else(|| default.to_string())
    };

    vec![
        NutritionRow {
            label: "Calories",
            value: format!("{} kcal", or(&nutrition.calories, "-")),
        },
        NutritionRow { label: "Protein", value: or(&nutrition.protein, "-") },
        NutritionRow { label: "Carbs", value: or(&nutrition.carbs, "-") },
        NutritionRow { label: "Fat", value: or(&nutrition.fat, "-") },
        NutritionRow { label: "Saturated Fat", value: or(&nutrition.saturated_fat, "0g") },
        NutritionRow { label: "Fiber", value: or(&nutrition.fiber, "-") },
        NutritionRow { label: "Sugar", value: or(&nutrition.sugar, "0g") },
        NutritionRow { label: "Sodium", value: or(&nutrition.sodium, "0mg") },
    ]
}

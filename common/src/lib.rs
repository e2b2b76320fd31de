//! Recipe Lookup Common Library
//!
//! 描画・通信に依存しないレシピ処理:
//! 分量スケーリング、単位変換、お気に入り、表示用の射影、アプリ状態

pub mod error;
pub mod favorites;
pub mod presenter;
pub mod scaler;
pub mod state;
pub mod storage;
pub mod types;
pub mod units;
pub mod view;

pub use error::{ConversionError, Error, Result};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use presenter::{Presenter, RecipeScreen};
pub use scaler::{scale_ingredients, scale_measure, Quantity};
pub use state::{AppState, EmptyQuery, QuerySource, SearchRequest};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{
    DishRequest, ErrorDetail, FavoriteEntry, FilterType, Ingredient, IngredientsRequest,
    NutrientValue, Nutrition, Recipe, Replacement, ReplacementRequest, SearchMode, Suggestion,
    SuggestionsResponse,
};
pub use units::{convert, convert_value, Conversion, Dimension, Unit};
pub use view::{DietaryBadge, NutritionRow, RecipeView};

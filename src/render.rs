//! 端末への描画

use recipe_lookup_common::{FavoriteEntry, Presenter, RecipeScreen, Replacement, Suggestion};
use std::io::{self, Stderr, Stdout, Write};

/// 標準出力に描画するPresenter（エラーは標準エラー出力）
pub struct TerminalPresenter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl TerminalPresenter<Stdout, Stderr> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> TerminalPresenter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    // 端末への書き込み失敗は表示できないので捨てる
    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }
}

impl<O: Write, E: Write> Presenter for TerminalPresenter<O, E> {
    fn show_suggestions(&mut self, suggestions: &[Suggestion]) {
        if suggestions.is_empty() {
            self.line("No suggestions available.");
            return;
        }
        self.line("✨ Popular Recipes");
        for (i, s) in suggestions.iter().enumerate() {
            self.line(format!("  [{}] {} {}", i + 1, s.icon, s.name));
        }
    }

    fn show_recipe(&mut self, screen: &RecipeScreen<'_>) {
        let view = screen.view;

        self.line(format!("🍽  {}", view.title));
        if let Some(badge) = view.badge {
            self.line(format!("   [{}]", badge.label()));
        }
        self.line(format!(
            "   Prep: {}  Cook: {}  Category: {}",
            view.prep_time, view.cook_time, view.category
        ));
        self.line(format!("   Image: {}", view.image_url));
        if let Some(description) = &view.description {
            self.line("");
            self.line(format!("   {}", description));
        }

        self.line("");
        self.line(format!("Ingredients ({} servings)", screen.servings));
        for ing in screen.ingredients {
            self.line(format!("  - {} {}", ing.measure, ing.name));
        }

        if !view.instructions.is_empty() {
            self.line("");
            self.line("Instructions");
            for (i, step) in view.instructions.iter().enumerate() {
                self.line(format!("  {}. {}", i + 1, step));
            }
        }

        if !view.nutrition.is_empty() {
            self.line("");
            self.line("Nutrition");
            for row in &view.nutrition {
                self.line(format!("  {:<14} {}", row.label, row.value));
            }
        }

        if let Some(url) = &view.youtube_url {
            self.line("");
            self.line(format!("▶ {}", url));
        }

        self.line("");
        self.line(if screen.favorited {
            "★ In favorites"
        } else {
            "☆ Not in favorites"
        });
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.err, "⚠ {}", message);
    }

    fn show_alternatives(&mut self, replacement: &Replacement) {
        self.line(format!("Alternatives for \"{}\"", replacement.original));
        if !replacement.notes.is_empty() {
            self.line(format!("  {}", replacement.notes));
        }
        for alt in &replacement.alternatives {
            self.line(format!("  ✓ {}", alt));
        }
    }

    fn show_favorites(&mut self, favorites: &[FavoriteEntry]) {
        if favorites.is_empty() {
            self.line("No favorite recipes yet.");
            return;
        }

        self.line("❤ My Recipes");
        for (i, fav) in favorites.iter().enumerate() {
            match &fav.category {
                Some(category) => self.line(format!("  [{}] {} ({})", i + 1, fav.name, category)),
                None => self.line(format!("  [{}] {}", i + 1, fav.name)),
            }
        }
    }

    fn show_conversion(&mut self, result: &str) {
        self.line(format!("= {}", result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_lookup_common::{Ingredient, Recipe, RecipeView};

    fn render(f: impl FnOnce(&mut TerminalPresenter<Vec<u8>, Vec<u8>>)) -> (String, String) {
        let mut presenter = TerminalPresenter::new(Vec::new(), Vec::new());
        f(&mut presenter);
        let (out, err) = presenter.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_show_recipe() {
        let recipe = Recipe {
            name: "Vegan Chili".into(),
            instructions: vec!["Chop".into(), "Simmer".into()],
            ..Default::default()
        };
        let view = RecipeView::from_recipe(&recipe);
        let ingredients = vec![Ingredient::new("3 cups", "beans")];
        let (out, err) = render(|p| {
            p.show_recipe(&RecipeScreen {
                view: &view,
                ingredients: &ingredients,
                servings: 6,
                favorited: true,
            })
        });

        assert!(out.contains("Vegan Chili"));
        assert!(out.contains("[Vegan]"));
        assert!(out.contains("Ingredients (6 servings)"));
        assert!(out.contains("- 3 cups beans"));
        assert!(out.contains("2. Simmer"));
        assert!(out.contains("★ In favorites"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_show_error_goes_to_err() {
        let (out, err) = render(|p| p.show_error("Recipe not found"));
        assert!(out.is_empty());
        assert_eq!(err, "⚠ Recipe not found\n");
    }

    #[test]
    fn test_show_favorites_empty() {
        let (out, _) = render(|p| p.show_favorites(&[]));
        assert_eq!(out, "No favorite recipes yet.\n");
    }

    #[test]
    fn test_show_suggestions_empty() {
        let (out, _) = render(|p| p.show_suggestions(&[]));
        assert_eq!(out, "No suggestions available.\n");
    }
}

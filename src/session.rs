//! 対話モード
//!
//! 1行ずつ入力を読み、AppStateに対するハンドラを呼ぶ。
//! `:` で始まらない入力は検索語として扱う。

use crate::app::App;
use crate::error::{RecipeError, Result};
use dialoguer::Input;
use recipe_lookup_common::{
    FavoriteEntry, FilterType, KeyValueStore, Presenter, QuerySource, SearchMode, Suggestion,
};

const HELP: &str = "\
操作:
  <text>              検索（recipeモード: 料理名 / parseモード: 食材リスト）
  + / -               人数を1増減
  :servings N         人数を指定
  :fav                表示中のレシピのお気に入りを切り替え
  :favs               お気に入り一覧
  :open N             一覧（おすすめ/お気に入り）のN番目を開く
  :replace <材料>     代替候補
  :convert V FROM TO  単位変換（例: :convert 2 cup ml）
  :mode recipe|parse  検索モード
  :filter tasty|healthy|quick
  :suggest            おすすめを再表示
  :help / :q";

/// 対話コマンド
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Search(String),
    MoreServings,
    FewerServings,
    SetServings(u32),
    ToggleFavorite,
    ShowFavorites,
    Open(usize),
    Replace(String),
    Convert { value: f64, from: String, to: String },
    Mode(SearchMode),
    Filter(FilterType),
    Suggest,
    Help,
    Quit,
}

/// 入力行をコマンドに変換
pub fn parse_command(line: &str) -> std::result::Result<SessionCommand, String> {
    let line = line.trim();

    match line {
        "+" => return Ok(SessionCommand::MoreServings),
        "-" => return Ok(SessionCommand::FewerServings),
        _ => {}
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(SessionCommand::Search(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "q" | "quit" | "exit" => Ok(SessionCommand::Quit),
        "help" | "h" | "?" => Ok(SessionCommand::Help),
        "fav" => Ok(SessionCommand::ToggleFavorite),
        "favs" | "favorites" => Ok(SessionCommand::ShowFavorites),
        "suggest" => Ok(SessionCommand::Suggest),
        "servings" => arg
            .parse()
            .map(SessionCommand::SetServings)
            .map_err(|_| format!("人数が不正です: {}", arg)),
        "open" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(SessionCommand::Open(n)),
            _ => Err(format!("番号が不正です: {}", arg)),
        },
        "replace" if !arg.is_empty() => Ok(SessionCommand::Replace(arg.to_string())),
        "replace" => Err("材料名を指定してください".into()),
        "mode" => arg.parse().map(SessionCommand::Mode),
        "filter" => arg.parse().map(SessionCommand::Filter),
        "convert" => {
            let parts: Vec<&str> = arg.split_whitespace().collect();
            match parts.as_slice() {
                [value, from, to] => {
                    let value = value
                        .parse::<f64>()
                        .map_err(|_| format!("数値が不正です: {}", value))?;
                    Ok(SessionCommand::Convert {
                        value,
                        from: from.to_string(),
                        to: to.to_string(),
                    })
                }
                _ => Err("使い方: :convert VALUE FROM TO".into()),
            }
        }
        _ => Err(format!("不明なコマンド: :{}", name)),
    }
}

/// `:open` の対象になる直近の一覧
enum Listing {
    None,
    Suggestions(Vec<Suggestion>),
    Favorites(Vec<FavoriteEntry>),
}

impl Listing {
    fn name_at(&self, n: usize) -> Option<String> {
        match self {
            Listing::None => None,
            Listing::Suggestions(items) => items.get(n - 1).map(|s| s.name.clone()),
            Listing::Favorites(items) => items.get(n - 1).map(|f| f.name.clone()),
        }
    }
}

/// 対話ループ
pub async fn run_interactive<S: KeyValueStore, P: Presenter>(app: &mut App<S, P>) -> Result<()> {
    println!("🍳 recipe-lookup - 対話モード (:help で操作一覧)\n");

    let mut listing = match app.state.mode {
        SearchMode::Recipe => {
            Listing::Suggestions(app.load_suggestions().await.unwrap_or_default())
        }
        SearchMode::Parse => {
            println!("Enter ingredients above to find recipes!");
            Listing::None
        }
    };

    loop {
        let prompt = match app.state.mode {
            SearchMode::Recipe => "dish".to_string(),
            SearchMode::Parse => format!("ingredients [{}]", app.state.filter),
        };

        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RecipeError::Input(e.to_string()))?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("⚠ {}", message);
                continue;
            }
        };

        // 各ハンドラは自分でエラーを表示するので、ここでは続行するだけ
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Search(query) => {
                let _ = app.search(&query, QuerySource::Typed).await;
            }
            SessionCommand::MoreServings => {
                app.adjust_servings(1);
            }
            SessionCommand::FewerServings => {
                app.adjust_servings(-1);
            }
            SessionCommand::SetServings(n) => {
                if !app.set_servings(n) {
                    eprintln!("⚠ 人数を変更できません");
                }
            }
            SessionCommand::ToggleFavorite => {
                if let Ok(now_favorite) = app.toggle_favorite() {
                    println!(
                        "{}",
                        if now_favorite {
                            "★ Added to favorites"
                        } else {
                            "☆ Removed from favorites"
                        }
                    );
                }
            }
            SessionCommand::ShowFavorites => {
                listing = Listing::Favorites(app.show_favorites());
            }
            SessionCommand::Open(n) => match listing.name_at(n) {
                Some(name) => {
                    let _ = app.search(&name, QuerySource::Picked).await;
                }
                None => eprintln!("⚠ {}番目はありません", n),
            },
            SessionCommand::Replace(ingredient) => {
                let _ = app.show_alternatives(&ingredient).await;
            }
            SessionCommand::Convert { value, from, to } => {
                let _ = app.convert_units(value, &from, &to);
            }
            SessionCommand::Mode(mode) => {
                app.state.mode = mode;
                match mode {
                    SearchMode::Recipe => {
                        let suggestions = app.load_suggestions().await.unwrap_or_default();
                        listing = Listing::Suggestions(suggestions);
                    }
                    SearchMode::Parse => {
                        println!("Enter ingredients above to find recipes!");
                        listing = Listing::None;
                    }
                }
            }
            SessionCommand::Filter(filter) => {
                app.state.filter = filter;
                println!("filter: {}", filter);
            }
            SessionCommand::Suggest => {
                let suggestions = app.load_suggestions().await.unwrap_or_default();
                listing = Listing::Suggestions(suggestions);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_command("  Chocolate Mousse "),
            Ok(SessionCommand::Search("Chocolate Mousse".into()))
        );
        assert_eq!(parse_command(""), Ok(SessionCommand::Search(String::new())));
    }

    #[test]
    fn test_parse_servings() {
        assert_eq!(parse_command("+"), Ok(SessionCommand::MoreServings));
        assert_eq!(parse_command("-"), Ok(SessionCommand::FewerServings));
        assert_eq!(parse_command(":servings 6"), Ok(SessionCommand::SetServings(6)));
        assert!(parse_command(":servings many").is_err());
    }

    #[test]
    fn test_parse_convert() {
        assert_eq!(
            parse_command(":convert 2 cup ml"),
            Ok(SessionCommand::Convert {
                value: 2.0,
                from: "cup".into(),
                to: "ml".into(),
            })
        );
        assert!(parse_command(":convert 2 cup").is_err());
        assert!(parse_command(":convert x cup ml").is_err());
    }

    #[test]
    fn test_parse_mode_and_filter() {
        assert_eq!(parse_command(":mode parse"), Ok(SessionCommand::Mode(SearchMode::Parse)));
        assert_eq!(
            parse_command(":filter healthy"),
            Ok(SessionCommand::Filter(FilterType::Healthy))
        );
        assert!(parse_command(":filter spicy").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(":q"), Ok(SessionCommand::Quit));
        assert_eq!(parse_command(":open 2"), Ok(SessionCommand::Open(2)));
        assert!(parse_command(":open 0").is_err());
        assert_eq!(
            parse_command(":replace heavy cream"),
            Ok(SessionCommand::Replace("heavy cream".into()))
        );
        assert!(parse_command(":replace").is_err());
        assert!(parse_command(":dance").is_err());
    }
}

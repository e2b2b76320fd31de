use clap::{Parser, Subcommand};
use recipe_lookup_common::FilterType;

#[derive(Parser)]
#[command(name = "recipe-lookup")]
#[command(about = "レシピ検索・分量調整・単位変換・お気に入り管理", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// レシピAPIのURL（設定ファイル・RECIPE_API_URLより優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// おすすめ料理を表示
    Suggest,

    /// 料理名からレシピを生成
    Recipe {
        /// 料理名
        #[arg(required = true)]
        dish: String,

        /// 人数（省略時はレシピの人数）
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// 食材リストからレシピを生成
    Ingredients {
        /// カンマ区切りの食材（例: "chicken, rice, garlic"）
        #[arg(required = true)]
        list: String,

        /// フィルタ (tasty/healthy/quick)
        #[arg(short, long)]
        filter: Option<FilterType>,

        /// 人数
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// 材料の代替候補を表示
    Replace {
        /// 材料名
        #[arg(required = true)]
        ingredient: String,

        /// レシピ名
        #[arg(short, long)]
        recipe: String,
    },

    /// 単位変換（例: convert 2 cup ml）
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// 分量を人数比でスケール（例: scale "1 1/2 cups" --from 4 --to 6）
    Scale {
        measure: String,

        /// 元の人数
        #[arg(long)]
        from: u32,

        /// 新しい人数
        #[arg(long)]
        to: u32,
    },

    /// お気に入り管理
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// 対話モード
    Interactive {
        /// 開始時のモード (recipe/parse)
        #[arg(short, long, default_value = "recipe")]
        mode: recipe_lookup_common::SearchMode,
    },

    /// 設定を表示/編集
    Config {
        /// APIのURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum FavoritesAction {
    /// 一覧（デフォルト）
    List,

    /// レシピを取得してお気に入りを切り替え
    Toggle { name: String },

    /// 名前で削除
    Remove { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ingredients_filter() {
        let cli = Cli::parse_from(["recipe-lookup", "ingredients", "rice, egg", "-f", "quick"]);
        match cli.command {
            Commands::Ingredients { list, filter, .. } => {
                assert_eq!(list, "rice, egg");
                assert_eq!(filter, Some(FilterType::Quick));
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_parse_scale() {
        let cli = Cli::parse_from(["recipe-lookup", "scale", "1/2 cup", "--from", "2", "--to", "4"]);
        assert!(matches!(cli.command, Commands::Scale { from: 2, to: 4, .. }));
    }
}

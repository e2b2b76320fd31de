use clap::Parser;
use recipe_lookup::{api, app, cli, config, error, render, session, storage};
use recipe_lookup_common::{scale_measure, AppState, QuerySource, SearchMode};
use api::RecipeApi;
use app::App;
use cli::{Cli, Commands, FavoritesAction};
use config::Config;
use error::{RecipeError, Result};
use render::TerminalPresenter;
use std::io::{Stderr, Stdout};
use storage::FileStore;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recipe_lookup=debug,recipe_lookup_common=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => {}
        // Presenter側で表示済み
        Err(RecipeError::Reported) => std::process::exit(1),
        Err(e) => {
            eprintln!("⚠ {}", e);
            std::process::exit(1);
        }
    }
}

type CliApp = App<FileStore, TerminalPresenter<Stdout, Stderr>>;

fn build_app(config: &Config, api_url: &str, state: AppState) -> Result<CliApp> {
    let store = FileStore::new(config.data_dir()?);
    Ok(App::new(
        RecipeApi::new(api_url),
        store,
        TerminalPresenter::stdout(),
        state,
    ))
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url());
    tracing::debug!(%api_url, "using recipe api");

    let new_app = |state: AppState| build_app(&config, &api_url, state);

    match cli.command {
        Commands::Suggest => {
            let mut app = new_app(AppState::new())?;
            if app.load_suggestions().await.is_err() {
                println!("おすすめを取得できませんでした");
            }
        }

        Commands::Recipe { dish, servings } => {
            let mut app = new_app(AppState::new())?;
            app.search_with_servings(&dish, QuerySource::Typed, servings)
                .await
                .map_err(RecipeError::reported)?;
        }

        Commands::Ingredients { list, filter, servings } => {
            let mut state = AppState::new().with_filter(filter.unwrap_or(config.default_filter));
            state.mode = SearchMode::Parse;

            let mut app = new_app(state)?;
            app.search_with_servings(&list, QuerySource::Typed, servings)
                .await
                .map_err(RecipeError::reported)?;
        }

        Commands::Replace { ingredient, recipe } => {
            let mut app = new_app(AppState::new())?;
            app.search(&recipe, QuerySource::Picked).await.map_err(RecipeError::reported)?;
            app.show_alternatives(&ingredient).await.map_err(RecipeError::reported)?;
        }

        Commands::Convert { value, from, to } => {
            let mut app = new_app(AppState::new())?;
            app.convert_units(value, &from, &to).map_err(RecipeError::reported)?;
        }

        Commands::Scale { measure, from, to } => {
            if from == 0 || to == 0 {
                return Err(RecipeError::Input("人数は1以上で指定してください".into()));
            }
            println!("{}", scale_measure(&measure, to as f64 / from as f64));
        }

        Commands::Favorites { action } => {
            let mut app = new_app(AppState::new())?;
            match action.unwrap_or(FavoritesAction::List) {
                FavoritesAction::List => {
                    app.show_favorites();
                }
                FavoritesAction::Toggle { name } => {
                    app.search(&name, QuerySource::Picked).await.map_err(RecipeError::reported)?;
                    let now_favorite = app.toggle_favorite().map_err(RecipeError::reported)?;
                    println!(
                        "{}",
                        if now_favorite {
                            "✔ お気に入りに追加しました"
                        } else {
                            "✔ お気に入りから削除しました"
                        }
                    );
                }
                FavoritesAction::Remove { name } => {
                    if app.remove_favorite(&name).map_err(RecipeError::reported)? {
                        println!("✔ 削除しました: {}", name);
                    } else {
                        println!("お気に入りにありません: {}", name);
                    }
                }
            }
        }

        Commands::Interactive { mode } => {
            let mut state = AppState::new().with_filter(config.default_filter);
            state.mode = mode;
            let mut app = new_app(state)?;
            session::run_interactive(&mut app).await?;
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config.clone();

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API URLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  API URL: {}", config.api_url);
                println!("  実効 API URL: {}", config.api_url());
                println!("  デフォルトフィルタ: {}", config.default_filter);
                println!("  データ保存先: {}", config.data_dir()?.display());
            }
        }
    }

    Ok(())
}

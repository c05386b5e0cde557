//! Command-line front end for the reelscout discovery session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use reelscout_core::config::{ConfigLoader, ConfigLoaderOptions, DiscoveryConfig};
use reelscout_core::favorites::FavoriteChange;
use reelscout_core::persistence::JsonFileStore;
use reelscout_core::providers::TmdbCatalog;
use reelscout_core::session::{DiscoverySession, SessionBuilder};
use reelscout_core::trending::LocalTrendingBackend;
use reelscout_model::{FilterSet, MovieId, SortOption, UiGenre};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

const EARLIEST_YEAR: u16 = 1900;

#[derive(Parser, Debug)]
#[command(
    name = "reelscout",
    version,
    about = "Search, filter and browse a TMDB-style movie catalog"
)]
struct Cli {
    /// Path to a reelscout.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file loaded before reading the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the catalog with genre, year and sort filters
    Discover {
        /// Genre filter by id or name; repeat for several (matches any)
        #[arg(long = "genre")]
        genres: Vec<UiGenre>,

        /// Release year filter
        #[arg(long, value_parser = parse_year)]
        year: Option<u16>,

        /// Sort order, e.g. vote_average.desc (see `reelscout sorts`)
        #[arg(long, default_value_t = SortOption::PopularityDesc)]
        sort: SortOption,

        /// Result page, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Search the catalog by title
    Search {
        /// Search text, sent to the catalog as typed
        term: String,

        /// Result page, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show the detail record of a movie
    Details {
        /// Catalog movie id
        id: MovieId,
    },

    /// List favorited movies
    Favorites,

    /// Add a movie to favorites, or remove it if already present
    Favorite {
        /// Catalog movie id
        id: MovieId,
    },

    /// Show the most searched terms
    Trending,

    /// List the genres accepted by `discover --genre`
    Genres,

    /// List the sort orders accepted by `discover --sort`
    Sorts,
}

fn parse_year(raw: &str) -> Result<u16, String> {
    let year: u16 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a year"))?;
    let latest = u16::try_from(chrono::Local::now().year()).unwrap_or(u16::MAX);
    if (EARLIEST_YEAR..=latest).contains(&year) {
        Ok(year)
    } else {
        Err(format!("year must be between {EARLIEST_YEAR} and {latest}"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,reelscout_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Genres => {
            print!("{}", render::genres());
            return Ok(());
        }
        Command::Sorts => {
            print!("{}", render::sorts());
            return Ok(());
        }
        _ => {}
    }

    let config = load_config(&cli)?;
    run(cli.command, &config).await
}

fn load_config(cli: &Cli) -> Result<DiscoveryConfig> {
    let loaded = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    for warning in loaded.warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!("{} ({hint})", warning.message),
            None => warn!("{}", warning.message),
        }
    }
    debug!(
        config_path = ?loaded.config.metadata.config_path,
        data_dir = %loaded.config.storage.data_dir.display(),
        "configuration loaded"
    );
    Ok(loaded.config)
}

fn session_builder(config: &DiscoveryConfig) -> Result<SessionBuilder> {
    let store = Arc::new(
        JsonFileStore::open(&config.storage.data_dir)
            .context("failed to open the local data directory")?,
    );
    let catalog =
        Arc::new(TmdbCatalog::new(&config.catalog).context("failed to build the catalog client")?);
    let trending = Arc::new(LocalTrendingBackend::new(store.clone()));

    Ok(DiscoverySession::builder(catalog, trending, store).config(config.session.clone()))
}

async fn run(command: Command, config: &DiscoveryConfig) -> Result<()> {
    let builder = session_builder(config)?;

    match command {
        Command::Discover {
            genres,
            year,
            sort,
            page,
        } => {
            let filters = FilterSet::new()
                .with_genres(genres.iter().map(UiGenre::id))
                .with_year(year);
            let session = builder.filters(filters).sort(sort).page(page).build();
            list(&session).await
        }
        Command::Search { term, page } => {
            let session = builder.search(term).page(page).build();
            list(&session).await
        }
        Command::Details { id } => {
            let session = builder.build();
            let detail = fetch_detail(&session, id).await?;
            print!("{}", render::detail(&detail, session.is_favorite(id)));
            Ok(())
        }
        Command::Favorites => {
            let session = builder.build();
            print!("{}", render::favorites(&session.favorites()));
            Ok(())
        }
        Command::Favorite { id } => {
            let session = builder.build();
            let movie = match session.favorites().into_iter().find(|fav| fav.id == id) {
                Some(existing) => existing,
                None => fetch_detail(&session, id).await?.summary(),
            };
            let change = session
                .toggle_favorite(&movie)
                .context("failed to save favorites")?;
            match change {
                FavoriteChange::Added => println!("Added \"{}\" to favorites", movie.title),
                FavoriteChange::Removed => {
                    println!("Removed \"{}\" from favorites", movie.title)
                }
            }
            Ok(())
        }
        Command::Trending => {
            let session = builder.build();
            let entries = session.load_trending().await;
            print!("{}", render::trending(&entries));
            Ok(())
        }
        Command::Genres | Command::Sorts => Ok(()),
    }
}

async fn list(session: &DiscoverySession) -> Result<()> {
    session.refresh().await.context("catalog request task failed")?;
    let view = session.view();
    if let Some(message) = &view.error_message {
        bail!("{message}");
    }
    print!("{}", render::results(&view));
    Ok(())
}

async fn fetch_detail(
    session: &DiscoverySession,
    id: MovieId,
) -> Result<reelscout_model::MovieDetail> {
    let handle = session
        .select_movie(id)
        .ok_or_else(|| anyhow!("movie id must be a positive number"))?;
    handle.await.context("detail request task failed")?;

    let view = session.view();
    match view.detail_record() {
        Some(detail) => Ok(detail.clone()),
        None => bail!(
            "{}",
            view.detail_error.unwrap_or(reelscout_core::catalog::DETAIL_ERROR_MESSAGE)
        ),
    }
}

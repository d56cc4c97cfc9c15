use clap::{Parser, Subcommand};
use nearby_core::{Coordinate, RankedItem, SearchRequest, SearchResultItem};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nearby-cli")]
#[command(about = "Nearby item search command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a nearby search and print the ranked items as JSON
    Search {
        #[arg(long)]
        term: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Override the configured result limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check database connectivity
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("nearby-cli: no command given, try --help");
        return Ok(());
    };

    let config = nearby_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pool_config = nearby_db::PoolConfig::from_app_config(&config);
    let pool = nearby_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Search {
            term,
            lat,
            lng,
            limit,
        } => {
            let request = SearchRequest::new(term, Coordinate::new(lat, lng))?;
            let mut search_config = config.search;
            if let Some(limit) = limit {
                search_config.limit = limit;
            }
            let store = nearby_db::PgItemStore::new(pool);
            let ranked = nearby_core::search(&store, &request, &search_config).await?;
            println!("{}", render_results(ranked)?);
        }
        Commands::Ping => {
            nearby_db::ping(&pool).await?;
            println!("database ok");
        }
    }

    Ok(())
}

/// Pretty JSON in the same item shape the HTTP API returns.
fn render_results(ranked: Vec<RankedItem>) -> serde_json::Result<String> {
    let results: Vec<SearchResultItem> = ranked.into_iter().map(SearchResultItem::from).collect();
    serde_json::to_string_pretty(&results)
}

//! Ad-hoc catalog queries against the configured backing stores.
//!
//! Talks to the same stores the server does (configured via `VITRINE_*`
//! env vars / `.env`), through the same aggregation engine.

use clap::{Parser, Subcommand};
use vitrine_catalog::Catalog;
use vitrine_core::ListQuery;

#[derive(Debug, Parser)]
#[command(name = "vitrine-cli")]
#[command(about = "Unified catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products across all stores as one canonical page.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        /// Free-text search (stores without a search facility are skipped).
        #[arg(long)]
        search: Option<String>,
        /// Only new arrivals.
        #[arg(long)]
        new_arrivals: bool,
        /// Only discounted products.
        #[arg(long)]
        on_sale: bool,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// createdAt | price | mrp | discountPercent | title
        #[arg(long)]
        sort: Option<String>,
        /// asc | desc
        #[arg(long)]
        order: Option<String>,
    },
    /// Resolve one product by id, probing stores in priority order.
    Get { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = vitrine_core::load_app_config_from_env()?;
    let catalog = Catalog::from_config(&config)?;

    match cli.command {
        Commands::List {
            category,
            sub_category,
            search,
            new_arrivals,
            on_sale,
            page,
            limit,
            sort,
            order,
        } => {
            let query = ListQuery {
                category,
                sub_category,
                is_new_arrival: new_arrivals.then(|| "true".to_string()),
                on_sale: on_sale.then(|| "true".to_string()),
                search,
                category_id: None,
                page: page.map(|p| p.to_string()),
                limit: limit.map(|l| l.to_string()),
                sort_field: sort,
                sort_order: order,
            };
            let result = catalog.list_products(&query).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Get { id } => match catalog.find_by_id(&id).await {
            Some(product) => println!("{}", serde_json::to_string_pretty(&product)?),
            None => {
                eprintln!("product not found: {id}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

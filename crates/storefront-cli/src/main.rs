mod page;
mod render;

use std::io::Write;

use clap::{Parser, Subcommand};
use futures::future::join_all;
use storefront_catalog::CatalogClient;
use tracing_subscriber::EnvFilter;

use crate::page::{PageState, DETAIL_FAILED, LIST_FAILED};
use crate::render::{render_detail_page, render_list_page};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog from the terminal")]
struct Cli {
    /// Override the catalog API root (otherwise `STOREFRONT_CATALOG_BASE_URL`).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog's products.
    List {
        /// Print normalized items as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show product details by identifier.
    Show {
        #[arg(required = true, num_args = 1.., value_parser = clap::value_parser!(u64).range(1..))]
        ids: Vec<u64>,

        /// Print normalized items as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(base_url) = cli.base_url {
        config = config.with_catalog_base_url(base_url)?;
    }
    tracing::debug!(env = %config.env, base_url = %config.catalog_base_url, "starting");

    let client = CatalogClient::from_config(&config)?;

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let failed = match cli.command {
        Some(Commands::List { json }) => run_list(&client, json, &mut out, &mut err).await?,
        Some(Commands::Show { ids, json }) => {
            run_show(&client, &ids, json, &mut out, &mut err).await?
        }
        None => {
            println!("storefront: run `storefront list` or `storefront show <ID>`");
            false
        }
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Renders the catalog page to `out`, with progress and errors on `err`.
/// Returns `true` if the page ended in an error.
async fn run_list(
    client: &CatalogClient,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    writeln!(err, "{}", render_list_page(&PageState::Loading))?;
    let state = PageState::from_result(client.list_items().await, LIST_FAILED);

    match (&state, json) {
        (PageState::Loaded(items), true) => {
            writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
        }
        (PageState::Error(_), _) => writeln!(err, "{}", render_list_page(&state))?,
        _ => writeln!(out, "{}", render_list_page(&state))?,
    }
    Ok(state.is_error())
}

/// Renders one detail page per identifier. The fetches run concurrently and
/// independently; one failing does not affect the others. Returns `true` if
/// any page ended in an error.
async fn run_show(
    client: &CatalogClient,
    ids: &[u64],
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    writeln!(err, "{}", render_detail_page(&PageState::Loading))?;
    let pages = join_all(ids.iter().map(|&id| async move {
        let state = PageState::from_result(client.get_item(id).await, DETAIL_FAILED);
        (id, state)
    }))
    .await;

    let mut failed = false;
    for (id, state) in &pages {
        match (state, json) {
            (PageState::Loaded(item), true) => {
                writeln!(out, "{}", serde_json::to_string_pretty(item)?)?;
            }
            (PageState::Error(_), _) => {
                writeln!(err, "[{id}] {}", render_detail_page(state))?;
                failed = true;
            }
            _ => writeln!(out, "{}", render_detail_page(state))?,
        }
    }
    Ok(failed)
}

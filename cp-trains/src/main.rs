use anyhow::Context;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cp_trains::config::AppConfig;
use cp_trains::favorites::FavoritesStore;
use cp_trains::http::HttpFetcher;
use cp_trains::mcp::{AppState, CpTrainsServer};
use cp_trains::schedule::ScheduleClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cp_trains=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = AppConfig::from_env()?;

    let fetcher = HttpFetcher::new(&config.http).context("failed to create HTTP client")?;
    let resolver = config
        .station_resolver(fetcher.clone())
        .context("failed to set up station resolver")?;
    let schedule = ScheduleClient::new(fetcher, config.schedule.clone())
        .context("failed to create schedule client")?;
    let favorites = FavoritesStore::new(config.favorites.clone());

    info!(
        resolver = resolver.strategy(),
        favorites = %favorites.path().display(),
        "starting CP trains MCP server on stdio"
    );

    let state = AppState::new(resolver, schedule, favorites);
    let service = CpTrainsServer::new(state).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}

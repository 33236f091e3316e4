use shakesearch::app::build_router;
use shakesearch::config::Config;
use shakesearch::corpus::store::CorpusStore;
use shakesearch::error::ShakeSearchError;
use shakesearch::search::engine::Searcher;
use shakesearch::sections::builder::SectionMapBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting with {:?}", config);

    // 1. Corpus + suffix array:
    let store = CorpusStore::load(&config.corpus_path)
        .map_err(|e| abort_startup("loading the corpus", e))?;

    // 2. Section map:
    let sections = SectionMapBuilder::new()
        .boundary(config.contents_boundary)
        .build(&store)
        .map_err(|e| abort_startup("building the section map", e))?;
    if let Some(first) = sections.first_offset() {
        tracing::info!("{} sections, first at byte {}", sections.len(), first);
    }

    // 3. HTTP Router:
    let searcher = Arc::new(Searcher::new(store, sections));
    let app = build_router(searcher, &config.static_dir);

    // 4. Start HTTP server:
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}...", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Logs a startup failure. Nothing is served until both the corpus and the
/// section map exist, so every error here ends the process.
fn abort_startup(stage: &str, err: ShakeSearchError) -> anyhow::Error {
    if err.is_fatal() {
        tracing::error!("Startup aborted while {}: {}", stage, err);
    } else {
        tracing::error!("Unexpected error while {}: {}", stage, err);
    }
    err.into()
}

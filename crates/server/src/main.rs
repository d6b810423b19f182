use config::AuctionConfig;
use server::{app, logging, source, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AuctionConfig::from_env()?;
    logging::init(&config.log.level, config.log.json)?;

    let source = source::build_source(&config)?;
    let state = AppState::new(config.clone(), source);

    let addr = format!("{}:{}", config.http.bind_host, config.http.port);
    let app = app::create_app(state);

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Auction source: {:?}", config.chain.source);
    tracing::info!("RPC URL: {}", config.chain.rpc_url);
    tracing::info!("Contract address: {}", config.chain.contract_address);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

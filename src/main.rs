use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use offer_recommender::{
    catalog::load_catalog,
    config::Config,
    routes::{create_router, AppState},
    services::{
        ranking::{DisabledRanker, OfferRanker, OpenAiRanker},
        RecommendationEngine,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offer_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Static data is required; refuse to start without it
    let catalog = Arc::new(load_catalog(&config.data_dir)?);

    let ranker: Arc<dyn OfferRanker> = match &config.openai_api_key {
        Some(api_key) => Arc::new(OpenAiRanker::new(
            api_key.clone(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
        )),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, recommendations will use distance ordering");
            Arc::new(DisabledRanker)
        }
    };

    tracing::info!(
        provider = ranker.name(),
        model = %config.openai_model,
        "Ranking provider configured"
    );

    let state = Arc::new(AppState::new(RecommendationEngine::new(catalog, ranker)));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

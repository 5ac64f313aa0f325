mod db;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://travel_guide.db".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let llm_config = llm::config::LlmConfig::from_env();
    let gemini = llm::gemini::GeminiClient::new(&llm_config).expect("LLM client build failed");
    tracing::info!(model = gemini.model(), "Gemini client initialized");

    let state = state::AppState::from_env(pool, Arc::new(gemini));
    if state.default_api_key.is_none() && !state.require_auth {
        tracing::warn!("DEFAULT_GEMINI_API_KEY not set — requests must supply a bearer token");
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cityguide listening");
    axum::serve(listener, app).await.expect("server failed");
}

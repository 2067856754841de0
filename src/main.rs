use gateway::config::{EnvSnapshot, Settings};
use gateway::server::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let config = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.server.bind_addr();
    let app_state = AppState::new(config, EnvSnapshot::capture());
    let app = server::create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Gizmo gateway running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

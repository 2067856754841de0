use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::sync::Arc;

use crate::server::AppState;

mod health;
mod info;
mod parse;

pub use health::HealthStatus;
pub use info::GatewayInfo;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::health))
        .route("/healthz", get(health::health))
        .route("/info", get(info::info))
        .route(
            "/parse",
            get(parse::parse_get)
                .post(parse::parse_post)
                // 控制台可能整段粘贴大文本，/parse 不设 body 上限
                .layer(DefaultBodyLimit::disable()),
        )
}

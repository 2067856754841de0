use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct GatewayInfo {
    pub openai_enabled: bool,
    /// Names only, never values.
    pub env_vars: Vec<String>,
}

pub async fn info(State(app_state): State<Arc<AppState>>) -> Json<GatewayInfo> {
    Json(GatewayInfo {
        openai_enabled: app_state.openai_enabled(),
        env_vars: app_state.env.present_vars.clone(),
    })
}

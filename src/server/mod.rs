pub mod handlers;
pub mod payload;
pub(crate) mod util;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{EnvSnapshot, Settings};
use crate::providers::{CompletionClient, OpenAIProvider};

#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub env: EnvSnapshot,
    /// `None` 表示回显模式；启动后不再变化
    pub completion: Option<Arc<dyn CompletionClient>>,
}

impl AppState {
    pub fn new(config: Settings, env: EnvSnapshot) -> Self {
        let completion = build_completion_client(&config, &env);
        Self {
            config,
            env,
            completion,
        }
    }

    pub fn openai_enabled(&self) -> bool {
        self.completion.is_some()
    }
}

// 凭据缺失或客户端构造失败都退化为回显模式，不会中断启动
fn build_completion_client(
    config: &Settings,
    env: &EnvSnapshot,
) -> Option<Arc<dyn CompletionClient>> {
    let Some(api_key) = env.openai_api_key.as_deref() else {
        tracing::info!("OPENAI_API_KEY not set; /parse runs in echo mode");
        return None;
    };

    match OpenAIProvider::new(&config.completion.base_url, api_key) {
        Ok(provider) => {
            tracing::info!(
                "OpenAI delegation enabled via {} (key {})",
                config.completion.base_url,
                util::mask_key(api_key)
            );
            Some(Arc::new(provider))
        }
        Err(e) => {
            tracing::warn!("Failed to build OpenAI client, falling back to echo mode: {}", e);
            None
        }
    }
}

pub fn create_app(app_state: AppState) -> Router {
    // CORS 全开放（前端控制台联调用；生产应收敛来源）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    handlers::routes()
        .with_state(Arc::new(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

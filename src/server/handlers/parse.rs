use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
};
use std::borrow::Cow;
use std::sync::Arc;

use crate::server::AppState;
use crate::server::payload::{InboundPayload, ParseQuery, ParseReply};

// GET 变体只回显，不调用补全接口
pub async fn parse_get(query: Result<Query<ParseQuery>, QueryRejection>) -> Json<ParseReply> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    match query.message() {
        Some(msg) => Json(ParseReply::echo(msg)),
        None => Json(ParseReply::no_query_param()),
    }
}

/// Always answers 200; failures are reported inside the reply body.
pub async fn parse_post(
    State(app_state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<ParseReply> {
    // 读取 body 失败与无法解析同样处理，按 `{}` 继续
    let body = body.unwrap_or_else(|e| {
        tracing::debug!("Failed to read /parse body, treating as empty: {}", e);
        Bytes::new()
    });
    let payload = InboundPayload::from_body(&body);

    let Some(text) = payload.resolve_text().map(Cow::into_owned) else {
        return Json(ParseReply::unknown(payload.into_value()));
    };

    let Some(client) = app_state.completion.as_ref() else {
        return Json(ParseReply::echo(&text));
    };

    match client.complete(&text).await {
        Ok(completion) => Json(ParseReply::text(completion)),
        Err(e) => {
            tracing::warn!("Completion failed, replying with echo fallback: {}", e);
            Json(ParseReply::fallback(&text, e))
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Object fields consulted for the user text, highest priority first.
pub const TEXT_FIELDS: [&str; 4] = ["command", "prompt", "message", "text"];

/// POST `/parse` body after decoding.
///
/// Clients send either a bare JSON string or an object carrying one of
/// [`TEXT_FIELDS`]. Anything else (arrays, numbers, unknown keys) is kept as-is
/// so it can be echoed back under `received`.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundPayload {
    Text(String),
    Other(Value),
}

impl InboundPayload {
    /// 解析失败或空 body 一律视为 `{}`
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::String(s)) => Self::Text(s),
            Ok(value) => Self::Other(value),
            Err(e) => {
                tracing::debug!("Unparseable /parse body treated as empty object: {}", e);
                Self::Other(Value::Object(Map::new()))
            }
        }
    }

    /// First truthy value in priority order: bare string, then each text field.
    ///
    /// Strings are taken as-is; other truthy values (non-zero numbers, `true`,
    /// non-empty arrays and objects) are rendered as compact JSON.
    pub fn resolve_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
            Self::Text(_) => None,
            Self::Other(Value::Object(map)) => TEXT_FIELDS
                .iter()
                .filter_map(|field| map.get(*field))
                .find(|value| is_truthy(value))
                .map(render_text),
            Self::Other(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Text(s) => Value::String(s),
            Self::Other(value) => value,
        }
    }
}

// null / false / 0 / "" / [] / {} 均视为未提供
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseQuery {
    pub text: Option<String>,
    pub q: Option<String>,
}

impl ParseQuery {
    pub fn message(&self) -> Option<&str> {
        [self.text.as_deref(), self.q.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

impl ParseReply {
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: None,
            received: None,
        }
    }

    pub fn echo(text: &str) -> Self {
        Self::text(format!("echo: {}", text))
    }

    pub fn fallback(text: &str, error: impl ToString) -> Self {
        Self {
            reply: format!("echo (fallback due to OpenAI error): {}", text),
            error: Some(error.to_string()),
            received: None,
        }
    }

    pub fn unknown(received: Value) -> Self {
        Self {
            reply: "unknown".to_string(),
            error: None,
            received: Some(received),
        }
    }

    pub fn no_query_param() -> Self {
        Self::text("unknown (no query param)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> InboundPayload {
        InboundPayload::from_body(value.to_string().as_bytes())
    }

    #[test]
    fn bare_string_body_is_text() {
        let p = InboundPayload::from_body(br#""just a string""#);
        assert_eq!(p, InboundPayload::Text("just a string".into()));
        assert_eq!(p.resolve_text().as_deref(), Some("just a string"));
    }

    #[test]
    fn each_field_resolves_alone() {
        for field in TEXT_FIELDS {
            let p = payload(json!({ field: "lights on" }));
            assert_eq!(p.resolve_text().as_deref(), Some("lights on"), "field {field}");
        }
    }

    #[test]
    fn earlier_fields_win() {
        let p = payload(json!({"text": "t", "message": "m", "prompt": "p", "command": "c"}));
        assert_eq!(p.resolve_text().as_deref(), Some("c"));

        let p = payload(json!({"text": "t", "message": "m"}));
        assert_eq!(p.resolve_text().as_deref(), Some("m"));
    }

    #[test]
    fn falsy_fields_fall_through() {
        let p = payload(json!({"command": "", "prompt": 0, "message": null, "text": "fallthrough"}));
        assert_eq!(p.resolve_text().as_deref(), Some("fallthrough"));

        let p = payload(json!({"command": false, "prompt": [], "message": {}, "text": "last"}));
        assert_eq!(p.resolve_text().as_deref(), Some("last"));

        let p = payload(json!({"command": 0.0, "text": false}));
        assert_eq!(p.resolve_text().as_deref(), None);
    }

    #[test]
    fn truthy_non_string_fields_render_as_text() {
        assert_eq!(payload(json!({"command": 5})).resolve_text().as_deref(), Some("5"));
        assert_eq!(payload(json!({"prompt": 1.5})).resolve_text().as_deref(), Some("1.5"));
        assert_eq!(payload(json!({"message": true})).resolve_text().as_deref(), Some("true"));
        assert_eq!(
            payload(json!({"text": ["on", "off"]})).resolve_text().as_deref(),
            Some(r#"["on","off"]"#)
        );
        assert_eq!(
            payload(json!({"command": {"room": "kitchen"}, "text": "ignored"}))
                .resolve_text()
                .as_deref(),
            Some(r#"{"room":"kitchen"}"#)
        );
    }

    #[test]
    fn unparseable_body_is_empty_object() {
        assert_eq!(
            InboundPayload::from_body(b"\xff not json"),
            InboundPayload::Other(json!({}))
        );
        assert_eq!(InboundPayload::from_body(b""), InboundPayload::Other(json!({})));
    }

    #[test]
    fn nothing_resolves_from_empty_string_array_or_unknown_keys() {
        assert_eq!(payload(json!("")).resolve_text().as_deref(), None);
        assert_eq!(payload(json!(["command", "hi"])).resolve_text().as_deref(), None);
        assert_eq!(payload(json!({"foo": "bar"})).resolve_text().as_deref(), None);
        assert_eq!(payload(json!(7)).resolve_text().as_deref(), None);
    }

    #[test]
    fn query_prefers_text_over_q() {
        let query = ParseQuery {
            text: Some("a".into()),
            q: Some("b".into()),
        };
        assert_eq!(query.message(), Some("a"));

        let query = ParseQuery {
            text: Some(String::new()),
            q: Some("b".into()),
        };
        assert_eq!(query.message(), Some("b"));

        assert_eq!(ParseQuery::default().message(), None);
    }

    #[test]
    fn reply_omits_absent_fields() {
        let json = serde_json::to_string(&ParseReply::echo("hi")).unwrap();
        assert_eq!(json, r#"{"reply":"echo: hi"}"#);

        let json = serde_json::to_string(&ParseReply::unknown(json!({}))).unwrap();
        assert_eq!(json, r#"{"reply":"unknown","received":{}}"#);

        let json = serde_json::to_string(&ParseReply::fallback("hi", "boom")).unwrap();
        assert_eq!(
            json,
            r#"{"reply":"echo (fallback due to OpenAI error): hi","error":"boom"}"#
        );
    }
}

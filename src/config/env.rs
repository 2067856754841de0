pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

// /info 中允许暴露名称的环境变量（仅名称，从不返回取值）
pub const KNOWN_ENV_VARS: [&str; 2] = [OPENAI_API_KEY, "RUST_LOG"];

/// Process environment as seen once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub openai_api_key: Option<String>,
    pub present_vars: Vec<String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let present_vars = KNOWN_ENV_VARS
            .iter()
            .filter(|name| non_blank(name).is_some())
            .map(|name| name.to_string())
            .collect();

        Self {
            openai_api_key: non_blank(OPENAI_API_KEY).map(|v| v.trim().to_string()),
            present_vars,
        }
    }
}

pub mod openai;

use async_trait::async_trait;

use crate::error::Result;

pub use openai::OpenAIProvider;

/// 补全后端：给定已解析的用户文本，返回一条补全文本或失败原因
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, text: &str) -> Result<String>;
}

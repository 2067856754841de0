pub mod client;
pub mod types;

pub use client::OpenAIProvider;
pub use types::{
    COMPLETION_MODEL, ChatCompletionRequest, ChatCompletionResponse, SYSTEM_PROMPT, TEMPERATURE,
    build_chat_request,
};

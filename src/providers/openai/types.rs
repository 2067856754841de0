// Chat Completions 相关类型统一使用 async-openai
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
pub use async_openai::types::{
    CreateChatCompletionRequest as ChatCompletionRequest,
    CreateChatCompletionResponse as ChatCompletionResponse,
};

use crate::error::Result;

pub const SYSTEM_PROMPT: &str = "You are Gizmo, a concise, helpful assistant.";
pub const COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.7;

/// One system instruction plus the resolved user text; no history is carried.
pub fn build_chat_request(text: &str) -> Result<ChatCompletionRequest> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(COMPLETION_MODEL)
        .temperature(TEMPERATURE)
        .messages([
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(text)
                .build()?
                .into(),
        ])
        .build()?;
    Ok(request)
}

/// 取第一个 choice 的文本；没有内容时返回 None
pub fn first_completion_text(response: &ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
}

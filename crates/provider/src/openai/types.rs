//! Wire types for the chat completions API, shared with Azure.
use rchat_types::completion::{Content, Request, Response, StopReason, Usage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// `model` and `temperature` are the client's defaults; the request may override both.
    pub fn new(request: &Request, model: Option<String>, temperature: f32) -> Self {
        Self {
            model: request.model.clone().or(model),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str().to_string(),
                    content: Some(m.content.clone()),
                })
                .collect(),
            temperature: request.temperature.unwrap_or(temperature),
            max_tokens: request.max_tokens,
            stop: request.stop_sequences.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub index: usize,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<ChatUsage>,
}

pub fn stop_reason(finish_reason: &str) -> StopReason {
    match finish_reason {
        "stop" => StopReason::EndTurn,
        "length" => StopReason::MaxTokens,
        "content_filter" => StopReason::ContentFilter,
        "tool_calls" | "function_call" => StopReason::ToolUse,
        _ => StopReason::Other,
    }
}

impl From<ChatResponse> for Response {
    fn from(response: ChatResponse) -> Self {
        let choice = response.choices.into_iter().min_by_key(|c| c.index);
        let stop_reason = choice
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(stop_reason);
        let content = choice
            .and_then(|c| c.message.content)
            .map(|text| vec![Content::text(text)])
            .unwrap_or_default();
        Self {
            id: response.id,
            model: response.model,
            content,
            stop_reason,
            usage: response
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                })
                .unwrap_or_default(),
        }
    }
}

//! Module for types used in the API.
use rchat_types::completion::{Content, Request, Response, Usage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxTokens,
    StopSequence,
    EndTurn,
    ToolUse,
    #[serde(other)]
    Other,
}

impl From<StopReason> for rchat_types::completion::StopReason {
    fn from(reason: StopReason) -> Self {
        match reason {
            StopReason::MaxTokens => Self::MaxTokens,
            StopReason::StopSequence => Self::StopSequence,
            StopReason::EndTurn => Self::EndTurn,
            StopReason::ToolUse => Self::ToolUse,
            StopReason::Other => Self::Other,
        }
    }
}

// Messages API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessagesRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub temperature: f32,
}

impl MessagesRequest {
    /// System messages move to the top-level `system` field.
    pub fn new(request: &Request, model: &str, temperature: f32) -> Self {
        let (system, messages) = request.split_system();
        Self {
            messages: messages
                .into_iter()
                .map(|m| Message {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            model: request.model.clone().unwrap_or_else(|| model.to_string()),
            max_tokens: request.max_tokens,
            stop_sequences: request.stop_sequences.clone(),
            system,
            temperature: request.temperature.unwrap_or(temperature),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagesUsage {
    input_tokens: usize,
    output_tokens: usize,
}

impl From<MessagesUsage> for Usage {
    fn from(usage: MessagesUsage) -> Self {
        Self {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct MessagesResponse {
    pub stop_reason: Option<StopReason>,
    pub stop_sequence: Option<String>,
    pub content: Vec<ContentBlock>,
    pub model: String,
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub usage: MessagesUsage,
}

impl From<MessagesResponse> for Response {
    fn from(response: MessagesResponse) -> Self {
        Self {
            id: response.id,
            model: response.model,
            content: response
                .content
                .into_iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(Content::text(text)),
                    ContentBlock::Other => None,
                })
                .collect(),
            stop_reason: response.stop_reason.map(Into::into),
            usage: response.usage.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rchat_types::message::Message as ChatMessage;

    use super::*;

    #[test]
    fn test_system_is_lifted() {
        let request = Request::builder()
            .message(ChatMessage::system("Answer in one word."))
            .message("A human walks into a bar")
            .message(ChatMessage::assistant("Ouch."))
            .build();
        let body = MessagesRequest::new(&request, "claude-2", 0.7);
        assert_eq!(body.system.as_deref(), Some("Answer in one word."));
        assert_eq!(
            body.messages,
            vec![
                Message {
                    role: "user".into(),
                    content: "A human walks into a bar".into()
                },
                Message {
                    role: "assistant".into(),
                    content: "Ouch.".into()
                },
            ]
        );
        assert_eq!(body.model, "claude-2");

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("stop_sequences").is_none());
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn test_response_conversion() {
        let raw = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-2.1",
            "content": [
                {"type": "text", "text": "The bartender says, "},
                {"type": "tool_use", "id": "toolu_01", "name": "get_weather", "input": {}},
                {"type": "text", "text": "'What can I get you?'"}
            ],
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 12, "output_tokens": 9}
        }"#;
        let response: Response = serde_json::from_str::<MessagesResponse>(raw)
            .unwrap()
            .into();
        assert_eq!(response.content.len(), 2);
        assert_eq!(
            response.text(),
            "The bartender says, 'What can I get you?'"
        );
        assert_eq!(
            response.stop_reason,
            Some(rchat_types::completion::StopReason::EndTurn)
        );
        assert_eq!(response.usage.output_tokens, 9);
    }
}

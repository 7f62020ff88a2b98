use rchat_types::completion::{Content as TextContent, Request, Response, StopReason, Usage};
use rchat_types::message::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Gemini calls the assistant `model` and takes system text separately.
    pub fn new(request: &Request, temperature: f32) -> Self {
        let (system, messages) = request.split_system();
        Self {
            contents: messages
                .into_iter()
                .map(|m| {
                    let role = match m.role {
                        Role::Assistant => "model",
                        _ => "user",
                    };
                    Content::text(Some(role), &m.content)
                })
                .collect(),
            system_instruction: system.map(|text| Content::text(None, &text)),
            generation_config: GenerationConfig {
                temperature: request.temperature.unwrap_or(temperature),
                max_output_tokens: request.max_tokens,
                stop_sequences: request.stop_sequences.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: usize,
    #[serde(default)]
    pub candidates_token_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
    pub response_id: Option<String>,
}

pub fn stop_reason(finish_reason: &str) -> StopReason {
    match finish_reason {
        "STOP" => StopReason::EndTurn,
        "MAX_TOKENS" => StopReason::MaxTokens,
        "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => {
            StopReason::ContentFilter
        }
        _ => StopReason::Other,
    }
}

impl GenerateContentResponse {
    /// `model` fills in when the response carries no model version.
    pub fn into_response(self, model: &str) -> Response {
        let candidate = self.candidates.into_iter().next();
        let stop_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(stop_reason);
        let content = candidate
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .map(TextContent::text)
                    .collect()
            })
            .unwrap_or_default();
        let usage = self.usage_metadata.unwrap_or_default();
        Response {
            id: self.response_id.unwrap_or_default(),
            model: self.model_version.unwrap_or_else(|| model.to_string()),
            content,
            stop_reason,
            usage: Usage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rchat_types::message::Message;

    use super::*;

    #[test]
    fn test_request_roles() {
        let request = Request::builder()
            .message(Message::system("Reply in Kannada."))
            .message("how is bangalore?")
            .message(Message::assistant("Pleasant."))
            .build();
        let json = serde_json::to_value(GenerateContentRequest::new(&request, 0.7)).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][1]["parts"][0]["text"], "Pleasant.");
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "Reply in Kannada."
        );
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_response_conversion() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Mild, "}, {"text": "with light showers."}]},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 7, "totalTokenCount": 12},
            "modelVersion": "gemini-1.5-pro-002"
        }"#;
        let response = serde_json::from_str::<GenerateContentResponse>(raw)
            .unwrap()
            .into_response("gemini-pro");
        assert_eq!(response.text(), "Mild, with light showers.");
        assert_eq!(response.model, "gemini-1.5-pro-002");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.usage.input_tokens, 5);
        assert_eq!(response.usage.output_tokens, 7);
    }

    #[test]
    fn test_blocked_response() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response = serde_json::from_str::<GenerateContentResponse>(raw)
            .unwrap()
            .into_response("gemini-pro");
        assert!(response.content.is_empty());
        assert_eq!(response.model, "gemini-pro");
        assert_eq!(response.stop_reason, Some(StopReason::ContentFilter));
    }
}

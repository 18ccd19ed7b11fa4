use serde::{Deserialize, Serialize};
use std::time::Duration;
use zeroize::Zeroizing;

use crate::config::ModelVariant;
use crate::errors::BetError;

/// Hosted endpoint for the text-generation service.
pub const RESPONSES_ENDPOINT: &str = "https://api.openai.com/v1/responses";

/// Per-request deadline. Web-search-augmented calls routinely take tens of
/// seconds, so this is deliberately generous.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolSpec>>,
}

#[derive(Debug, Serialize)]
struct ToolSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>, // reasoning and web_search_call items carry none
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String, // refusal parts use a different field, leave it empty
}

/// Client for the hosted model service.
///
/// Cheap to clone: the inner reqwest client is reference counted, so each
/// spawned fetch task can carry its own copy.
#[derive(Clone)]
pub struct ResponsesClient {
    api_key: Zeroizing<String>,
    model: ModelVariant,
    client: reqwest::Client,
}

impl ResponsesClient {
    pub fn new(api_key: Zeroizing<String>, model: ModelVariant) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bestbet/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            api_key,
            model,
            client,
        }
    }

    pub fn model(&self) -> ModelVariant {
        self.model
    }

    /// Same credential and connection pool, different model. Used when the
    /// user switches variants mid-session.
    pub fn with_model(&self, model: ModelVariant) -> Self {
        Self {
            api_key: self.api_key.clone(),
            model,
            client: self.client.clone(),
        }
    }

    /// Send one prompt and return the reply's concatenated output text.
    ///
    /// `web_search` attaches the search tool so the model can ground its
    /// answer in current results. No retries: a failed call surfaces as a
    /// single typed error for the caller to report.
    pub async fn generate(&self, prompt: &str, web_search: bool) -> Result<String, BetError> {
        let body = request_body(self.model.as_str(), prompt, web_search);
        let resp = self
            .client
            .post(RESPONSES_ENDPOINT)
            .bearer_auth(self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &body_text));
        }

        let reply: ResponsesReply = resp.json().await.map_err(transport_error)?;
        let text = collect_output_text(&reply);
        if text.trim().is_empty() {
            return Err(BetError::EmptyResponse(format!(
                "{} returned no output text",
                self.model.as_str()
            )));
        }
        Ok(text)
    }
}

fn request_body<'a>(model: &'a str, input: &'a str, web_search: bool) -> ResponsesRequest<'a> {
    ResponsesRequest {
        model,
        input,
        tools: web_search.then(|| vec![ToolSpec { kind: "web_search" }]),
    }
}

/// Concatenate the output_text parts of every message item, in order.
fn collect_output_text(reply: &ResponsesReply) -> String {
    reply
        .output
        .iter()
        .filter(|item| item.kind == "message")
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("")
}

fn transport_error(err: reqwest::Error) -> BetError {
    if err.is_timeout() {
        BetError::RequestTimeout(REQUEST_TIMEOUT_SECS)
    } else if err.is_connect() {
        BetError::Network(err.to_string())
    } else if err.is_decode() {
        BetError::EmptyResponse(err.to_string())
    } else {
        BetError::Network(err.to_string())
    }
}

fn classify_status(status: u16, body: &str) -> BetError {
    let message = error_message(body);
    match status {
        401 | 403 => BetError::AuthenticationFailed(message),
        429 => BetError::RateLimited(message),
        500..=599 => BetError::ServerError(status, message),
        _ => BetError::Generic(format!("unexpected status {}: {}", status, message)),
    }
}

/// Pull the human-readable message out of an error body, falling back to
/// the raw text when the body is not the usual {"error": {...}} JSON.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no detail provided".to_string();
    }
    let mut message: String = trimmed.chars().take(200).collect();
    if message.len() < trimmed.len() {
        message.push_str("...");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_without_tools() {
        let body = request_body("gpt-5", "hello", false);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-5");
        assert_eq!(json["input"], "hello");
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_request_body_with_web_search() {
        let body = request_body("gpt-5", "find games", true);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["tools"][0]["type"], "web_search");
    }

    #[test]
    fn test_collect_output_text_joins_message_parts() {
        let raw = r#"{
            "id": "resp_abc",
            "object": "response",
            "output": [
                {"id": "rs_1", "type": "reasoning", "summary": []},
                {"id": "ws_1", "type": "web_search_call", "status": "completed"},
                {"id": "msg_1", "type": "message", "role": "assistant", "content": [
                    {"type": "output_text", "text": "1) Winner: Team B\n", "annotations": []},
                    {"type": "output_text", "text": "2) Winner: Team D", "annotations": []}
                ]}
            ]
        }"#;
        let reply: ResponsesReply = serde_json::from_str(raw).unwrap();
        assert_eq!(
            collect_output_text(&reply),
            "1) Winner: Team B\n2) Winner: Team D"
        );
    }

    #[test]
    fn test_collect_output_text_skips_non_text_parts() {
        let raw = r#"{
            "output": [
                {"type": "message", "role": "assistant", "content": [
                    {"type": "refusal", "refusal": "cannot help"},
                    {"type": "output_text", "text": "partial answer"}
                ]}
            ]
        }"#;
        let reply: ResponsesReply = serde_json::from_str(raw).unwrap();
        assert_eq!(collect_output_text(&reply), "partial answer");
    }

    #[test]
    fn test_collect_output_text_empty_output() {
        let reply: ResponsesReply = serde_json::from_str(r#"{"output": []}"#).unwrap();
        assert_eq!(collect_output_text(&reply), "");
        let reply: ResponsesReply = serde_json::from_str("{}").unwrap();
        assert_eq!(collect_output_text(&reply), "");
    }

    #[test]
    fn test_classify_status_auth() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        match classify_status(401, body) {
            BetError::AuthenticationFailed(message) => {
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("wrong classification: {:?}", other),
        }
    }

    #[test]
    fn test_classify_status_rate_limit() {
        assert!(matches!(
            classify_status(429, r#"{"error": {"message": "Rate limit reached"}}"#),
            BetError::RateLimited(_)
        ));
    }

    #[test]
    fn test_classify_status_server_error() {
        match classify_status(503, "upstream unavailable") {
            BetError::ServerError(status, message) => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("wrong classification: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_fallback_on_plain_body() {
        assert_eq!(error_message("  gateway exploded  "), "gateway exploded");
        assert_eq!(error_message(""), "no detail provided");
    }

    #[test]
    fn test_with_model_swaps_variant_only() {
        let client =
            ResponsesClient::new(Zeroizing::new("sk-test".to_string()), ModelVariant::Gpt5);
        let swapped = client.with_model(ModelVariant::Gpt5Nano);
        assert_eq!(swapped.model(), ModelVariant::Gpt5Nano);
        assert_eq!(client.model(), ModelVariant::Gpt5);
    }
}

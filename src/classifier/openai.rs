//! OpenAI-backed intent classifier
//!
//! Sends one system-role chat completion per message and parses the reply
//! as strict JSON. The reply is data, never code: anything that does not
//! deserialize into [`MessageAnalysis`] is rejected as a malformed reply.

use super::{ClassifierError, IntentClassifier, MessageAnalysis};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI chat completions endpoint
pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(30);

/// Classifier backed by the OpenAI chat completions API
pub struct OpenAiClassifier {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClassifier {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(OPENAI_CHAT_URL, api_key, model)
    }

    /// Create a classifier against a custom endpoint (used by tests)
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(CLASSIFIER_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl IntentClassifier for OpenAiClassifier {
    async fn analyze(&self, message: &str) -> Result<MessageAnalysis, ClassifierError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "system",
                content: build_prompt(message),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ClassifierError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Http(status));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(ClassifierError::Request)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ClassifierError::EmptyReply)?;

        parse_reply(&content)
    }
}

/// Parse the model's reply content into a [`MessageAnalysis`].
///
/// Models habitually wrap JSON in markdown fences; those are stripped before
/// strict deserialization. Everything else is rejected.
fn parse_reply(content: &str) -> Result<MessageAnalysis, ClassifierError> {
    let json = strip_code_fence(content);
    serde_json::from_str(json).map_err(|e| ClassifierError::MalformedReply(e.to_string()))
}

/// Remove a surrounding ``` or ```json fence, if present
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn build_prompt(message: &str) -> String {
    format!(
        r#"Your name is Pythia. You are the price oracle of the Pyth Network. You speak truth and only truth.
You are a helpful assistant that can answer questions and provide information.
For now you tell the prices if you feel they have been asked.

Analyze the following message:
1. Determine if it is asking for a price.
2. If yes, extract the symbols/tickers mentioned and convert them to their standard upper-case form.
3. If no, provide a friendly response to continue the conversation.

Message: "{message}"

Reply with a single JSON object and nothing else, using exactly these keys:
{{
    "is_price_request": true or false,
    "tickers": ["SYMBOL1", "SYMBOL2"],
    "chat_response": "response if not a price request, otherwise an empty string"
}}"#
    )
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_reply_plain_json() {
        let analysis = parse_reply(
            r#"{"is_price_request": true, "tickers": ["BTC", "ETH"], "chat_response": ""}"#,
        )
        .unwrap();
        assert!(analysis.is_price_request);
        assert_eq!(analysis.tickers, vec!["BTC", "ETH"]);
    }

    #[test]
    fn test_parse_reply_fenced_json() {
        let content = "```json\n{\"is_price_request\": false, \"tickers\": [], \"chat_response\": \"Hi!\"}\n```";
        let analysis = parse_reply(content).unwrap();
        assert!(!analysis.is_price_request);
        assert_eq!(analysis.chat_response, "Hi!");
    }

    #[test]
    fn test_parse_reply_python_literals_rejected() {
        // The original service eval'd replies shaped like this; we refuse them
        let content = r#"{"is_price_request": True, "tickers": [], "chat_response": "hello"}"#;
        assert!(matches!(
            parse_reply(content),
            Err(ClassifierError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_reply_code_rejected() {
        let content = r#"__import__('os').system('rm -rf /')"#;
        assert!(matches!(
            parse_reply(content),
            Err(ClassifierError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_reply_missing_key_rejected() {
        let content = r#"{"is_price_request": true}"#;
        assert!(matches!(
            parse_reply(content),
            Err(ClassifierError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_strip_code_fence_passthrough() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[tokio::test]
    async fn test_analyze_round_trip() {
        let server = MockServer::start().await;
        let reply = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"is_price_request\": true, \"tickers\": [\"BTC\"], \"chat_response\": \"\"}"
                }
            }]
        });
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .mount(&server)
            .await;

        let classifier = OpenAiClassifier::with_endpoint(
            format!("{}/v1/chat/completions", server.uri()),
            "test-key",
            "gpt-4",
        );
        let analysis = classifier.analyze("how much is bitcoin?").await.unwrap();
        assert!(analysis.is_price_request);
        assert_eq!(analysis.tickers, vec!["BTC"]);
    }

    #[tokio::test]
    async fn test_analyze_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let classifier =
            OpenAiClassifier::with_endpoint(server.uri(), "bad-key", "gpt-4");
        let result = classifier.analyze("hello").await;
        assert!(matches!(result, Err(ClassifierError::Http(_))));
    }

    #[tokio::test]
    async fn test_analyze_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let classifier = OpenAiClassifier::with_endpoint(server.uri(), "key", "gpt-4");
        let result = classifier.analyze("hello").await;
        assert!(matches!(result, Err(ClassifierError::EmptyReply)));
    }
}

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::emotion::{EmotionClassifier, EmotionDistribution};
use crate::error::{Error, Result};
use crate::huggingface::types::{
    InferenceOptions, InferenceParameters, InferenceRequest, InferenceResponse,
};

/// Client for a Hugging Face text-classification endpoint
///
/// Works against the hosted inference API or any self-hosted server that
/// answers with `{label, score}` lists.
#[derive(Clone)]
pub struct HuggingFaceClient {
    url: String,
    token: Option<String>,
    top_k: Option<usize>,
    wait_for_model: bool,
    client: Client,
}

impl HuggingFaceClient {
    /// Create a new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.inference_url(),
            token: config.hf_token.clone(),
            top_k: config.top_k,
            wait_for_model: config.wait_for_model,
            client: Client::builder()
                .timeout(config.timeout())
                .build()
                .unwrap_or_default(),
        }
    }

    /// URL sentences are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check if an access token is configured
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Make a POST request for one sentence and return the raw body
    async fn post(&self, sentence: &str) -> Result<String> {
        let body = InferenceRequest {
            inputs: sentence,
            parameters: self.top_k.map(|top_k| InferenceParameters { top_k }),
            options: InferenceOptions { wait_for_model: self.wait_for_model },
        };

        let mut request = self.client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", self.url, e)))?;

        let status = resp.status();
        let text = resp.text().await
            .map_err(|e| Error::Network(format!("Reading response from {} failed: {}", self.url, e)))?;

        if !status.is_success() {
            let detail = server_error_message(&text).unwrap_or_else(|| status.to_string());
            return Err(Error::classifier_status(
                format!("Request to {} returned {}: {}", self.url, status, detail),
                status.as_u16(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl EmotionClassifier for HuggingFaceClient {
    async fn classify(&self, sentence: &str) -> Result<EmotionDistribution> {
        tracing::debug!("Classifying {:?} via {}", sentence, self.url);
        let body = self.post(sentence).await?;
        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        "HuggingFaceClient"
    }
}

/// Turn a response body into a distribution
///
/// Nested responses use the first inner list only.
pub fn parse_response(body: &str) -> Result<EmotionDistribution> {
    let response: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| Error::parse(format!("Unexpected classifier response: {e}"), None))?;

    let scores = match response {
        InferenceResponse::Nested(lists) => lists.into_iter().next().unwrap_or_default(),
        InferenceResponse::Flat(scores) => scores,
        InferenceResponse::Failure { error } => return Err(Error::classifier(error)),
    };

    Ok(scores.into_iter().map(|s| (s.label, s.score)).collect())
}

/// Pull `error` out of a JSON error body, if there is one
fn server_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"].as_str().map(String::from)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    #[test]
    fn parses_nested_response() {
        let body = r#"[[{"label":"joy","score":0.91},{"label":"love","score":0.42},{"label":"grief","score":0.01}]]"#;
        let dist = parse_response(body).unwrap();
        assert_eq!(dist.labels().collect::<Vec<_>>(), vec!["joy", "love", "grief"]);
        assert_eq!(dist.get("love"), Some(0.42));
        assert_eq!(dist.dominant(), Some("joy"));
    }

    #[test]
    fn nested_response_uses_first_list() {
        let body = r#"[[{"label":"fear","score":0.7}],[{"label":"joy","score":0.9}]]"#;
        let dist = parse_response(body).unwrap();
        assert_eq!(dist.labels().collect::<Vec<_>>(), vec!["fear"]);
    }

    #[test]
    fn parses_flat_response() {
        let body = r#"[{"score":0.3,"label":"anger"},{"score":0.6,"label":"sadness"}]"#;
        let dist = parse_response(body).unwrap();
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.dominant(), Some("sadness"));
    }

    #[test]
    fn empty_response_is_empty_distribution() {
        assert!(parse_response("[]").unwrap().is_empty());
        assert!(parse_response("[[]]").unwrap().is_empty());
    }

    #[test]
    fn error_body_is_a_classifier_error() {
        let err = parse_response(r#"{"error":"Model is overloaded"}"#).unwrap_err();
        match err {
            Error::Classifier { message, status: None, .. } => {
                assert_eq!(message, "Model is overloaded");
            }
            other => panic!("Expected Classifier error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_response(r#"{"label":"joy"}"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(matches!(parse_response("not json").unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn server_error_message_is_extracted() {
        assert_eq!(
            server_error_message(r#"{"error":"Model cirimus/x is currently loading","estimated_time":20.0}"#),
            Some("Model cirimus/x is currently loading".to_string())
        );
        assert_eq!(server_error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn request_body_shape() {
        let body = InferenceRequest {
            inputs: "I came in like a wrecking ball",
            parameters: Some(InferenceParameters { top_k: 28 }),
            options: InferenceOptions { wait_for_model: true },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["inputs"], "I came in like a wrecking ball");
        assert_eq!(json["parameters"]["top_k"], 28);
        assert_eq!(json["options"]["wait_for_model"], true);

        let bare = InferenceRequest {
            inputs: "x",
            parameters: None,
            options: InferenceOptions { wait_for_model: false },
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("parameters").is_none());
    }

    #[test]
    fn client_takes_settings_from_config() {
        let mut config = Config::default();
        config.endpoint = Some("http://127.0.0.1:9/predict".to_string());
        config.hf_token = Some("hf_test".to_string());
        let client = HuggingFaceClient::new(&config);
        assert_eq!(client.url(), "http://127.0.0.1:9/predict");
        assert!(client.has_token());
        assert_eq!(client.name(), "HuggingFaceClient");
    }
}

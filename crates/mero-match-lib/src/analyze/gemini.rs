//! Gemini `generateContent` client that asks for a Five-Factor profile.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::analyze::ProfileAnalyzer;
use crate::error::AnalysisError;
use crate::model::profile::RawProfile;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest provider error body kept in `AnalysisError::Provider`.
const MAX_ERROR_BODY_CHARS: usize = 320;

/// Connection settings for `GeminiAnalyzer`.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL, or a full `...:generateContent` URL.
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// `ProfileAnalyzer` backed by Google's Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiAnalyzer {
    client: Client,
    url: Url,
}

impl GeminiAnalyzer {
    /// Build the HTTP client and resolve the request URL.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint is not a valid URL or the client cannot be built.
    pub fn new(config: GeminiConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let url = resolve_endpoint(&config.endpoint, &config.model, &config.api_key)?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ProfileAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<RawProfile, AnalysisError> {
        let payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": build_prompt(text) }]
                }
            ]
        });

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "gemini request rejected");
            return Err(AnalysisError::Provider {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body: Value = response.json().await.map_err(request_error)?;
        let output = candidate_text(&body);
        if output.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }
        debug!(chars = output.len(), "gemini analysis received");

        parse_profile_output(&output)
    }
}

/// Five-Factor analysis prompt for `user_text`.
pub fn build_prompt(user_text: &str) -> String {
    format!(
        "Analyze the provided text to create a psychological profile based on the Five-Factor Model.\n\
         Your output must be a valid JSON object with no other text or markdown.\n\
         The JSON object should have two keys: \"personality_vector\" and \"interests\".\n\n\
         1.  \"personality_vector\": A list of 5 floats [0.0 to 1.0] for [Openness, Conscientiousness, Extraversion, Agreeableness, Neuroticism].\n\
         2.  \"interests\": A list of 5 strings for the user's hobbies.\n\n\
         User Text: \"{user_text}\"\n"
    )
}

/// Parse model output (optionally wrapped in markdown code fences) into a profile.
///
/// # Errors
///
/// `MalformedOutput` when the text is not JSON, `InvalidProfile` when the JSON
/// does not have the expected shape.
pub fn parse_profile_output(output: &str) -> Result<RawProfile, AnalysisError> {
    let cleaned = output.trim().replace("```json", "").replace("```", "");
    let value: Value = serde_json::from_str(cleaned.trim())?;
    RawProfile::from_analysis_value(&value)
}

// The request URL carries the API key.
fn request_error(err: reqwest::Error) -> AnalysisError {
    AnalysisError::Request(err.without_url())
}

fn candidate_text(body: &Value) -> String {
    body["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn resolve_endpoint(endpoint: &str, model: &str, api_key: &str) -> anyhow::Result<Url> {
    let mut url = if endpoint.contains(":generateContent") {
        Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("invalid gemini endpoint {endpoint}: {e}"))?
    } else {
        let generated = format!(
            "{}/v1beta/models/{}:generateContent",
            endpoint.trim_end_matches('/'),
            model
        );
        Url::parse(&generated)
            .map_err(|e| anyhow::anyhow!("invalid gemini endpoint {generated}: {e}"))?
    };

    if !url.query_pairs().any(|(k, _)| k == "key") {
        url.query_pairs_mut().append_pair("key", api_key);
    }
    Ok(url)
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::{candidate_text, parse_profile_output, resolve_endpoint, truncate};
    use crate::error::AnalysisError;
    use serde_json::json;

    #[test]
    fn strips_markdown_fences() {
        let output = "```json\n{\"personality_vector\": [0.8, 0.2, 0.6, 0.3, 0.1], \"interests\": [\"chess\"]}\n```";
        let raw = parse_profile_output(output).expect("fenced json parses");
        assert_eq!(raw.personality_vector, vec![0.8, 0.2, 0.6, 0.3, 0.1]);
        assert_eq!(raw.interests, vec!["chess"]);
    }

    #[test]
    fn prose_is_malformed_output() {
        let err = parse_profile_output("I think you are very open.").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedOutput(_)));
    }

    #[test]
    fn wrong_shape_is_invalid_profile() {
        let err = parse_profile_output("{\"personality_vector\": [1, 2], \"interests\": []}")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidProfile(_)));
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        });
        assert_eq!(candidate_text(&body), "{\"a\":\n1}");
        assert_eq!(candidate_text(&json!({})), "");
    }

    #[test]
    fn endpoint_gets_model_path_and_key() {
        let url = resolve_endpoint("http://localhost:9000/", "gemini-pro", "secret").unwrap();
        assert_eq!(url.path(), "/v1beta/models/gemini-pro:generateContent");
        assert_eq!(url.query(), Some("key=secret"));
    }

    #[test]
    fn full_endpoint_keeps_existing_key() {
        let url = resolve_endpoint(
            "http://localhost:9000/v1/models/m:generateContent?key=abc",
            "ignored",
            "secret",
        )
        .unwrap();
        assert_eq!(url.path(), "/v1/models/m:generateContent");
        assert_eq!(url.query(), Some("key=abc"));
    }

    #[test]
    fn truncates_long_bodies() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}

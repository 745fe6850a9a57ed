//! Command line and environment configuration for the MCP server.

use std::time::Duration;

use clap::Parser;
use mero_match::analyze::gemini::{
    GeminiConfig, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DEFAULT_TIMEOUT_SECS,
};

/// Every flag falls back to an environment variable (after `.env` is loaded).
#[derive(Parser, Debug)]
#[command(
    name = "mero-match-mcp",
    about = "Mero AI personality matcher served over MCP stdio",
    version
)]
pub struct ServerArgs {
    /// Google Generative Language API key.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: String,

    /// Phone number returned by the `validate` tool.
    #[arg(long, env = "MY_NUMBER")]
    pub my_number: Option<String>,

    /// Gemini model used for profile analysis.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Base URL of the Gemini API, or a full `:generateContent` URL.
    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub gemini_endpoint: String,

    /// Timeout for a single analysis request, in seconds.
    #[arg(long, env = "MERO_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl ServerArgs {
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.google_api_key.clone(),
            model: self.gemini_model.clone(),
            endpoint: self.gemini_endpoint.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }
}

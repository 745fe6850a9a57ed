// Rust guideline compliant 2026-02-13

use mero_match::{
    present::{match_message, ANALYSIS_FAILED_MESSAGE},
    InMemoryProfileStore, MatchService, ServiceError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    schemars,
};
use serde::Deserialize;

/// Input for the personality matcher tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MeroAiInput {
    #[schemars(description = "Free text written by the user about themselves")]
    pub user_text: String,
}

/// MCP server exposing the owner validation tool and the personality matcher.
#[derive(Clone)]
pub struct MeroMatchMcpServer {
    service: MatchService<InMemoryProfileStore>,
    owner_number: Option<String>,
    pub tool_router: ToolRouter<Self>,
}

#[rmcp::tool_router]
impl MeroMatchMcpServer {
    /// Construct a new server instance around a shared match service.
    pub fn new(service: MatchService<InMemoryProfileStore>, owner_number: Option<String>) -> Self {
        Self {
            service,
            owner_number,
            tool_router: Self::tool_router(),
        }
    }

    /// Return the server owner's phone number.
    #[rmcp::tool(description = "Returns the server owner's phone number for validation")]
    fn validate(&self) -> String {
        self.validate_impl()
    }

    /// Analyze the text, save the profile, find a match and respond.
    #[rmcp::tool(
        description = "Analyze a user's text into a personality profile, remember it, and report the most similar earlier user"
    )]
    async fn mero_ai(&self, Parameters(input): Parameters<MeroAiInput>) -> String {
        self.mero_ai_impl(&input.user_text).await
    }
}

impl MeroMatchMcpServer {
    fn validate_impl(&self) -> String {
        match &self.owner_number {
            Some(number) => number.clone(),
            None => String::from("Error: MY_NUMBER is not configured"),
        }
    }

    async fn mero_ai_impl(&self, user_text: &str) -> String {
        match self.service.submit(user_text).await {
            Ok(result) => match_message(&result),
            Err(ServiceError::AnalysisUnavailable) => ANALYSIS_FAILED_MESSAGE.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "profile matching failed");
                format!("Error: {err}")
            }
        }
    }
}

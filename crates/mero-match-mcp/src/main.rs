// Rust guideline compliant 2026-02-13

mod config;
mod tools;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mero_match::{utils::logging, GeminiAnalyzer, InMemoryProfileStore, MatchService};
use rmcp::{model::*, tool_handler, transport::stdio, ServerHandler, ServiceExt};

use crate::config::ServerArgs;
use crate::tools::MeroMatchMcpServer;

#[tool_handler]
impl ServerHandler for MeroMatchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Mero AI Personality Matcher: `mero_ai` analyzes a user's text, remembers the profile and reports the most similar earlier user. `validate` returns the owner's number.".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    let dotenv = dotenvy::dotenv();
    logging::init();
    if let Err(err) = dotenv {
        tracing::debug!("no .env loaded: {err}");
    }

    let args = ServerArgs::parse();
    let analyzer = GeminiAnalyzer::new(args.gemini_config())
        .context("failed to configure the Gemini analyzer")?;
    let store = Arc::new(InMemoryProfileStore::new());
    let service = MatchService::new(Arc::new(analyzer), store);

    tracing::info!(model = %args.gemini_model, "mero-match MCP server starting on stdio");

    let service = MeroMatchMcpServer::new(service, args.my_number)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("server error: {e}"))
        .context("failed to start MCP server over stdio")?;
    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    tracing::info!("mero-match MCP server shutting down");
    Ok(())
}

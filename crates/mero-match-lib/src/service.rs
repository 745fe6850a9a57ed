//! Analyze-then-ingest entry point used by the MCP tool.

use std::sync::Arc;

use tracing::warn;

use crate::analyze::ProfileAnalyzer;
use crate::error::ServiceError;
use crate::ingest::{IngestionFlow, IngestionResult};
use crate::store::ProfileStore;

/// Pairs a `ProfileAnalyzer` with an `IngestionFlow`.
pub struct MatchService<S: ProfileStore> {
    analyzer: Arc<dyn ProfileAnalyzer>,
    flow: IngestionFlow<S>,
}

impl<S: ProfileStore> Clone for MatchService<S> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            flow: self.flow.clone(),
        }
    }
}

impl<S: ProfileStore> MatchService<S> {
    pub fn new(analyzer: Arc<dyn ProfileAnalyzer>, store: Arc<S>) -> Self {
        Self {
            analyzer,
            flow: IngestionFlow::new(store),
        }
    }

    pub fn store(&self) -> &S {
        self.flow.store()
    }

    /// Analyze `text`, store the resulting profile and find its best match.
    ///
    /// # Errors
    ///
    /// * `ServiceError::AnalysisUnavailable` - the analyzer failed; the store
    ///   is left untouched.
    /// * `ServiceError::Match` - the profile was stored but could not be scored.
    pub async fn submit(&self, text: &str) -> Result<IngestionResult, ServiceError> {
        let raw = match self.analyzer.analyze(text).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "profile analysis failed");
                return Err(ServiceError::AnalysisUnavailable);
            }
        };
        Ok(self.flow.ingest(raw)?)
    }
}

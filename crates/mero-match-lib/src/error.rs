//! Error types shared by the matcher, the analysis client and the service.

use thiserror::Error;

/// Failures raised while scoring profiles against each other.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// Two personality vectors of different length were compared.
    #[error("personality vectors differ in length ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },
}

/// Failures of the analysis provider. Every variant means "no profile".
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Transport or decode failure. Built with `reqwest::Error::without_url`
    /// so the API key in the query string never reaches logs.
    #[error("analysis request failed: {0}")]
    Request(reqwest::Error),

    #[error("analysis provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("analysis provider returned no text")]
    EmptyResponse,

    #[error("analysis output is not valid JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("analysis output has an invalid profile shape: {0}")]
    InvalidProfile(String),
}

/// Outcome of a failed `MatchService::submit`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The analyzer produced no usable profile; nothing was stored.
    #[error("analysis unavailable")]
    AnalysisUnavailable,

    #[error(transparent)]
    Match(#[from] MatchError),
}

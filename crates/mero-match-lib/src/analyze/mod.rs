//! Analysis providers that turn free text into a `RawProfile`.

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::model::profile::RawProfile;

pub mod gemini;

/// Derives a personality vector and interest list from user text.
///
/// Any `Err` means no profile could be produced; callers must not store
/// anything in that case.
#[async_trait]
pub trait ProfileAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<RawProfile, AnalysisError>;
}

//! Turn an analysis result into a stored profile plus its best match.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::MatchError;
use crate::model::profile::{Profile, RawProfile};
use crate::similarity::{find_best_match, BestMatch};
use crate::store::ProfileStore;

/// Outcome of one ingestion: the stored profile and, when any earlier profile
/// exists, the closest one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestionResult {
    pub profile: Profile,
    pub best_match: Option<BestMatch>,
}

/// Ingestion pipeline over a shared `ProfileStore`.
pub struct IngestionFlow<S: ProfileStore> {
    store: Arc<S>,
}

impl<S: ProfileStore> Clone for IngestionFlow<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProfileStore> IngestionFlow<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `raw` and match it against every profile stored before it.
    ///
    /// Exactly one profile is appended per call, even when matching fails.
    ///
    /// # Errors
    ///
    /// `MatchError::DimensionMismatch` if any earlier profile has a vector of
    /// a different length.
    pub fn ingest(&self, raw: RawProfile) -> Result<IngestionResult, MatchError> {
        let (profile, prior) = self.store.append_and_snapshot(raw);
        let best_match = find_best_match(&profile, &prior)?;

        match &best_match {
            Some(m) => info!(
                profile_id = profile.id,
                match_id = m.profile.id,
                score = m.score,
                "profile matched"
            ),
            None => info!(profile_id = profile.id, "no earlier profile to match"),
        }

        Ok(IngestionResult {
            profile,
            best_match,
        })
    }
}

//! Append-only profile storage.
//!
//! `ProfileStore` is the seam the ingestion flow talks to; `InMemoryProfileStore`
//! keeps every profile for the lifetime of the process. Ids start at 1 and grow
//! by one per append. A restart starts over at 1 since nothing is persisted.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::model::profile::{Profile, RawProfile};

/// Storage used by `IngestionFlow`.
///
/// Implementations must be safe to share between concurrently running tool
/// calls, and `append_and_snapshot` must be atomic with respect to other
/// appends.
pub trait ProfileStore: Send + Sync {
    /// Store `raw` under the next id and return the stored profile.
    fn append(&self, raw: RawProfile) -> Profile;

    /// All stored profiles except `id`, in arrival order.
    fn all_except(&self, id: u64) -> Vec<Profile>;

    /// Number of stored profiles.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `raw` and return it together with every profile stored before it.
    ///
    /// No other append may interleave between the two steps.
    fn append_and_snapshot(&self, raw: RawProfile) -> (Profile, Vec<Profile>);
}

#[derive(Debug)]
struct StoreState {
    profiles: Vec<Profile>,
    next_id: u64,
}

impl StoreState {
    fn push(&mut self, raw: RawProfile) -> Profile {
        let profile = Profile::from_raw(self.next_id, raw);
        self.next_id += 1;
        self.profiles.push(profile.clone());
        profile
    }

    fn all_except(&self, id: u64) -> Vec<Profile> {
        self.profiles
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect()
    }
}

/// Process-lifetime, unbounded profile store guarded by a single mutex.
#[derive(Debug)]
pub struct InMemoryProfileStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProfileStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                profiles: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // A panic while holding the lock cannot leave a half-written entry behind
    // (push is the only mutation), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn append(&self, raw: RawProfile) -> Profile {
        let profile = self.lock().push(raw);
        debug!(profile_id = profile.id, "profile stored");
        profile
    }

    fn all_except(&self, id: u64) -> Vec<Profile> {
        self.lock().all_except(id)
    }

    fn len(&self) -> usize {
        self.lock().profiles.len()
    }

    fn append_and_snapshot(&self, raw: RawProfile) -> (Profile, Vec<Profile>) {
        let mut state = self.lock();
        let profile = state.push(raw);
        let others = state.all_except(profile.id);
        drop(state);

        debug!(
            profile_id = profile.id,
            prior = others.len(),
            "profile stored"
        );
        (profile, others)
    }
}

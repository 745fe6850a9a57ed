//! Library entry point for the Mero AI personality matcher.
//!
//! Profiles derived from free text are appended to an in-memory store and
//! matched against every earlier profile by cosine similarity of their
//! Five-Factor personality vectors. The MCP server crate wires these pieces
//! to the analysis provider and formats the result for users.
//
// Public modules
pub mod analyze;
pub mod error;
pub mod ingest;
pub mod model;
pub mod present;
pub mod service;
pub mod similarity;
pub mod store;
pub mod utils;

// Re-export primary types for ergonomic use.
pub use analyze::{gemini::GeminiAnalyzer, gemini::GeminiConfig, ProfileAnalyzer};
pub use error::{AnalysisError, MatchError, ServiceError};
pub use ingest::{IngestionFlow, IngestionResult};
pub use model::profile::{Profile, RawProfile, PERSONALITY_DIMENSIONS};
pub use service::MatchService;
pub use similarity::{cosine_similarity, find_best_match, BestMatch};
pub use store::{InMemoryProfileStore, ProfileStore};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AnalysisError;

/// Number of Five-Factor traits in a personality vector
/// (openness, conscientiousness, extraversion, agreeableness, neuroticism).
pub const PERSONALITY_DIMENSIONS: usize = 5;

/// Analysis result that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub personality_vector: Vec<f64>,
    pub interests: Vec<String>,
}

/// Profile held by a `ProfileStore`, identified by its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub personality_vector: Vec<f64>,
    pub interests: Vec<String>,
}

impl Profile {
    /// Attach a store-assigned id to an analysis result.
    pub fn from_raw(id: u64, raw: RawProfile) -> Self {
        Self {
            id,
            personality_vector: raw.personality_vector,
            interests: raw.interests,
        }
    }
}

impl RawProfile {
    pub fn new(personality_vector: Vec<f64>, interests: Vec<String>) -> Self {
        Self {
            personality_vector,
            interests,
        }
    }

    /// Validate a loosely-typed analysis object into a `RawProfile`.
    ///
    /// The object must carry `personality_vector` as exactly
    /// `PERSONALITY_DIMENSIONS` finite numbers and `interests` as a list of
    /// strings. Values outside [0.0, 1.0] are accepted as-is.
    ///
    /// # Errors
    ///
    /// `AnalysisError::InvalidProfile` naming the first offending field.
    pub fn from_analysis_value(value: &Value) -> Result<Self, AnalysisError> {
        let obj = value
            .as_object()
            .ok_or_else(|| invalid("expected a JSON object"))?;

        let raw_vector = obj
            .get("personality_vector")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("`personality_vector` must be an array"))?;
        if raw_vector.len() != PERSONALITY_DIMENSIONS {
            return Err(invalid(format!(
                "`personality_vector` must have {} entries, got {}",
                PERSONALITY_DIMENSIONS,
                raw_vector.len()
            )));
        }
        let personality_vector = raw_vector
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                v.as_f64().filter(|x| x.is_finite()).ok_or_else(|| {
                    invalid(format!("`personality_vector[{idx}]` is not a number"))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let interests = obj
            .get("interests")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("`interests` must be an array"))?
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(format!("`interests[{idx}]` is not a string")))
            })
            .collect::<Result<Vec<String>, _>>()?;

        Ok(Self {
            personality_vector,
            interests,
        })
    }
}

fn invalid(reason: impl Into<String>) -> AnalysisError {
    AnalysisError::InvalidProfile(reason.into())
}

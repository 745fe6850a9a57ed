/*!
Cosine similarity between personality vectors and the best-match search.

- Vectors of different length are a `MatchError::DimensionMismatch`, never
  truncated.
- A vector with zero norm scores `0.0` against everything, itself and other
  zero vectors included.
- Scores are not clamped; rounding noise may leave them marginally outside
  [-1.0, 1.0].
*/

use serde::Serialize;

use crate::error::MatchError;
use crate::model::profile::Profile;

/// Starting score for the best-match scan; lower than any cosine value.
const NO_MATCH_SCORE: f64 = -2.0;

/// Candidate chosen by `find_best_match` together with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    pub profile: Profile,
    pub score: f64,
}

/// Cosine similarity of two equal-length vectors.
///
/// # Arguments
///
/// * `a`, `b` - personality vectors
///
/// # Returns
///
/// `dot(a, b) / (|a| * |b|)`, or `0.0` when either norm is zero. Finite
/// inputs of any magnitude give a finite result.
///
/// # Errors
///
/// `MatchError::DimensionMismatch` when `a.len() != b.len()`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, MatchError> {
    if a.len() != b.len() {
        return Err(MatchError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    // Both vectors are divided by their largest absolute entry first so the
    // squares can neither overflow nor underflow; the cosine is scale-free.
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x / scale_a) * (y / scale_b))
        .sum();
    let norm_a = a.iter().map(|x| (x / scale_a).powi(2)).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| (y / scale_b).powi(2)).sum::<f64>().sqrt();

    Ok(dot / (norm_a * norm_b))
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |m, x| m.max(x.abs()))
}

/// Find the candidate whose personality vector is closest to `target`.
///
/// Candidates are scanned in order and only a strictly greater score replaces
/// the current best, so among equal scores the earliest candidate wins.
///
/// # Returns
///
/// `Ok(None)` when `candidates` is empty.
///
/// # Errors
///
/// The first `MatchError::DimensionMismatch` encountered; the scan stops there.
pub fn find_best_match(
    target: &Profile,
    candidates: &[Profile],
) -> Result<Option<BestMatch>, MatchError> {
    let mut best: Option<&Profile> = None;
    let mut best_score = NO_MATCH_SCORE;

    for candidate in candidates {
        let score = cosine_similarity(&target.personality_vector, &candidate.personality_vector)?;
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    Ok(best.map(|profile| BestMatch {
        profile: profile.clone(),
        score: best_score,
    }))
}

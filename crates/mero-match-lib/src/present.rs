//! User-facing messages for the `mero_ai` tool.

use crate::ingest::IngestionResult;

/// Reply when the analysis provider produced no profile.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Sorry, I couldn't analyze the text. Please try again with a bit more detail!";

const SHARE_FOOTER: &str = "Share Mero AI with friends! #BuildWithPuch";

/// Similarity score as a whole percentage.
///
/// Rounds half to even and does not clamp, so a score of `1.0000000002`
/// still reports 100 and a negative score reports a negative percentage.
pub fn similarity_percent(score: f64) -> i64 {
    (score * 100.0).round_ties_even() as i64
}

/// Render an ingestion result as the markdown reply sent back to the user.
pub fn match_message(result: &IngestionResult) -> String {
    let interests = result.profile.interests.join(", ");

    let mut out = String::new();
    out.push_str("💘 **Based on our conversation, here's what I'm sensing:**\n\n");
    out.push_str(&format!(
        "It seems you enjoy talking about topics like **{interests}**. \
         The way you express yourself suggests a personality that is thoughtful and unique.\n\n"
    ));

    match &result.best_match {
        Some(best) => out.push_str(&format!(
            "**Connection Found!** 🚀\nI've found another user (ID #{}) with a **{}%** similar personality profile. \
             You might find you have a lot in common!\n\n",
            best.profile.id,
            similarity_percent(best.score)
        )),
        None => out.push_str(
            "You're one of the first to use Mero AI! As more people join, I'll be able to find great matches for you.\n\n",
        ),
    }

    out.push_str(SHARE_FOOTER);
    out
}

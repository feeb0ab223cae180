//! Response Cleanup and Parsing
//!
//! The model is asked not to wrap its JSON in Markdown code fences but is
//! not guaranteed to comply, so the raw text is unfenced before parsing.
//! Parsing is strict: anything other than an array of exactly
//! [`FAQ_COUNT`] complete pairs is rejected, which the pipeline turns into
//! the fallback result.
//!
//! [`FAQ_COUNT`]: crate::constants::generation::FAQ_COUNT

use crate::constants::generation::FAQ_COUNT;
use crate::types::{FaqError, FaqPair, Result};

/// Strip a Markdown code-fence wrapper (```json ... ``` or ``` ... ```),
/// a BOM, and surrounding whitespace from raw model output.
pub fn strip_code_fences(raw: &str) -> String {
    let mut result = raw.trim().to_string();

    if result.starts_with("```")
        && let Some(first_newline) = result.find('\n')
    {
        result = result[first_newline + 1..].to_string();
    }

    if result.ends_with("```") {
        result = result[..result.len() - 3].trim_end().to_string();
    }

    result.trim_start_matches('\u{feff}').trim().to_string()
}

/// Parse cleaned model output into a validated FAQ pair sequence.
///
/// Accepts only a JSON array of exactly [`FAQ_COUNT`] records, each with
/// non-empty `question` and `answer` fields.
pub fn parse_faq_response(raw: &str) -> Result<Vec<FaqPair>> {
    let cleaned = strip_code_fences(raw);

    let pairs: Vec<FaqPair> = serde_json::from_str(&cleaned)?;

    if pairs.len() != FAQ_COUNT {
        return Err(FaqError::MalformedResponse(format!(
            "expected {} pairs, got {}",
            FAQ_COUNT,
            pairs.len()
        )));
    }

    for (i, pair) in pairs.iter().enumerate() {
        if pair.question.trim().is_empty() || pair.answer.trim().is_empty() {
            return Err(FaqError::MalformedResponse(format!(
                "pair {} has an empty question or answer",
                i
            )));
        }
    }

    Ok(pairs)
}

//! Key-Point Extraction
//!
//! Scans the original, unsplit answer string for inline enumerated
//! sub-clauses: first every "number + marker" match, then every bullet
//! match, each running up to the next `。`/`；` or end of string. This is
//! deliberately independent of segmentation: one fragment can contribute
//! several key points, and numbered matches always precede bulleted ones
//! regardless of where they appear in the source.

use regex::Regex;
use std::sync::LazyLock;

/// "1）text", "2)text", "3、text" up to the next delimiter
static NUMBERED_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[）)、]\s*([^。；]+)").unwrap());

/// "• text", "- text", "· text" up to the next delimiter
static BULLET_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•\-·]\s*([^。；]+)").unwrap());

/// Extract the flat key-point list from an answer.
///
/// May be empty when the answer has no enumerated sub-clauses.
pub fn extract_key_points(answer: &str) -> Vec<String> {
    let mut points = Vec::new();

    for caps in NUMBERED_POINT.captures_iter(answer) {
        points.push(caps[1].trim().to_string());
    }

    for caps in BULLET_POINT.captures_iter(answer) {
        points.push(caps[1].trim().to_string());
    }

    points
}

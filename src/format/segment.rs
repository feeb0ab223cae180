//! Answer Segmentation
//!
//! Splits a freeform answer on the Chinese full-stop/semicolon delimiters
//! and classifies each fragment into a typed display segment. Total over
//! all inputs: the worst case is a single plain-text segment, never a
//! failure.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Fragment begins with a decimal number and a list marker
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+[）)、])\s*(.+)").unwrap());

/// Fragment begins with a bullet glyph
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-·]\s*(.+)").unwrap());

/// Keywords marking a definition fragment
const DEFINITION_MARKERS: [&str; 3] = ["是指", "是一个", "包括"];

/// Keywords marking a highlight fragment
const HIGHLIGHT_MARKERS: [&str; 4] = ["主要", "核心", "重要", "关键"];

/// Display classification of an answer fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Definition,
    ListItem,
    Highlight,
    PlainText,
}

/// One classified fragment of an answer, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSegment {
    pub kind: SegmentKind,
    pub text: String,
    /// Only meaningful for list items: true for a numbered marker,
    /// false for a bullet glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered: Option<bool>,
}

impl FormattedSegment {
    fn list_item(text: &str, numbered: bool) -> Self {
        Self {
            kind: SegmentKind::ListItem,
            text: text.to_string(),
            numbered: Some(numbered),
        }
    }

    fn plain(kind: SegmentKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            numbered: None,
        }
    }
}

/// Segment an answer into an ordered sequence of typed fragments.
///
/// Splits on `。` and `；`, drops whitespace-only fragments, classifies the
/// rest. Empty for an all-whitespace input.
pub fn segment(answer: &str) -> Vec<FormattedSegment> {
    answer
        .split(['。', '；'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(classify_fragment)
        .collect()
}

/// Classify one fragment. Rules are evaluated top-to-bottom, first match
/// wins: a list marker beats keyword content, so a bulleted fragment
/// containing "核心" still renders as a list item with the glyph stripped.
fn classify_fragment(fragment: &str) -> FormattedSegment {
    if let Some(caps) = NUMBERED_ITEM.captures(fragment) {
        return FormattedSegment::list_item(&caps[2], true);
    }

    if let Some(caps) = BULLET_ITEM.captures(fragment) {
        return FormattedSegment::list_item(&caps[1], false);
    }

    if DEFINITION_MARKERS.iter().any(|m| fragment.contains(m)) {
        return FormattedSegment::plain(SegmentKind::Definition, fragment);
    }

    if HIGHLIGHT_MARKERS.iter().any(|m| fragment.contains(m)) {
        return FormattedSegment::plain(SegmentKind::Highlight, fragment);
    }

    FormattedSegment::plain(SegmentKind::PlainText, fragment)
}

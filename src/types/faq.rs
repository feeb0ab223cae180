//! FAQ Domain Types
//!
//! A FAQ result is an ordered sequence of exactly [`FAQ_COUNT`] pairs. The
//! pipeline guarantees this shape regardless of how generation went, so
//! rendering callers need a single code path.
//!
//! [`FAQ_COUNT`]: crate::constants::generation::FAQ_COUNT

use serde::{Deserialize, Serialize};

/// A single question/answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
}

impl FaqPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Where a FAQ result came from.
///
/// Both variants carry the same observable shape; the distinction exists so
/// the degrade-never-throw invariant stays explicit and testable. Callers
/// that only render collapse it with [`FaqOutcome::into_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaqOutcome {
    /// Pairs produced by the remote chat-completion call
    Generated(Vec<FaqPair>),
    /// Pairs synthesized locally from the fallback templates
    Fallback(Vec<FaqPair>),
}

impl FaqOutcome {
    /// Borrow the pairs regardless of origin
    pub fn pairs(&self) -> &[FaqPair] {
        match self {
            FaqOutcome::Generated(pairs) | FaqOutcome::Fallback(pairs) => pairs,
        }
    }

    /// Collapse into the flat pair sequence of the external contract
    pub fn into_pairs(self) -> Vec<FaqPair> {
        match self {
            FaqOutcome::Generated(pairs) | FaqOutcome::Fallback(pairs) => pairs,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FaqOutcome::Fallback(_))
    }

    /// Origin label for logging
    pub fn source(&self) -> &'static str {
        match self {
            FaqOutcome::Generated(_) => "generated",
            FaqOutcome::Fallback(_) => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_collapses_to_pairs() {
        let pairs = vec![FaqPair::new("q", "a")];
        let generated = FaqOutcome::Generated(pairs.clone());
        let fallback = FaqOutcome::Fallback(pairs.clone());

        assert_eq!(generated.pairs(), fallback.pairs());
        assert!(!generated.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_pairs(), pairs);
    }

    #[test]
    fn test_pair_serde_shape() {
        let pair = FaqPair::new("什么是 Rust？", "一种系统编程语言。");
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["question"], "什么是 Rust？");
        assert_eq!(json["answer"], "一种系统编程语言。");
    }
}

//! Deterministic Fallback Content
//!
//! A pure function of the topic string: fixed templates with the topic
//! substituted in, no randomness, no external calls. Guarantees the
//! pipeline always terminates with a valid result and keeps it testable
//! without network access.

use crate::types::FaqPair;

/// Synthesize the fallback FAQ result for a topic.
///
/// Byte-identical output for the same topic across calls.
pub fn fallback_faqs(topic: &str) -> Vec<FaqPair> {
    vec![
        FaqPair::new(
            format!("什么是{topic}？"),
            format!("{topic}是一个重要的概念，需要深入了解其基本原理和应用场景。"),
        ),
        FaqPair::new(
            format!("如何学习{topic}？"),
            format!("学习{topic}需要系统性的方法，建议从基础概念开始，逐步深入实践。"),
        ),
        FaqPair::new(
            format!("{topic}有什么优势？"),
            format!("{topic}具有多种优势，可以帮助提高效率和解决实际问题。"),
        ),
    ]
}

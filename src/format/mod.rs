//! Answer Formatting Engine
//!
//! Pure, total functions that turn a freeform answer string into typed
//! display segments and an independent list of key points. Rendering
//! collaborators consume both to produce structured visual output.

mod key_points;
mod segment;

pub use key_points::extract_key_points;
pub use segment::{FormattedSegment, SegmentKind, segment};

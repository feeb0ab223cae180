pub mod error;
pub mod faq;

pub use error::{FaqError, Result};
pub use faq::{FaqOutcome, FaqPair};

//! Password checks
//!
//! Each check enforces one rule of the policy. The [`Validator`](crate::Validator)
//! runs them in sequence.

mod classify;
mod complexity;
mod fuzzy;
mod length;
mod similarity;

pub use classify::{ASCII_PUNCTUATION, CharacterClass, classify};
pub use complexity::ComplexityCheck;
pub use fuzzy::{fuzzy_substring_distance, similarity};
pub use length::LengthCheck;
pub use similarity::{CommonSequenceCheck, DictionaryCheck, SimilarityCheck};

use secrecy::SecretString;

use crate::failure::ValidationResult;

/// A single validation rule.
///
/// Implementations are immutable after construction, so a check can be
/// shared between threads and invoked concurrently.
pub trait Check: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Human-readable description of the rule.
    fn help_text(&self) -> String;

    /// Returns `Valid`, or `Invalid` with exactly one failure.
    fn check(&self, password: &SecretString) -> ValidationResult;
}

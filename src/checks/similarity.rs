//! Similarity checks - reject passwords resembling common sequences or
//! dictionary words.

use secrecy::{ExposeSecret, SecretString};

use super::Check;
use super::fuzzy::similarity;
use crate::dictionary::{self, DictionaryError};
use crate::failure::{ValidationFailure, ValidationResult};
use crate::policy::{DEFAULT_COMMON_SEQUENCES, DEFAULT_SIMILARITY_THRESHOLD, Policy};

/// Compares the password against a list of haystacks.
///
/// Fails as soon as one haystack scores at or above `threshold`. Haystacks
/// with no match (both strings empty, single-character miss) never trip it,
/// whatever the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityCheck {
    haystacks: Vec<String>,
    threshold: f64,
}

impl SimilarityCheck {
    pub fn new(haystacks: Vec<String>, threshold: f64) -> Self {
        Self {
            haystacks,
            threshold,
        }
    }

    pub fn haystacks(&self) -> &[String] {
        &self.haystacks
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// First haystack the password is too similar to.
    pub fn find_match(&self, password: &str) -> Option<&str> {
        self.haystacks
            .iter()
            .find(|haystack| {
                similarity(password, haystack).is_some_and(|score| score >= self.threshold)
            })
            .map(String::as_str)
    }

    pub fn is_too_similar(&self, password: &SecretString) -> bool {
        self.find_match(password.expose_secret()).is_some()
    }
}

/// Similarity to keyboard runs and other common character sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonSequenceCheck(SimilarityCheck);

impl CommonSequenceCheck {
    pub fn new(sequences: Vec<String>, threshold: f64) -> Self {
        Self(SimilarityCheck::new(sequences, threshold))
    }

    pub fn from_policy(policy: &Policy) -> Self {
        Self::new(policy.common_sequences.clone(), policy.similarity_threshold)
    }

    pub fn sequences(&self) -> &[String] {
        self.0.haystacks()
    }
}

impl Default for CommonSequenceCheck {
    fn default() -> Self {
        Self::new(
            DEFAULT_COMMON_SEQUENCES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SIMILARITY_THRESHOLD,
        )
    }
}

impl Check for CommonSequenceCheck {
    fn name(&self) -> &'static str {
        "common_sequence"
    }

    fn help_text(&self) -> String {
        "Your password can't be based on a common sequence of characters.".to_string()
    }

    fn check(&self, password: &SecretString) -> ValidationResult {
        self.0
            .is_too_similar(password)
            .then_some(ValidationFailure::TooSimilarToSequence)
            .into()
    }
}

/// Similarity to words of a dictionary.
///
/// With no words the check passes everything.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryCheck(SimilarityCheck);

impl DictionaryCheck {
    pub fn new(words: Vec<String>, threshold: f64) -> Self {
        Self(SimilarityCheck::new(words, threshold))
    }

    /// Builds the check from the policy's word list and dictionary file.
    ///
    /// # Errors
    ///
    /// Fails if `dictionary_source` is set but cannot be loaded.
    pub fn from_policy(policy: &Policy) -> Result<Self, DictionaryError> {
        let words = dictionary::resolve_words(
            &policy.dictionary_words,
            policy.dictionary_source.as_deref(),
        )?;
        Ok(Self::new(words, policy.similarity_threshold))
    }

    pub fn words(&self) -> &[String] {
        self.0.haystacks()
    }
}

impl Check for DictionaryCheck {
    fn name(&self) -> &'static str {
        "dictionary_word"
    }

    fn help_text(&self) -> String {
        "Your password can't be based on a dictionary word.".to_string()
    }

    fn check(&self, password: &SecretString) -> ValidationResult {
        self.0
            .is_too_similar(password)
            .then_some(ValidationFailure::TooSimilarToDictionaryWord)
            .into()
    }
}

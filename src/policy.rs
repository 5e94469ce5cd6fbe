//! Policy configuration.
//!
//! A [`Policy`] is a plain value: build it once, hand it to
//! [`Validator::new`](crate::Validator::new) and leave it alone.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Built-in keyboard and character runs checked by the common sequence check.
///
/// Covers digits, the alphabet, QWERTY rows (plain, shifted and column-wise)
/// and QWERTZ rows.
pub const DEFAULT_COMMON_SEQUENCES: &[&str] = &[
    "0123456789",
    "`1234567890-=",
    "~!@#$%^&*()_+",
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop[]\\asdfghjkl;'zxcvbnm,./",
    "qwertyuiop{}|asdfghjkl;\"zxcvbnm<>?",
    "qwertyuiopasdfghjklzxcvbnm",
    "1qaz2wsx3edc4rfv5tgb6yhn7ujm8ik,9ol.0p;/-['=]\\",
    "qazwsxedcrfvtgbyhnujmikolp",
    "qwertzuiopü+asdfghjklöä#<yxcvbnm,.-",
    "qwertzuiopü*asdfghjklöä'>yxcvbnm;:_",
    "qaywsxedcrfvtgbzhnujmikolp",
];

pub const DEFAULT_MIN_LENGTH: usize = 6;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

#[derive(Error, Debug, PartialEq)]
pub enum PolicyError {
    #[error("Invalid integer for {key}: {value:?}")]
    InvalidInteger { key: String, value: String },
    #[error("Invalid similarity threshold {0:?}: expected a number between 0 and 1")]
    InvalidThreshold(String),
    #[error("Unknown complexity class: {0}")]
    UnknownComplexityClass(String),
    #[error("Malformed complexity entry {0:?}: expected NAME=count")]
    MalformedComplexity(String),
}

/// Class names a complexity requirement can target.
///
/// The declaration order is the order requirements are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityClass {
    Upper,
    Lower,
    /// Union of the distinct uppercase and lowercase characters.
    Letters,
    Digits,
    Punctuation,
    Special,
    Words,
}

impl ComplexityClass {
    pub const ALL: [ComplexityClass; 7] = [
        Self::Upper,
        Self::Lower,
        Self::Letters,
        Self::Digits,
        Self::Punctuation,
        Self::Special,
        Self::Words,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::Letters => "LETTERS",
            Self::Digits => "DIGITS",
            Self::Punctuation => "PUNCTUATION",
            Self::Special => "SPECIAL",
            Self::Words => "WORDS",
        }
    }
}

impl FromStr for ComplexityClass {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PolicyError::UnknownComplexityClass(wanted.to_string()))
    }
}

/// Minimum number of distinct characters (or words) per class.
///
/// Classes that are not listed require 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityRequirements(BTreeMap<ComplexityClass, usize>);

impl ComplexityRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: ComplexityClass, minimum: usize) -> Self {
        self.0.insert(class, minimum);
        self
    }

    pub fn minimum(&self, class: ComplexityClass) -> usize {
        self.0.get(&class).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Requirements in check order.
    pub fn iter(&self) -> impl Iterator<Item = (ComplexityClass, usize)> + '_ {
        self.0.iter().map(|(class, minimum)| (*class, *minimum))
    }
}

impl FromIterator<(ComplexityClass, usize)> for ComplexityRequirements {
    fn from_iter<I: IntoIterator<Item = (ComplexityClass, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses `UPPER=1,DIGITS=2`. Whitespace around names and counts is ignored.
impl FromStr for ComplexityRequirements {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut requirements = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, count) = entry
                .split_once('=')
                .ok_or_else(|| PolicyError::MalformedComplexity(entry.to_string()))?;
            let class: ComplexityClass = name.parse()?;
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|_| PolicyError::MalformedComplexity(entry.to_string()))?;
            requirements.0.insert(class, count);
        }
        Ok(requirements)
    }
}

/// Everything the validator needs to know.
///
/// `min_length <= max_length` is the caller's responsibility: if the bounds
/// cross, no password can pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// `None` disables the complexity check.
    pub complexity: Option<ComplexityRequirements>,
    /// In `[0, 1]`; a similarity at or above it rejects the password.
    pub similarity_threshold: f64,
    pub common_sequences: Vec<String>,
    pub dictionary_words: Vec<String>,
    /// Word list file, one word per line, read when the validator is built.
    pub dictionary_source: Option<PathBuf>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: Some(DEFAULT_MIN_LENGTH),
            max_length: None,
            complexity: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            common_sequences: DEFAULT_COMMON_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dictionary_words: Vec::new(),
            dictionary_source: None,
        }
    }
}

impl Policy {
    pub fn with_min_length(mut self, min_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityRequirements) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_common_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dictionary_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dictionary_source<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary_source = Some(path.into());
        self
    }

    /// Builds a policy from environment variables, starting from the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`: integers, empty means unset
    /// - `PWD_DICTIONARY_PATH`: word list file
    /// - `PWD_MATCH_THRESHOLD`: float in `[0, 1]`
    /// - `PWD_COMPLEXITY`: `UPPER=1,DIGITS=2`
    /// - `PWD_COMMON_SEQUENCES`: newline separated sequences
    ///
    /// Nothing is read unless this is called.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(value) = env_var("PWD_MIN_LENGTH") {
            policy.min_length = parse_optional_usize("PWD_MIN_LENGTH", &value)?;
        }
        if let Some(value) = env_var("PWD_MAX_LENGTH") {
            policy.max_length = parse_optional_usize("PWD_MAX_LENGTH", &value)?;
        }
        if let Some(value) = env_var("PWD_DICTIONARY_PATH").filter(|v| !v.trim().is_empty()) {
            policy.dictionary_source = Some(PathBuf::from(value));
        }
        if let Some(value) = env_var("PWD_MATCH_THRESHOLD") {
            policy.similarity_threshold = parse_threshold(&value)?;
        }
        if let Some(value) = env_var("PWD_COMPLEXITY") {
            let requirements: ComplexityRequirements = value.parse()?;
            policy.complexity = (!requirements.is_empty()).then_some(requirements);
        }
        if let Some(value) = env_var("PWD_COMMON_SEQUENCES") {
            policy.common_sequences = value
                .lines()
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Policy loaded from environment: {:?}", policy);

        Ok(policy)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_optional_usize(key: &str, value: &str) -> Result<Option<usize>, PolicyError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| PolicyError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_threshold(value: &str) -> Result<f64, PolicyError> {
    match value.trim().parse::<f64>() {
        Ok(t) if (0.0..=1.0).contains(&t) => Ok(t),
        _ => Err(PolicyError::InvalidThreshold(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "PWD_MIN_LENGTH",
        "PWD_MAX_LENGTH",
        "PWD_DICTIONARY_PATH",
        "PWD_MATCH_THRESHOLD",
        "PWD_COMPLEXITY",
        "PWD_COMMON_SEQUENCES",
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for key in KEYS {
            // SAFETY: tests touching the environment are serialized
            unsafe { std::env::remove_var(key); }
        }
    }

    #[test]
    fn test_defaults() {
        let policy = Policy::default();
        assert_eq!(policy.min_length, Some(6));
        assert_eq!(policy.max_length, None);
        assert_eq!(policy.complexity, None);
        assert_eq!(policy.similarity_threshold, 0.9);
        assert_eq!(policy.common_sequences.len(), DEFAULT_COMMON_SEQUENCES.len());
        assert!(policy.dictionary_words.is_empty());
        assert!(policy.dictionary_source.is_none());
    }

    #[test]
    fn test_parse_complexity_requirements() {
        let requirements: ComplexityRequirements = "upper=1, DIGITS = 2,WORDS=3".parse().unwrap();
        assert_eq!(requirements.minimum(ComplexityClass::Upper), 1);
        assert_eq!(requirements.minimum(ComplexityClass::Digits), 2);
        assert_eq!(requirements.minimum(ComplexityClass::Words), 3);
        assert_eq!(requirements.minimum(ComplexityClass::Lower), 0);

        let order: Vec<_> = requirements.iter().map(|(class, _)| class).collect();
        assert_eq!(
            order,
            vec![ComplexityClass::Upper, ComplexityClass::Digits, ComplexityClass::Words]
        );
    }

    #[test]
    fn test_parse_complexity_errors() {
        assert_eq!(
            "SYMBOLS=1".parse::<ComplexityRequirements>(),
            Err(PolicyError::UnknownComplexityClass("SYMBOLS".to_string()))
        );
        assert!(matches!(
            "UPPER".parse::<ComplexityRequirements>(),
            Err(PolicyError::MalformedComplexity(_))
        ));
        assert!(matches!(
            "UPPER=many".parse::<ComplexityRequirements>(),
            Err(PolicyError::MalformedComplexity(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        clear_env();
        assert_eq!(Policy::from_env().unwrap(), Policy::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_every_option() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "10");
        set_env("PWD_MAX_LENGTH", "64");
        set_env("PWD_DICTIONARY_PATH", "/etc/words");
        set_env("PWD_MATCH_THRESHOLD", "0.75");
        set_env("PWD_COMPLEXITY", "UPPER=1,PUNCTUATION=1");
        set_env("PWD_COMMON_SEQUENCES", "abc\nxyz\n");

        let policy = Policy::from_env().unwrap();
        assert_eq!(policy.min_length, Some(10));
        assert_eq!(policy.max_length, Some(64));
        assert_eq!(policy.dictionary_source, Some(PathBuf::from("/etc/words")));
        assert_eq!(policy.similarity_threshold, 0.75);
        let complexity = policy.complexity.unwrap();
        assert_eq!(complexity.minimum(ComplexityClass::Upper), 1);
        assert_eq!(complexity.minimum(ComplexityClass::Punctuation), 1);
        assert_eq!(policy.common_sequences, vec!["abc", "xyz"]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_min_length_unsets() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "");
        assert_eq!(Policy::from_env().unwrap().min_length, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_values() {
        clear_env();
        set_env("PWD_MAX_LENGTH", "lots");
        assert!(matches!(
            Policy::from_env(),
            Err(PolicyError::InvalidInteger { .. })
        ));

        clear_env();
        set_env("PWD_MATCH_THRESHOLD", "1.5");
        assert!(matches!(Policy::from_env(), Err(PolicyError::InvalidThreshold(_))));

        clear_env();
    }
}

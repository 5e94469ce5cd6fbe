//! Complexity check - counts distinct characters per class.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use super::Check;
use super::classify::{CharacterClass, classify};
use crate::failure::{UnmetRequirement, ValidationFailure, ValidationResult};
use crate::policy::{ComplexityClass, ComplexityRequirements};

/// Distinct characters seen per class.
#[derive(Debug, Default)]
struct ClassCounts {
    uppercase: HashSet<char>,
    lowercase: HashSet<char>,
    digits: HashSet<char>,
    punctuation: HashSet<char>,
    special: HashSet<char>,
    words: usize,
}

impl ClassCounts {
    fn of(password: &str) -> Self {
        let mut counts = Self::default();
        for c in password.chars() {
            match classify(c) {
                CharacterClass::Uppercase => counts.uppercase.insert(c),
                CharacterClass::Lowercase => counts.lowercase.insert(c),
                CharacterClass::Digit => counts.digits.insert(c),
                CharacterClass::Punctuation => counts.punctuation.insert(c),
                CharacterClass::Special => counts.special.insert(c),
                CharacterClass::Whitespace => false,
            };
        }
        counts.words = count_unique_words(password);
        counts
    }

    fn get(&self, class: ComplexityClass) -> usize {
        match class {
            ComplexityClass::Upper => self.uppercase.len(),
            ComplexityClass::Lower => self.lowercase.len(),
            // Upper and lower sets are disjoint.
            ComplexityClass::Letters => self.uppercase.len() + self.lowercase.len(),
            ComplexityClass::Digits => self.digits.len(),
            ComplexityClass::Punctuation => self.punctuation.len(),
            ComplexityClass::Special => self.special.len(),
            ComplexityClass::Words => self.words,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Distinct maximal runs of word characters, case-sensitive.
fn count_unique_words(password: &str) -> usize {
    password
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Requires a minimum number of distinct characters per class.
///
/// Every unmet class is reported in a single `Complexity` failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityCheck {
    requirements: ComplexityRequirements,
}

impl ComplexityCheck {
    pub fn new(requirements: ComplexityRequirements) -> Self {
        Self { requirements }
    }

    pub fn requirements(&self) -> &ComplexityRequirements {
        &self.requirements
    }
}

impl Check for ComplexityCheck {
    fn name(&self) -> &'static str {
        "complexity"
    }

    fn help_text(&self) -> String {
        "Your password fails to meet our complexity requirements.".to_string()
    }

    fn check(&self, password: &SecretString) -> ValidationResult {
        if self.requirements.is_empty() {
            return ValidationResult::Valid;
        }

        let counts = ClassCounts::of(password.expose_secret());
        let unmet: Vec<_> = self
            .requirements
            .iter()
            .filter_map(|(class, required)| {
                let found = counts.get(class);
                (found < required).then_some(UnmetRequirement {
                    class,
                    required,
                    found,
                })
            })
            .collect();

        if unmet.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(vec![ValidationFailure::Complexity { unmet }])
        }
    }
}

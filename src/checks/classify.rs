//! Character classification for complexity counting.

/// The ASCII punctuation set, in code point order.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Exactly one class per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Punctuation,
    Whitespace,
    /// Anything else: non-ASCII symbols, caseless letters, control characters.
    Special,
}

/// Classifies a character. First match wins:
/// uppercase, lowercase, decimal digit, ASCII punctuation, whitespace, special.
pub fn classify(c: char) -> CharacterClass {
    if c.is_uppercase() {
        CharacterClass::Uppercase
    } else if c.is_lowercase() {
        CharacterClass::Lowercase
    } else if c.is_ascii_digit() {
        CharacterClass::Digit
    } else if c.is_ascii_punctuation() {
        CharacterClass::Punctuation
    } else if c.is_whitespace() {
        CharacterClass::Whitespace
    } else {
        CharacterClass::Special
    }
}

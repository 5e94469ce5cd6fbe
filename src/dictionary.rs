//! Dictionary word list loading.
//!
//! The only I/O in the crate. It happens once, while building a
//! [`Validator`](crate::Validator), so a missing or unreadable word list is
//! reported at setup time instead of silently weakening validation.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Reads a word list: one word per line, surrounding whitespace trimmed.
///
/// Blank lines are skipped. Order is preserved and duplicates are kept.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read or is not valid UTF-8
/// - File holds no words
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: {} reading {:?}", e, path);
            return Err(DictionaryError::ReadError(e));
        }
    };
    let words = parse_words(&content);

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
        return Err(DictionaryError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Explicit words followed by the words read from `source`, if any.
pub fn resolve_words(
    words: &[String],
    source: Option<&Path>,
) -> Result<Vec<String>, DictionaryError> {
    let mut haystacks = words.to_vec();
    if let Some(path) = source {
        haystacks.extend(load_words(path)?);
    }
    Ok(haystacks)
}

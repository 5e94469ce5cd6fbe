//! Fuzzy substring matching.
//!
//! Measures how closely a password resembles *any part* of a reference
//! string. Padding a weak word ("xxwordsxx") must not hide it, so the edit
//! distance is taken against the best-aligned substring of the haystack
//! rather than against the whole haystack.

/// Edit distance between `needle` and its closest substring of `haystack`.
///
/// Unit-cost insertion, deletion and substitution, compared case-insensitively.
/// Not symmetric: swapping the arguments changes the result.
///
/// # Returns
/// - `Some(needle length)` if `haystack` is empty
/// - `None` if `needle` is a single character not contained in `haystack`
/// - `Some(distance)` otherwise
pub fn fuzzy_substring_distance(needle: &str, haystack: &str) -> Option<usize> {
    let needle: Vec<char> = needle.to_lowercase().chars().collect();
    let haystack: Vec<char> = haystack.to_lowercase().chars().collect();

    if haystack.is_empty() {
        return Some(needle.len());
    }
    if let [only] = needle.as_slice() {
        if !haystack.contains(only) {
            return None;
        }
    }

    // Row 0 is all zeros: the match may start at any haystack position.
    let mut row = vec![0usize; haystack.len() + 1];
    for (i, n) in needle.iter().enumerate() {
        let mut next = Vec::with_capacity(haystack.len() + 1);
        next.push(i + 1);
        for (j, h) in haystack.iter().enumerate() {
            let cost = usize::from(n != h);
            let best = (row[j + 1] + 1).min(next[j] + 1).min(row[j] + cost);
            next.push(best);
        }
        row = next;
    }

    // ...and end at any position.
    row.into_iter().min()
}

/// Normalised similarity of `password` to `haystack`.
///
/// `1.0` means the password occurs verbatim inside the haystack, ignoring
/// case. Lengths are counted in characters of the original strings; the
/// score never exceeds 1 but may drop below 0 when lowercasing lengthens the
/// password.
///
/// # Returns
/// - `None` (no match) for two empty strings or a single-character miss
/// - `Some(score)` otherwise
pub fn similarity(password: &str, haystack: &str) -> Option<f64> {
    let longest = password.chars().count().max(haystack.chars().count());
    if longest == 0 {
        return None;
    }
    let distance = fuzzy_substring_distance(password, haystack)?;
    Some((longest as f64 - distance as f64) / longest as f64)
}

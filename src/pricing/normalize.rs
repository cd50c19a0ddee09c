use crate::pricing::constants::{DESCRIPTOR_WORDS, UNIT_WORDS};

/// Normalize a raw ingredient line into a canonical matching key.
///
/// Lowercases, collapses whitespace, and drops quantity tokens ("2", "1.5",
/// "1/2"), measurement units ("cups", "tbsp"), and descriptor words ("fresh",
/// "chopped"). Always returns a string; the result is empty when the input
/// was nothing but quantities and descriptors, and callers must tolerate that.
///
/// `"2 cups fresh chopped spinach"` becomes `"spinach"`.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let kept: Vec<&str> = lowered
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .filter(|token| !is_quantity(token))
        .filter(|token| !UNIT_WORDS.contains(token))
        .filter(|token| !DESCRIPTOR_WORDS.contains(token))
        .collect();

    kept.join(" ")
}

/// True for plain numbers, decimals, and fractions like "1/2" or "2.5".
fn is_quantity(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

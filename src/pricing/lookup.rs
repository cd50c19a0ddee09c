use strsim::levenshtein;

use crate::pricing::constants::{
    CONTAINMENT_SCORE, DEFAULT_UNIT_PRICE, MATCH_THRESHOLD, PRICE_INDEX, PRICE_TABLE,
    WORD_EDIT_DISTANCE_MAX,
};

/// Estimated unit price for a normalized ingredient name.
///
/// Falls back to DEFAULT_UNIT_PRICE when nothing in the table scores above
/// the match threshold. A price is always returned.
pub fn estimate_price(name: &str) -> f64 {
    match_price(name)
        .map(|(_, price)| price)
        .unwrap_or(DEFAULT_UNIT_PRICE)
}

/// Resolve a normalized name against the price table.
///
/// Tries an exact hit first, then a fuzzy scan over the whole table. Returns
/// the winning table key and its price, or None when the best score does not
/// clear MATCH_THRESHOLD. The scan keeps the first entry reaching the best
/// score, so ties break toward earlier table entries (see PRICE_TABLE).
pub fn match_price(name: &str) -> Option<(&'static str, f64)> {
    if name.is_empty() {
        return None;
    }

    if let Some((key, price)) = PRICE_INDEX.get_key_value(name) {
        return Some((*key, *price));
    }

    let mut best: Option<(&'static str, f64)> = None;
    let mut best_score = 0.0;

    for (key, price) in PRICE_TABLE {
        let score = name_similarity(name, key);
        if score > best_score {
            best_score = score;
            best = Some((key, *price));
        }
    }

    if best_score > MATCH_THRESHOLD {
        best
    } else {
        None
    }
}

/// Similarity between a normalized name and a table key.
///
/// Containment either way scores a fixed CONTAINMENT_SCORE; otherwise the
/// score is the ratio of matching words to the larger word count, where two
/// words match if one contains the other or their edit distance is at most
/// WORD_EDIT_DISTANCE_MAX.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.contains(b) || b.contains(a) {
        return CONTAINMENT_SCORE;
    }

    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let matches = words_a
        .iter()
        .filter(|wa| words_b.iter().any(|wb| words_match(wa, wb)))
        .count();

    matches as f64 / words_a.len().max(words_b.len()) as f64
}

fn words_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a) || levenshtein(a, b) <= WORD_EDIT_DISTANCE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (key, price) = match_price("onion").unwrap();
        assert_eq!(key, "onion");
        assert!((price - 0.89).abs() < 0.001);
    }

    #[test]
    fn test_containment_match() {
        // "baby spinach" contains the table key "spinach"
        let (key, _) = match_price("baby spinach").unwrap();
        assert_eq!(key, "spinach");

        // Contains both "chicken breast" and "chicken"; the earlier entry
        // reaches the containment score first and keeps it.
        let (key, _) = match_price("chicken breast fillet").unwrap();
        assert_eq!(key, "chicken breast");
    }

    #[test]
    fn test_word_edit_distance_match() {
        // "onions" is within edit distance 1 of "onion"
        let (key, _) = match_price("onions").unwrap();
        assert_eq!(key, "onion");

        // Typo within distance 2
        let (key, _) = match_price("brocoli").unwrap();
        assert_eq!(key, "broccoli");
    }

    #[test]
    fn test_unknown_gets_default_price() {
        assert!(match_price("dragonfruit xyzzy").is_none());
        assert!((estimate_price("dragonfruit xyzzy") - DEFAULT_UNIT_PRICE).abs() < 0.001);
    }

    #[test]
    fn test_empty_name_gets_default_price() {
        assert!(match_price("").is_none());
        assert!((estimate_price("") - DEFAULT_UNIT_PRICE).abs() < 0.001);
    }

    #[test]
    fn test_similarity_bounds() {
        assert!((name_similarity("onion", "onion") - CONTAINMENT_SCORE).abs() < 0.001);
        assert_eq!(name_similarity("onion", ""), 0.0);

        let score = name_similarity("red pepper flakes", "bell pepper");
        assert!(score > 0.0 && score <= 1.0);
    }

    #[test]
    fn test_tie_breaks_toward_earlier_entry() {
        // "green onion rings" contains both "onion" and "green onion" at the
        // same containment score; "onion" sits earlier in the table and wins.
        let (key, _) = match_price("green onion rings").unwrap();
        assert_eq!(key, "onion");
    }
}

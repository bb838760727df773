//! Query tokenization and synonym expansion.
//!
//! Tokens are lowercase runs of `[a-z0-9]` of length two or more that are not stop words.
//! Expansion is a single hop over a fixed table: a token that is a key, or appears among a
//! key's synonyms, pulls in that key and all of its synonyms.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static NON_TOKEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid regex"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "how", "i", "in", "is",
        "it", "of", "on", "or", "that", "the", "to", "was", "were", "what", "when", "where",
        "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Canonical term and its related terms. Order matters only for the order of expanded output.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("abuse", &["violence", "harm", "ill-treatment"]),
    ("assault", &["attack", "violence"]),
    ("custody", &["detention", "arrest"]),
    ("dowry", &["marriage-demand"]),
    ("harassment", &["stalking", "bullying", "abuse"]),
    ("job", &["work", "office", "employment"]),
    ("police", &["cop", "officer", "constable"]),
    ("road", &["traffic", "accident", "vehicle", "highway"]),
    ("violence", &["abuse", "torture", "assault"]),
    ("woman", &["female", "women", "girl"]),
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenize query text in order of appearance. Duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized = NON_TOKEN_CHARS.replace_all(&lowered, " ");

    normalized
        .split_whitespace()
        .filter(|token| token.len() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Expand tokens through the synonym table. Output is deduplicated, originals first.
pub fn expand_tokens(tokens: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut expanded: Vec<String> = Vec::new();
    let mut push = |term: &str| {
        if seen.insert(term.to_string()) {
            expanded.push(term.to_string());
        }
    };

    for token in tokens {
        push(token.as_str());
    }

    for token in tokens {
        for &(key, synonyms) in SYNONYMS {
            if token.as_str() == key || synonyms.contains(&token.as_str()) {
                push(key);
                for &synonym in synonyms {
                    push(synonym);
                }
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(
            tokenize("What is abuse in a Road accident?"),
            strings(&["abuse", "road", "accident"])
        );
    }

    #[test]
    fn tokenize_replaces_punctuation_with_separators() {
        assert_eq!(
            tokenize("ill-treatment/dowry, (498A)!"),
            strings(&["ill", "treatment", "dowry", "498a"])
        );
    }

    #[test]
    fn tokenize_blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("a I ? the").is_empty());
    }

    #[test]
    fn tokenize_keeps_duplicates_in_order() {
        assert_eq!(tokenize("police Police POLICE"), strings(&["police", "police", "police"]));
    }

    #[test]
    fn tokenize_strips_non_ascii_letters() {
        assert_eq!(tokenize("café naïve"), strings(&["caf", "na", "ve"]));
    }

    #[test]
    fn expansion_from_key_adds_synonyms() {
        let expanded = expand_tokens(&strings(&["violence"]));
        for term in ["violence", "abuse", "torture", "assault"] {
            assert!(expanded.contains(&term.to_string()), "missing {term}");
        }
    }

    #[test]
    fn expansion_from_value_adds_key_and_siblings() {
        let expanded = expand_tokens(&strings(&["cop"]));
        assert_eq!(expanded, strings(&["cop", "police", "officer", "constable"]));
    }

    #[test]
    fn expansion_is_one_hop_only() {
        // "attack" reaches "assault" and "violence", but not the synonyms of "violence".
        let expanded = expand_tokens(&strings(&["attack"]));
        assert!(expanded.contains(&"assault".to_string()));
        assert!(expanded.contains(&"violence".to_string()));
        assert!(!expanded.contains(&"torture".to_string()));
    }

    #[test]
    fn expansion_keeps_unknown_tokens_and_dedups() {
        let expanded = expand_tokens(&strings(&["tenant", "tenant", "abuse", "harassment"]));
        assert_eq!(expanded[0], "tenant");
        assert_eq!(expanded.iter().filter(|t| *t == "abuse").count(), 1);
        assert_eq!(expanded.iter().filter(|t| *t == "tenant").count(), 1);
        assert!(expanded.contains(&"stalking".to_string()));
    }

    #[test]
    fn expansion_of_nothing_is_nothing() {
        assert!(expand_tokens(&[]).is_empty());
    }
}

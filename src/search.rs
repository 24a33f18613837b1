//! Free-text query tokenization.
//!
//! Splits a phrase on whitespace, lowercases every piece and drops common
//! English function words. The surviving tokens keep their relative order but
//! are deduplicated, since repeating a term cannot change which records match.
//! An empty token list is a defined terminal state: callers must answer
//! "no valid search terms" without touching the store.

/// Words excluded from free-text search: English function words plus the
/// generic query verbs assistant users type ("search", "want", "show", ...).
///
/// Sorted so membership is a binary search. The exact membership is
/// observable behavior: adding or removing a word changes search results.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "am", "an", "and", "are", "as", "at", "be", "because", "been", "before",
    "but", "by", "can", "could", "did", "do", "does", "find", "for", "from", "get", "had", "has",
    "have", "he", "her", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "like",
    "look", "me", "might", "more", "most", "must", "my", "need", "no", "not", "of", "on", "or",
    "our", "out", "over", "please", "search", "see", "she", "should", "show", "so", "some", "such",
    "tell", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "up", "want", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "why", "will", "with", "would", "you", "your",
];

/// Returns whether the given lowercase token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Turns a free-text phrase into the ordered list of search terms.
pub fn tokenize(phrase: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for piece in phrase.split_whitespace() {
        let token = piece.to_lowercase();
        if is_stopword(&token) || terms.contains(&token) {
            continue;
        }
        terms.push(token);
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopword_table_is_sorted() {
        let mut sorted = STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(STOPWORDS, sorted.as_slice());
    }

    #[test]
    fn recognizes_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("a"));
        assert!(is_stopword("is"));
        assert!(is_stopword("with"));
        assert!(is_stopword("about"));
        assert!(is_stopword("want"));
        assert!(is_stopword("search"));
        assert!(!is_stopword("azure"));
        assert!(!is_stopword("fundamentals"));
    }

    #[test]
    fn tokenize_keeps_only_meaningful_terms() {
        assert_eq!(tokenize("I want to search for Azure"), vec!["azure"]);
    }

    #[test]
    fn tokenize_all_stopwords_is_empty() {
        assert!(tokenize("the of to").is_empty());
    }

    #[test]
    fn tokenize_empty_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tokenize_dedups_preserving_first_occurrence_order() {
        assert_eq!(
            tokenize("Azure cloud AZURE Cloud exam"),
            vec!["azure", "cloud", "exam"]
        );
    }
}

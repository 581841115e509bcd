//! Stopword and punctuation removal.

use std::collections::HashSet;

/// Punctuation and emoticon tokens dropped by default.
pub const DEFAULT_PUNCTUATION: &[&str] = &[
    ",", "'", "?", ".", "!", ";", ":", "&", "...", "(", ")", "/", ":(", ":)", ":-(", "-", ">:(",
    "xD", ":p", "..",
];

/// Keep tokens that appear in neither set, in their original order.
///
/// Comparison is exact; callers are expected to pass lowercased sets when the
/// tokens were lowercased.
pub fn remove_stopwords_and_punctuation(
    tokens: &[String],
    stopwords: &HashSet<String>,
    punctuation: &HashSet<String>,
) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !stopwords.contains(t.as_str()) && !punctuation.contains(t.as_str()))
        .cloned()
        .collect()
}

/// Immutable stopword and punctuation sets shared across a batch.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    stopwords: HashSet<String>,
    punctuation: HashSet<String>,
}

impl TokenFilter {
    /// Build a filter whose entries are lowercased, so a configured `"xD"`
    /// also drops the token `"xd"`.
    pub fn new<S, P>(stopwords: S, punctuation: P) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self::with_case_sensitivity(stopwords, punctuation, false)
    }

    /// Like [`TokenFilter::new`], but entries are kept exactly as given when
    /// `case_sensitive` is set.
    pub fn with_case_sensitivity<S, P>(stopwords: S, punctuation: P, case_sensitive: bool) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let normalize = |s: &str| {
            if case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };

        TokenFilter {
            stopwords: stopwords.into_iter().map(|s| normalize(s.as_ref())).collect(),
            punctuation: punctuation.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }

    /// Stopwords only, with [`DEFAULT_PUNCTUATION`].
    pub fn with_default_punctuation<S>(stopwords: S) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self::new(stopwords, DEFAULT_PUNCTUATION.iter().copied())
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn punctuation(&self) -> &HashSet<String> {
        &self.punctuation
    }

    pub fn is_filtered(&self, token: &str) -> bool {
        self.stopwords.contains(token) || self.punctuation.contains(token)
    }

    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        remove_stopwords_and_punctuation(tokens, &self.stopwords, &self.punctuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_removes_stopwords() {
        let kept = remove_stopwords_and_punctuation(
            &tokens(&["i", "am", "happy"]),
            &set(&["i", "am"]),
            &HashSet::new(),
        );
        assert_eq!(kept, vec!["happy"]);
    }

    #[test]
    fn test_removes_punctuation_and_keeps_order() {
        let kept = remove_stopwords_and_punctuation(
            &tokens(&["wow", "!", "so", ",", "good", "wow"]),
            &set(&["so"]),
            &set(&["!", ","]),
        );
        assert_eq!(kept, vec!["wow", "good", "wow"]);
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let kept =
            remove_stopwords_and_punctuation(&tokens(&["The", "the"]), &set(&["the"]), &HashSet::new());
        assert_eq!(kept, vec!["The"]);
    }

    #[test]
    fn test_filter_lowercases_entries() {
        let filter = TokenFilter::new(["The", "AND"], ["xD"]);
        assert!(filter.is_filtered("the"));
        assert!(filter.is_filtered("and"));
        assert!(filter.is_filtered("xd"));
        assert_eq!(filter.filter(&tokens(&["the", "cat", "xd"])), vec!["cat"]);
    }

    #[test]
    fn test_accessors_expose_normalized_sets() {
        let filter = TokenFilter::new(["The", "the", "A"], ["!", "xD"]);
        assert_eq!(filter.stopwords(), &set(&["the", "a"]));
        assert_eq!(filter.punctuation(), &set(&["!", "xd"]));
    }

    #[test]
    fn test_filter_case_sensitive() {
        let filter = TokenFilter::with_case_sensitivity(["The"], Vec::<String>::new(), true);
        assert!(filter.is_filtered("The"));
        assert!(!filter.is_filtered("the"));
    }

    #[test]
    fn test_default_punctuation() {
        let filter = TokenFilter::with_default_punctuation(["a"]);
        let kept = filter.filter(&tokens(&["a", "day", "...", ":)", ":p", "!", "xd"]));
        assert_eq!(kept, vec!["day"]);
    }

    #[test]
    fn test_empty_input() {
        let filter = TokenFilter::default();
        assert!(filter.filter(&[]).is_empty());
        assert_eq!(filter.filter(&tokens(&["x"])), vec!["x"]);
    }
}

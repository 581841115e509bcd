//! Pre-tokenization cleanup of raw tweets.
//!
//! Removes the old-style retweet marker at the start of a tweet, every
//! `http://` / `https://` URL and the `#` of each hashtag (the hashtag body is
//! kept as ordinary text).

use once_cell::sync::Lazy;
use regex::Regex;

static RETWEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^RT:?").expect("retweet regex"));
static RETWEET_ANY_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^RT:?").expect("retweet regex"));
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url regex"));

/// Cleaner options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Also strip `rt`, `Rt` and `rT` at the start of a tweet.
    pub retweet_case_insensitive: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    config: CleanerConfig,
}

impl Cleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Cleaner { config }
    }

    /// Strip the retweet marker, URLs and hashtag markers.
    ///
    /// The retweet marker is `RT` at position 0 plus one directly following
    /// `:`. Nothing else around it is touched, so `"RT hello"` becomes
    /// `" hello"`.
    pub fn clean(&self, text: &str) -> String {
        let retweet = if self.config.retweet_case_insensitive {
            &*RETWEET_ANY_CASE
        } else {
            &*RETWEET
        };

        let cleaned = retweet.replace(text, "");
        let cleaned = URL.replace_all(&cleaned, "");
        cleaned.replace('#', "")
    }
}

/// Clean `text` with the default (case-sensitive `RT`) rules.
pub fn clean(text: &str) -> String {
    Cleaner::default().clean(text)
}

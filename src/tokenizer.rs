//! Tweet-aware tokenizer.
//!
//! Keeps emoticons, URLs, emails, hashtags, handles, contractions, numbers and
//! ellipses as single tokens. Any other punctuation becomes one token per
//! character. Elongated words ("sooooo") are capped at three repeats before
//! splitting so they survive as one token.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const URL: &str = r#"(?:https?://|www\.)[^\s<>"]*[^\s<>".,!?;:'\)\]]"#;

const PHONE: &str = r"(?:\+?[01][ *\-.\)]*)?(?:\(?\d{3}[ *\-.\)]*)?\d{3}[ *\-.\)]*\d{4}";

// Eyes, optional nose, mouth; the same mirrored; or a heart. A mirrored
// letter mouth never takes an `o` nose, so "do:" stays a word.
const EMOTICON: &str = concat!(
    r"[<>]?[:;=8][\-o\*']?[\)\]\(\[dDpP/:\}\{@\|\\]",
    r"|[\)\]\(\[/:\}\{@\|\\][\-o\*']?[:;=8][<>]?",
    r"|[dDpP][\-\*']?[:;=8][<>]?",
    r"|</?3",
);

const HTML_TAG: &str = r"<[^>\s]+>";

const ARROW: &str = r"-+>|<-+";

const HANDLE: &str = r"@\w+";

const HASHTAG: &str = r"#+\w+[\w'\-]*\w+";

const EMAIL: &str = r"[\w.+\-]+@[\w\-]+\.(?:[\w\-]\.?)+[\w\-]";

// Letters joined by apostrophes, dashes or underscores: "don't", "well-known".
const JOINED_WORD: &str = r"[^\W\d_](?:[^\W\d_]|['\-_])+[^\W\d_]";

const NUMBER: &str = r"[+\-]?\d+[,/.:\-]\d+[+\-]?";

const WORD: &str = r"\w+";

const ELLIPSIS: &str = r"\.(?:\s*\.)+";

const OTHER: &str = r"\S";

/// One alternation, tried leftmost-first in priority order.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    let pattern = [
        URL, PHONE, EMOTICON, HTML_TAG, ARROW, HANDLE, HASHTAG, EMAIL, JOINED_WORD, NUMBER,
        WORD, ELLIPSIS, OTHER,
    ]
    .iter()
    .map(|p| format!("(?:{p})"))
    .collect::<Vec<_>>()
    .join("|");
    Regex::new(&pattern).expect("token regex")
});

static HANDLE_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^A-Za-z0-9_!@#$%&*])@[A-Za-z0-9_]+").expect("handle regex")
});

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#(\d+)|#[xX]([0-9a-fA-F]+)|([a-zA-Z]+));").expect("entity regex")
});

/// Tokenizer options. Everything is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Fold the whole text to lowercase before splitting.
    pub lowercase: bool,
    /// Drop `@username` mentions entirely.
    pub strip_handles: bool,
    /// Cap runs of the same character at three.
    pub reduce_repeated_chars: bool,
    /// Decode `&amp;`, `&#39;` and friends.
    pub decode_html_entities: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            lowercase: true,
            strip_handles: true,
            reduce_repeated_chars: true,
            decode_html_entities: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TweetTokenizer {
    config: TokenizerConfig,
}

impl TweetTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        TweetTokenizer { config }
    }

    /// Split `text` into tokens, left to right.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = Cow::Borrowed(text);

        if self.config.decode_html_entities {
            text = Cow::Owned(decode_html_entities(&text).into_owned());
        }
        if self.config.lowercase {
            text = Cow::Owned(text.to_lowercase());
        }
        if self.config.strip_handles {
            text = Cow::Owned(strip_handles(&text).into_owned());
        }
        if self.config.reduce_repeated_chars {
            text = Cow::Owned(reduce_repeated_chars(&text));
        }

        TOKEN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Tokenize with an explicit configuration.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<String> {
    TweetTokenizer::new(*config).tokenize(text)
}

/// Replace every `@handle` with a single space. A handle glued to a word
/// character or another marker (as in an email address) is left alone.
pub fn strip_handles(text: &str) -> Cow<'_, str> {
    HANDLE_MENTION.replace_all(text, "${1} ")
}

/// Truncate every run of one character longer than three to exactly three.
pub fn reduce_repeated_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    let mut run = 0;

    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 3 {
            out.push(c);
        }
    }

    out
}

/// Decode named and numeric HTML character references. Unknown names and
/// invalid code points are left as written.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    HTML_ENTITY.replace_all(text, |caps: &Captures| {
        let decoded = if let Some(dec) = caps.get(1) {
            dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
        } else if let Some(hex) = caps.get(2) {
            u32::from_str_radix(hex.as_str(), 16)
                .ok()
                .and_then(char::from_u32)
        } else {
            caps.get(3).and_then(|name| named_entity(name.as_str()))
        };

        match decoded {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    })
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

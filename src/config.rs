use crate::cleaner::CleanerConfig;
use crate::filter::TokenFilter;
use crate::tokenizer::TokenizerConfig;

/// Everything a [`Pipeline`](crate::pipeline::Pipeline) needs apart from the
/// stopword and punctuation lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub cleaner: CleanerConfig,
    pub tokenizer: TokenizerConfig,
    /// Compare stopwords and punctuation exactly as configured instead of
    /// lowercasing them first.
    pub case_sensitive_filter: bool,
}

impl PipelineConfig {
    /// Defaults overridden by `TWEETSTEM_*` environment variables.
    ///
    /// Unset or unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|value| parse_bool(&value))
                .unwrap_or(default)
        };

        let defaults = PipelineConfig::default();

        PipelineConfig {
            cleaner: CleanerConfig {
                retweet_case_insensitive: flag(
                    "TWEETSTEM_RT_CASE_INSENSITIVE",
                    defaults.cleaner.retweet_case_insensitive,
                ),
            },
            tokenizer: TokenizerConfig {
                lowercase: flag("TWEETSTEM_LOWERCASE", defaults.tokenizer.lowercase),
                strip_handles: flag("TWEETSTEM_STRIP_HANDLES", defaults.tokenizer.strip_handles),
                reduce_repeated_chars: flag(
                    "TWEETSTEM_REDUCE_LEN",
                    defaults.tokenizer.reduce_repeated_chars,
                ),
                decode_html_entities: flag(
                    "TWEETSTEM_DECODE_ENTITIES",
                    defaults.tokenizer.decode_html_entities,
                ),
            },
            case_sensitive_filter: flag(
                "TWEETSTEM_CASE_SENSITIVE_FILTER",
                defaults.case_sensitive_filter,
            ),
        }
    }

    /// Build the token filter these settings call for.
    pub fn build_filter<S, P>(&self, stopwords: S, punctuation: P) -> TokenFilter
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        TokenFilter::with_case_sensitivity(stopwords, punctuation, self.case_sensitive_filter)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! tweetstem: turns noisy tweets into ordered Porter stems.
//!
//! raw text → [`cleaner`] → [`tokenizer`] → [`filter`] → [`stemmer`], composed
//! by [`pipeline`]. Every stage is a pure function of its input and the
//! immutable configuration passed to it; only [`loader`] and [`corpus`] touch
//! the filesystem.

pub mod cleaner;
pub mod config;
pub mod corpus;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod stemmer;
pub mod tokenizer;

pub use cleaner::{clean, Cleaner, CleanerConfig};
pub use config::PipelineConfig;
pub use corpus::{process_corpus, Corpus, Sentiment};
pub use filter::{remove_stopwords_and_punctuation, TokenFilter, DEFAULT_PUNCTUATION};
pub use pipeline::{process, process_batch, Pipeline, PipelineTrace, ProcessedDocument};
pub use stemmer::{stem, PorterStemmer, Stemmer};
pub use tokenizer::{tokenize, TokenizerConfig, TweetTokenizer};

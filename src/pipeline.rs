//! Per-tweet normalization: clean → tokenize → filter → stem.
//!
//! A [`Pipeline`] holds only immutable state, so one instance can be shared by
//! reference across rayon workers. Batches come back in input order no matter
//! how the work was scheduled.

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use crate::cleaner::Cleaner;
use crate::config::PipelineConfig;
use crate::filter::{remove_stopwords_and_punctuation, TokenFilter};
use crate::stemmer::{PorterStemmer, Stemmer};
use crate::tokenizer::{TokenizerConfig, TweetTokenizer};

/// The stems of one tweet, in the order their tokens appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcessedDocument(Vec<String>);

impl ProcessedDocument {
    pub fn stems(&self) -> &[String] {
        &self.0
    }

    pub fn into_stems(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ProcessedDocument {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// Every intermediate stage of one run, for debugging and the CLI `--trace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineTrace {
    pub cleaned: String,
    pub tokens: Vec<String>,
    pub filtered: Vec<String>,
    pub stems: ProcessedDocument,
}

#[derive(Debug, Clone)]
pub struct Pipeline<S = PorterStemmer> {
    cleaner: Cleaner,
    tokenizer: TweetTokenizer,
    filter: TokenFilter,
    stemmer: S,
}

impl Pipeline<PorterStemmer> {
    /// Porter-stemming pipeline with the cleaner and tokenizer from `config`.
    pub fn new(config: &PipelineConfig, filter: TokenFilter) -> Self {
        Pipeline {
            cleaner: Cleaner::new(config.cleaner),
            tokenizer: TweetTokenizer::new(config.tokenizer),
            filter,
            stemmer: PorterStemmer,
        }
    }
}

impl<S: Stemmer> Pipeline<S> {
    /// Swap in a different stemmer, keeping the other stages.
    pub fn with_stemmer<T: Stemmer>(self, stemmer: T) -> Pipeline<T> {
        Pipeline {
            cleaner: self.cleaner,
            tokenizer: self.tokenizer,
            filter: self.filter,
            stemmer,
        }
    }

    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// Normalize one tweet.
    pub fn process(&self, raw: &str) -> ProcessedDocument {
        let cleaned = self.cleaner.clean(raw);
        let tokens = self.tokenizer.tokenize(&cleaned);
        let filtered = self.filter.filter(&tokens);
        stem_all(&self.stemmer, &filtered)
    }

    /// Same as [`Pipeline::process`] but keeps every stage.
    pub fn trace(&self, raw: &str) -> PipelineTrace {
        let cleaned = self.cleaner.clean(raw);
        let tokens = self.tokenizer.tokenize(&cleaned);
        let filtered = self.filter.filter(&tokens);
        let stems = stem_all(&self.stemmer, &filtered);
        PipelineTrace {
            cleaned,
            tokens,
            filtered,
            stems,
        }
    }

    /// Normalize many tweets in parallel. Output order matches `docs`.
    pub fn process_batch<T>(&self, docs: &[T]) -> Vec<ProcessedDocument>
    where
        T: AsRef<str> + Sync,
    {
        tracing::debug!(documents = docs.len(), "processing batch");
        docs.par_iter().map(|doc| self.process(doc.as_ref())).collect()
    }

    /// Like [`Pipeline::process_batch`], but gives up with `None` once
    /// `cancel` is set. The flag is checked before each document, never in
    /// the middle of one.
    pub fn process_batch_until<T>(
        &self,
        docs: &[T],
        cancel: &AtomicBool,
    ) -> Option<Vec<ProcessedDocument>>
    where
        T: AsRef<str> + Sync,
    {
        tracing::debug!(documents = docs.len(), "processing cancellable batch");
        let result = docs
            .par_iter()
            .map(|doc| {
                if cancel.load(Ordering::Relaxed) {
                    None
                } else {
                    Some(self.process(doc.as_ref()))
                }
            })
            .collect::<Option<Vec<_>>>();

        if result.is_none() {
            tracing::debug!("batch cancelled");
        }
        result
    }
}

fn stem_all<S: Stemmer>(stemmer: &S, tokens: &[String]) -> ProcessedDocument {
    ProcessedDocument(tokens.iter().map(|t| stemmer.stem(t)).collect())
}

/// Normalize one tweet with the default cleaner, an exact-match filter over
/// `stopwords` and `punctuation`, and the Porter stemmer.
pub fn process(
    raw: &str,
    stopwords: &HashSet<String>,
    punctuation: &HashSet<String>,
    config: &TokenizerConfig,
) -> ProcessedDocument {
    let cleaned = Cleaner::default().clean(raw);
    let tokens = TweetTokenizer::new(*config).tokenize(&cleaned);
    let filtered = remove_stopwords_and_punctuation(&tokens, stopwords, punctuation);
    stem_all(&PorterStemmer, &filtered)
}

/// [`process`] over many tweets in parallel, preserving input order.
pub fn process_batch<T>(
    docs: &[T],
    stopwords: &HashSet<String>,
    punctuation: &HashSet<String>,
    config: &TokenizerConfig,
) -> Vec<ProcessedDocument>
where
    T: AsRef<str> + Sync,
{
    docs.par_iter()
        .map(|doc| process(doc.as_ref(), stopwords, punctuation, config))
        .collect()
}

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::filter::DEFAULT_PUNCTUATION;
use crate::loader;
use crate::pipeline::{Pipeline, ProcessedDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// A labeled tweet collection after normalization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    pub positive: Vec<ProcessedDocument>,
    pub negative: Vec<ProcessedDocument>,
    pub stopwords: Vec<String>,
}

impl Corpus {
    /// Every document with its label, positives first.
    pub fn labeled(&self) -> impl Iterator<Item = (Sentiment, &ProcessedDocument)> + '_ {
        self.positive
            .iter()
            .map(|doc| (Sentiment::Positive, doc))
            .chain(self.negative.iter().map(|doc| (Sentiment::Negative, doc)))
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Normalize already-loaded positive and negative tweets with one shared
/// pipeline using [`DEFAULT_PUNCTUATION`].
pub fn build_corpus<T>(
    positive: &[T],
    negative: &[T],
    stopwords: Vec<String>,
    config: &PipelineConfig,
) -> Corpus
where
    T: AsRef<str> + Sync,
{
    let filter = config.build_filter(&stopwords, DEFAULT_PUNCTUATION.iter().copied());
    let pipeline = Pipeline::new(config, filter);

    let positive = pipeline.process_batch(positive);
    let negative = pipeline.process_batch(negative);
    tracing::info!(
        positive = positive.len(),
        negative = negative.len(),
        "corpus processed"
    );

    Corpus {
        positive,
        negative,
        stopwords,
    }
}

/// Load a positive tweet file, a negative tweet file and a stopword file,
/// then normalize both tweet sets.
///
/// Pipeline: Load stopwords → Load tweets → Clean, tokenize, filter, stem.
pub fn process_corpus(
    positive_path: &str,
    negative_path: &str,
    stopwords_path: &str,
    config: &PipelineConfig,
) -> Result<Corpus> {
    let stopwords = loader::load_stopwords(stopwords_path)?;
    let positive = loader::load_tweets(positive_path).context("Failed to load positive tweets")?;
    let negative = loader::load_tweets(negative_path).context("Failed to load negative tweets")?;

    Ok(build_corpus(&positive, &negative, stopwords, config))
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tweetstem::{corpus, loader, Pipeline, PipelineConfig, TokenFilter, DEFAULT_PUNCTUATION};

/// tweetstem: normalize noisy tweets into Porter stems.
///
/// Cleans retweet markers, URLs and hashtag markers, tokenizes with
/// tweet-aware rules, drops stopwords and punctuation, then stems.
#[derive(Parser)]
#[command(name = "tweetstem")]
#[command(version = "0.1.0")]
#[command(about = "Normalize tweets into ordered word stems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single tweet given on the command line
    Process {
        /// The tweet text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Stopword file, one word per line
        #[arg(long, value_name = "FILE")]
        stopwords: Option<String>,

        /// Print every pipeline stage instead of only the stems
        #[arg(long)]
        trace: bool,
    },

    /// Normalize every tweet in a line-delimited JSON file
    ///
    /// Prints one JSON array of stems per tweet, in file order.
    Batch {
        /// JSONL file with a `text` field per line
        #[arg(value_name = "TWEETS_FILE")]
        tweets: String,

        /// Stopword file, one word per line
        #[arg(long, value_name = "FILE")]
        stopwords: Option<String>,
    },

    /// Normalize a positive and a negative tweet file
    Corpus {
        /// JSONL file of positive tweets
        #[arg(value_name = "POSITIVE_FILE")]
        positive: String,

        /// JSONL file of negative tweets
        #[arg(value_name = "NEGATIVE_FILE")]
        negative: String,

        /// Stopword file, one word per line
        #[arg(long, value_name = "FILE")]
        stopwords: String,
    },
}

fn build_pipeline(config: &PipelineConfig, stopwords: Option<&str>) -> Result<Pipeline> {
    let stopwords = match stopwords {
        Some(path) => loader::load_stopwords(path)?,
        None => Vec::new(),
    };
    let filter: TokenFilter = config.build_filter(&stopwords, DEFAULT_PUNCTUATION.iter().copied());
    let pipeline = Pipeline::new(config, filter);
    tracing::debug!(
        stopwords = pipeline.filter().stopwords().len(),
        punctuation = pipeline.filter().punctuation().len(),
        "pipeline ready"
    );
    Ok(pipeline)
}

fn run(command: Commands, config: &PipelineConfig) -> Result<()> {
    match command {
        Commands::Process {
            text,
            stopwords,
            trace,
        } => {
            let pipeline = build_pipeline(config, stopwords.as_deref())?;
            let json = if trace {
                serde_json::to_string_pretty(&pipeline.trace(&text))?
            } else {
                serde_json::to_string(&pipeline.process(&text))?
            };
            println!("{}", json);
        }
        Commands::Batch { tweets, stopwords } => {
            let pipeline = build_pipeline(config, stopwords.as_deref())?;
            let tweets = loader::load_tweets(&tweets)?;
            for doc in pipeline.process_batch(&tweets) {
                println!("{}", serde_json::to_string(&doc)?);
            }
        }
        Commands::Corpus {
            positive,
            negative,
            stopwords,
        } => {
            println!("  Processing corpus...");
            let corpus = corpus::process_corpus(&positive, &negative, &stopwords, config)
                .context("Failed to process corpus")?;
            println!(
                "  Processed {} positive and {} negative tweets ({} stopwords).",
                corpus.positive.len(),
                corpus.negative.len(),
                corpus.stopwords.len()
            );
            if let Some(doc) = corpus.positive.first() {
                println!("  First positive: {}", serde_json::to_string(doc)?);
            }
            if let Some(doc) = corpus.negative.first() {
                println!("  First negative: {}", serde_json::to_string(doc)?);
            }
        }
    }
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::from_env();

    if let Err(e) = run(cli.command, &config) {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

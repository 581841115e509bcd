use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The one field of a tweet record we care about.
#[derive(Debug, Deserialize)]
struct TweetRecord {
    text: String,
}

/// Reads tweets from line-delimited JSON, one object per line, returning
/// each record's `text` field in file order.
///
/// Blank lines are skipped. A line that is not valid JSON or has no string
/// `text` field fails the whole read, naming the 1-based line number.
pub fn read_tweets<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tweets = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: TweetRecord = serde_json::from_str(&line)
            .with_context(|| format!("Malformed tweet record on line {}", line_no))?;
        tweets.push(record.text);
    }

    Ok(tweets)
}

/// Reads a stopword list, one word per line. Whitespace around each word is
/// trimmed and blank lines are skipped.
pub fn read_stopwords<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut stopwords = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        let word = line.trim();
        if !word.is_empty() {
            stopwords.push(word.to_string());
        }
    }

    Ok(stopwords)
}

/// Loads tweets from a JSONL file. See [`read_tweets`].
pub fn load_tweets(path: &str) -> Result<Vec<String>> {
    let file = open(path)?;
    let tweets = read_tweets(BufReader::new(file))
        .with_context(|| format!("Failed to load tweets from: {}", path))?;
    tracing::debug!(path, count = tweets.len(), "loaded tweets");
    Ok(tweets)
}

/// Loads a stopword file. See [`read_stopwords`].
pub fn load_stopwords(path: &str) -> Result<Vec<String>> {
    let file = open(path)?;
    let stopwords = read_stopwords(BufReader::new(file))
        .with_context(|| format!("Failed to load stopwords from: {}", path))?;

    if stopwords.is_empty() {
        tracing::warn!(path, "stopword file is empty");
    } else {
        tracing::debug!(path, count = stopwords.len(), "loaded stopwords");
    }
    Ok(stopwords)
}

fn open(path: &str) -> Result<File> {
    let file_path = Path::new(path);

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", path);
    }

    File::open(file_path).with_context(|| format!("Failed to open file: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_tweets() {
        let input = r#"{"id": 1, "text": "I am happy :)"}
{"id": 2, "text": "RT @bob sad day", "user": {"name": "x"}}
"#;
        let tweets = read_tweets(Cursor::new(input)).unwrap();
        assert_eq!(tweets, vec!["I am happy :)", "RT @bob sad day"]);
    }

    #[test]
    fn test_read_tweets_skips_blank_lines() {
        let input = "\n{\"text\": \"a\"}\n   \n{\"text\": \"b\"}";
        let tweets = read_tweets(Cursor::new(input)).unwrap();
        assert_eq!(tweets, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "{\"text\": \"ok\"}\nnot json\n{\"text\": \"never read\"}\n";
        let err = read_tweets(Cursor::new(input)).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"), "{:#}", err);
    }

    #[test]
    fn test_missing_text_field_is_an_error() {
        let input = "{\"id\": 3}\n";
        let err = read_tweets(Cursor::new(input)).unwrap_err();
        assert!(format!("{:#}", err).contains("line 1"));
    }

    #[test]
    fn test_read_stopwords() {
        let input = "i\nme\r\n\n  my \n";
        let words = read_stopwords(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["i", "me", "my"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_tweets("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
        assert!(load_stopwords("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("tweetstem-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let tweets_path = dir.join("tweets.json");
        let stop_path = dir.join("stop.txt");
        std::fs::write(&tweets_path, "{\"text\": \"hello there\"}\n").unwrap();
        std::fs::write(&stop_path, "the\na\n").unwrap();

        let tweets = load_tweets(tweets_path.to_str().unwrap()).unwrap();
        let stop = load_stopwords(stop_path.to_str().unwrap()).unwrap();
        assert_eq!(tweets, vec!["hello there"]);
        assert_eq!(stop, vec!["the", "a"]);

        std::fs::remove_dir_all(&dir).ok();
    }
}

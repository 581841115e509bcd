use std::collections::HashSet;

use tweetstem::{
    clean, process, process_batch, remove_stopwords_and_punctuation, stem, tokenize, Pipeline,
    PipelineConfig, TokenFilter, TokenizerConfig,
};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn cleaner_examples() {
    assert_eq!(clean("RT hello world"), " hello world");
    assert_eq!(clean("check https://x.co/y now"), "check  now");
}

#[test]
fn filter_example() {
    let tokens: Vec<String> = ["i", "am", "happy"].iter().map(|s| s.to_string()).collect();
    let kept = remove_stopwords_and_punctuation(&tokens, &set(&["i", "am"]), &HashSet::new());
    assert_eq!(kept, vec!["happy"]);
}

#[test]
fn stemmer_examples() {
    assert_eq!(stem("running"), "run");
    assert_eq!(stem("happiness"), "happi");
    assert_eq!(stem("cats"), "cat");
    assert_eq!(stem(""), "");
    assert_eq!(stem("run"), "run");
}

#[test]
fn end_to_end_example() {
    let doc = process(
        "RT @bob I am sooo happy!! #great",
        &set(&["i", "am"]),
        &set(&["!", "!!"]),
        &TokenizerConfig::default(),
    );

    assert!(!doc.iter().any(|s| s.contains("bob")));
    assert!(doc.iter().any(|s| s == "great"));
    assert!(!doc.iter().any(|s| s == "i" || s == "am"));
    assert_eq!(doc.into_stems(), vec!["sooo", "happi", "great"]);
}

#[test]
fn sample_tweets() {
    let pipeline = Pipeline::new(
        &PipelineConfig::default(),
        TokenFilter::with_default_punctuation(["i", "am", "you", "should", "go", "to", "there"]),
    );

    let cases: &[(&str, &[&str])] = &[
        ("I am happy", &["happi"]),
        ("I am sad", &["sad"]),
        ("RT: Hi there", &["hi"]),
        ("Hi #happy #sad!", &["hi", "happi", "sad"]),
        ("You should go to DU: https://www.du.edu!", &["du"]),
    ];

    for (tweet, expected) in cases {
        let doc = pipeline.process(tweet);
        assert_eq!(doc.stems(), *expected, "processing {tweet:?}");
    }
}

#[test]
fn entities_and_emoticons() {
    let pipeline = Pipeline::new(
        &PipelineConfig::default(),
        TokenFilter::with_default_punctuation(["and"]),
    );
    let doc = pipeline.process("Fish &amp; chips and waffles :) xD <3");
    assert_eq!(doc.into_stems(), vec!["fish", "chip", "waffl", "<3"]);
}

#[test]
fn batch_matches_individual_runs() {
    let docs = vec![
        "RT @x loving the sunshine!!!".to_string(),
        String::new(),
        "wasn't expecting THAT... :(".to_string(),
        "#blessed #grateful".to_string(),
    ];
    let stop = set(&["the"]);
    let punct = set(&["!", "...", ":("]);
    let config = TokenizerConfig::default();

    let batch = process_batch(&docs, &stop, &punct, &config);
    assert_eq!(batch.len(), docs.len());
    for (doc, processed) in docs.iter().zip(&batch) {
        assert_eq!(&process(doc, &stop, &punct, &config), processed);
    }
    assert!(batch[1].is_empty());
}

#[test]
fn long_runs_survive_without_repeat_reduction() {
    let config = TokenizerConfig {
        reduce_repeated_chars: false,
        ..TokenizerConfig::default()
    };
    let docs = vec![format!("ok a{}", "y".repeat(50_000)), "fine".to_string()];

    let batch = process_batch(&docs, &HashSet::new(), &HashSet::new(), &config);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].len(), 2);
    assert_eq!(batch[0][0], "ok");
    assert!(batch[0][1].starts_with("ay"));
    assert_eq!(batch[1].stems(), ["fine"]);
}

#[test]
fn tokens_follow_cleaned_text() {
    let cleaned = clean("RT Look at this!! https://t.co/q #wow @me");
    let tokens = tokenize(&cleaned, &TokenizerConfig::default());
    assert_eq!(tokens, vec!["look", "at", "this", "!", "!", "wow"]);
}

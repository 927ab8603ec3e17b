//! End-to-end tests through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rapid_summarizer::{
    summarize, AnalyzerError, Document, RuleBasedAnalyzer, ScoringMode, StageTimingObserver,
    StopwordFilter, Summarizer, SummarizeError, SummarizerConfig, SummarizerSpec, TextAnalyzer,
};

const PARAGRAPH: &str = "Natural language processing (NLP) is a subfield of linguistics, \
computer science, and artificial intelligence concerned with the interactions between \
computers and human language. The goal is a computer capable of understanding the contents \
of documents. The technology can then accurately extract information and insights contained \
in the documents. Challenges in natural language processing frequently involve speech \
recognition and natural language generation.";

const PETS: &str = "Cats sleep. Cats sleep a lot. Dogs bark.";

const RUST: &str = "Rust compiles crates. Rust compiles crates and macros. Python interprets scripts.";

fn pets_analyzer(stopwords: &[&str]) -> RuleBasedAnalyzer {
    RuleBasedAnalyzer::new().with_stopwords(StopwordFilter::from_list(stopwords))
}

/// Delegates to the built-in analyzer and counts calls.
struct CountingAnalyzer {
    inner: RuleBasedAnalyzer,
    calls: AtomicUsize,
}

impl CountingAnalyzer {
    fn new() -> Self {
        Self {
            inner: RuleBasedAnalyzer::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextAnalyzer for CountingAnalyzer {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.analyze(text)
    }
}

struct BrokenAnalyzer;

impl TextAnalyzer for BrokenAnalyzer {
    fn analyze(&self, _text: &str) -> Result<Document, AnalyzerError> {
        Err(AnalyzerError::Backend("model unavailable".into()))
    }
}

// ─── Edge cases ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_and_blank_input_skip_analysis() {
    let analyzer = CountingAnalyzer::new();
    assert_eq!(summarize("", &analyzer, 3).unwrap(), "");
    assert_eq!(summarize(" \t\r\n ", &analyzer, 3).unwrap(), "");
    assert_eq!(analyzer.calls(), 0);
}

#[test]
fn test_blank_input_wins_over_zero_sentences() {
    let analyzer = CountingAnalyzer::new();
    assert_eq!(summarize("   ", &analyzer, 0).unwrap(), "");
}

#[test]
fn test_zero_sentences_is_invalid_argument() {
    let analyzer = CountingAnalyzer::new();
    let err = summarize(PARAGRAPH, &analyzer, 0).unwrap_err();
    assert!(matches!(
        err,
        SummarizeError::InvalidArgument {
            name: "max_sentences",
            ..
        }
    ));
    assert_eq!(analyzer.calls(), 0);
}

#[test]
fn test_only_stopwords_and_punctuation() {
    let err = summarize("the, and. of!", &RuleBasedAnalyzer::new(), 3).unwrap_err();
    assert!(matches!(err, SummarizeError::NoScorableContent));
}

#[test]
fn test_single_stopword_has_no_content() {
    let err = summarize("the", &RuleBasedAnalyzer::new(), 1).unwrap_err();
    assert!(matches!(err, SummarizeError::NoScorableContent));
}

#[test]
fn test_single_keyword_is_its_own_summary() {
    assert_eq!(summarize("Rust", &RuleBasedAnalyzer::new(), 1).unwrap(), "Rust");
}

#[test]
fn test_analyzer_failure_propagates() {
    let err = summarize(PARAGRAPH, &BrokenAnalyzer, 2).unwrap_err();
    assert!(matches!(err, SummarizeError::Analyzer(_)));
    assert!(err.to_string().contains("model unavailable"));
}

// ─── Selection ──────────────────────────────────────────────────────────────

#[test]
fn test_best_sentence_selected() {
    assert_eq!(
        summarize(PETS, &pets_analyzer(&["a"]), 1).unwrap(),
        "Cats sleep a lot."
    );
}

#[test]
fn test_ties_keep_document_order() {
    assert_eq!(
        summarize(PETS, &pets_analyzer(&["a", "lot"]), 1).unwrap(),
        "Cats sleep."
    );
}

#[test]
fn test_request_beyond_scored_sentences() {
    let summary = summarize(PETS, &pets_analyzer(&["a"]), 10).unwrap();
    assert_eq!(summary, "Cats sleep a lot. Cats sleep. Dogs bark.");
}

#[test]
fn test_unscored_sentences_never_selected() {
    let analyzer = pets_analyzer(&["oh", "well"]);
    let summary = summarize("Oh well. Cats sleep.", &analyzer, 5).unwrap();
    assert_eq!(summary, "Cats sleep.");
}

#[test]
fn test_selected_sentences_come_from_input() {
    let summarizer = Summarizer::new(RuleBasedAnalyzer::new()).with_num_sentences(2);
    let summary = summarizer.summarize_detailed(PARAGRAPH).unwrap();

    assert_eq!(summary.sentences.len(), 2);
    for sentence in &summary.sentences {
        assert!(PARAGRAPH.contains(&sentence.text), "{:?}", sentence.text);
    }
    let joined: Vec<&str> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(summary.text, joined.join(" "));
}

#[test]
fn test_count_is_min_of_request_and_scored() {
    let summarizer = Summarizer::new(RuleBasedAnalyzer::new());
    for n in 1..=6 {
        let summary = summarizer
            .clone()
            .with_num_sentences(n)
            .summarize_detailed(PARAGRAPH)
            .unwrap();
        assert_eq!(summary.sentences.len(), n.min(summary.scored_sentences));
    }
}

#[test]
fn test_scores_non_increasing() {
    let summary = Summarizer::new(RuleBasedAnalyzer::new())
        .with_num_sentences(4)
        .summarize_detailed(PARAGRAPH)
        .unwrap();
    for pair in summary.sentences.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].index < pair[1].index);
        }
    }
}

#[test]
fn test_idempotent() {
    let analyzer = RuleBasedAnalyzer::new();
    let first = summarize(PARAGRAPH, &analyzer, 2).unwrap();
    let second = summarize(PARAGRAPH, &analyzer, 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scoring_modes_agree() {
    let analyzer = pets_analyzer(&["a"]);
    let all = Summarizer::with_config(&analyzer, SummarizerConfig::default());
    let keywords = Summarizer::with_config(
        &analyzer,
        SummarizerConfig::default().with_scoring(ScoringMode::KeywordsOnly),
    );
    assert_eq!(
        all.summarize_detailed(PETS).unwrap(),
        keywords.summarize_detailed(PETS).unwrap()
    );
}

// ─── Summarizer surface ─────────────────────────────────────────────────────

#[test]
fn test_shared_analyzer_across_threads() {
    let analyzer = Arc::new(RuleBasedAnalyzer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || summarize(RUST, &analyzer, 1).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Rust compiles crates and macros.");
    }
}

#[test]
fn test_batch_keeps_input_order() {
    let summarizer = Summarizer::new(pets_analyzer(&["a"])).with_num_sentences(1);
    let texts = [PETS, "", "the a.", "Dogs bark."];
    let results = summarizer.summarize_batch(&texts);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_deref().unwrap(), "Cats sleep a lot.");
    assert_eq!(results[1].as_deref().unwrap(), "");
    assert!(results[2].is_ok());
    assert_eq!(results[3].as_deref().unwrap(), "Dogs bark.");
}

#[test]
fn test_observer_times_every_stage() {
    let summarizer = Summarizer::new(RuleBasedAnalyzer::new()).with_num_sentences(2);
    let mut observer = StageTimingObserver::new();
    summarizer
        .summarize_with_observer(PARAGRAPH, &mut observer)
        .unwrap();
    assert_eq!(observer.reports().len(), 6);
}

// ─── Specs ──────────────────────────────────────────────────────────────────

#[test]
fn test_summarizer_from_spec() {
    let spec = SummarizerSpec::from_json(r#"{ "v": 1, "max_sentences": 1 }"#).unwrap();
    let summarizer = spec.into_summarizer().unwrap();
    assert_eq!(
        summarizer.summarize(RUST).unwrap(),
        "Rust compiles crates and macros."
    );
}

#[test]
fn test_spec_stopword_overrides_change_ranking() {
    let spec = SummarizerSpec::from_json(
        r#"{ "v": 1, "max_sentences": 1, "stopwords": { "add": ["macros", "rust"] } }"#,
    )
    .unwrap();
    let summarizer = spec.into_summarizer().unwrap();
    assert_eq!(summarizer.summarize(RUST).unwrap(), "Rust compiles crates.");
}

#[test]
fn test_invalid_spec_rejected() {
    let spec = SummarizerSpec::from_json(r#"{ "v": 1, "max_sentences": 0 }"#).unwrap();
    match spec.into_summarizer() {
        Err(SummarizeError::InvalidConfig(report)) => assert_eq!(report.errors().count(), 1),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_spec_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summarizer.json");
    std::fs::write(&path, r#"{ "v": 1, "language": "en", "max_sentences": 2 }"#).unwrap();

    let summarizer = SummarizerSpec::from_path(&path)
        .unwrap()
        .into_summarizer()
        .unwrap();
    assert_eq!(summarizer.config().num_sentences, 2);
    assert_eq!(
        summarizer.summarize(RUST).unwrap(),
        "Rust compiles crates and macros. Rust compiles crates."
    );
}

//! Stop-word classification
//!
//! Per-language lists come from the `stop-words` crate; Chinese and Japanese
//! use small embedded lists. Callers can extend or shrink any list.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Languages with a built-in stop-word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
    Polish,
    Arabic,
    Chinese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 18] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Russian,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Hungarian,
        Language::Turkish,
        Language::Polish,
        Language::Arabic,
        Language::Chinese,
        Language::Japanese,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Danish => "da",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Turkish => "tr",
            Language::Polish => "pl",
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    /// Resolve a language code or English name, falling back to English.
    pub fn resolve(value: &str) -> Self {
        value.parse().unwrap_or(Language::English)
    }

    fn stopwords(&self) -> FxHashSet<String> {
        let lang = match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Finnish => LANGUAGE::Finnish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
            Language::Polish => LANGUAGE::Polish,
            Language::Arabic => LANGUAGE::Arabic,
            Language::Chinese => return collect(CHINESE),
            Language::Japanese => return collect(JAPANESE),
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

/// Error for an unrecognized language code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl std::fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lang = match value.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "fi" | "finnish" => Language::Finnish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            "pl" | "polish" => Language::Polish,
            "ar" | "arabic" => Language::Arabic,
            "zh" | "chinese" => Language::Chinese,
            "ja" | "japanese" => Language::Japanese,
            _ => return Err(UnknownLanguage(value.to_string())),
        };
        Ok(lang)
    }
}

const CHINESE: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这", "那",
    "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于", "能", "会",
    "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
];

const JAPANESE: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この", "ため",
    "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か",
    "だ", "これ", "によって", "により", "おり",
];

fn collect(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
}

/// Stop-word lookup used to flag tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl StopwordFilter {
    /// Filter for a language code or name; unknown codes use English.
    pub fn new(language: &str) -> Self {
        Self::for_language(Language::resolve(language))
    }

    pub fn for_language(language: Language) -> Self {
        Self {
            stopwords: language.stopwords(),
            case_sensitive: false,
        }
    }

    /// A filter that flags nothing
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("of"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
        assert_eq!(Language::resolve("klingon"), Language::English);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert_eq!(" German ".parse::<Language>(), Ok(Language::German));
    }

    #[test]
    fn test_custom_list_add_remove() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("EXTRA"));

        filter.remove_stopwords(&[String::from("custom")]);
        assert!(!filter.is_stopword("custom"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let filter = StopwordFilter::new("en").with_case_sensitive(true);
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_cjk_lists() {
        assert!(StopwordFilter::new("zh").is_stopword("的"));
        assert!(!StopwordFilter::new("zh").is_stopword("机器"));
        assert!(StopwordFilter::new("ja").is_stopword("は"));
        assert!(!StopwordFilter::new("ja").is_stopword("機械"));
    }
}

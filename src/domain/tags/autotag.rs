//! Candidate tag extraction from post bodies
//!
//! An [`AutoTagger`] owns exactly one [`TagStrategy`], chosen when it is
//! built. The frequency strategy needs nothing external; the linguistic
//! strategy delegates token selection to a [`KeyTokenExtractor`] supplied by
//! the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Default number of candidates returned by [`AutoTagger::tag`].
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Default minimum token length considered by the strategies.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "let", "like", "may", "me", "might", "more", "most", "must", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "use", "used", "using", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

fn valid_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z-]*$").unwrap())
}

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\w'-]+").unwrap())
}

/// Letters and hyphens only, starting with a letter.
pub fn is_valid_tag(token: &str) -> bool {
    valid_tag_regex().is_match(token)
}

/// Which strategy an [`AutoTagger`] should try to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Frequency,
    Linguistic,
}

/// Tuning knobs shared by both strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoTagSettings {
    pub max_candidates: usize,
    pub min_token_length: usize,
    pub strategy: StrategyKind,
    pub extra_stop_words: Vec<String>,
}

impl Default for AutoTagSettings {
    fn default() -> Self {
        AutoTagSettings {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            strategy: StrategyKind::default(),
            extra_stop_words: Vec::new(),
        }
    }
}

/// External linguistic capability: returns the tokens it considers key
/// (nouns, proper nouns), in text order, repeats included.
pub trait KeyTokenExtractor {
    fn extract_key_tokens(&self, text: &str) -> Vec<String>;
}

/// A candidate extraction strategy
pub trait TagStrategy {
    fn name(&self) -> &'static str;

    /// Ranked candidates, best first, unbounded.
    fn candidates(&self, text: &str) -> Vec<String>;
}

/// Shared token filter: stop words, length and the validity pattern.
#[derive(Debug, Clone)]
struct TokenFilter {
    stop_words: HashSet<String>,
    min_length: usize,
}

impl TokenFilter {
    fn new(settings: &AutoTagSettings) -> Self {
        let stop_words = STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(settings.extra_stop_words.iter().map(|w| w.to_lowercase()))
            .collect();
        TokenFilter {
            stop_words,
            min_length: settings.min_token_length,
        }
    }

    fn accepts(&self, token: &str) -> bool {
        token.chars().count() >= self.min_length
            && !self.stop_words.contains(&token.to_lowercase())
            && is_valid_tag(token)
    }
}

/// Rank tokens by frequency, ties by first occurrence.
fn rank_by_frequency(tokens: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        let count = counts.entry(token.clone()).or_default();
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }
    // Stable sort preserves first-occurrence order among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
}

/// Most frequent words of the text, lower-cased
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    filter: TokenFilter,
}

impl FrequencyStrategy {
    pub fn new(settings: &AutoTagSettings) -> Self {
        FrequencyStrategy {
            filter: TokenFilter::new(settings),
        }
    }
}

impl TagStrategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let tokens = word_regex()
            .find_iter(text)
            .map(|m| m.as_str().trim_matches('\'').to_lowercase())
            .filter(|token| self.filter.accepts(token));
        rank_by_frequency(tokens)
    }
}

/// Key tokens chosen by an external linguistic toolkit
pub struct LinguisticStrategy<E> {
    extractor: E,
    filter: TokenFilter,
}

impl<E: KeyTokenExtractor> LinguisticStrategy<E> {
    pub fn new(extractor: E, settings: &AutoTagSettings) -> Self {
        LinguisticStrategy {
            extractor,
            filter: TokenFilter::new(settings),
        }
    }
}

impl<E: KeyTokenExtractor> TagStrategy for LinguisticStrategy<E> {
    fn name(&self) -> &'static str {
        "linguistic"
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let tokens = self
            .extractor
            .extract_key_tokens(text)
            .into_iter()
            .map(|token| token.trim().to_string())
            .filter(|token| self.filter.accepts(token));
        rank_by_frequency(tokens)
    }
}

/// Produces at most `max_candidates` valid tags from body text.
pub struct AutoTagger {
    strategy: Box<dyn TagStrategy>,
    max_candidates: usize,
}

impl AutoTagger {
    /// Build a tagger. The linguistic strategy is used only when requested
    /// and an extractor is available; otherwise frequency is used.
    pub fn new(settings: &AutoTagSettings, extractor: Option<Box<dyn KeyTokenExtractor>>) -> Self {
        let strategy: Box<dyn TagStrategy> = match (settings.strategy, extractor) {
            (StrategyKind::Linguistic, Some(extractor)) => {
                Box::new(LinguisticStrategy::new(extractor, settings))
            }
            (StrategyKind::Linguistic, None) => {
                tracing::warn!("linguistic toolkit unavailable, using frequency strategy");
                Box::new(FrequencyStrategy::new(settings))
            }
            (StrategyKind::Frequency, _) => Box::new(FrequencyStrategy::new(settings)),
        };
        Self::with_strategy(strategy, settings.max_candidates)
    }

    pub fn with_strategy(strategy: Box<dyn TagStrategy>, max_candidates: usize) -> Self {
        AutoTagger {
            strategy,
            max_candidates,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn tag(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let mut candidates: Vec<String> = self
            .strategy
            .candidates(text)
            .into_iter()
            .filter(|tag| is_valid_tag(tag))
            .collect();
        candidates.truncate(self.max_candidates);
        tracing::debug!(
            strategy = self.strategy.name(),
            count = candidates.len(),
            "extracted candidate tags"
        );
        candidates
    }
}

impl<T: KeyTokenExtractor + ?Sized> KeyTokenExtractor for Box<T> {
    fn extract_key_tokens(&self, text: &str) -> Vec<String> {
        (**self).extract_key_tokens(text)
    }
}

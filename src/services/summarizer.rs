use crate::nlp::{stopwords, AnalysisError, TextTokenizer};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub const DEFAULT_MAX_SENTENCES: usize = 3;

struct ScoredSentence<'a> {
    position: usize,
    text: &'a str,
    score: f64,
}

/// Extractive summary: sentences ranked by the mean corpus frequency of
/// their significant words, emitted in source order.
pub struct Summarizer {
    tokenizer: Arc<dyn TextTokenizer>,
}

impl Summarizer {
    pub fn new(tokenizer: Arc<dyn TextTokenizer>) -> Self {
        Self { tokenizer }
    }

    /// A limit of 0 is treated as 1.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> Result<String, AnalysisError> {
        let limit = max_sentences.max(1);
        let sentences = self.tokenizer.sentences(text)?;
        if sentences.len() <= limit {
            return Ok(text.trim().to_string());
        }

        let frequencies = self.word_frequencies(text)?;
        let mut ranked = self.score_sentences(&sentences, &frequencies)?;

        // Stable sort: equal scores keep source order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked.sort_by_key(|sentence| sentence.position);

        let summary = ranked
            .iter()
            .map(|sentence| sentence.text)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(summary.trim().to_string())
    }

    fn significant_words(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        let words = self.tokenizer.words(&text.to_lowercase())?;
        Ok(words
            .into_iter()
            .filter(|word| {
                !word.is_empty()
                    && word.chars().all(char::is_alphanumeric)
                    && !stopwords::is_stopword(word)
            })
            .collect())
    }

    fn word_frequencies(&self, text: &str) -> Result<HashMap<String, usize>, AnalysisError> {
        let mut freq = HashMap::new();
        for word in self.significant_words(text)? {
            *freq.entry(word).or_insert(0) += 1;
        }
        Ok(freq)
    }

    /// Repeated sentences are scored once, at their first position.
    /// Sentences without significant words are left out entirely.
    fn score_sentences<'a>(
        &self,
        sentences: &[&'a str],
        frequencies: &HashMap<String, usize>,
    ) -> Result<Vec<ScoredSentence<'a>>, AnalysisError> {
        let mut seen = HashSet::new();
        let mut scored = Vec::new();

        for (position, &sentence) in sentences.iter().enumerate() {
            if !seen.insert(sentence) {
                continue;
            }
            let words = self.significant_words(sentence)?;
            if words.is_empty() {
                continue;
            }
            let total: usize = words
                .iter()
                .map(|word| frequencies.get(word).copied().unwrap_or(0))
                .sum();
            scored.push(ScoredSentence {
                position,
                text: sentence,
                score: total as f64 / words.len() as f64,
            });
        }

        Ok(scored)
    }
}

//! Natural-language primitives consumed by the analyzers.
//! Tokenization and polarity scoring come from external crates; the
//! analyzers only see the traits below.
pub mod polarity;
pub mod stopwords;
pub mod tokenize;

#[cfg(test)]
pub mod testing;

pub use polarity::VaderScorer;
pub use tokenize::UnicodeTokenizer;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("polarity scoring failed: {0}")]
    Polarity(String),
    #[error("tokenization failed: {0}")]
    Tokenizer(String),
}

/// Sentiment valence of a text. `compound` lies in [-1, 1], the other
/// three fields are proportions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScore {
    pub compound: f64,
    pub negative: f64,
    pub positive: f64,
    pub neutral: f64,
}

pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<PolarityScore, AnalysisError>;
}

pub trait TextTokenizer: Send + Sync {
    /// Sentences in source order, trimmed, borrowed from `text`.
    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, AnalysisError>;

    /// Word tokens in source order. Clitics such as `'s` and `n't` come
    /// back as their own tokens; callers filter what they do not want.
    fn words(&self, text: &str) -> Result<Vec<String>, AnalysisError>;
}

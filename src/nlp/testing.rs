//! Deterministic stand-ins for the external primitives.
use super::{AnalysisError, PolarityScore, PolarityScorer, TextTokenizer};
use std::time::Duration;

/// Returns the same score for every input.
pub struct FixedScorer(pub PolarityScore);

impl FixedScorer {
    pub fn compound(compound: f64) -> Self {
        Self(PolarityScore {
            compound,
            negative: if compound < 0.0 { -compound } else { 0.0 },
            positive: if compound > 0.0 { compound } else { 0.0 },
            neutral: 1.0 - compound.abs(),
        })
    }

    pub fn with_negative(compound: f64, negative: f64) -> Self {
        Self(PolarityScore {
            compound,
            negative,
            positive: 0.0,
            neutral: 1.0 - negative,
        })
    }
}

impl PolarityScorer for FixedScorer {
    fn score(&self, _text: &str) -> Result<PolarityScore, AnalysisError> {
        Ok(self.0)
    }
}

pub struct FailingScorer;

impl PolarityScorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<PolarityScore, AnalysisError> {
        Err(AnalysisError::Polarity("lexicon unavailable".to_string()))
    }
}

/// Blocks the calling thread before answering with a neutral score.
pub struct SlowScorer(pub Duration);

impl PolarityScorer for SlowScorer {
    fn score(&self, _text: &str) -> Result<PolarityScore, AnalysisError> {
        std::thread::sleep(self.0);
        Ok(FixedScorer::compound(0.0).0)
    }
}

pub struct FailingTokenizer;

impl TextTokenizer for FailingTokenizer {
    fn sentences<'a>(&self, _text: &'a str) -> Result<Vec<&'a str>, AnalysisError> {
        Err(AnalysisError::Tokenizer("sentence model unavailable".to_string()))
    }

    fn words(&self, _text: &str) -> Result<Vec<String>, AnalysisError> {
        Err(AnalysisError::Tokenizer("word model unavailable".to_string()))
    }
}

use super::{AnalysisError, PolarityScore, PolarityScorer};
use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER lexicon scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<PolarityScore, AnalysisError> {
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        let field = |key: &str| -> Result<f64, AnalysisError> {
            match scores.get(key).copied() {
                Some(value) if value.is_finite() => Ok(value),
                Some(value) => Err(AnalysisError::Polarity(format!(
                    "non-finite '{key}' score: {value}"
                ))),
                None => Err(AnalysisError::Polarity(format!("missing '{key}' score"))),
            }
        };

        let negative = field("neg")?;
        let positive = field("pos")?;
        // The crate amplifies `!`/`?` even when no word carries valence; a
        // zero valence sum must stay at a zero compound.
        let compound = if negative == 0.0 && positive == 0.0 {
            0.0
        } else {
            field("compound")?
        };

        Ok(PolarityScore {
            compound,
            negative,
            positive,
            neutral: field("neu")?,
        })
    }
}

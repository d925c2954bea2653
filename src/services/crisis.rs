use crate::nlp::{AnalysisError, PolarityScore, PolarityScorer};
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_SEVERITY: f64 = 0.5;
const SEVERITY_THRESHOLD: f64 = 0.7;
const EXTREME_COMPOUND: f64 = -0.8;
const EXTREME_NEGATIVE: f64 = 0.6;

struct CrisisPhrase {
    phrase: &'static str,
    weight: Option<f64>,
}

impl CrisisPhrase {
    const fn weighted(phrase: &'static str, weight: f64) -> Self {
        Self {
            phrase,
            weight: Some(weight),
        }
    }

    const fn plain(phrase: &'static str) -> Self {
        Self {
            phrase,
            weight: None,
        }
    }

    fn severity(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_SEVERITY)
    }
}

const CRISIS_LEXICON: &[CrisisPhrase] = &[
    CrisisPhrase::weighted("suicide", 0.9),
    CrisisPhrase::weighted("kill myself", 0.9),
    CrisisPhrase::plain("end my life"),
    CrisisPhrase::weighted("hurt myself", 0.7),
    CrisisPhrase::plain("self harm"),
    CrisisPhrase::weighted("want to die", 0.8),
    CrisisPhrase::plain("better off dead"),
    CrisisPhrase::plain("no point living"),
    CrisisPhrase::weighted("hopeless", 0.6),
    CrisisPhrase::weighted("can't go on", 0.7),
    CrisisPhrase::plain("end it all"),
    CrisisPhrase::plain("take my life"),
    CrisisPhrase::plain("harm myself"),
    CrisisPhrase::plain("cut myself"),
    CrisisPhrase::plain("overdose"),
    CrisisPhrase::plain("jump off"),
    CrisisPhrase::plain("hanging myself"),
    CrisisPhrase::weighted("worthless", 0.5),
    CrisisPhrase::plain("useless"),
    CrisisPhrase::plain("burden"),
    CrisisPhrase::plain("everyone would be better"),
    CrisisPhrase::plain("plan to hurt"),
    CrisisPhrase::plain("plan to kill"),
    CrisisPhrase::plain("thoughts of death"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisTrigger {
    PhraseMatch,
    ExtremeNegativePolarity,
    AccumulatedSeverity,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisAssessment {
    pub crisis_detected: bool,
    pub crisis_score: f64,
    pub matched_phrases: Vec<&'static str>,
    pub triggers: Vec<CrisisTrigger>,
    pub polarity: PolarityScore,
}

/// Phrase lexicon combined with an extreme-negativity rule.
///
/// Phrases match as substrings of the lower-cased text, so short entries
/// such as "burden" or "useless" also fire inside longer words.
pub struct CrisisDetector {
    scorer: Arc<dyn PolarityScorer>,
}

impl CrisisDetector {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn detect(&self, text: &str) -> Result<bool, AnalysisError> {
        self.assess(text).map(|assessment| assessment.crisis_detected)
    }

    pub fn assess(&self, text: &str) -> Result<CrisisAssessment, AnalysisError> {
        let lowered = text.to_lowercase();
        let mut crisis_score = 0.0;
        let mut matched_phrases = Vec::new();

        for entry in CRISIS_LEXICON {
            if lowered.contains(entry.phrase) {
                matched_phrases.push(entry.phrase);
                crisis_score += entry.severity();
            }
        }

        let polarity = self.scorer.score(text)?;

        // Any phrase match already decides the outcome; the accumulated
        // score is still evaluated and reported on its own.
        let mut triggers = Vec::new();
        if !matched_phrases.is_empty() {
            triggers.push(CrisisTrigger::PhraseMatch);
        }
        if polarity.compound <= EXTREME_COMPOUND && polarity.negative >= EXTREME_NEGATIVE {
            triggers.push(CrisisTrigger::ExtremeNegativePolarity);
        }
        if crisis_score >= SEVERITY_THRESHOLD {
            triggers.push(CrisisTrigger::AccumulatedSeverity);
        }

        Ok(CrisisAssessment {
            crisis_detected: !triggers.is_empty(),
            crisis_score,
            matched_phrases,
            triggers,
            polarity,
        })
    }
}

use crate::nlp::{AnalysisError, PolarityScorer};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Order matters: on equal keyword counts the earlier emotion wins.
const EMOTION_LEXICON: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &[
            "happy", "joy", "excited", "amazing", "wonderful", "great", "fantastic", "awesome",
            "pleased", "delighted",
        ],
    ),
    (
        Emotion::Sad,
        &["sad", "depressed", "unhappy", "miserable", "gloomy", "down", "blue", "melancholy"],
    ),
    (
        Emotion::Angry,
        &["angry", "mad", "furious", "irritated", "annoyed", "rage", "upset", "frustrated"],
    ),
    (
        Emotion::Fear,
        &["afraid", "scared", "terrified", "anxious", "worried", "nervous", "panic", "frightened"],
    ),
    (
        Emotion::Surprise,
        &["surprised", "shocked", "amazed", "astonished", "stunned", "unexpected"],
    ),
    (
        Emotion::Disgust,
        &["disgusted", "revolted", "repulsed", "sick", "nauseated", "appalled"],
    ),
];

const POLARITY_THRESHOLD: f64 = 0.1;

/// Keyword lexicon first, compound polarity when no keyword is present.
///
/// Polarity is scored on every call, so a scorer failure surfaces even when a
/// keyword decides the label.
pub struct EmotionClassifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl EmotionClassifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, text: &str) -> Result<Emotion, AnalysisError> {
        let score = self.scorer.score(text)?;
        Ok(dominant_keyword_emotion(text)
            .unwrap_or_else(|| emotion_from_compound(score.compound)))
    }
}

/// Keywords match as substrings, so "blue" also fires inside "bluetooth".
fn dominant_keyword_emotion(text: &str) -> Option<Emotion> {
    let lowered = text.to_lowercase();
    let mut best: Option<(Emotion, usize)> = None;

    for (emotion, keywords) in EMOTION_LEXICON {
        let count = keywords
            .iter()
            .filter(|&&keyword| lowered.contains(keyword))
            .count();
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((*emotion, count));
        }
    }

    best.map(|(emotion, _)| emotion)
}

fn emotion_from_compound(compound: f64) -> Emotion {
    if compound >= POLARITY_THRESHOLD {
        Emotion::Happy
    } else if compound <= -POLARITY_THRESHOLD {
        Emotion::Sad
    } else {
        Emotion::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::testing::{FailingScorer, FixedScorer};
    use crate::nlp::VaderScorer;

    fn classifier_with(compound: f64) -> EmotionClassifier {
        EmotionClassifier::new(Arc::new(FixedScorer::compound(compound)))
    }

    // The banded fallback the thresholds were collapsed from.
    fn four_band(compound: f64) -> Emotion {
        if compound >= 0.5 {
            Emotion::Happy
        } else if compound <= -0.5 {
            Emotion::Sad
        } else if compound <= -0.1 {
            Emotion::Sad
        } else if compound >= 0.1 {
            Emotion::Happy
        } else {
            Emotion::Neutral
        }
    }

    #[test]
    fn test_single_keyword_wins_over_polarity() {
        let classifier = classifier_with(-0.95);
        assert_eq!(classifier.classify("I feel amazing today!").unwrap(), Emotion::Happy);

        let classifier = classifier_with(0.95);
        assert_eq!(
            classifier.classify("I'm scared about what might happen").unwrap(),
            Emotion::Fear
        );
    }

    #[test]
    fn test_scorer_failure_surfaces_on_keyword_path() {
        let classifier = EmotionClassifier::new(Arc::new(FailingScorer));
        let err = classifier
            .classify("This makes me really angry and frustrated")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Polarity(_)));
    }

    #[test]
    fn test_higher_count_wins() {
        let classifier = classifier_with(0.0);
        assert_eq!(
            classifier
                .classify("I am sad and depressed but a little excited")
                .unwrap(),
            Emotion::Sad
        );
    }

    #[test]
    fn test_tie_goes_to_lexicon_order() {
        let classifier = classifier_with(0.0);
        assert_eq!(classifier.classify("happy but scared").unwrap(), Emotion::Happy);
        assert_eq!(classifier.classify("scared but happy").unwrap(), Emotion::Happy);
        assert_eq!(classifier.classify("furious and terrified").unwrap(), Emotion::Angry);
    }

    #[test]
    fn test_substring_matching() {
        let classifier = classifier_with(0.0);
        assert_eq!(
            classifier.classify("My new bluetooth headset arrived").unwrap(),
            Emotion::Sad
        );
        assert_eq!(classifier.classify("I am SO PLEASED").unwrap(), Emotion::Happy);
    }

    #[test]
    fn test_weak_polarity_is_neutral() {
        for compound in [-0.09, 0.0, 0.05, 0.099] {
            let classifier = classifier_with(compound);
            assert_eq!(
                classifier.classify("I feel okay, nothing special").unwrap(),
                Emotion::Neutral,
                "compound {compound}"
            );
        }
    }

    #[test]
    fn test_fallback_matches_four_bands() {
        let grid = [
            -1.0, -0.8, -0.5, -0.49, -0.3, -0.1, -0.099, -0.05, 0.0, 0.05, 0.099, 0.1, 0.3, 0.49,
            0.5, 0.8, 1.0,
        ];
        for compound in grid {
            assert_eq!(
                emotion_from_compound(compound),
                four_band(compound),
                "compound {compound}"
            );
        }
        assert_eq!(emotion_from_compound(-0.1), Emotion::Sad);
        assert_eq!(emotion_from_compound(0.1), Emotion::Happy);
    }

    #[test]
    fn test_scorer_failure_propagates() {
        let classifier = EmotionClassifier::new(Arc::new(FailingScorer));
        let err = classifier.classify("The meeting is at noon").unwrap_err();
        assert!(matches!(err, AnalysisError::Polarity(_)));
    }

    #[test]
    fn test_with_vader() {
        let classifier = EmotionClassifier::new(Arc::new(VaderScorer::new()));
        let cases = [
            ("I feel amazing today!", Emotion::Happy),
            ("I am so sad and depressed", Emotion::Sad),
            ("This makes me really angry and frustrated", Emotion::Angry),
            ("I'm scared about what might happen", Emotion::Fear),
            ("What a wonderful surprise this is!", Emotion::Happy),
            ("See you at the station tomorrow!!!", Emotion::Neutral),
        ];
        for (text, expected) in cases {
            assert_eq!(classifier.classify(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_serialized_label() {
        assert_eq!(serde_json::to_string(&Emotion::Surprise).unwrap(), "\"surprise\"");
        assert_eq!(Emotion::Neutral.to_string(), "neutral");
    }
}

use crate::config::Config;
use crate::nlp::{PolarityScorer, TextTokenizer, UnicodeTokenizer, VaderScorer};
use crate::services::{CrisisDetector, EmotionClassifier, Summarizer};
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub emotion: EmotionClassifier,
    pub crisis: CrisisDetector,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_primitives(config, Arc::new(VaderScorer::new()), Arc::new(UnicodeTokenizer::new()))
    }

    pub fn with_primitives(
        config: Config,
        scorer: Arc<dyn PolarityScorer>,
        tokenizer: Arc<dyn TextTokenizer>,
    ) -> Self {
        Self {
            config,
            emotion: EmotionClassifier::new(scorer.clone()),
            crisis: CrisisDetector::new(scorer),
            summarizer: Summarizer::new(tokenizer),
        }
    }
}

pub type SharedState = Arc<AppState>;

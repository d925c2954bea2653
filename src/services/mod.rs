pub mod crisis;
pub mod emotion;
pub mod summarizer;

pub use crisis::CrisisDetector;
pub use emotion::{Emotion, EmotionClassifier};
pub use summarizer::{Summarizer, DEFAULT_MAX_SENTENCES};

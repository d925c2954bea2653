use super::{AnalysisError, TextTokenizer};
use unicode_segmentation::UnicodeSegmentation;

const TERMINALS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];
const APOSTROPHES: &[char] = &['\'', '’'];

/// UAX #29 segmentation.
///
/// UAX #29 also breaks after every line feed, which cuts hard-wrapped
/// paragraphs mid-sentence. Boundaries are only accepted after terminal
/// punctuation, so such fragments are glued back onto their sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for UnicodeTokenizer {
    fn sentences<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, AnalysisError> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, segment) in text.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(idx);
            if ends_sentence(segment) {
                push_trimmed(&mut sentences, &text[begin..idx + segment.len()]);
                start = None;
            }
        }
        if let Some(begin) = start {
            push_trimmed(&mut sentences, &text[begin..]);
        }

        Ok(sentences)
    }

    fn words(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            split_clitic(word, &mut tokens);
        }
        Ok(tokens)
    }
}

fn ends_sentence(segment: &str) -> bool {
    segment
        .trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(TERMINALS)
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, sentence: &'a str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

// don't -> do + n't, it's -> it + 's
fn split_clitic(word: &str, out: &mut Vec<String>) {
    let Some(pos) = word.rfind(APOSTROPHES) else {
        out.push(word.to_string());
        return;
    };

    let negation = word[pos..].trim_start_matches(APOSTROPHES).eq_ignore_ascii_case("t")
        && pos > 1
        && word[..pos].ends_with(|c: char| c == 'n' || c == 'N');
    let (stem, clitic) = word.split_at(if negation { pos - 1 } else { pos });

    if !stem.is_empty() {
        out.push(stem.to_string());
    }
    out.push(clitic.to_string());
}

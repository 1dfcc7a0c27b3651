//! Rule-based answer synthesis.
//!
//! Stands in for a generation model: a short ordered rule table maps
//! question keywords to canned answers, with the first sentence of the
//! retrieved document as the fallback.

use crate::corpus::Document;

struct AnswerRule {
    keywords: &'static [&'static str],
    answer: &'static str,
}

// Checked top to bottom; the first rule with any keyword hit wins.
const ANSWER_RULES: &[AnswerRule] = &[
    AnswerRule {
        keywords: &["groundedness"],
        answer: "It measures how much the answer relies on the provided context.",
    },
    AnswerRule {
        keywords: &["reduce inference cost", "reduce cost"],
        answer: "Use smaller models and caching.",
    },
    AnswerRule {
        keywords: &["agentic rag"],
        answer: "It adds planning and tool use.",
    },
];

/// Produces an answer for `question` given the retrieved document.
pub fn synthesize_answer(question: &str, doc: &Document) -> String {
    let lowered = question.to_lowercase();
    for rule in ANSWER_RULES {
        if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
            return rule.answer.to_string();
        }
    }
    first_sentence(&doc.text)
}

/// Everything up to and including the first period, or the whole text
/// with a period appended when none is present.
fn first_sentence(text: &str) -> String {
    match text.split_once('.') {
        Some((head, _)) => format!("{head}."),
        None => format!("{text}."),
    }
}

//! End-to-end evaluation over the question set.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answer::synthesize_answer;
use crate::corpus::{Document, Question};
use crate::error::EvalError;
use crate::retrieve::retrieve;
use crate::score::{LatencySimulator, compute_groundedness, round_to};

/// Per-question evaluation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResult {
    pub query_id: String,
    pub question: String,
    pub doc_id: String,
    pub answer: String,
    /// Groundedness against the retrieved document, rounded to 3 places.
    pub groundedness: f64,
    pub latency_ms: u64,
    pub cost_usd: f64,
}

/// Runs retrieval, answering, and scoring for every question in order.
///
/// Results come back in question order. Jitter in the simulated latency
/// is the only randomness; pass a seeded rng for reproducible runs.
pub fn run_eval<R: Rng>(
    corpus: &[Document],
    questions: &[Question],
    rng: &mut R,
) -> Result<Vec<EvalResult>, EvalError> {
    let simulator = LatencySimulator::new();
    let mut results = Vec::with_capacity(questions.len());
    for question in questions {
        let doc = retrieve(&question.question, corpus).ok_or(EvalError::EmptyCorpus)?;
        let answer = synthesize_answer(&question.question, doc);
        let groundedness = round_to(compute_groundedness(&answer, &doc.text), 3);
        let (latency_ms, cost_usd) = simulator.simulate(&answer, rng);
        debug!(
            query_id = %question.id,
            doc_id = %doc.id,
            groundedness,
            latency_ms,
            "evaluated question"
        );
        results.push(EvalResult {
            query_id: question.id.clone(),
            question: question.question.clone(),
            doc_id: doc.id.clone(),
            answer,
            groundedness,
            latency_ms,
            cost_usd,
        });
    }
    Ok(results)
}

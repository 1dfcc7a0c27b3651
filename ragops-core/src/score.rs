//! Groundedness scoring and the latency/cost simulator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tokenize::{token_set, tokenize};

// ---------------------------------------------------------------------------
// Groundedness
// ---------------------------------------------------------------------------

/// Fraction of answer tokens that also occur in the context.
///
/// Duplicate answer tokens are counted each time they appear, while the
/// context is reduced to a token set. An empty answer scores 0.0.
pub fn compute_groundedness(answer: &str, context: &str) -> f64 {
    let answer_tokens = tokenize(answer);
    if answer_tokens.is_empty() {
        return 0.0;
    }
    let context_tokens = token_set(context);
    let grounded = answer_tokens
        .iter()
        .filter(|t| context_tokens.contains(*t))
        .count();
    grounded as f64 / answer_tokens.len() as f64
}

// ---------------------------------------------------------------------------
// Latency and cost simulation
// ---------------------------------------------------------------------------

/// Tuning knobs for the simulated serving profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Fixed per-request overhead in milliseconds.
    pub base_latency_ms: u64,
    /// Additional milliseconds per answer token.
    pub per_token_ms: u64,
    /// Upper bound of the uniform jitter added on top, inclusive.
    pub max_jitter_ms: u64,
    /// Dollar cost per answer token.
    pub cost_per_token: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            base_latency_ms: 50,
            per_token_ms: 2,
            max_jitter_ms: 20,
            cost_per_token: 0.00001,
        }
    }
}

/// Derives latency and cost figures from answer length.
#[derive(Debug, Clone, Default)]
pub struct LatencySimulator {
    config: SimulatorConfig,
}

impl LatencySimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Returns `(latency_ms, cost_usd)` for the given answer.
    ///
    /// Latency is base plus a per-token charge plus uniform jitter drawn
    /// from `rng`; an empty answer is billed as a single token. Cost is
    /// rounded to six decimal places.
    pub fn simulate<R: Rng>(&self, answer: &str, rng: &mut R) -> (u64, f64) {
        let tokens = tokenize(answer).len().max(1) as u64;
        let jitter = rng.gen_range(0..=self.config.max_jitter_ms);
        let latency_ms = self.config.base_latency_ms + self.config.per_token_ms * tokens + jitter;
        let cost_usd = round_to(self.config.cost_per_token * tokens as f64, 6);
        (latency_ms, cost_usd)
    }
}

/// Rounds half away from zero at `places` decimal digits.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

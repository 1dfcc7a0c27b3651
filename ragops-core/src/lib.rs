//! # ragops-core — Toy RAG Evaluation Pipelines
//!
//! This crate implements two small, self-contained evaluation pipelines for
//! retrieval-augmented generation (RAG) systems:
//!
//! 1. **Report pipeline**: runs a fixed question set against a fixed corpus
//!    (keyword-overlap retrieval, rule-based answer synthesis, groundedness
//!    plus latency and cost scoring) and writes a dated markdown report.
//! 2. **Metrics pipeline**: scores a hand-written dataset of queries,
//!    expected answers, retrieved contexts, and predicted answers with
//!    substring-based contextual recall, contextual precision, answer
//!    relevancy, and faithfulness.
//!
//! All scoring is deliberately simple (token-set intersection and substring
//! search); no model inference or retrieval index is involved.

// Foundation
pub mod error;
pub mod tokenize;

// Report pipeline
pub mod answer;
pub mod corpus;
pub mod pipeline;
pub mod report;
pub mod retrieve;
pub mod score;

// Metrics pipeline
pub mod dataset;
pub mod metrics;

// Re-exports
pub use corpus::{Document, Question, builtin_corpus, builtin_questions};
pub use dataset::builtin_dataset;
pub use error::EvalError;
pub use metrics::{DatasetItem, ItemMetrics, MetricsSummary, evaluate_dataset, score_item};
pub use pipeline::{EvalResult, run_eval};
pub use report::{write_report, write_report_for_date};
pub use score::{LatencySimulator, SimulatorConfig, compute_groundedness};

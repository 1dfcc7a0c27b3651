//! Error types for the ragops-core crate.

use thiserror::Error;

/// Top-level error type for evaluation operations.
///
/// The built-in datasets cannot trigger either variant in normal
/// operation; filesystem failures while writing the report are the one
/// genuinely reachable path.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Empty corpus: retrieval requires at least one document")]
    EmptyCorpus,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

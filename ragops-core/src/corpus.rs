//! Built-in corpus and question set for the report pipeline.

use serde::{Deserialize, Serialize};

/// A corpus document available for retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// An evaluation question with its reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub expected: String,
}

/// The built-in toy corpus: three short documents on LLM operations.
pub fn builtin_corpus() -> Vec<Document> {
    vec![
        Document {
            id: "doc1".into(),
            title: "LLM Evaluation Best Practices".into(),
            text: "Groundedness measures how well an LLM answer relies on the provided context. \
                   Toxicity, latency and cost are also common evaluation metrics."
                .into(),
        },
        Document {
            id: "doc2".into(),
            title: "Cost Optimization".into(),
            text: "To reduce inference cost, use smaller models and caching. \
                   Selective routing can pick the right model size on demand."
                .into(),
        },
        Document {
            id: "doc3".into(),
            title: "Agentic RAG".into(),
            text: "Agentic RAG adds planning and tool use to retrieval-augmented generation. \
                   It often re-queries or verifies intermediate results."
                .into(),
        },
    ]
}

/// The built-in question set evaluated by the report pipeline.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1".into(),
            question: "What does groundedness measure in LLM evaluation?".into(),
            expected: "It measures how much the answer relies on the provided context.".into(),
        },
        Question {
            id: "q2".into(),
            question: "Name two methods to reduce inference cost.".into(),
            expected: "Use smaller models and caching.".into(),
        },
        Question {
            id: "q3".into(),
            question: "What does Agentic RAG add to standard RAG?".into(),
            expected: "It adds planning and tool use.".into(),
        },
    ]
}

//! Substring-based RAG metrics over a labelled dataset.
//!
//! Four toy metrics per item, averaged into a [`MetricsSummary`]:
//! contextual recall and precision from how many retrieved contexts
//! contain the expected answer, answer relevancy from the expected
//! answer appearing inside the predicted one, and faithfulness from
//! substring consistency between the predicted answer and any context.

use serde::{Deserialize, Serialize};

use crate::score::round_to;

/// One labelled evaluation example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetItem {
    pub query: String,
    pub expected_answer: String,
    pub retrieved_contexts: Vec<String>,
    pub predicted_answer: String,
}

/// Metric values for a single dataset item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemMetrics {
    pub recall: f64,
    pub precision: f64,
    pub answer_relevancy: f64,
    pub faithfulness: f64,
}

/// Dataset-level averages, each rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub contextual_recall: f64,
    pub contextual_precision: f64,
    pub answer_relevancy: f64,
    pub faithfulness: f64,
}

impl MetricsSummary {
    /// Metric names and values in reporting order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("contextual_recall", self.contextual_recall),
            ("contextual_precision", self.contextual_precision),
            ("answer_relevancy", self.answer_relevancy),
            ("faithfulness", self.faithfulness),
        ]
    }
}

/// Scores one item. All matching is case-insensitive substring search.
///
/// Recall is capped at 1.0 under the one-relevant-context assumption the
/// built-in dataset is written to satisfy. An item without contexts
/// scores 0.0 on recall, precision, and faithfulness.
pub fn score_item(item: &DatasetItem) -> ItemMetrics {
    let expected = item.expected_answer.to_lowercase();
    let predicted = item.predicted_answer.to_lowercase();
    let contexts: Vec<String> = item
        .retrieved_contexts
        .iter()
        .map(|c| c.to_lowercase())
        .collect();

    let relevant = contexts.iter().filter(|c| c.contains(&expected)).count();
    let recall = (relevant as f64).min(1.0);
    let precision = if contexts.is_empty() {
        0.0
    } else {
        relevant as f64 / contexts.len() as f64
    };
    let answer_relevancy = if predicted.contains(&expected) { 1.0 } else { 0.0 };
    let faithfulness = if contexts
        .iter()
        .any(|c| c.contains(&predicted) || predicted.contains(c.as_str()))
    {
        1.0
    } else {
        0.0
    };

    ItemMetrics {
        recall,
        precision,
        answer_relevancy,
        faithfulness,
    }
}

/// Averages per-item metrics across the dataset.
///
/// An empty dataset yields all-zero metrics rather than dividing by
/// zero.
pub fn evaluate_dataset(dataset: &[DatasetItem]) -> MetricsSummary {
    let mut total_recall = 0.0;
    let mut total_precision = 0.0;
    let mut total_relevancy = 0.0;
    let mut total_faithfulness = 0.0;
    for item in dataset {
        let metrics = score_item(item);
        total_recall += metrics.recall;
        total_precision += metrics.precision;
        total_relevancy += metrics.answer_relevancy;
        total_faithfulness += metrics.faithfulness;
    }
    let count = dataset.len().max(1) as f64;
    MetricsSummary {
        contextual_recall: round_to(total_recall / count, 2),
        contextual_precision: round_to(total_precision / count, 2),
        answer_relevancy: round_to(total_relevancy / count, 2),
        faithfulness: round_to(total_faithfulness / count, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(expected: &str, contexts: &[&str], predicted: &str) -> DatasetItem {
        DatasetItem {
            query: "q".into(),
            expected_answer: expected.into(),
            retrieved_contexts: contexts.iter().map(|c| c.to_string()).collect(),
            predicted_answer: predicted.into(),
        }
    }

    // -- Per-item scoring ----------------------------------------------------

    #[test]
    fn test_score_item_single_relevant_context() {
        let metrics = score_item(&item(
            "Paris",
            &[
                "Paris is the capital of France.",
                "France is located in Europe.",
                "The population of the city is about 2 million.",
            ],
            "Paris is the capital of France.",
        ));
        assert!((metrics.recall - 1.0).abs() < 1e-9);
        assert!((metrics.precision - 1.0 / 3.0).abs() < 1e-9);
        assert!((metrics.answer_relevancy - 1.0).abs() < 1e-9);
        assert!((metrics.faithfulness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_item_recall_caps_at_one() {
        let metrics = score_item(&item(
            "jupiter",
            &["Jupiter is big.", "Jupiter is a gas giant.", "Jupiter again."],
            "Jupiter",
        ));
        assert!((metrics.recall - 1.0).abs() < 1e-9);
        assert!((metrics.precision - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_item_no_contexts() {
        let metrics = score_item(&item("answer", &[], "answer"));
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.answer_relevancy, 1.0);
        assert_eq!(metrics.faithfulness, 0.0);
    }

    #[test]
    fn test_score_item_matching_is_case_insensitive() {
        let metrics = score_item(&item("PARIS", &["paris is lovely."], "we love Paris"));
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.answer_relevancy, 1.0);
    }

    #[test]
    fn test_faithfulness_accepts_context_inside_predicted() {
        let metrics = score_item(&item(
            "1945",
            &["ended in 1945."],
            "The war ended in 1945. Millions were displaced.",
        ));
        assert_eq!(metrics.faithfulness, 1.0);
    }

    #[test]
    fn test_faithfulness_zero_without_substring_relation() {
        let metrics = score_item(&item(
            "George Orwell",
            &["1984 is a dystopian novel by George Orwell."],
            "George Orwell wrote 1984.",
        ));
        assert_eq!(metrics.answer_relevancy, 1.0);
        assert_eq!(metrics.faithfulness, 0.0);
    }

    // -- Aggregation ---------------------------------------------------------

    #[test]
    fn test_evaluate_empty_dataset_is_all_zero() {
        let summary = evaluate_dataset(&[]);
        assert_eq!(summary.contextual_recall, 0.0);
        assert_eq!(summary.contextual_precision, 0.0);
        assert_eq!(summary.answer_relevancy, 0.0);
        assert_eq!(summary.faithfulness, 0.0);
    }

    #[test]
    fn test_evaluate_rounds_to_two_places() {
        let dataset = vec![
            item("a", &["a here", "nothing", "nothing else"], "a"),
            item("b", &["b here", "nothing", "nothing else"], "b"),
            item("c", &["c here", "nothing", "nothing else"], "c"),
        ];
        let summary = evaluate_dataset(&dataset);
        // Each precision is 1/3; the average rounds to 0.33.
        assert!((summary.contextual_precision - 0.33).abs() < 1e-9);
        assert!((summary.contextual_recall - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_entries_order() {
        let summary = MetricsSummary {
            contextual_recall: 1.0,
            contextual_precision: 0.33,
            answer_relevancy: 1.0,
            faithfulness: 1.0,
        };
        let names: Vec<&str> = summary.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "contextual_recall",
                "contextual_precision",
                "answer_relevancy",
                "faithfulness"
            ]
        );
    }
}

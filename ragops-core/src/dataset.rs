//! Built-in labelled dataset for the metrics pipeline.

use crate::metrics::DatasetItem;

fn item(query: &str, expected: &str, contexts: [&str; 3], predicted: &str) -> DatasetItem {
    DatasetItem {
        query: query.into(),
        expected_answer: expected.into(),
        retrieved_contexts: contexts.iter().map(|c| c.to_string()).collect(),
        predicted_answer: predicted.into(),
    }
}

/// Five hand-written examples, each with exactly one relevant context
/// and a predicted answer drawn from that context.
pub fn builtin_dataset() -> Vec<DatasetItem> {
    vec![
        item(
            "What is the capital of France?",
            "Paris",
            [
                "Paris is the capital of France.",
                "France is located in Europe.",
                "The population of the city is about 2 million.",
            ],
            "Paris is the capital of France.",
        ),
        item(
            "Who wrote the novel 1984?",
            "George Orwell",
            [
                "1984 is a dystopian novel by George Orwell.",
                "It was published in 1949.",
                "Animal Farm is another book by the same author.",
            ],
            "1984 is a dystopian novel by George Orwell.",
        ),
        item(
            "What is the largest planet in our solar system?",
            "Jupiter",
            [
                "Jupiter is the largest planet in the solar system.",
                "Mars is smaller than Earth.",
                "Saturn has large rings.",
            ],
            "Jupiter",
        ),
        item(
            "When did the Second World War end?",
            "1945",
            [
                "World War II ended in 1945.",
                "The war started in 1939.",
                "It involved many nations around the globe.",
            ],
            "World War II ended in 1945.",
        ),
        item(
            "Who discovered penicillin?",
            "Alexander Fleming",
            [
                "Alexander Fleming discovered penicillin in 1928.",
                "Penicillin was the first true antibiotic.",
                "The discovery revolutionized medicine.",
            ],
            "Alexander Fleming",
        ),
    ]
}

//! Token-overlap document retrieval.

use tracing::debug;

use crate::corpus::Document;
use crate::tokenize::token_set;

/// Picks the corpus document with the highest unique-token overlap
/// against the question.
///
/// Both the question and each document (title and body together) are
/// reduced to token sets; the score is the size of their intersection.
/// Ties keep the earliest document in corpus order, so a zero-overlap
/// question still resolves to the first document. Returns `None` only
/// for an empty corpus.
pub fn retrieve<'a>(question: &str, corpus: &'a [Document]) -> Option<&'a Document> {
    let query_tokens = token_set(question);
    let mut best: Option<(&Document, usize)> = None;
    for doc in corpus {
        let doc_tokens = token_set(&format!("{} {}", doc.title, doc.text));
        let score = query_tokens.intersection(&doc_tokens).count();
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((doc, score)),
        }
    }
    let (doc, score) = best?;
    debug!(doc_id = %doc.id, score, "retrieved document");
    Some(doc)
}

use thiserror::Error;

/// Failures while turning a store file into listings.
///
/// None of these abort a batch: each is recorded against the store and the
/// remaining documents and records are still processed.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A top-level document could not be parsed as JSON.
    #[error("malformed document #{index}: {source}")]
    MalformedDocument {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record inside a document is not listing-shaped.
    #[error("invalid record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The file holds no JSON array at all.
    #[error("no JSON documents found")]
    NoDocuments,
}

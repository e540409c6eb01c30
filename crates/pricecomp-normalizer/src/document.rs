//! Recovery of the top-level JSON documents in a store file.
//!
//! Spiders append one array per run to the same file, so a file is a stream
//! of arrays (`[...][...]` or `[...]\n[...]`) rather than a single JSON
//! value. Each array is found by bracket-depth scanning and parsed on its
//! own so one truncated or corrupt run does not lose the others.

use serde_json::Value;

use crate::error::NormalizeError;

/// Records recovered from a store file, plus the documents that failed.
#[derive(Debug, Default)]
pub struct DocumentBatch {
    pub records: Vec<Value>,
    pub errors: Vec<NormalizeError>,
}

/// Splits `content` into the source text of each top-level array.
///
/// Brackets inside JSON strings are ignored. An array still open at the end
/// of input is returned as-is so that parsing reports it as malformed.
#[must_use]
pub fn split_documents(content: &str) -> Vec<&str> {
    let mut documents = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in content.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' if depth > 0 => in_string = true,
            '[' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            ']' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start.take() {
                        documents.push(&content[s..=i]);
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        documents.push(&content[s..]);
    }

    documents
}

/// Parses every top-level document in `content`.
///
/// Arrays contribute their elements in order; a document that parses to any
/// other value contributes that value. Documents that fail to parse are
/// reported in [`DocumentBatch::errors`] and skipped.
///
/// # Errors
///
/// Returns [`NormalizeError::NoDocuments`] when `content` contains no array.
pub fn parse_documents(content: &str) -> Result<DocumentBatch, NormalizeError> {
    let documents = split_documents(content);
    if documents.is_empty() {
        return Err(NormalizeError::NoDocuments);
    }

    let mut batch = DocumentBatch::default();
    for (index, text) in documents.into_iter().enumerate() {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => batch.records.extend(items),
            Ok(other) => batch.records.push(other),
            Err(source) => batch
                .errors
                .push(NormalizeError::MalformedDocument { index, source }),
        }
    }

    Ok(batch)
}

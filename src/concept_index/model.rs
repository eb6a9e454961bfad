use serde::{Deserialize, Serialize};

/// Metadata extracted from a single concept file; one row of the index.
///
/// Records are immutable after extraction and live only for the duration of
/// one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// `PREFIX-NNN` identifier, the sort and grouping key.
    pub id: String,
    pub name: String,
    /// Already trimmed and truncated at extraction time.
    pub description: String,
    pub related: Vec<String>,
    // Not rendered in the index tables, but retained with the record.
    pub contributors: Vec<String>,
    /// Last-modified date of the source file, `YYYY-MM-DD`.
    pub modified: String,
    /// Basename of the source file, target of the index link.
    pub filename: String,
}

impl ConceptRecord {
    /// Numeric suffix of the id (`UMA-042` -> 42), if it parses.
    pub fn number(&self) -> Option<u32> {
        self.id.split('-').nth(1)?.parse().ok()
    }
}

//! Per-file metadata extraction.
//!
//! Every field is best-effort: a missing title falls back to the filename, a
//! missing definition becomes a placeholder, missing lists stay empty. The
//! only hard failures are an unreadable file or a filename no identity can be
//! derived from, and those are reported per file, never aborting the run.

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::model::ConceptRecord;
use crate::scanner::Document;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

const DEFINITION_HEADER: &str = "## 定义";
const RELATED_HEADER: &str = "## 相关概念";
const CONTRIBUTORS_HEADER: &str = "## 贡献者";

const DESCRIPTION_MAX_CHARS: usize = 150;
const DESCRIPTION_PLACEHOLDER: &str = "暂无描述";

pub fn extract_record(config: &IndexConfig, path: &Path) -> Result<ConceptRecord> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| IndexError::Extract(format!("unusable filename: {}", path.display())))?
        .to_string();

    let content = fs::read_to_string(path)
        .map_err(|e| IndexError::Extract(format!("{}: {}", path.display(), e)))?;
    let doc = Document::parse(&content, &config.prefix);

    let (id, name) = match &doc.title {
        Some(title) => (title.id.clone(), title.name.clone()),
        None => identity_from_filename(&filename)?,
    };

    let description = match doc.section(DEFINITION_HEADER) {
        Some(section) => truncate_description(&section.text()),
        None => DESCRIPTION_PLACEHOLDER.to_string(),
    };

    Ok(ConceptRecord {
        id,
        name,
        description,
        related: related_concepts(&doc),
        contributors: contributors(&doc),
        modified: modified_date(path)?,
        filename,
    })
}

/// Fallback identity for documents without a title line: the first two
/// dash-separated tokens of the file stem form the id, the rest becomes the
/// name (`UMA-030-silicon-aesthetics.md` -> `UMA-030`, "silicon aesthetics").
fn identity_from_filename(filename: &str) -> Result<(String, String)> {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    let mut tokens = stem.split('-');
    let (Some(prefix), Some(number)) = (tokens.next(), tokens.next()) else {
        return Err(IndexError::Extract(format!(
            "cannot derive an id from '{filename}'"
        )));
    };
    let id = format!("{prefix}-{number}");
    let name = tokens.collect::<Vec<_>>().join(" ");
    Ok((id, name))
}

/// Hard cap at 150 characters, with a trailing `...` only when something was
/// actually cut off.
fn truncate_description(text: &str) -> String {
    if text.is_empty() {
        return DESCRIPTION_PLACEHOLDER.to_string();
    }
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// `- **Name**: note` bullets in the related-concepts section; the name is the
/// text between the bullet-bold prefix and the next `**` (or the rest of the
/// line if it is never closed). Other lines are skipped.
fn related_concepts(doc: &Document) -> Vec<String> {
    let Some(section) = doc.section(RELATED_HEADER) else {
        return Vec::new();
    };
    section
        .body
        .iter()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("- **")?;
            let name = match rest.find("**") {
                Some(end) => &rest[..end],
                None => rest,
            };
            Some(name.to_string())
        })
        .collect()
}

/// Plain `- Name` bullets in the contributors section.
fn contributors(doc: &Document) -> Vec<String> {
    let Some(section) = doc.section(CONTRIBUTORS_HEADER) else {
        return Vec::new();
    };
    section
        .body
        .iter()
        .filter_map(|line| {
            let name = line.trim().strip_prefix('-')?.trim();
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

fn modified_date(path: &Path) -> Result<String> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| IndexError::Extract(format!("{}: {}", path.display(), e)))?;
    let local: DateTime<Local> = modified.into();
    Ok(local.format("%Y-%m-%d").to_string())
}

//! One-shot orchestration: discover, extract, categorize, render, write.

use crate::categorize::{categorize, CATEGORIES};
use crate::config::IndexConfig;
use crate::discover::discover;
use crate::error::Result;
use crate::extract::extract_record;
use crate::model::ConceptRecord;
use crate::render::render;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// A concept file that failed extraction and was left out of the index.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one full regeneration run.
#[derive(Debug)]
pub struct RunReport {
    pub output_path: PathBuf,
    /// Number of records extracted, including any outside the declared
    /// category ranges.
    pub total: usize,
    /// (category label, record count) in fixed category order.
    pub category_counts: Vec<(String, usize)>,
    pub skipped: Vec<SkippedFile>,
}

/// Runs the whole pipeline once and overwrites the index document.
///
/// Per-file extraction failures are collected on the report, not raised; the
/// only error paths out of here are an unlistable concepts directory and a
/// failed write of the output file.
pub fn run(config: &IndexConfig) -> Result<RunReport> {
    let paths = discover(config)?;

    let mut records: Vec<ConceptRecord> = Vec::new();
    let mut skipped: Vec<SkippedFile> = Vec::new();
    for path in paths {
        match extract_record(config, &path) {
            Ok(record) => records.push(record),
            Err(e) => skipped.push(SkippedFile {
                path,
                reason: e.to_string(),
            }),
        }
    }

    let categorized = categorize(&records);
    let document = render(config, &categorized, records.len(), Local::now());

    let output_path = config.output_path();
    fs::write(&output_path, document)?;

    let category_counts = CATEGORIES
        .iter()
        .zip(&categorized)
        .map(|(category, bucket)| (category.label(&config.prefix), bucket.len()))
        .collect();

    Ok(RunReport {
        output_path,
        total: records.len(),
        category_counts,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_concept(dir: &Path, filename: &str, content: &str) {
        fs::write(dir.join(filename), content).unwrap();
    }

    #[test]
    fn test_full_run_writes_index_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        write_concept(
            dir.path(),
            "UMA-005-origins.md",
            "# UMA-005: 起源\n\n## 定义\n最早的概念。\n",
        );
        write_concept(
            dir.path(),
            "UMA-150-consent.md",
            "# UMA-150: 同意\n\n## 定义\n关于授权的概念。\n",
        );
        write_concept(
            dir.path(),
            "UMA-705-overflow.md",
            "# UMA-705: 溢出\n\n## 定义\n编号计划之外。\n",
        );

        let config = IndexConfig::with_concepts_dir(dir.path());
        let report = run(&config).unwrap();

        assert_eq!(report.total, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(report.category_counts.len(), 7);
        assert_eq!(report.category_counts[0].1, 1);
        assert_eq!(report.category_counts[1].1, 1);
        let placed: usize = report.category_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(placed, 2);

        let index = fs::read_to_string(report.output_path).unwrap();
        assert!(index.contains("共3个概念"));
        assert!(index.contains("[UMA-005](./UMA-005-origins.md)"));
        assert!(index.contains("[UMA-150](./UMA-150-consent.md)"));
        assert!(!index.contains("UMA-705"));
    }

    #[test]
    fn test_bad_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_concept(dir.path(), "UMA-005-good.md", "# UMA-005: 好的\n");
        fs::write(dir.path().join("UMA-006-binary.md"), [0xff, 0xfe]).unwrap();

        let config = IndexConfig::with_concepts_dir(dir.path());
        let report = run(&config).unwrap();

        assert_eq!(report.total, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0]
            .path
            .to_string_lossy()
            .contains("UMA-006-binary.md"));
    }

    #[test]
    fn test_output_file_never_indexes_itself() {
        let dir = tempfile::tempdir().unwrap();
        write_concept(dir.path(), "UMA-005-good.md", "# UMA-005: 好的\n");

        let config = IndexConfig::with_concepts_dir(dir.path());
        run(&config).unwrap();
        let report = run(&config).unwrap();

        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let config = IndexConfig::with_concepts_dir("/definitely/not/here");
        assert!(run(&config).is_err());
    }
}

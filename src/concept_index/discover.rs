//! Concept file discovery.

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use std::fs;
use std::path::PathBuf;

/// Lists the concept files in the configured directory: regular files whose
/// basename is `<prefix>-` followed by three digits and ending in `.md`,
/// excluding the generated index itself. Paths come back sorted so a run
/// processes files in a stable order.
///
/// A directory that cannot be listed is the one fatal error of the whole
/// tool.
pub fn discover(config: &IndexConfig) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(&config.concepts_dir).map_err(|e| {
        IndexError::Concepts(format!(
            "cannot list '{}': {}",
            config.concepts_dir.display(),
            e
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            IndexError::Concepts(format!(
                "cannot list '{}': {}",
                config.concepts_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == config.output_filename {
            continue;
        }
        if is_concept_filename(name, &config.prefix) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_concept_filename(name: &str, prefix: &str) -> bool {
    if !name.ends_with(".md") {
        return false;
    }
    let Some(rest) = name.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
        return false;
    };
    let digits: Vec<char> = rest.chars().take(3).collect();
    digits.len() == 3 && digits.iter().all(|c| c.is_ascii_digit())
}

use std::path::{Path, PathBuf};

const DEFAULT_CONCEPTS_DIR: &str = "CONCEPTS";
const DEFAULT_OUTPUT_FILENAME: &str = "README.md";
const DEFAULT_ID_PREFIX: &str = "UMA";

/// Run configuration, passed explicitly through the pipeline.
///
/// There is no config file and no environment lookup; the binary always runs
/// with the defaults, relative to the current working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory holding the concept files.
    pub concepts_dir: PathBuf,

    /// Basename of the generated index, inside `concepts_dir`. Excluded from
    /// discovery so the tool never indexes its own output.
    pub output_filename: String,

    /// Identifier prefix (the `UMA` in `UMA-042`).
    pub prefix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            concepts_dir: PathBuf::from(DEFAULT_CONCEPTS_DIR),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl IndexConfig {
    /// Config rooted at the given concepts directory, with default naming.
    pub fn with_concepts_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            concepts_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the generated index document.
    pub fn output_path(&self) -> PathBuf {
        self.concepts_dir.join(&self.output_filename)
    }
}

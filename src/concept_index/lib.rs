//! # concept-index
//!
//! Library behind the `concept-index` binary. It rebuilds the categorized
//! index of a concept vault: a directory of `UMA-NNN-<slug>.md` documents,
//! each describing one concept, summarized into a single `README.md` with one
//! table per numeric category.
//!
//! The pipeline is strictly linear and stateless across runs:
//!
//! ```text
//! discover -> extract (per file) -> categorize -> render -> write
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: explicit run configuration (vault paths, id prefix)
//! - [`discover`]: concept file discovery
//! - [`scanner`]: line-oriented section scanner for one document
//! - [`extract`]: per-file metadata extraction into a [`model::ConceptRecord`]
//! - [`categorize`]: fixed numeric-range bucketing
//! - [`render`]: index document rendering
//! - [`pipeline`]: one-shot orchestration and the run report
//! - [`error`]: error types
//!
//! ## Failure model
//!
//! Extraction is best-effort per file: a file that cannot be read or yields no
//! usable identity is recorded on the run report and left out of the index,
//! never aborting the run. The only fatal condition is a concepts directory
//! that cannot be listed at all.

pub mod categorize;
pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod scanner;

use clap::Parser;

/// Regenerates the concept index in place.
///
/// There are deliberately no flags and no arguments: the vault layout is
/// fixed and the whole index is rebuilt from scratch on every run. Clap still
/// owns `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "concept-index", version)]
#[command(about = "Regenerate the categorized concept index", long_about = None)]
pub struct Cli {}

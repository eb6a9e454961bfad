use clap::Parser;
use colored::*;
use concept_index::config::IndexConfig;
use concept_index::error::Result;
use concept_index::pipeline;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let config = IndexConfig::default();

    let report = pipeline::run(&config)?;

    for skip in &report.skipped {
        eprintln!(
            "{} {}: {}",
            "Skipped".yellow(),
            skip.path.display(),
            skip.reason
        );
    }

    println!("Index written to {}", report.output_path.display());
    println!("{} concepts indexed", report.total);
    println!();
    println!("By category:");
    for (label, count) in &report.category_counts {
        println!("  {}: {}", label, count);
    }

    Ok(())
}

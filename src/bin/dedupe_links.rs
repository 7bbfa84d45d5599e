//! Remove duplicate undirected links and self-links from a graph JSON file,
//! in place.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use bibgraph::dedupe::{self, DedupeOptions};

#[derive(Parser)]
#[command(
    name = "dedupe-links",
    about = "Deduplicate undirected links in a graph JSON file"
)]
struct Cli {
    /// Graph document to clean; overwritten in place.
    #[arg(default_value = "graph.json")]
    graph: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = DedupeOptions {
        graph_path: cli.graph,
    };

    let run = dedupe::run(&options)?;

    for diagnostic in &run.diagnostics {
        println!("  {}", diagnostic.to_string().yellow());
    }
    println!(
        "{} {} links kept of {} ({} dropped)",
        "deduped".green().bold(),
        run.document.links.len(),
        run.original_links,
        run.original_links - run.document.links.len()
    );
    println!(
        "{} {}",
        "wrote".green().bold(),
        options.graph_path.display()
    );

    Ok(())
}

//! Convert the first spreadsheet found in a directory into a force-graph
//! JSON document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use bibgraph::convert::{self, ConvertOptions};

#[derive(Parser)]
#[command(
    name = "sheet-to-graph",
    about = "Convert a reading-list spreadsheet (*.csv) into graph JSON"
)]
struct Cli {
    /// Directory searched for the input spreadsheet (first *.csv wins).
    #[arg(default_value = ".")]
    input_dir: PathBuf,

    /// Output path for the graph document.
    #[arg(short, long, default_value = "graph.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ConvertOptions {
        input_dir: cli.input_dir,
        output: cli.out,
    };

    let run = convert::run(&options)?;

    println!(
        "{} {}",
        "converting".green().bold(),
        run.spreadsheet.display()
    );
    for diagnostic in &run.diagnostics {
        println!("  {}", diagnostic.to_string().yellow());
    }
    println!(
        "{} {} nodes, {} links -> {}",
        "wrote".green().bold(),
        run.document.nodes.len(),
        run.document.links.len(),
        options.output.display()
    );

    Ok(())
}

mod plan;
mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docscope",
    version,
    about = "Plans the pages, anchors and navigation of a documentation site",
    long_about = "Docscope takes a resolved symbol tree, hands comment fragments down to the \
                  symbols they describe, and decides which symbols get a page of their own. \
                  The resulting plan is printed as JSON for a renderer to consume."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the documentation phase over a project file
    #[command(
        long_about = "Loads a project JSON file, runs comment propagation and partitioning, and \
                            prints documents, navigation, groups and per-symbol output on stdout."
    )]
    Plan {
        /// Path to the project JSON file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Dotted path of the container documented as the site root
        #[arg(long, value_name = "NAME")]
        entry_point: Option<String>,
        /// Render the entry point as index.html instead of a separate globals page
        #[arg(long)]
        no_readme: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the JSON schema of the project input format
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = docscope_core::logging::init_logging("cli", true);

    match cli.command {
        Commands::Plan {
            input,
            entry_point,
            no_readme,
            pretty,
        } => plan::run(plan::PlanArgs {
            input,
            entry_point,
            no_readme,
            pretty,
        }),
        Commands::Schema => schema::run(),
    }
}

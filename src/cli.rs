use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_DATA_PATH;

#[derive(Parser)]
#[command(name = "pricing-guide")]
#[command(about = "Browse a banking pricing guide: render it to HTML or search it from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the pricing document.
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the full pricing guide as a standalone HTML page.
    Render {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run one search pass over the catalog and print the matching rows.
    Search {
        term: String,

        /// Restrict results to one section (accounts, fees, credit, global, travel, benefits).
        #[arg(short, long)]
        section: Option<String>,
    },
}

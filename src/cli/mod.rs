//! Command-line interface for rlfs-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Search a sequence file (raw text or FASTA) for R-loop forming structures
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Annotate every RLFS in a FASTA file
//! rlfs-finder find promoters.fa
//!
//! # Pipe a sequence in
//! cat region.txt | rlfs-finder find -
//!
//! # Only count structures
//! rlfs-finder find region.txt --count
//!
//! # JSON output for scripting
//! rlfs-finder find promoters.fa --format json
//!
//! # Start web UI
//! rlfs-finder serve --port 8686 --open
//! ```

use clap::{Parser, Subcommand};

pub mod find;

#[derive(Parser)]
#[command(name = "rlfs-finder")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find R-loop forming structures (RIZ + linker + REZ) in nucleotide sequences")]
#[command(
    long_about = "rlfs-finder locates R-loop forming structures in a nucleotide sequence.\n\nAn RLFS is a RIZ (three or more G-clusters of at least 3 nt separated by 1-2 nt), a linker of 0-49 nt, and a REZ of 100-2000 nt with at least 40% G.\n\nReference: Wongsurawat et al. Quantitative model of R-loop forming structures reveals a novel level of RNA-DNA interactome complexity. Nucleic Acids Res 40, e16 (2012)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a sequence file for R-loop forming structures
    Find(find::FindArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8686")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Log remote address and user agent of every request
    #[arg(short, long)]
    pub monitor: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

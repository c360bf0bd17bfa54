use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::SegmentSummary;
use crate::matching::classify::{classify, unclassified};
use crate::matching::engine::{find_rlfs, RlfsSearch};
use crate::parsing::{self, SequenceRecord};
use crate::render::render_text;

#[derive(Args)]
pub struct FindArgs {
    /// Input file (raw sequence text or FASTA, optionally gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Only print the number of structures found per sequence
    #[arg(long)]
    pub count: bool,

    /// Print match coordinates without the annotated sequence
    #[arg(long)]
    pub summary: bool,

    /// Bases per line in the annotated sequence
    #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u16).range(10..=1000))]
    pub width: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Whole input is one sequence; anything but a/c/g/t is ignored
    Raw,
    /// One sequence per FASTA record
    Fasta,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = read_records(&args)?;

    if verbose {
        eprintln!("Read {} sequence(s) from input", records.len());
    }

    let searches: Vec<(String, RlfsSearch)> = records
        .into_iter()
        .map(|record| {
            let search = find_rlfs(&record.sequence);
            if verbose {
                eprintln!(
                    "{}: {} nt after normalization, {} RLFS",
                    record.name,
                    search.sequence.len(),
                    search.segments.len()
                );
            }
            (record.name, search)
        })
        .collect();

    if args.count {
        return print_counts(&searches, format);
    }

    match format {
        OutputFormat::Text => print_text_results(&searches, usize::from(args.width), args.summary),
        OutputFormat::Json => print_json_results(&searches)?,
        OutputFormat::Tsv => print_tsv_results(&searches),
    }

    Ok(())
}

fn read_records(args: &FindArgs) -> anyhow::Result<Vec<SequenceRecord>> {
    // Handle stdin
    if args.input.to_string_lossy() == "-" {
        let text = parsing::text::read_stdin()?;
        let format = args.input_format.unwrap_or_else(|| {
            if parsing::fasta::looks_like_fasta(&text) {
                InputFormat::Fasta
            } else {
                InputFormat::Raw
            }
        });
        return Ok(match format {
            InputFormat::Fasta => parsing::fasta::parse_fasta_text(&text)?,
            InputFormat::Raw => vec![SequenceRecord::new("stdin", text)],
        });
    }

    let format = args.input_format.unwrap_or_else(|| {
        if parsing::fasta::is_fasta_file(&args.input) {
            InputFormat::Fasta
        } else {
            InputFormat::Raw
        }
    });

    match format {
        InputFormat::Fasta => Ok(parsing::fasta::parse_fasta_file(&args.input)?),
        InputFormat::Raw => {
            let text = parsing::text::read_text_file(&args.input)?;
            let name = parsing::text::record_name(&args.input);
            Ok(vec![SequenceRecord::new(name, text)])
        }
    }
}

fn print_counts(searches: &[(String, RlfsSearch)], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            // A single sequence prints a bare number
            if let [(_, search)] = searches {
                println!("{}", search.segments.len());
            } else {
                for (name, search) in searches {
                    println!("{name}\t{}", search.segments.len());
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = searches
                .iter()
                .map(|(name, search)| {
                    serde_json::json!({
                        "name": name,
                        "count": search.segments.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tcount");
            for (name, search) in searches {
                println!("{name}\t{}", search.segments.len());
            }
        }
    }
    Ok(())
}

fn print_text_results(searches: &[(String, RlfsSearch)], width: usize, summary_only: bool) {
    for (i, (name, search)) in searches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n{} ({} nt)", name, search.sequence.len());

        if !search.found() {
            println!("   Pattern not found in sequence");
            if !summary_only {
                println!();
                print!("{}", render_text(&unclassified(&search.sequence), width));
            }
            continue;
        }

        println!("   {} RLFS found", search.segments.len());
        for (n, segment) in search.segments.iter().enumerate() {
            let s = SegmentSummary::from(segment);
            println!(
                "\n#{} RIZ {}-{} ({} nt), linker {} nt, REZ {}-{} ({} nt, {:.1}% G)",
                n + 1,
                s.riz_start,
                s.riz_end,
                s.riz.len(),
                s.linker_length,
                s.rez_start,
                s.rez_end,
                s.rez.len(),
                s.rez_g_content * 100.0,
            );
            if !summary_only {
                println!();
                print!("{}", render_text(&classify(segment), width));
            }
        }
    }

    println!();
}

fn print_json_results(searches: &[(String, RlfsSearch)]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = searches
        .iter()
        .map(|(name, search)| {
            let segments: Vec<SegmentSummary> =
                search.segments.iter().map(SegmentSummary::from).collect();
            serde_json::json!({
                "name": name,
                "length": search.sequence.len(),
                "found": search.found(),
                "segments": segments,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(searches: &[(String, RlfsSearch)]) {
    println!(
        "name\tmatch\triz_start\triz_end\tlinker_length\trez_start\trez_end\trez_length\trez_g_content\triz"
    );
    for (name, search) in searches {
        for (n, segment) in search.segments.iter().enumerate() {
            let s = SegmentSummary::from(segment);
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.4}\t{}",
                name,
                n + 1,
                s.riz_start,
                s.riz_end,
                s.linker_length,
                s.rez_start,
                s.rez_end,
                s.rez.len(),
                s.rez_g_content,
                s.riz,
            );
        }
    }
}

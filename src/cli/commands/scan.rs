use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Output;
use crate::scanner::{render, ScanMode, ScanResult, Scanner, ScannerConfig};
use crate::words::fibonacci_word;

/// Inputs above this size make the quadratic-per-position scan crawl
const SLOW_SCAN_WARNING_POSITIONS: usize = 10_000;

#[derive(Args)]
pub struct ScanArgs {
    /// Number of Fibonacci-word generations for the default input
    #[arg(short, long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub generations: u32,

    /// Literal text to scan instead of the generated word
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text to scan from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: ScanMode,

    /// Maximum number of worker threads (0 = auto-detect)
    #[arg(long, env = "SUBSTRSCAN_MAX_THREADS", default_value_t = 0)]
    pub max_threads: usize,

    /// Percentage of CPU cores to use
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub thread_percentage: u8,

    /// Positions per chunk handed to one worker (0 = auto)
    #[arg(long, default_value_t = 100)]
    pub chunk_size: usize,

    /// Skip the visualization, only report what was scanned
    #[arg(long)]
    pub no_render: bool,

    /// Show statistics after scanning
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console visualization
    Text,
    /// Machine-readable report
    Json,
}

pub fn execute(args: ScanArgs, output: &Output) -> Result<()> {
    let text = resolve_text(&args)?;

    if text.len() > SLOW_SCAN_WARNING_POSITIONS {
        output.warning(&format!(
            "{} positions to scan; the brute-force search may take a long time",
            text.len()
        ));
    }

    let scanner = Scanner::new(ScannerConfig {
        mode: args.mode,
        max_threads: args.max_threads,
        thread_percentage: args.thread_percentage,
        chunk_size: args.chunk_size,
        ..ScannerConfig::default()
    });

    let result = scanner.scan(&text)?;
    output.verbose(&format!(
        "scanned {} positions in {}ms ({} workers, {} chunks)",
        result.stats.positions_scanned,
        result.stats.scan_duration_ms,
        result.stats.workers,
        result.stats.chunks
    ));

    match args.format {
        OutputFormat::Json => print_json_report(&text, &result)?,
        OutputFormat::Text => {
            if args.no_render {
                output.info(&format!(
                    "Scanned {} positions in {}ms",
                    result.stats.positions_scanned, result.stats.scan_duration_ms
                ));
            } else {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                render(&mut out, &text, &result.table)?;
                out.flush()?;
            }
            if args.stats {
                print_stats(output, &result);
            }
        }
    }

    Ok(())
}

/// The string to scan: a literal, file contents, or the generated
/// Fibonacci word
fn resolve_text(args: &ScanArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(raw.trim_end_matches('\n').to_string());
    }
    Ok(fibonacci_word(args.generations as usize - 1))
}

fn print_stats(output: &Output, result: &ScanResult) {
    output.header("Scan Statistics");
    output.summary_stats("Positions scanned:", result.stats.positions_scanned);
    output.summary_stats("Workers:", result.stats.workers);
    output.summary_stats("Chunks:", result.stats.chunks);
    output.summary_stats("Scan time (ms):", result.stats.scan_duration_ms as usize);
}

fn print_json_report(text: &str, result: &ScanResult) -> Result<()> {
    use serde_json::json;

    let report = json!({
        "text": text,
        "table": result.table,
        "statistics": result.stats,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

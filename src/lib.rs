//! # Substrscan - Longest Repeated Substring Scanner
//!
//! A parallel brute-force scanner that computes, for every starting
//! position of a string, the longest substring beginning there that also
//! occurs at another position, and renders the result as a console
//! visualization.
//!
//! ## Features
//!
//! - **Parallel by default**: positions are partitioned into contiguous
//!   chunks and mapped across a rayon worker pool
//! - **Deterministic output**: chunked and sequential scans produce
//!   identical tables, so the visualization is stable across runs
//! - **Fibonacci-word inputs**: the bundled generator produces the highly
//!   repetitive strings the quadratic scan is slowest on
//! - **Machine-readable reports**: JSON output alongside the text view
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan the default 9-generation Fibonacci word
//! substrscan scan
//!
//! # Scan a literal string sequentially with statistics
//! substrscan scan --text abracadabra --mode sequential --stats
//! ```

pub mod cli;
pub mod parallel;
pub mod scanner;
pub mod words;

pub use cli::{Cli, Output};
pub use scanner::{MatchTable, Scanner, ScannerConfig};

/// Result type alias for Substrscan operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

use serde::Serialize;

/// Longest-match table produced by a scan.
///
/// Both arrays are indexed by starting position: `lengths[i]` is the
/// length of the longest run of bytes starting at `i` that also occurs
/// starting at some other position, and `positions[i]` is the lowest
/// such position achieving that length. Slots for unmatched positions
/// stay zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTable {
    pub lengths: Vec<usize>,
    pub positions: Vec<usize>,
}

impl MatchTable {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            lengths: vec![0; len],
            positions: vec![0; len],
        }
    }

    /// Number of positions covered by the table
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Statistics from a scanning operation
#[derive(Debug, Serialize)]
pub struct ScanStats {
    pub positions_scanned: usize,
    pub workers: usize,
    pub chunks: usize,
    pub scan_duration_ms: u64,
}

/// Result of a scanning operation
#[derive(Debug, Serialize)]
pub struct ScanResult {
    pub table: MatchTable,
    pub stats: ScanStats,
}

/// Processing mode requested on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ScanMode {
    /// Pick parallel or sequential based on workload size
    Auto,
    /// Always use the worker pool
    Parallel,
    /// Single-threaded scan
    Sequential,
}

/// Configuration for the scanner
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub mode: ScanMode,
    /// Maximum number of worker threads (0 = auto-detect)
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100)
    pub thread_percentage: u8,
    /// Positions per chunk handed to one worker (0 = auto)
    pub chunk_size: usize,
    /// Minimum positions before auto mode goes parallel
    pub min_positions_for_parallel: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::Auto,
            max_threads: 0,
            thread_percentage: 75,
            chunk_size: 100,
            min_positions_for_parallel: 256,
        }
    }
}

/// Main scanner struct - computes longest-match tables for strings
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) config: ScannerConfig,
}

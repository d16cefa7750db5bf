use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use super::types::{MatchTable, ScanMode, ScanResult, ScanStats, Scanner, ScannerConfig};
use crate::parallel::ExecutionStrategy;

impl Scanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScannerConfig::default())
    }

    /// Compute the longest-match table for `text`.
    ///
    /// Every position is scanned independently, so the resulting table is
    /// a pure function of the input regardless of execution strategy or
    /// chunking.
    pub fn scan(&self, text: &str) -> Result<ScanResult> {
        let start_time = Instant::now();
        let position_count = text.len();
        let mut table = MatchTable::zeroed(position_count);

        let strategy = self.select_strategy(position_count);
        debug!(positions = position_count, ?strategy, "starting scan");

        let chunks = match strategy {
            ExecutionStrategy::Sequential => {
                scan_range(text.as_bytes(), 0, &mut table.lengths, &mut table.positions);
                1
            }
            ExecutionStrategy::Parallel { workers } => {
                self.scan_parallel(text, &mut table, workers)?
            }
        };

        let stats = ScanStats {
            positions_scanned: position_count,
            workers: strategy.workers(),
            chunks,
            scan_duration_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(ScanResult { table, stats })
    }

    /// Map the configured mode onto an execution strategy for this workload
    fn select_strategy(&self, position_count: usize) -> ExecutionStrategy {
        match self.config.mode {
            ScanMode::Sequential => ExecutionStrategy::Sequential,
            ScanMode::Parallel | ScanMode::Auto => {
                let max_workers = ExecutionStrategy::calculate_optimal_workers(
                    self.config.max_threads,
                    self.config.thread_percentage,
                );
                // Don't create more workers than positions
                let workers = std::cmp::min(max_workers, position_count.max(1));

                match self.config.mode {
                    ScanMode::Parallel => ExecutionStrategy::Parallel { workers },
                    _ => ExecutionStrategy::auto(
                        position_count,
                        self.config.min_positions_for_parallel,
                        workers,
                    ),
                }
            }
        }
    }
}

/// Compute longest-match entries for the positions `[lo, lo + lengths.len())`.
///
/// `lengths` and `positions` are the sub-slices of the output table
/// backing exactly those positions; nothing outside them is touched,
/// which is what lets chunked callers run this lock-free on disjoint
/// slices.
///
/// For each position `i` the longest prefix shared with the suffix at
/// any other position `j` is found by direct comparison, ascending over
/// `j`. Only a strictly longer match replaces the current best, so among
/// equal maxima the lowest `j` is reported.
pub(crate) fn scan_range(text: &[u8], lo: usize, lengths: &mut [usize], positions: &mut [usize]) {
    let n = text.len();
    for (offset, (length, position)) in lengths.iter_mut().zip(positions.iter_mut()).enumerate() {
        let i = lo + offset;
        let mut best_len = 0;
        let mut best_pos = 0;
        for j in 0..n {
            if j == i {
                continue;
            }
            // longest possible match without running past the end from
            // whichever suffix starts later
            let limit = n - std::cmp::max(i, j);
            let mut matched = 0;
            while matched < limit && text[i + matched] == text[j + matched] {
                matched += 1;
            }
            if matched > best_len {
                best_len = matched;
                best_pos = j;
            }
        }
        *length = best_len;
        *position = best_pos;
    }
}

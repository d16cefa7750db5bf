use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::core::scan_range;
use super::types::{MatchTable, Scanner};

impl Scanner {
    /// Scan positions in parallel by partitioning the table into
    /// contiguous chunks mapped across a dedicated worker pool.
    ///
    /// Chunks never overlap: each task receives the `&mut` sub-slices of
    /// both output arrays backing its positions, so every slot is written
    /// exactly once and no synchronization is needed. Returns the number
    /// of chunks dispatched.
    pub(crate) fn scan_parallel(
        &self,
        text: &str,
        table: &mut MatchTable,
        workers: usize,
    ) -> Result<usize> {
        let position_count = table.len();
        let chunk_size = self.chunk_size_for(position_count, workers);
        let chunk_count = position_count.div_ceil(chunk_size);

        debug!(workers, chunk_size, chunk_count, "dispatching parallel scan");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .context("failed to build scan worker pool")?;

        let bytes = text.as_bytes();
        pool.install(|| {
            table
                .lengths
                .par_chunks_mut(chunk_size)
                .zip(table.positions.par_chunks_mut(chunk_size))
                .enumerate()
                .for_each(|(chunk_index, (lengths, positions))| {
                    scan_range(bytes, chunk_index * chunk_size, lengths, positions);
                });
        });

        Ok(chunk_count)
    }

    /// Chunk size for a workload: the configured hint, or about four
    /// chunks per worker so uneven per-position costs balance out.
    fn chunk_size_for(&self, position_count: usize, workers: usize) -> usize {
        if self.config.chunk_size > 0 {
            return self.config.chunk_size;
        }
        std::cmp::max(1, position_count.div_ceil(std::cmp::max(1, workers * 4)))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::types::{MatchTable, ScanMode, Scanner, ScannerConfig};
    use crate::words::fibonacci_word;

    fn scan_with(mode: ScanMode, chunk_size: usize, text: &str) -> MatchTable {
        let scanner = Scanner::new(ScannerConfig {
            mode,
            chunk_size,
            ..ScannerConfig::default()
        });
        scanner.scan(text).unwrap().table
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = fibonacci_word(8);
        let sequential = scan_with(ScanMode::Sequential, 100, &text);
        for chunk_size in [1, 3, 7, 100] {
            let parallel = scan_with(ScanMode::Parallel, chunk_size, &text);
            assert_eq!(parallel, sequential, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn test_auto_chunking_matches_sequential() {
        let text = fibonacci_word(9);
        let sequential = scan_with(ScanMode::Sequential, 0, &text);
        let parallel = scan_with(ScanMode::Parallel, 0, &text);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_chunks_cover_all_positions() {
        let text = fibonacci_word(8);
        let scanner = Scanner::new(ScannerConfig {
            mode: ScanMode::Parallel,
            chunk_size: 5,
            ..ScannerConfig::default()
        });
        let result = scanner.scan(&text).unwrap();
        assert_eq!(result.stats.chunks, text.len().div_ceil(5));
        assert_eq!(result.stats.positions_scanned, text.len());
    }
}

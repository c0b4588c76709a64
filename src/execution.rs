//! Execution strategies for batch evaluation.

/// How a batch of candidates is evaluated. Every strategy finishes the whole
/// batch before the optimizer moves on to ranking.
///
/// **Parallelization is implemented with [rayon]. As a result, for cheap
/// problems, parallelization may only decrease performance because of
/// additional overhead introduced. Benchmark if in doubt.**
///
/// [rayon]: https://docs.rs/rayon
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Execution {
  /// Candidates are evaluated one after another on the calling thread.
  #[default]
  Sequential,
  /// Each candidate is evaluated as a separate parallel task.
  ParallelEach,
  /// The batch is split into chunks of equal size, one per available thread,
  /// and chunks are evaluated in parallel.
  ParallelBatch,
}

impl Execution {
  /// Returns the chunk size the `ParallelBatch` strategy uses for a batch of
  /// `len` candidates.
  pub(crate) fn chunk_size(len: usize) -> usize {
    (len / rayon::current_num_threads()).max(1)
  }
}

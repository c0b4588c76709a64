//! Budget-aware evaluation of candidate batches.

use rayon::prelude::*;

use crate::{
  candidate::{BitString, Candidate},
  error::{Error, Result},
  execution::Execution,
  problem::Problem,
};

/// Evaluates encodings through a [`Problem`] and counts every evaluation.
///
/// When repair is enabled, the problem's
/// [`repair`](Problem::repair) hook runs on each encoding right before it is
/// scored. Repair itself is not counted.
pub struct Evaluator<'p, P> {
  problem: &'p P,
  execution: Execution,
  repair: bool,
  evaluations: usize,
}

impl<'p, P> Evaluator<'p, P> {
  /// Creates an evaluator with a zeroed counter.
  pub fn new(problem: &'p P, execution: Execution, repair: bool) -> Self {
    Self {
      problem,
      execution,
      repair,
      evaluations: 0,
    }
  }

  /// Returns the number of evaluations performed so far.
  pub fn evaluations(&self) -> usize {
    self.evaluations
  }

  /// Returns the evaluated problem.
  pub fn problem(&self) -> &'p P {
    self.problem
  }

  /// Evaluates a whole batch. Either every encoding is evaluated and the
  /// counter grows by the batch size, or the first failure is returned and
  /// nothing from the batch is kept.
  pub fn evaluate_all<const N: usize>(
    &mut self,
    batch: Vec<BitString>,
  ) -> Result<Vec<Candidate<N>>>
  where
    P: Problem<N>,
  {
    self.evaluate_batch(batch, self.repair)
  }

  /// Like [`evaluate_all`](Self::evaluate_all), but scores the encodings
  /// exactly as given, whether repair is enabled or not.
  pub fn evaluate_all_unrepaired<const N: usize>(
    &mut self,
    batch: Vec<BitString>,
  ) -> Result<Vec<Candidate<N>>>
  where
    P: Problem<N>,
  {
    self.evaluate_batch(batch, false)
  }

  fn evaluate_batch<const N: usize>(
    &mut self,
    batch: Vec<BitString>,
    repair: bool,
  ) -> Result<Vec<Candidate<N>>>
  where
    P: Problem<N>,
  {
    let len = batch.len();
    let problem = self.problem;
    let evaluate = |bits: BitString| evaluate_one(problem, repair, bits);

    let candidates = match self.execution {
      Execution::Sequential => {
        batch.into_iter().map(evaluate).collect::<Result<Vec<_>>>()
      }
      Execution::ParallelEach => {
        batch.into_par_iter().map(evaluate).collect::<Result<Vec<_>>>()
      }
      Execution::ParallelBatch => batch
        .into_par_iter()
        .with_min_len(Execution::chunk_size(len))
        .map(evaluate)
        .collect::<Result<Vec<_>>>(),
    }?;

    self.evaluations += len;
    Ok(candidates)
  }

  /// Evaluates a single encoding.
  pub fn evaluate<const N: usize>(&mut self, bits: BitString) -> Result<Candidate<N>>
  where
    P: Problem<N>,
  {
    let candidate = evaluate_one(self.problem, self.repair, bits)?;
    self.evaluations += 1;
    Ok(candidate)
  }
}

fn evaluate_one<const N: usize, P>(
  problem: &P,
  repair: bool,
  mut bits: BitString,
) -> Result<Candidate<N>>
where
  P: Problem<N>,
{
  let expected = problem.number_of_bits();
  if repair {
    problem.repair(&mut bits);
  }
  if bits.len() != expected {
    return Err(Error::BitCount {
      expected,
      got: bits.len(),
    });
  }
  let evaluation = problem.evaluate(&bits)?;
  Ok(Candidate::new(bits, evaluation))
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::*;
  use crate::{error::EvaluationError, score::Evaluation};

  struct Counting {
    bits: usize,
    calls: AtomicUsize,
  }

  impl Problem<2> for Counting {
    fn number_of_bits(&self) -> usize {
      self.bits
    }

    fn evaluate(
      &self,
      bits: &BitString,
    ) -> std::result::Result<Evaluation<2>, EvaluationError> {
      self.calls.fetch_add(1, Ordering::Relaxed);
      let ones = bits.count_ones() as f64;
      if bits.get(0) && bits.get(1) {
        return Err(EvaluationError::new("bits 0 and 1 are exclusive"));
      }
      Ok(Evaluation::new([ones, bits.len() as f64 - ones]))
    }

    fn repair(&self, bits: &mut BitString) {
      bits.set(self.bits - 1, true);
    }
  }

  fn problem() -> Counting {
    Counting {
      bits: 6,
      calls: AtomicUsize::new(0),
    }
  }

  #[test]
  fn test_all_strategies_agree() {
    let p = problem();
    let batch: Vec<_> = (0..6).map(|i| BitString::one_hot(6, i)).collect();
    let mut results = Vec::new();
    for execution in
      [Execution::Sequential, Execution::ParallelEach, Execution::ParallelBatch]
    {
      let mut evaluator = Evaluator::new(&p, execution, false);
      let candidates: Vec<Candidate<2>> =
        evaluator.evaluate_all(batch.clone()).unwrap();
      assert_eq!(evaluator.evaluations(), 6);
      results.push(candidates);
    }
    assert_eq!(p.calls.load(Ordering::Relaxed), 18);
    for candidates in &results {
      // order of the batch is preserved
      let bits: Vec<_> = candidates.iter().map(|c| c.bits().clone()).collect();
      assert_eq!(bits, batch);
      assert!(candidates.iter().all(|c| c.scores() == &[1.0, 5.0]));
    }
  }

  #[test]
  fn test_failure_aborts_batch() {
    let p = problem();
    let mut evaluator = Evaluator::new(&p, Execution::ParallelEach, false);
    let mut bad = BitString::zeros(6);
    bad.set(0, true);
    bad.set(1, true);
    let batch = vec![BitString::zeros(6), bad, BitString::zeros(6)];
    let result: Result<Vec<Candidate<2>>> = evaluator.evaluate_all(batch);
    assert!(matches!(result, Err(Error::Evaluation(_))));
    assert_eq!(evaluator.evaluations(), 0);
  }

  #[test]
  fn test_repair_runs_before_scoring() {
    let p = problem();
    let mut evaluator = Evaluator::new(&p, Execution::Sequential, true);
    let c: Candidate<2> = evaluator.evaluate(BitString::zeros(6)).unwrap();
    assert!(c.bits()[5]);
    assert_eq!(c.scores(), &[1.0, 5.0]);
    assert_eq!(evaluator.evaluations(), 1);
  }

  #[test]
  fn test_unrepaired_batch_skips_repair() {
    let p = problem();
    let mut evaluator = Evaluator::new(&p, Execution::ParallelBatch, true);
    let batch: Vec<_> = (0..5).map(|i| BitString::one_hot(6, i)).collect();
    let candidates: Vec<Candidate<2>> =
      evaluator.evaluate_all_unrepaired(batch.clone()).unwrap();
    let bits: Vec<_> = candidates.iter().map(|c| c.bits().clone()).collect();
    assert_eq!(bits, batch);
    assert_eq!(evaluator.evaluations(), 5);

    // the same evaluator still repairs regular batches
    let repaired: Vec<Candidate<2>> = evaluator.evaluate_all(batch).unwrap();
    assert!(repaired.iter().all(|c| c.bits()[5] && c.bits().count_ones() == 2));
    assert_eq!(evaluator.evaluations(), 10);
  }

  #[test]
  fn test_wrong_length_is_rejected() {
    let p = problem();
    let mut evaluator = Evaluator::new(&p, Execution::Sequential, false);
    let result: Result<Candidate<2>> = evaluator.evaluate(BitString::zeros(3));
    assert!(matches!(result, Err(Error::BitCount { expected: 6, got: 3 })));
  }
}

//! Optimizers and the one-call runner.

pub mod nsga;
pub mod sparse_ea;

use crate::{
  candidate::Candidate,
  config::Config,
  error::{Error, Result},
  problem::Problem,
};

/// Represents an abstract optimizer.
pub trait Optimizer<const N: usize>: Sized {
  /// Runs `Optimizer` until the evaluation budget is spent, then returns the
  /// last population.
  ///
  /// # Errors
  ///
  /// Any failure aborts the run: an invalid configuration, a failed
  /// evaluation, or a NaN objective reaching the dominance comparator.
  fn optimize(self) -> Result<Outcome<N>>;
}

/// The result of a finished run.
#[derive(Clone, Debug)]
pub struct Outcome<const N: usize> {
  /// The final population, objectives populated. Its order carries no
  /// meaning; use [`pareto_front`](crate::indicator::pareto_front) to
  /// extract the non-dominated members.
  pub population: Vec<Candidate<N>>,
  /// Evaluations consumed by the run.
  pub evaluations: usize,
  /// Generations completed after initialization.
  pub generations: usize,
}

/// Algorithms runnable through [`run`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Algorithm {
  /// NSGA-II with two-point crossover and bit-flip mutation.
  #[default]
  Nsga2,
  /// NSGA-II that always runs the problem's repair hook before evaluation.
  HybridNsga2,
  /// SparseEA, for problems whose good solutions have few bits set.
  SparseEa,
  /// SparseEA that always runs the problem's repair hook before evaluating
  /// initial candidates and offsprings. Variable scoring is never repaired.
  HybridSparseEa,
}

/// Builds the optimizer for `algorithm` with default operators and runs it.
///
/// # Examples
/// ```
/// use sparse_moga::{run, Algorithm, BitString, Config, Evaluation, EvaluationError, Problem};
///
/// struct Balance;
///
/// impl Problem<2> for Balance {
///   fn number_of_bits(&self) -> usize {
///     16
///   }
///
///   fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
///     let ones = bits.count_ones() as f64;
///     Ok(Evaluation::new([ones, 16.0 - ones]))
///   }
/// }
///
/// let config = Config::builder()
///   .population_size(20)
///   .max_evaluations(400)
///   .seed(1)
///   .build();
/// let outcome = run(&Balance, Algorithm::SparseEa, config).unwrap();
/// assert_eq!(outcome.population.len(), 20);
/// assert!(outcome.evaluations <= 400);
/// ```
pub fn run<const N: usize, P>(
  problem: &P,
  algorithm: Algorithm,
  config: Config,
) -> Result<Outcome<N>>
where
  P: Problem<N>,
{
  match algorithm {
    Algorithm::Nsga2 => nsga::Nsga2::new(problem, config).optimize(),
    Algorithm::HybridNsga2 => {
      let config = Config { repair: true, ..config };
      nsga::Nsga2::new(problem, config).optimize()
    }
    Algorithm::SparseEa => sparse_ea::SparseEa::new(problem, config).optimize(),
    Algorithm::HybridSparseEa => {
      let config = Config { repair: true, ..config };
      sparse_ea::SparseEa::new(problem, config).optimize()
    }
  }
}

/// Rejects problems whose declared objective count disagrees with `N`.
pub(crate) fn check_objectives<const N: usize, P>(problem: &P) -> Result<()>
where
  P: Problem<N>,
{
  match problem.number_of_objectives() {
    got if got == N => Ok(()),
    got => Err(Error::ObjectiveCount { expected: N, got }),
  }
}

//! Run configuration.

use rand::{rngs::StdRng, SeedableRng};
use typed_builder::TypedBuilder;

use crate::{
  error::{Error, Result},
  execution::Execution,
  selection::SelectionStrategy,
};

/// Parameters of a single optimization run.
///
/// Every field has a default, so only the ones that matter need to be set:
/// ```
/// use sparse_moga::{Config, Execution};
///
/// let config = Config::builder()
///   .population_size(50)
///   .max_evaluations(5_000)
///   .execution(Execution::ParallelBatch)
///   .seed(42)
///   .build();
/// assert_eq!(config.crossover_probability_or(0.9), 0.9);
/// ```
///
/// Unset probabilities are resolved by each optimizer: NSGA-II falls back to
/// `0.9` for crossover and `1 / number_of_bits` for mutation, SparseEA to
/// `0.5` for both.
#[derive(TypedBuilder, Clone, PartialEq, Debug)]
pub struct Config {
  /// Number of candidates kept between generations.
  #[builder(default = 100)]
  pub population_size: usize,
  /// Total number of evaluations a run may consume, initial ones included.
  #[builder(default = 25_000)]
  pub max_evaluations: usize,
  /// Probability that crossover fires for a pair of parents. Defaults per
  /// optimizer.
  #[builder(default, setter(strip_option))]
  pub crossover_probability: Option<f64>,
  /// Mutation probability. Defaults per optimizer.
  #[builder(default, setter(strip_option))]
  pub mutation_probability: Option<f64>,
  /// Mating selection strategy.
  #[builder(default)]
  pub selection: SelectionStrategy,
  /// Batch evaluation strategy.
  #[builder(default)]
  pub execution: Execution,
  /// Runs the problem's repair hook before every evaluation.
  #[builder(default = false)]
  pub repair: bool,
  /// Seed of the run's random stream. Seeded from entropy if absent.
  #[builder(default, setter(strip_option))]
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl Config {
  /// Returns the crossover probability, or `default` if it is unset.
  pub fn crossover_probability_or(&self, default: f64) -> f64 {
    self.crossover_probability.unwrap_or(default)
  }

  /// Returns the mutation probability, or `default` if it is unset.
  pub fn mutation_probability_or(&self, default: f64) -> f64 {
    self.mutation_probability.unwrap_or(default)
  }

  /// Creates the random stream of a run.
  pub fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }

  /// Checks the configuration against a problem of `number_of_bits` bits.
  /// `initial_evaluations` is the number of evaluations an optimizer spends
  /// before its first generation.
  pub fn validate(
    &self,
    number_of_bits: usize,
    initial_evaluations: usize,
  ) -> Result<()> {
    if self.population_size < 2 {
      return Err(Error::InvalidConfig(format!(
        "population size must be at least 2, got {}",
        self.population_size
      )));
    }
    if number_of_bits == 0 {
      return Err(Error::InvalidConfig(
        "problem must have at least one bit".into(),
      ));
    }
    let probabilities = [
      ("crossover", self.crossover_probability),
      ("mutation", self.mutation_probability),
    ];
    for (name, p) in probabilities {
      if let Some(p) = p.filter(|p| !(0.0..=1.0).contains(p)) {
        return Err(Error::InvalidConfig(format!(
          "{name} probability must lie in [0, 1], got {p}"
        )));
      }
    }
    if self.max_evaluations < initial_evaluations {
      return Err(Error::InvalidConfig(format!(
        "evaluation budget {} is below the {} initial evaluations",
        self.max_evaluations, initial_evaluations
      )));
    }
    Ok(())
  }
}

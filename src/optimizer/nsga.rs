//! Implementation of the NSGA-II genetic algorithm.

use rand::Rng;
use tracing::{debug, info, info_span};
use typed_builder::TypedBuilder;

use crate::{
  candidate::BitString,
  config::Config,
  crossover::{Crossover, TwoPointCrossover},
  error::Result,
  evaluator::Evaluator,
  fitness::Fitness,
  mutation::{BitFlipMutation, Mutation},
  optimizer::{check_objectives, Optimizer, Outcome},
  problem::Problem,
  selection::{mating_pool, Selection, SelectionStrategy},
  truncation::truncate,
};

/// NSGA-II over bit strings.
///
/// Every generation selects a mating pool of `population_size` parents,
/// recombines them pairwise, mutates the children, evaluates them and keeps
/// the best `population_size` of parents and offsprings together.
///
/// With [`Config::repair`] enabled, the problem's
/// [`repair`](Problem::repair) hook runs on every encoding right before it is
/// evaluated, initial population included. This is the hybrid variant.
///
/// Operators default to [`TwoPointCrossover`], [`BitFlipMutation`] and the
/// configured [`SelectionStrategy`], but any of them can be replaced:
/// ```
/// # use sparse_moga::{BitString, Config, Evaluation, EvaluationError, Nsga2, Optimizer, Problem};
/// # use sparse_moga::crossover::UniformCrossover;
/// # use rand::RngCore;
/// # struct Balance;
/// # impl Problem<2> for Balance {
/// #   fn number_of_bits(&self) -> usize { 8 }
/// #   fn evaluate(&self, b: &BitString) -> Result<Evaluation<2>, EvaluationError> {
/// #     let ones = b.count_ones() as f64;
/// #     Ok(Evaluation::new([ones, 8.0 - ones]))
/// #   }
/// # }
/// let config = Config::builder().population_size(10).max_evaluations(100).build();
/// let outcome = Nsga2::builder()
///   .problem(&Balance)
///   .config(config.clone())
///   .crossover(UniformCrossover)
///   .mutation(|b: &mut BitString, _: f64, rng: &mut dyn RngCore| {
///     let i = (rng.next_u32() as usize) % b.len();
///     b.flip(i);
///   })
///   .selection(config.selection)
///   .build()
///   .optimize()
///   .unwrap();
/// assert_eq!(outcome.population.len(), 10);
/// ```
#[derive(TypedBuilder, Debug)]
pub struct Nsga2<'p, P, C, M, S> {
  problem: &'p P,
  #[builder(default)]
  config: Config,
  crossover: C,
  mutation: M,
  selection: S,
}

impl<'p, P> Nsga2<'p, P, TwoPointCrossover, BitFlipMutation, SelectionStrategy> {
  /// Creates NSGA-II with default operators and the selection strategy
  /// named by `config`.
  pub fn new(problem: &'p P, config: Config) -> Self {
    let selection = config.selection;
    Self {
      problem,
      config,
      crossover: TwoPointCrossover,
      mutation: BitFlipMutation,
      selection,
    }
  }
}

impl<'p, P, C, M, S, const N: usize> Optimizer<N> for Nsga2<'p, P, C, M, S>
where
  P: Problem<N>,
  C: Crossover,
  M: Mutation,
  S: Selection<N>,
{
  fn optimize(self) -> Result<Outcome<N>> {
    let Self {
      problem,
      config,
      crossover,
      mutation,
      selection,
    } = self;
    let size = config.population_size;
    let bits = problem.number_of_bits();
    check_objectives::<N, P>(problem)?;
    config.validate(bits, size)?;

    let span = info_span!(
      "nsga2",
      population_size = size,
      max_evaluations = config.max_evaluations,
      repair = config.repair
    );
    let _enter = span.enter();

    let mut rng = config.rng();
    let crossover_probability = config.crossover_probability_or(0.9);
    let mutation_probability = config.mutation_probability_or(1.0 / bits as f64);
    let mut evaluator = Evaluator::new(problem, config.execution, config.repair);

    let initial: Vec<BitString> = (0..size)
      .map(|_| (0..bits).map(|_| rng.gen_bool(0.5)).collect())
      .collect();
    let mut population = evaluator.evaluate_all(initial)?;
    debug!(evaluations = evaluator.evaluations(), "initial population evaluated");

    let mut generations = 0;
    while evaluator.evaluations() < config.max_evaluations {
      let fitness = Fitness::assess(&population)?;
      let pool = mating_pool(&selection, &population, &fitness, size, &mut rng);

      let mut offsprings = Vec::with_capacity(pool.len() + 1);
      for pair in pool.chunks(2) {
        let (a, b) = (pair[0].bits(), pair[pair.len() - 1].bits());
        let (mut x, mut y) = if rng.gen_bool(crossover_probability) {
          crossover.crossover(a, b, &mut rng)
        } else {
          (a.clone(), b.clone())
        };
        mutation.mutate(&mut x, mutation_probability, &mut rng);
        mutation.mutate(&mut y, mutation_probability, &mut rng);
        offsprings.push(x);
        offsprings.push(y);
      }
      let remaining = config.max_evaluations - evaluator.evaluations();
      offsprings.truncate(size.min(remaining));

      let offsprings = evaluator.evaluate_all(offsprings)?;
      population.extend(offsprings);
      population = truncate(population, size)?;
      generations += 1;

      debug!(
        generation = generations,
        evaluations = evaluator.evaluations(),
        "generation finished"
      );
    }

    info!(
      generations,
      evaluations = evaluator.evaluations(),
      "optimization finished"
    );
    Ok(Outcome {
      population,
      evaluations: evaluator.evaluations(),
      generations,
    })
  }
}

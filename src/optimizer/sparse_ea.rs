//! Implementation of SparseEA, an evolutionary algorithm for large-scale
//! sparse multi-objective problems.
//!
//! Before the first generation every decision variable is scored by the
//! front its one-hot encoding lands in. Initialization and variation then
//! use these scores to keep encodings sparse: crossover and mutation each
//! toggle a single bit, picking the better (lower score) of two randomly
//! drawn variables to enable and the worse one to disable.

use rand::{Rng, RngCore};
use tracing::{debug, info, info_span, trace};
use typed_builder::TypedBuilder;

use crate::{
  candidate::{split_duplicates, BitString, Candidate},
  config::Config,
  error::{Error, Result},
  evaluator::Evaluator,
  fitness::Fitness,
  optimizer::{check_objectives, Optimizer, Outcome},
  problem::Problem,
  ranking::Ranking,
  selection::{mating_pool, Selection, SelectionStrategy},
  truncation::truncate,
};

/// Score of a decision variable: the front index of its one-hot encoding.
pub type VariableScore = usize;

/// SparseEA over bit strings.
///
/// A run spends `number_of_bits` evaluations on variable scoring and
/// `population_size` on the initial population, so the evaluation budget
/// must cover at least both.
///
/// Unless set in the [`Config`], crossover and mutation fire with
/// probability `0.5` each.
#[derive(TypedBuilder, Debug)]
pub struct SparseEa<'p, P, S> {
  problem: &'p P,
  #[builder(default)]
  config: Config,
  selection: S,
}

impl<'p, P> SparseEa<'p, P, SelectionStrategy> {
  /// Creates SparseEA with the selection strategy named by `config`.
  pub fn new(problem: &'p P, config: Config) -> Self {
    let selection = config.selection;
    Self {
      problem,
      config,
      selection,
    }
  }
}

impl<'p, P, S, const N: usize> Optimizer<N> for SparseEa<'p, P, S>
where
  P: Problem<N>,
  S: Selection<N>,
{
  fn optimize(self) -> Result<Outcome<N>> {
    let Self {
      problem,
      config,
      selection,
    } = self;
    let size = config.population_size;
    let bits = problem.number_of_bits();
    check_objectives::<N, P>(problem)?;
    config.validate(bits, bits + size)?;

    let span = info_span!(
      "sparse_ea",
      population_size = size,
      max_evaluations = config.max_evaluations,
      number_of_bits = bits,
      repair = config.repair
    );
    let _enter = span.enter();

    let mut rng = config.rng();
    let (crossover_probability, mutation_probability) = probabilities(&config);
    let mut evaluator = Evaluator::new(problem, config.execution, config.repair);

    let scores = variable_scores::<N, P>(&mut evaluator)?;
    debug!(
      evaluations = evaluator.evaluations(),
      best = scores.iter().filter(|s| **s == 0).count(),
      "variables scored"
    );

    let initial: Vec<BitString> =
      (0..size).map(|_| seed_mask(&scores, &mut rng)).collect();
    let mut population = evaluator.evaluate_all(initial)?;

    let mut generations = 0;
    while evaluator.evaluations() < config.max_evaluations {
      let fitness = Fitness::assess(&population)?;
      let mut pool = mating_pool(&selection, &population, &fitness, size, &mut rng);

      let remaining = config.max_evaluations - evaluator.evaluations();
      let mut offsprings = Vec::with_capacity(size / 2 + 1);
      while !pool.is_empty() && offsprings.len() < remaining {
        let (p, q) = match pool.len() {
          1 => (0, 0),
          len => (rng.gen_range(0..len / 2), rng.gen_range(len / 2..len)),
        };
        offsprings.push(variate(
          pool[p].bits(),
          pool[q].bits(),
          &scores,
          crossover_probability,
          mutation_probability,
          &mut rng,
        )?);
        // q never precedes p
        pool.remove(q);
        if p != q {
          pool.remove(p);
        }
      }

      let offsprings = evaluator.evaluate_all(offsprings)?;
      population.extend(offsprings);
      population = survive(population, size)?;
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

/// Crossover and mutation probabilities of a run.
fn probabilities(config: &Config) -> (f64, f64) {
  (
    config.crossover_probability_or(0.5),
    config.mutation_probability_or(0.5),
  )
}

/// Scores every decision variable by evaluating its one-hot encoding and
/// ranking all of them together. Spends `number_of_bits` evaluations.
///
/// One-hot encodings are never repaired, even when `evaluator` repairs.
///
/// At least one variable always scores `0`.
pub fn variable_scores<const N: usize, P>(
  evaluator: &mut Evaluator<'_, P>,
) -> Result<Vec<VariableScore>>
where
  P: Problem<N>,
{
  let bits = evaluator.problem().number_of_bits();
  let one_hots = (0..bits).map(|i| BitString::one_hot(bits, i)).collect();
  let candidates: Vec<Candidate<N>> = evaluator.evaluate_all_unrepaired(one_hots)?;
  Ok(Ranking::compute(&candidates)?.ranks().to_vec())
}

/// Draws two indices uniformly, with replacement, from the set bits of
/// `set`.
///
/// # Errors
///
/// Returns [`Error::DegenerateIndexDraw`] if no bit of `set` is set.
pub fn draw_pair(set: &BitString, rng: &mut dyn RngCore) -> Result<(usize, usize)> {
  let ones: Vec<usize> = set.ones().collect();
  if ones.is_empty() {
    return Err(Error::DegenerateIndexDraw);
  }
  let m = ones[rng.gen_range(0..ones.len())];
  let n = ones[rng.gen_range(0..ones.len())];
  Ok((m, n))
}

/// Creates an initial mask: a random number of binary tournaments between
/// variables, each enabling the winner.
fn seed_mask(scores: &[VariableScore], rng: &mut dyn RngCore) -> BitString {
  let bits = scores.len();
  let mut mask = BitString::zeros(bits);
  for _ in 0..rng.gen_range(0..bits) {
    let m = rng.gen_range(0..bits);
    let n = rng.gen_range(0..bits);
    mask.set(if scores[m] < scores[n] { m } else { n }, true);
  }
  mask
}

/// Creates one offspring mask out of parents `a` and `b`.
fn variate(
  a: &BitString,
  b: &BitString,
  scores: &[VariableScore],
  crossover_probability: f64,
  mutation_probability: f64,
  rng: &mut dyn RngCore,
) -> Result<BitString> {
  let mut child = a.clone();

  if rng.gen_bool(crossover_probability) {
    disable_worse(&mut child, &a.or(&!b), scores, rng)?;
  } else {
    enable_better(&mut child, &(!a).or(b), scores, rng)?;
  }

  if rng.gen_bool(mutation_probability) {
    let enabled = child.clone();
    disable_worse(&mut child, &enabled, scores, rng)?;
  } else {
    let disabled = !&child;
    enable_better(&mut child, &disabled, scores, rng)?;
  }
  Ok(child)
}

/// Clears the worse of two variables drawn from `set`.
fn disable_worse(
  child: &mut BitString,
  set: &BitString,
  scores: &[VariableScore],
  rng: &mut dyn RngCore,
) -> Result<()> {
  if set.count_ones() == 0 {
    trace!("nothing to disable, step skipped");
    return Ok(());
  }
  let (m, n) = draw_pair(set, rng)?;
  child.set(if scores[m] > scores[n] { m } else { n }, false);
  Ok(())
}

/// Sets the better of two variables drawn from `set`.
fn enable_better(
  child: &mut BitString,
  set: &BitString,
  scores: &[VariableScore],
  rng: &mut dyn RngCore,
) -> Result<()> {
  if set.count_ones() == 0 {
    trace!("nothing to enable, step skipped");
    return Ok(());
  }
  let (m, n) = draw_pair(set, rng)?;
  child.set(if scores[m] < scores[n] { m } else { n }, true);
  Ok(())
}

/// Environmental selection on distinct encodings. Duplicates only fill the
/// slots distinct candidates cannot.
fn survive<const N: usize>(
  population: Vec<Candidate<N>>,
  size: usize,
) -> Result<Vec<Candidate<N>>> {
  let (unique, duplicates) = split_duplicates(population);
  let mut survivors = truncate(unique, size)?;
  if survivors.len() < size {
    trace!(
      distinct = survivors.len(),
      "too few distinct candidates, refilling with duplicates"
    );
    let missing = size - survivors.len();
    survivors.extend(duplicates.into_iter().take(missing));
  }
  Ok(survivors)
}

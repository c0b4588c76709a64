//! Mating selection operators and utilities.

use std::cmp::Ordering;

use rand::{Rng, RngCore};

use crate::{candidate::Candidate, fitness::Fitness};

/// An operator that picks one parent out of a population, using the
/// population's [`Fitness`] as a guide. Invoked repeatedly to fill a mating
/// pool.
///
/// # Examples
/// ```
/// # use sparse_moga::{selection::Selection, Candidate, Fitness};
/// # use rand::{Rng, RngCore};
/// # fn takes_selection<S: Selection<2>>(_: S) {}
/// // uniformly random parent
/// let s = |p: &[Candidate<2>], _: &Fitness, rng: &mut dyn RngCore| {
///   rng.gen_range(0..p.len())
/// };
/// takes_selection(s);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Selection<const N: usize> {
  /// Returns the index of the selected candidate. `population` is never
  /// empty.
  fn select(
    &self,
    population: &[Candidate<N>],
    fitness: &Fitness,
    rng: &mut dyn RngCore,
  ) -> usize;
}

impl<const N: usize, F> Selection<N> for F
where
  F: Fn(&[Candidate<N>], &Fitness, &mut dyn RngCore) -> usize,
{
  fn select(
    &self,
    population: &[Candidate<N>],
    fitness: &Fitness,
    rng: &mut dyn RngCore,
  ) -> usize {
    self(population, fitness, rng)
  }
}

/// Draws two candidates uniformly with replacement and returns the one with
/// the lower rank, or the higher crowding distance if ranks are equal. A
/// complete tie is settled by a coin flip from the same random stream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BinaryTournament;

impl<const N: usize> Selection<N> for BinaryTournament {
  fn select(
    &self,
    population: &[Candidate<N>],
    fitness: &Fitness,
    rng: &mut dyn RngCore,
  ) -> usize {
    let i = rng.gen_range(0..population.len());
    let j = rng.gen_range(0..population.len());

    match fitness.rank(i).cmp(&fitness.rank(j)) {
      Ordering::Less => i,
      Ordering::Greater => j,
      Ordering::Equal => {
        match fitness.crowding(i).total_cmp(&fitness.crowding(j)) {
          Ordering::Greater => i,
          Ordering::Less => j,
          Ordering::Equal => {
            if rng.gen_bool(0.5) {
              i
            } else {
              j
            }
          }
        }
      }
    }
  }
}

/// Selects a uniformly random candidate, ignoring fitness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RandomSelection;

impl<const N: usize> Selection<N> for RandomSelection {
  fn select(
    &self,
    population: &[Candidate<N>],
    _: &Fitness,
    rng: &mut dyn RngCore,
  ) -> usize {
    rng.gen_range(0..population.len())
  }
}

/// Built-in selection strategies, selectable through
/// [`Config`](crate::Config).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SelectionStrategy {
  /// See [`BinaryTournament`].
  #[default]
  BinaryTournament,
  /// See [`RandomSelection`].
  Random,
}

impl<const N: usize> Selection<N> for SelectionStrategy {
  fn select(
    &self,
    population: &[Candidate<N>],
    fitness: &Fitness,
    rng: &mut dyn RngCore,
  ) -> usize {
    match self {
      Self::BinaryTournament => {
        BinaryTournament.select(population, fitness, rng)
      }
      Self::Random => RandomSelection.select(population, fitness, rng),
    }
  }
}

/// Fills a mating pool of `size` candidates by invoking `selection`
/// repeatedly. Selected candidates are copied, so the pool never aliases the
/// population.
pub fn mating_pool<const N: usize, S>(
  selection: &S,
  population: &[Candidate<N>],
  fitness: &Fitness,
  size: usize,
  rng: &mut dyn RngCore,
) -> Vec<Candidate<N>>
where
  S: Selection<N> + ?Sized,
{
  if population.is_empty() {
    return Vec::new();
  }
  debug_assert_eq!(population.len(), fitness.len());
  (0..size)
    .map(|_| population[selection.select(population, fitness, rng)].clone())
    .collect()
}

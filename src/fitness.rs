//! Rank and crowding distance of every member of a population, the fitness
//! proxy used by mating selection.

use crate::{
  candidate::Candidate,
  crowding::{crowding_distances, CrowdingDistance},
  error::Result,
  ranking::Ranking,
};

/// Rank and crowding distance per candidate, indexed like the population it
/// was assessed from.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Fitness {
  ranks: Vec<usize>,
  crowding: Vec<CrowdingDistance>,
}

impl Fitness {
  /// Ranks `population` and computes crowding distances front by front.
  pub fn assess<const N: usize>(population: &[Candidate<N>]) -> Result<Self> {
    let ranking = Ranking::compute(population)?;
    let mut crowding = vec![0.0; population.len()];
    for front in ranking.fronts() {
      for (&idx, d) in front.iter().zip(crowding_distances(population, front)) {
        crowding[idx] = d;
      }
    }
    Ok(Self {
      ranks: ranking.ranks().to_vec(),
      crowding,
    })
  }

  /// Builds a fitness from precomputed values.
  ///
  /// # Panics
  ///
  /// Panics if the two vectors differ in length.
  pub fn from_parts(ranks: Vec<usize>, crowding: Vec<CrowdingDistance>) -> Self {
    assert_eq!(ranks.len(), crowding.len(), "ranks and crowding differ in length");
    Self { ranks, crowding }
  }

  /// Returns the rank of candidate `index`. Lower is better.
  pub fn rank(&self, index: usize) -> usize {
    self.ranks[index]
  }

  /// Returns the crowding distance of candidate `index`. Higher is better.
  pub fn crowding(&self, index: usize) -> CrowdingDistance {
    self.crowding[index]
  }

  /// Returns the number of assessed candidates.
  pub fn len(&self) -> usize {
    self.ranks.len()
  }

  /// Returns `true` if no candidates were assessed.
  pub fn is_empty(&self) -> bool {
    self.ranks.is_empty()
  }
}

//! Fast non-dominated sorting.

use std::cmp::Ordering;

use crate::{
  candidate::Candidate,
  dominance::ParetoDominance,
  error::Result,
};

// index of a candidate in the ranked population
type CandidateIndex = usize;
// number of candidate's dominators
type DominanceCounter = usize;
// dominated by each candidate candidates' indices
type DominanceList = Vec<CandidateIndex>;
/// Indices of candidates of a front, in ascending order.
pub type Front = Vec<CandidateIndex>;

/// A partition of a population into fronts of equal dominance depth.
///
/// Front 0 holds non-dominated candidates, front `k` holds candidates that
/// are dominated only by members of fronts `< k`. Every candidate belongs to
/// exactly one front. Rankings are always derived, never updated
/// incrementally: build a new one whenever the population changes.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Ranking {
  fronts: Vec<Front>,
  ranks: Vec<usize>,
}

impl Ranking {
  /// Sorts `population` into fronts with `O(m * n^2)` dominance comparisons.
  ///
  /// Members of each front are listed in their original population order.
  /// Duplicate objective vectors are mutually non-dominated and end up in
  /// the same front.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidObjective`](crate::Error::InvalidObjective) if
  /// any candidate holds a NaN.
  pub fn compute<const N: usize>(population: &[Candidate<N>]) -> Result<Self> {
    let n = population.len();
    let mut dominance_lists: Vec<DominanceList> = vec![Vec::new(); n];
    let mut dominance_counters: Vec<DominanceCounter> = vec![0; n];

    // fill dominance lists and counters
    for p_idx in 0..n {
      // for each unique pair of candidates `p` and `q`...
      for q_idx in p_idx + 1..n {
        match population[p_idx].dominance(&population[q_idx])? {
          // if `p` dominates `q`, `q` goes into `p`'s list
          Ordering::Less => {
            dominance_lists[p_idx].push(q_idx);
            dominance_counters[q_idx] += 1;
          }
          // if `q` dominates `p`, `p` goes into `q`'s list
          Ordering::Greater => {
            dominance_lists[q_idx].push(p_idx);
            dominance_counters[p_idx] += 1;
          }
          Ordering::Equal => {}
        }
      }
    }

    let mut ranks = vec![usize::MAX; n];
    let mut fronts: Vec<Front> = Vec::new();
    let mut current: Front =
      (0..n).filter(|&i| dominance_counters[i] == 0).collect();

    while !current.is_empty() {
      let rank = fronts.len();
      let mut next = Vec::new();
      for &p_idx in &current {
        ranks[p_idx] = rank;
        // release everything `p` dominates
        for &q_idx in &dominance_lists[p_idx] {
          dominance_counters[q_idx] -= 1;
          if dominance_counters[q_idx] == 0 {
            next.push(q_idx);
          }
        }
      }
      next.sort_unstable();
      fronts.push(std::mem::replace(&mut current, next));
    }

    debug_assert!(
      ranks.iter().all(|&r| r != usize::MAX),
      "every candidate must be assigned to a front"
    );

    Ok(Self { fronts, ranks })
  }

  /// Returns all fronts, best first.
  pub fn fronts(&self) -> &[Front] {
    &self.fronts
  }

  /// Returns front `index`, if there is one.
  pub fn front(&self, index: usize) -> Option<&Front> {
    self.fronts.get(index)
  }

  /// Returns the number of fronts.
  pub fn number_of_fronts(&self) -> usize {
    self.fronts.len()
  }

  /// Returns the rank of every candidate, indexed like the population.
  pub fn ranks(&self) -> &[usize] {
    &self.ranks
  }

  /// Returns the rank of candidate `index`.
  pub fn rank(&self, index: usize) -> usize {
    self.ranks[index]
  }

  /// Consumes the ranking, returning its fronts.
  pub fn into_fronts(self) -> Vec<Front> {
    self.fronts
  }
}

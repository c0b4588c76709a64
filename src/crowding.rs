//! Crowding distance, the per-front diversity estimate.

use std::cmp::Ordering;

use crate::candidate::Candidate;

/// Crowding distance of a candidate within its front. Higher is better.
pub type CrowdingDistance = f64;

/// Computes the crowding distance of every member of `front`, a set of
/// indices into `population`. The returned distances are ordered like
/// `front`.
///
/// For each objective the front is sorted by that objective; its two extreme
/// members get an infinite distance, and every interior member accumulates
/// `(next - prev) / (max - min)`. An objective whose values are all equal
/// contributes nothing. Fronts of up to 2 members are entirely infinite.
///
/// The result does not depend on the order of `front`.
pub fn crowding_distances<const N: usize>(
  population: &[Candidate<N>],
  front: &[usize],
) -> Vec<CrowdingDistance> {
  let n = front.len();
  if n <= 2 {
    return vec![CrowdingDistance::INFINITY; n];
  }

  let mut distances = vec![0.0; n];
  // positions into `front`, reordered per objective
  let mut order: Vec<usize> = (0..n).collect();
  for o_idx in 0..N {
    let score = |pos: usize| population[front[pos]].scores()[o_idx];
    // ties keep index order so that the boundary choice is deterministic
    order.sort_by(|&a, &b| {
      score(a)
        .partial_cmp(&score(b))
        .unwrap_or(Ordering::Equal)
        .then(front[a].cmp(&front[b]))
    });

    let first = order[0];
    let last = order[n - 1];
    distances[first] = CrowdingDistance::INFINITY;
    distances[last] = CrowdingDistance::INFINITY;

    let range = score(last) - score(first);
    if !(range.is_finite() && range > 0.0) {
      continue;
    }
    for w in order.windows(3) {
      let (prev, cur, next) = (w[0], w[1], w[2]);
      if distances[cur] != CrowdingDistance::INFINITY {
        distances[cur] += (score(next) - score(prev)) / range;
      }
    }
  }
  distances
}

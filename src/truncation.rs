//! Environmental selection: ranking and crowding truncation.

use std::collections::HashSet;

use crate::{
  candidate::Candidate,
  crowding::crowding_distances,
  error::Result,
  ranking::Ranking,
};

/// Reduces `population` (typically parents and offsprings together) to
/// `size` candidates.
///
/// Whole fronts are admitted best first while they fit. The first front that
/// does not fit entirely is sorted by descending crowding distance, ties
/// broken by original index, and its best members fill the remaining slots.
/// If `population` holds no more than `size` candidates, it is returned as is.
///
/// Survivors keep their relative order from `population`, so the result does
/// not list front 0 first. Re-rank it if fronts are needed.
pub fn truncate<const N: usize>(
  population: Vec<Candidate<N>>,
  size: usize,
) -> Result<Vec<Candidate<N>>> {
  if population.len() <= size {
    return Ok(population);
  }

  let ranking = Ranking::compute(&population)?;
  let mut survivors: Vec<usize> = Vec::with_capacity(size);
  for front in ranking.fronts() {
    if survivors.len() + front.len() <= size {
      survivors.extend_from_slice(front);
      if survivors.len() == size {
        break;
      }
      continue;
    }

    // the boundary front, admitted partially
    let distances = crowding_distances(&population, front);
    let mut order: Vec<usize> = (0..front.len()).collect();
    order.sort_by(|&a, &b| {
      distances[b]
        .total_cmp(&distances[a])
        .then(front[a].cmp(&front[b]))
    });
    let remaining = size - survivors.len();
    survivors.extend(order.into_iter().take(remaining).map(|pos| front[pos]));
    break;
  }

  debug_assert_eq!(survivors.len(), size, "survivors must fill the population");
  debug_assert_eq!(
    survivors.len(),
    survivors.iter().collect::<HashSet<_>>().len(),
    "survivors must have only unique indices"
  );

  let mut keep = vec![false; population.len()];
  for idx in survivors {
    keep[idx] = true;
  }
  Ok(
    population
      .into_iter()
      .zip(keep)
      .filter_map(|(candidate, keep)| keep.then_some(candidate))
      .collect(),
  )
}

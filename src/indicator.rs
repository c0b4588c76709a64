//! Quality indicators for comparing the fronts optimizers return.

use crate::{
  candidate::Candidate,
  error::Result,
  ranking::Ranking,
  score::{Score, Scores},
};

/// Returns the non-dominated members of `population`, in population order.
pub fn pareto_front<const N: usize>(
  population: &[Candidate<N>],
) -> Result<Vec<Candidate<N>>> {
  let ranking = Ranking::compute(population)?;
  let mut front = ranking.front(0).cloned().unwrap_or_default();
  front.sort_unstable();
  Ok(front.into_iter().map(|i| population[i].clone()).collect())
}

/// Returns the component-wise minimum and maximum of `front`, or `None` if
/// it is empty.
pub fn bounds<const N: usize>(front: &[Scores<N>]) -> Option<(Scores<N>, Scores<N>)> {
  let (first, rest) = front.split_first()?;
  let mut min = *first;
  let mut max = *first;
  for point in rest {
    for i in 0..N {
      min[i] = min[i].min(point[i]);
      max[i] = max[i].max(point[i]);
    }
  }
  Some((min, max))
}

/// Maps every objective of `front` linearly so that `min` becomes `0.0` and
/// `max` becomes `1.0`. Objectives with an empty range map to `0.0`.
pub fn normalize<const N: usize>(
  front: &[Scores<N>],
  min: &Scores<N>,
  max: &Scores<N>,
) -> Vec<Scores<N>> {
  front
    .iter()
    .map(|point| {
      std::array::from_fn(|i| {
        let range = max[i] - min[i];
        if range > 0.0 {
          (point[i] - min[i]) / range
        } else {
          0.0
        }
      })
    })
    .collect()
}

/// Computes the exact hypervolume dominated by `front` and bounded by
/// `reference`, all objectives minimized.
///
/// Points that do not strictly dominate `reference` contribute nothing and
/// are ignored, as are dominated points.
///
/// # Examples
/// ```
/// use sparse_moga::indicator::hypervolume;
///
/// let front = [[1.0, 2.0], [2.0, 1.0]];
/// assert_eq!(hypervolume(&front, &[3.0, 3.0]), 3.0);
/// ```
pub fn hypervolume<const N: usize>(front: &[Scores<N>], reference: &Scores<N>) -> Score {
  let points: Vec<Vec<Score>> = front
    .iter()
    .filter(|p| p.iter().zip(reference).all(|(v, r)| v < r))
    .map(|p| p.to_vec())
    .collect();
  slice_volume(points, reference)
}

/// Sweeps the last objective, summing slabs of the projected lower
/// dimensional volume.
fn slice_volume(mut points: Vec<Vec<Score>>, reference: &[Score]) -> Score {
  let Some(last) = reference.len().checked_sub(1) else {
    return 0.0;
  };
  if points.is_empty() {
    return 0.0;
  }
  if last == 0 {
    let best = points.iter().map(|p| p[0]).fold(Score::INFINITY, Score::min);
    return reference[0] - best;
  }

  points.sort_by(|a, b| a[last].total_cmp(&b[last]));
  let mut volume = 0.0;
  for i in 0..points.len() {
    let upper = points.get(i + 1).map_or(reference[last], |p| p[last]);
    let height = upper - points[i][last];
    if height > 0.0 {
      let projected = points[..=i].iter().map(|p| p[..last].to_vec()).collect();
      volume += height * slice_volume(projected, &reference[..last]);
    }
  }
  volume
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{candidate::BitString, score::Evaluation};

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
  }

  #[test]
  fn test_hypervolume_2d() {
    let front = [[1.0, 2.0], [2.0, 1.0]];
    assert!(close(hypervolume(&front, &[3.0, 3.0]), 3.0));
    // a dominated point adds nothing
    let front = [[1.0, 2.0], [2.0, 1.0], [2.5, 2.5]];
    assert!(close(hypervolume(&front, &[3.0, 3.0]), 3.0));
  }

  #[test]
  fn test_hypervolume_3d() {
    assert!(close(hypervolume(&[[0.0, 0.0, 0.0]], &[1.0, 2.0, 3.0]), 6.0));
    let front = [[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]];
    // inclusion and exclusion: 3 * 2 - 3 * 1 + 1
    assert!(close(hypervolume(&front, &[2.0, 2.0, 2.0]), 4.0));
  }

  #[test]
  fn test_hypervolume_ignores_points_beyond_reference() {
    let front = [[1.0, 1.0], [0.0, 3.0], [4.0, 0.0]];
    assert!(close(hypervolume(&front, &[3.0, 3.0]), 4.0));
    assert_eq!(hypervolume::<2>(&[], &[1.0, 1.0]), 0.0);
  }

  #[test]
  fn test_bounds_and_normalize() {
    let front = [[1.0, 10.0], [3.0, 20.0], [2.0, 20.0]];
    let (min, max) = bounds(&front).unwrap();
    assert_eq!(min, [1.0, 10.0]);
    assert_eq!(max, [3.0, 20.0]);
    let normalized = normalize(&front, &min, &max);
    assert_eq!(normalized, [[0.0, 0.0], [1.0, 1.0], [0.5, 1.0]]);
    assert!(bounds::<2>(&[]).is_none());
    assert_eq!(normalize(&[[5.0]], &[5.0], &[5.0]), [[0.0]]);
  }

  #[test]
  fn test_pareto_front() {
    let population: Vec<Candidate<2>> = [[2.0, 2.0], [1.0, 3.0], [3.0, 3.0], [3.0, 1.0]]
      .iter()
      .enumerate()
      .map(|(i, s)| Candidate::new(BitString::one_hot(4, i), Evaluation::new(*s)))
      .collect();
    let front = pareto_front(&population).unwrap();
    let scores: Vec<_> = front.iter().map(|c| *c.scores()).collect();
    assert_eq!(scores, [[2.0, 2.0], [1.0, 3.0], [3.0, 1.0]]);
    assert!(pareto_front::<2>(&[]).unwrap().is_empty());
  }
}

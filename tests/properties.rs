use std::cmp::Ordering;

use proptest::prelude::*;
use sparse_moga::{
  crowding::crowding_distances,
  dominance::ParetoDominance,
  indicator::{hypervolume, pareto_front},
  truncation::truncate,
  BitString,
  Candidate,
  Evaluation,
  Ranking,
};

fn population(points: &[Vec<f64>]) -> Vec<Candidate<2>> {
  points
    .iter()
    .enumerate()
    .map(|(i, p)| {
      Candidate::new(
        BitString::one_hot(points.len(), i),
        Evaluation::new([p[0], p[1]]),
      )
    })
    .collect()
}

fn points(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Vec<f64>>> {
  // a coarse grid, so that ties and duplicates show up regularly
  prop::collection::vec(prop::collection::vec((0u8..8).prop_map(f64::from), 2), len)
}

proptest! {
  #[test]
  fn test_fronts_partition_population(values in points(0..40)) {
    let p = population(&values);
    let ranking = Ranking::compute(&p).unwrap();

    let mut seen = vec![0; p.len()];
    for (rank, front) in ranking.fronts().iter().enumerate() {
      prop_assert!(!front.is_empty());
      for &i in front {
        seen[i] += 1;
        prop_assert_eq!(ranking.rank(i), rank);
      }
    }
    prop_assert!(seen.iter().all(|&s| s == 1), "every candidate in exactly one front");
  }

  #[test]
  fn test_fronts_respect_dominance(values in points(1..40)) {
    let p = population(&values);
    let ranking = Ranking::compute(&p).unwrap();

    for i in 0..p.len() {
      for j in 0..p.len() {
        // whoever dominates is ranked strictly better
        if p[i].dominance(&p[j]).unwrap() == Ordering::Less {
          prop_assert!(ranking.rank(i) < ranking.rank(j));
        }
      }
      // a member of a later front is dominated by the previous one
      if let Some(previous) = ranking.rank(i).checked_sub(1) {
        let front = ranking.front(previous).unwrap();
        prop_assert!(front
          .iter()
          .any(|&q| p[q].dominance(&p[i]).unwrap() == Ordering::Less));
      }
    }
  }

  #[test]
  fn test_crowding_ignores_front_order(values in points(0..30)) {
    let p = population(&values);
    let front: Vec<usize> = (0..p.len()).collect();
    let reversed: Vec<usize> = front.iter().rev().copied().collect();

    let forward = crowding_distances(&p, &front);
    let mut backward = crowding_distances(&p, &reversed);
    backward.reverse();
    prop_assert_eq!(forward.len(), p.len());
    for (a, b) in forward.iter().zip(&backward) {
      prop_assert!(a == b || (a - b).abs() < 1e-9, "{} != {}", a, b);
    }
    // on every objective, the first holder of the minimum and the last
    // holder of the maximum are boundary points
    for o in 0..2 {
      let value = |i: usize| p[i].scores()[o];
      let lowest = front
        .iter()
        .copied()
        .reduce(|a, b| if value(b) < value(a) { b } else { a });
      let highest = front
        .iter()
        .copied()
        .reduce(|a, b| if value(b) >= value(a) { b } else { a });
      if let (Some(lowest), Some(highest)) = (lowest, highest) {
        prop_assert!(forward[lowest].is_infinite(), "objective {} minimum", o);
        prop_assert!(forward[highest].is_infinite(), "objective {} maximum", o);
      }
    }
    if p.len() >= 2 {
      prop_assert!(forward.iter().filter(|d| d.is_infinite()).count() >= 2);
    }
    prop_assert!(forward.iter().all(|d| *d >= 0.0));
  }

  #[test]
  fn test_truncation_size_and_elitism(values in points(1..40), size in 1usize..40) {
    let p = population(&values);
    let ranking = Ranking::compute(&p).unwrap();
    let survivors = truncate(p.clone(), size).unwrap();

    prop_assert_eq!(survivors.len(), size.min(p.len()));
    // the worst surviving rank bounds everything that was dropped
    let rank_of = |c: &Candidate<2>| {
      ranking.rank(c.bits().ones().next().unwrap())
    };
    let worst_kept = survivors.iter().map(rank_of).max().unwrap_or(0);
    for dropped in p.iter().filter(|c| !survivors.contains(c)) {
      prop_assert!(rank_of(dropped) >= worst_kept);
    }
  }

  #[test]
  fn test_hypervolume_of_front_equals_population(values in points(1..30)) {
    let p = population(&values);
    let front = pareto_front(&p).unwrap();
    let all: Vec<[f64; 2]> = p.iter().map(|c| *c.scores()).collect();
    let best: Vec<[f64; 2]> = front.iter().map(|c| *c.scores()).collect();
    let reference = [8.0, 8.0];

    let hv = hypervolume(&best, &reference);
    prop_assert!((hv - hypervolume(&all, &reference)).abs() < 1e-9);
    prop_assert!((0.0..=64.0).contains(&hv));
  }
}

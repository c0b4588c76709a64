//! Type aliases for objective values and the result of a single evaluation.

/// An alias for a single objective value. Every objective is minimized.
pub type Score = f64;

/// An alias for an array of `N` values of `Score` type, one per objective.
pub type Scores<const N: usize> = [Score; N];

/// What a [`Problem`](crate::problem::Problem) returns for one candidate:
/// its objective values and its total constraint violation.
///
/// A violation of `0.0` means the candidate is feasible. Anything greater is
/// infeasible, and lower is better.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Evaluation<const N: usize> {
  /// Objective values, one per objective.
  pub scores: Scores<N>,
  /// Total constraint violation.
  pub violation: Score,
}

impl<const N: usize> Evaluation<N> {
  /// Creates an evaluation of a feasible candidate.
  pub fn new(scores: Scores<N>) -> Self {
    Self {
      scores,
      violation: 0.0,
    }
  }

  /// Creates an evaluation with constraint values. A constraint is satisfied
  /// when its value is `<= 0.0`; positive values are summed into the total
  /// violation.
  pub fn with_constraints(scores: Scores<N>, constraints: &[Score]) -> Self {
    Self {
      scores,
      violation: constraints.iter().map(|c| c.max(0.0)).sum(),
    }
  }

  /// Returns `true` if no constraint is violated.
  pub fn is_feasible(&self) -> bool {
    self.violation <= 0.0
  }
}

impl<const N: usize> From<Scores<N>> for Evaluation<N> {
  fn from(scores: Scores<N>) -> Self {
    Self::new(scores)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_constraints_sum_positive_parts() {
    let e = Evaluation::with_constraints([1.0, 2.0], &[-3.0, 0.5, 0.0, 1.5]);
    assert_eq!(e.violation, 2.0);
    assert!(!e.is_feasible());

    let e = Evaluation::with_constraints([1.0, 2.0], &[-1.0, 0.0]);
    assert_eq!(e.violation, 0.0);
    assert!(e.is_feasible());
  }

  #[test]
  fn test_from_scores() {
    let e: Evaluation<2> = [0.5, 0.25].into();
    assert_eq!(e, Evaluation::new([0.5, 0.25]));
    assert!(e.is_feasible());
  }
}

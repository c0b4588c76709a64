//! Pareto dominance with constraint-violation precedence.

use std::cmp::Ordering;

use crate::{
  candidate::Candidate,
  error::{Error, Result},
  score::Score,
};

/// Describes constrained pareto dominance.
pub trait ParetoDominance {
  /// Returns `Less` if `self` dominates `other`, `Greater` if `other`
  /// dominates `self`, otherwise `Equal`.
  ///
  /// A feasible value always dominates an infeasible one, and of two
  /// infeasible values the one with lower total violation dominates. Of two
  /// feasible values, `self` dominates `other` if it is no worse in every
  /// objective and strictly better in at least one.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidObjective`] if either side holds a NaN.
  fn dominance(&self, other: &Self) -> Result<Ordering>;
}

impl<const N: usize> ParetoDominance for Candidate<N> {
  fn dominance(&self, other: &Self) -> Result<Ordering> {
    compare(self.scores(), self.violation(), other.scores(), other.violation())
  }
}

/// Compares two objective vectors together with their constraint violations.
/// See [`ParetoDominance::dominance`].
pub fn compare(
  a: &[Score],
  a_violation: Score,
  b: &[Score],
  b_violation: Score,
) -> Result<Ordering> {
  for v in a.iter().chain(b).chain([&a_violation, &b_violation]) {
    if v.is_nan() {
      return Err(Error::InvalidObjective { value: *v });
    }
  }

  match (a_violation > 0.0, b_violation > 0.0) {
    (false, true) => return Ok(Ordering::Less),
    (true, false) => return Ok(Ordering::Greater),
    (true, true) => {
      // NaNs are ruled out above
      return Ok(
        a_violation
          .partial_cmp(&b_violation)
          .unwrap_or(Ordering::Equal),
      );
    }
    (false, false) => {}
  }

  let mut ord = Ordering::Equal;
  for (x, y) in a.iter().zip(b) {
    match (ord, x.partial_cmp(y).unwrap_or(Ordering::Equal)) {
      (Ordering::Equal, next_ord) => ord = next_ord,
      (Ordering::Greater, Ordering::Less)
      | (Ordering::Less, Ordering::Greater) => return Ok(Ordering::Equal),
      _ => {}
    }
  }
  Ok(ord)
}

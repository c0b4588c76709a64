//! The optimization problem an optimizer is asked to solve.

use crate::{candidate::BitString, error::EvaluationError, score::Evaluation};

/// A black-box multi-objective problem over bit strings of a fixed length.
///
/// `N` is the number of objectives; every objective is minimized.
///
/// Evaluation must be a pure function of the encoding and the problem's own
/// parameters: optimizers may call [`evaluate`](Problem::evaluate)
/// concurrently from several threads, which is why the trait requires `Sync`.
///
/// # Examples
/// ```
/// use sparse_moga::{BitString, Evaluation, EvaluationError, Problem};
///
/// // minimize the number of set bits and the number of cleared bits
/// struct Balance(usize);
///
/// impl Problem<2> for Balance {
///   fn number_of_bits(&self) -> usize {
///     self.0
///   }
///
///   fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
///     let ones = bits.count_ones() as f64;
///     Ok(Evaluation::new([ones, bits.len() as f64 - ones]))
///   }
/// }
/// ```
pub trait Problem<const N: usize>: Sync {
  /// Returns the length of every decision encoding.
  fn number_of_bits(&self) -> usize;

  /// Returns the number of objectives. Must agree with `N`.
  fn number_of_objectives(&self) -> usize {
    N
  }

  /// Computes objective values and constraint violation of an encoding.
  fn evaluate(&self, bits: &BitString) -> Result<Evaluation<N>, EvaluationError>;

  /// A pre-evaluation hook that may repair or locally improve an encoding in
  /// place before it is scored. Only invoked by optimizers configured with
  /// repair enabled. Does nothing by default.
  fn repair(&self, bits: &mut BitString) {
    let _ = bits;
  }
}

impl<const N: usize, P> Problem<N> for &P
where
  P: Problem<N> + ?Sized,
{
  fn number_of_bits(&self) -> usize {
    (**self).number_of_bits()
  }

  fn number_of_objectives(&self) -> usize {
    (**self).number_of_objectives()
  }

  fn evaluate(&self, bits: &BitString) -> Result<Evaluation<N>, EvaluationError> {
    (**self).evaluate(bits)
  }

  fn repair(&self, bits: &mut BitString) {
    (**self).repair(bits)
  }
}

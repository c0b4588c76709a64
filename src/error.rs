//! Error types returned by optimizers and their building blocks.

use crate::score::Score;

/// An alias for results returned throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures the search machinery can surface. None of them are retried;
/// each one aborts the current run and is returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A NaN reached the dominance comparator, either as an objective value or
  /// as a constraint violation.
  #[error("invalid objective value: {value}")]
  InvalidObjective {
    /// The offending value.
    value: Score,
  },

  /// The problem failed to evaluate a candidate. No partial generation is
  /// committed.
  #[error("evaluation failed: {0}")]
  Evaluation(#[from] EvaluationError),

  /// A pairwise index draw was requested over an empty index set.
  #[error("cannot draw an index pair from an empty index set")]
  DegenerateIndexDraw,

  /// The problem reports a number of objectives different from the arity the
  /// optimizer was instantiated with.
  #[error("objective count mismatch: expected {expected}, got {got}")]
  ObjectiveCount {
    /// Compile-time number of objectives.
    expected: usize,
    /// Number reported by the problem.
    got: usize,
  },

  /// An encoding has a different number of bits than the problem declares.
  #[error("bit count mismatch: expected {expected} bits, got {got}")]
  BitCount {
    /// Number of bits declared by the problem.
    expected: usize,
    /// Length of the offending encoding.
    got: usize,
  },

  /// The run configuration was rejected before the run started.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}

/// An error raised by a [`Problem`](crate::problem::Problem) while evaluating
/// a candidate.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvaluationError {
  message: String,
  #[source]
  source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EvaluationError {
  /// Creates an error from a plain message.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      source: None,
    }
  }

  /// Wraps an underlying error, keeping it as the source.
  pub fn from_source<E>(source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self {
      message: source.to_string(),
      source: Some(Box::new(source)),
    }
  }

  /// Returns the error message.
  pub fn message(&self) -> &str {
    &self.message
  }
}

#[cfg(test)]
mod tests {
  use std::error::Error as _;

  use super::*;

  #[test]
  fn test_evaluation_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let err = EvaluationError::from_source(io);
    assert_eq!(err.message(), "disk on fire");
    assert!(err.source().is_some());

    let err: Error = err.into();
    assert_eq!(err.to_string(), "evaluation failed: disk on fire");
  }

  #[test]
  fn test_error_messages() {
    let err = Error::BitCount {
      expected: 8,
      got: 7,
    };
    assert_eq!(err.to_string(), "bit count mismatch: expected 8 bits, got 7");
    assert!(EvaluationError::new("boom").source().is_none());
  }
}

//! Binary decision encodings and evaluated candidates.

use std::{
  collections::HashSet,
  fmt,
  hash::{Hash, Hasher},
  ops::{Index, Not},
};

use itertools::Itertools;

use crate::score::{Evaluation, Score, Scores};

/// A fixed-length bit vector, the decision encoding of every candidate.
///
/// In the sparse regime the encoding *is* the mask: a set bit means the
/// respective decision variable is enabled.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitString(Vec<bool>);

impl BitString {
  /// Creates a bit string of `len` cleared bits.
  pub fn zeros(len: usize) -> Self {
    Self(vec![false; len])
  }

  /// Creates a bit string of `len` bits with only bit `index` set.
  ///
  /// # Panics
  ///
  /// Panics if `index >= len`.
  pub fn one_hot(len: usize, index: usize) -> Self {
    let mut bits = Self::zeros(len);
    bits.0[index] = true;
    bits
  }

  /// Returns the number of bits.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns `true` if the bit string has no bits at all.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the value of bit `index`.
  pub fn get(&self, index: usize) -> bool {
    self.0[index]
  }

  /// Sets bit `index` to `value`.
  pub fn set(&mut self, index: usize, value: bool) {
    self.0[index] = value;
  }

  /// Inverts bit `index`.
  pub fn flip(&mut self, index: usize) {
    self.0[index] = !self.0[index];
  }

  /// Returns the number of set bits.
  pub fn count_ones(&self) -> usize {
    self.0.iter().filter(|b| **b).count()
  }

  /// Returns indices of set bits in ascending order.
  pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter().positions(|b| *b)
  }

  /// Returns indices of cleared bits in ascending order.
  pub fn zeros_iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter().positions(|b| !*b)
  }

  /// Bitwise OR. Both operands must have the same length.
  pub fn or(&self, other: &Self) -> Self {
    debug_assert_eq!(self.len(), other.len(), "bit strings differ in length");
    Self(self.0.iter().zip(&other.0).map(|(a, b)| *a || *b).collect())
  }

  /// Returns the underlying bits.
  pub fn as_slice(&self) -> &[bool] {
    &self.0
  }

  /// Returns the underlying bits mutably.
  pub fn as_mut_slice(&mut self) -> &mut [bool] {
    &mut self.0
  }
}

impl Not for &BitString {
  type Output = BitString;

  fn not(self) -> BitString {
    BitString(self.0.iter().map(|b| !b).collect())
  }
}

impl Index<usize> for BitString {
  type Output = bool;

  fn index(&self, index: usize) -> &bool {
    &self.0[index]
  }
}

impl From<Vec<bool>> for BitString {
  fn from(bits: Vec<bool>) -> Self {
    Self(bits)
  }
}

impl FromIterator<bool> for BitString {
  fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl fmt::Debug for BitString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s: String = self.0.iter().map(|b| if *b { '1' } else { '0' }).collect();
    write!(f, "BitString({s})")
  }
}

/// An evaluated candidate solution: a decision encoding together with the
/// objective values and constraint violation it produced.
///
/// Two candidates are equal iff their encodings are bitwise identical;
/// objective values take no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Candidate<const N: usize> {
  bits: BitString,
  scores: Scores<N>,
  violation: Score,
}

impl<const N: usize> Candidate<N> {
  /// Joins an encoding with the evaluation computed for it.
  pub fn new(bits: BitString, evaluation: Evaluation<N>) -> Self {
    Self {
      bits,
      scores: evaluation.scores,
      violation: evaluation.violation,
    }
  }

  /// Returns the decision encoding.
  pub fn bits(&self) -> &BitString {
    &self.bits
  }

  /// Returns the objective values.
  pub fn scores(&self) -> &Scores<N> {
    &self.scores
  }

  /// Returns the total constraint violation, `0.0` when feasible.
  pub fn violation(&self) -> Score {
    self.violation
  }

  /// Returns `true` if no constraint is violated.
  pub fn is_feasible(&self) -> bool {
    self.violation <= 0.0
  }

  /// Consumes the candidate, returning its encoding.
  pub fn into_bits(self) -> BitString {
    self.bits
  }
}

impl<const N: usize> PartialEq for Candidate<N> {
  fn eq(&self, other: &Self) -> bool {
    self.bits == other.bits
  }
}

impl<const N: usize> Eq for Candidate<N> {}

impl<const N: usize> Hash for Candidate<N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.bits.hash(state);
  }
}

/// Splits `population` into first occurrences and candidates whose encoding
/// equals that of an earlier candidate. Both parts keep their original order.
pub fn split_duplicates<const N: usize>(
  population: Vec<Candidate<N>>,
) -> (Vec<Candidate<N>>, Vec<Candidate<N>>) {
  let mut seen = HashSet::with_capacity(population.len());
  population
    .into_iter()
    .partition(|c| seen.insert(c.bits().clone()))
}

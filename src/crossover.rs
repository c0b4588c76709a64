//! Crossover operators for bit string encodings.

use rand::{Rng, RngCore};

use crate::candidate::BitString;

/// Recombines two parents into two offsprings of the same length.
///
/// The optimizer decides whether crossover fires at all (with the configured
/// crossover probability); an implementation only describes the
/// recombination rule itself.
///
/// # Examples
/// ```
/// # use sparse_moga::{crossover::Crossover, BitString};
/// # use rand::RngCore;
/// # fn takes_crossover<C: Crossover>(_: C) {}
/// // swaps parents
/// let c = |a: &BitString, b: &BitString, _: &mut dyn RngCore| (b.clone(), a.clone());
/// takes_crossover(c);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Crossover {
  /// Returns two offsprings created from `a` and `b`.
  fn crossover(
    &self,
    a: &BitString,
    b: &BitString,
    rng: &mut dyn RngCore,
  ) -> (BitString, BitString);
}

impl<F> Crossover for F
where
  F: Fn(&BitString, &BitString, &mut dyn RngCore) -> (BitString, BitString),
{
  fn crossover(
    &self,
    a: &BitString,
    b: &BitString,
    rng: &mut dyn RngCore,
  ) -> (BitString, BitString) {
    self(a, b, rng)
  }
}

/// Swaps the tails of both parents after a random cut point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SinglePointCrossover;

impl Crossover for SinglePointCrossover {
  fn crossover(
    &self,
    a: &BitString,
    b: &BitString,
    rng: &mut dyn RngCore,
  ) -> (BitString, BitString) {
    let len = a.len().min(b.len());
    if len < 2 {
      return (a.clone(), b.clone());
    }
    let cut = rng.gen_range(1..len);
    swap_range(a, b, cut, len)
  }
}

/// Swaps the segment between two random cut points.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TwoPointCrossover;

impl Crossover for TwoPointCrossover {
  fn crossover(
    &self,
    a: &BitString,
    b: &BitString,
    rng: &mut dyn RngCore,
  ) -> (BitString, BitString) {
    let len = a.len().min(b.len());
    if len < 2 {
      return (a.clone(), b.clone());
    }
    let x = rng.gen_range(0..len);
    let y = rng.gen_range(0..len);
    let (from, to) = if x <= y { (x, y + 1) } else { (y, x + 1) };
    swap_range(a, b, from, to)
  }
}

/// Swaps each bit independently with probability `0.5`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct UniformCrossover;

impl Crossover for UniformCrossover {
  fn crossover(
    &self,
    a: &BitString,
    b: &BitString,
    rng: &mut dyn RngCore,
  ) -> (BitString, BitString) {
    let (mut m, mut n) = (a.clone(), b.clone());
    let len = a.len().min(b.len());
    for i in 0..len {
      if rng.gen_bool(0.5) {
        m.set(i, b[i]);
        n.set(i, a[i]);
      }
    }
    (m, n)
  }
}

fn swap_range(
  a: &BitString,
  b: &BitString,
  from: usize,
  to: usize,
) -> (BitString, BitString) {
  let (mut m, mut n) = (a.clone(), b.clone());
  m.as_mut_slice()[from..to].copy_from_slice(&b.as_slice()[from..to]);
  n.as_mut_slice()[from..to].copy_from_slice(&a.as_slice()[from..to]);
  (m, n)
}

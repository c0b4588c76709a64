//! Mutation operators for bit string encodings.

use rand::{Rng, RngCore};

use crate::candidate::BitString;

/// An operator that mutates a single encoding in place.
///
/// `probability` is the configured mutation probability; how it is applied
/// (per bit, per encoding, ...) is up to the operator.
///
/// # Examples
/// ```
/// # use sparse_moga::{mutation::Mutation, BitString};
/// # use rand::{Rng, RngCore};
/// # fn takes_mutation<M: Mutation>(_: M) {}
/// // flips one random bit with the given probability
/// let m = |b: &mut BitString, p: f64, rng: &mut dyn RngCore| {
///   if !b.is_empty() && rng.gen_bool(p) {
///     let i = rng.gen_range(0..b.len());
///     b.flip(i);
///   }
/// };
/// takes_mutation(m);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Mutation {
  /// Mutates given encoding.
  fn mutate(&self, bits: &mut BitString, probability: f64, rng: &mut dyn RngCore);
}

impl<F> Mutation for F
where
  F: Fn(&mut BitString, f64, &mut dyn RngCore),
{
  fn mutate(&self, bits: &mut BitString, probability: f64, rng: &mut dyn RngCore) {
    self(bits, probability, rng)
  }
}

/// Flips every bit independently with the mutation probability.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BitFlipMutation;

impl Mutation for BitFlipMutation {
  fn mutate(&self, bits: &mut BitString, probability: f64, rng: &mut dyn RngCore) {
    let probability = probability.clamp(0.0, 1.0);
    for bit in bits.as_mut_slice() {
      if rng.gen_bool(probability) {
        *bit = !*bit;
      }
    }
  }
}

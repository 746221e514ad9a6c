mod types;

pub use types::{cyclic::Cyclic, dihedral::Dihedral};

use crate::{finite::Finite, monoid::Monoid};

/// An algebraic group.
pub trait Group: Monoid {
  /// The unique inverse of a group element.
  fn inverse(&self) -> Self;

  /// The order of the element: the smallest `k >= 1` with `self^k = e`.
  fn order(&self) -> usize
  where
    Self: Finite,
  {
    let mut acc = *self;
    let mut k = 1;
    while !acc.is_identity() && k < Self::SIZE {
      acc = acc.op(self);
      k += 1;
    }
    k
  }
}

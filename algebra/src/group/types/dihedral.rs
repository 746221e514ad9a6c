use std::{fmt::Display, ops::Mul};

use crate::{finite::Finite, group::Group, monoid::Monoid, ordinal::Ordinal, semigroup::Semigroup};

/// The dihedral group of order `2N`: the symmetries of a regular `N`-gon.
///
/// `Rot(i)` is the rotation by `i` steps of `360 / N` degrees. `Rfl(i)` is
/// `Rot(i) * Rfl(0)`, so that
///
///  - `r_i * r_j = r_(i+j)`
///  - `r_i * s_j = s_(i+j)`
///  - `s_i * r_j = s_(i-j)`
///  - `s_i * s_j = r_(i-j)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dihedral<const N: u16> {
  Rot(u16),
  Rfl(u16),
}

impl<const N: u16> Dihedral<N> {
  /// While const traits are nightly-only, define const versions of the trait
  /// impls manually.
  pub const fn const_identity() -> Self {
    Self::Rot(0)
  }

  pub const fn const_ord(self) -> usize {
    match self {
      Self::Rot(i) => i as usize,
      Self::Rfl(i) => (N + i) as usize,
    }
  }

  pub const fn const_op(&self, rhs: &Self) -> Self {
    match (*self, *rhs) {
      (Self::Rot(i), Self::Rot(j)) => Self::Rot((i + j) % N),
      (Self::Rot(i), Self::Rfl(j)) => Self::Rfl((i + j) % N),
      (Self::Rfl(i), Self::Rot(j)) => Self::Rfl((N + i - j) % N),
      (Self::Rfl(i), Self::Rfl(j)) => Self::Rot((N + i - j) % N),
    }
  }

  pub const fn is_reflection(&self) -> bool {
    matches!(self, Self::Rfl(_))
  }
}

impl<const N: u16> Mul for Dihedral<N> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    self.const_op(&rhs)
  }
}

impl<const N: u16> Finite for Dihedral<N> {
  const SIZE: usize = 2 * (N as usize);
}

impl<const N: u16> Ordinal for Dihedral<N> {
  fn ord(&self) -> usize {
    Self::const_ord(*self)
  }

  fn from_ord(ord: usize) -> Self {
    if ord < N as usize {
      Self::Rot(ord as u16)
    } else {
      debug_assert!(ord < 2 * N as usize);
      Self::Rfl((ord - N as usize) as u16)
    }
  }
}

impl<const N: u16> Semigroup for Dihedral<N> {}

impl<const N: u16> Monoid for Dihedral<N> {
  fn identity() -> Self {
    Self::const_identity()
  }
}

impl<const N: u16> Group for Dihedral<N> {
  fn inverse(&self) -> Self {
    match self {
      Self::Rot(i) => Self::Rot((N - i) % N),
      Self::Rfl(i) => Self::Rfl(*i),
    }
  }
}

impl<const N: u16> Display for Dihedral<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Rot(i) => write!(f, "r{i}"),
      Self::Rfl(i) => write!(f, "s{i}"),
    }
  }
}

use std::{fmt::Display, ops::Mul};

use crate::{finite::Finite, group::Group, monoid::Monoid, ordinal::Ordinal, semigroup::Semigroup};

/// The cyclic group of order `N`, written additively as rotation steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cyclic<const N: u16>(pub u16);

impl<const N: u16> Cyclic<N> {
  /// Builds the element for `steps`, reducing modulo `N`.
  pub const fn new(steps: u16) -> Self {
    Self(steps % N)
  }

  pub const fn steps(&self) -> u16 {
    self.0
  }

  pub const fn const_op(&self, rhs: &Self) -> Self {
    Self((self.0 + rhs.0) % N)
  }
}

impl<const N: u16> Mul for Cyclic<N> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    self.const_op(&rhs)
  }
}

impl<const N: u16> Finite for Cyclic<N> {
  const SIZE: usize = N as usize;
}

impl<const N: u16> Ordinal for Cyclic<N> {
  fn ord(&self) -> usize {
    self.0 as usize
  }

  fn from_ord(ord: usize) -> Self {
    debug_assert!(ord < N as usize);
    Self(ord as u16)
  }
}

impl<const N: u16> Semigroup for Cyclic<N> {}

impl<const N: u16> Monoid for Cyclic<N> {
  fn identity() -> Self {
    Self(0)
  }
}

impl<const N: u16> Group for Cyclic<N> {
  fn inverse(&self) -> Self {
    Self((N - self.0) % N)
  }
}

impl<const N: u16> Display for Cyclic<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "r{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  fn check_ops<const N: u16>() {
    for i in 0..N {
      let a: Cyclic<N> = Cyclic(i);
      assert_eq!(a.ord(), i as usize);
      assert_eq!(Cyclic::from_ord(i as usize), a);

      for j in 0..N {
        assert_eq!(a * Cyclic(j), Cyclic((i + j) % N));
      }
    }
  }

  fn check_inverses<const N: u16>() {
    for el in Cyclic::<N>::for_each() {
      assert_eq!(el * el.inverse(), Cyclic::identity());
      assert_eq!(el.inverse() * el, Cyclic::identity());
    }
  }

  #[test]
  fn test_ops() {
    check_ops::<1>();
    check_ops::<2>();
    check_ops::<3>();
    check_ops::<4>();
  }

  #[test]
  fn test_inverse() {
    check_inverses::<2>();
    check_inverses::<3>();
    check_inverses::<4>();
  }

  #[test]
  fn test_new_reduces() {
    assert_eq!(Cyclic::<4>::new(6), Cyclic(2));
    assert_eq!(Cyclic::<3>::new(3), Cyclic::identity());
  }

  #[rstest]
  #[case(Cyclic::<4>(0), 1)]
  #[case(Cyclic::<4>(1), 4)]
  #[case(Cyclic::<4>(2), 2)]
  #[case(Cyclic::<4>(3), 4)]
  fn test_order(#[case] el: Cyclic<4>, #[case] expected: usize) {
    assert_eq!(el.order(), expected);
  }
}

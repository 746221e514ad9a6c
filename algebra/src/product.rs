use std::{fmt::Display, ops::Mul};

use crate::{finite::Finite, group::Group, monoid::Monoid, ordinal::Ordinal, semigroup::Semigroup};

/// The direct product `L x R`, operating componentwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectProduct<L, R> {
  left: L,
  right: R,
}

impl<L, R> DirectProduct<L, R> {
  pub const fn new(left: L, right: R) -> Self {
    Self { left, right }
  }

  pub const fn left(&self) -> &L {
    &self.left
  }

  pub const fn right(&self) -> &R {
    &self.right
  }
}

impl<L, R> Mul for DirectProduct<L, R>
where
  L: Mul<Output = L>,
  R: Mul<Output = R>,
{
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    Self {
      left: self.left * rhs.left,
      right: self.right * rhs.right,
    }
  }
}

impl<L, R> Finite for DirectProduct<L, R>
where
  L: Finite,
  R: Finite,
{
  const SIZE: usize = L::SIZE * R::SIZE;
}

impl<L, R> Ordinal for DirectProduct<L, R>
where
  L: Ordinal,
  R: Ordinal,
{
  fn ord(&self) -> usize {
    self.left.ord() + self.right.ord() * L::SIZE
  }

  fn from_ord(ord: usize) -> Self {
    Self {
      left: L::from_ord(ord % L::SIZE),
      right: R::from_ord(ord / L::SIZE),
    }
  }
}

impl<L, R> Semigroup for DirectProduct<L, R>
where
  L: Semigroup,
  R: Semigroup,
{
}

impl<L, R> Monoid for DirectProduct<L, R>
where
  L: Monoid,
  R: Monoid,
{
  fn identity() -> Self {
    Self {
      left: L::identity(),
      right: R::identity(),
    }
  }
}

impl<L, R> Group for DirectProduct<L, R>
where
  L: Group,
  R: Group,
{
  fn inverse(&self) -> Self {
    Self {
      left: self.left.inverse(),
      right: self.right.inverse(),
    }
  }
}

impl<L, R> Display for DirectProduct<L, R>
where
  L: Display,
  R: Display,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.left, self.right)
  }
}

#[macro_export]
macro_rules! direct_product_type {
  ($g:ty) => {
    $g
  };
  ($l:ty, $($rs:ty),+) => {
    $crate::product::DirectProduct<$l, $crate::direct_product_type!($($rs),+)>
  }
}

#[macro_export]
macro_rules! direct_product {
  ($g:expr) => {
    $g
  };
  ($l:expr, $($rs:expr),+) => {
    $crate::product::DirectProduct::new($l, $crate::direct_product!($($rs),+))
  }
}

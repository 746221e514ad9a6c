use std::ops::Mul;

/// An algebraic semigroup. The operation is written as `Mul`, with
/// `a * b` meaning "apply `a`, then `b`" for groups acting on shapes.
pub trait Semigroup: Copy + PartialEq + Sized + Mul<Output = Self> {
  fn op(&self, other: &Self) -> Self {
    *self * *other
  }
}

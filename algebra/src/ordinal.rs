use crate::finite::Finite;

/// A trait for finite sets with labeled elements.
pub trait Ordinal: Finite + Sized {
  /// Returns a unique integer for each element of the set, exactly covering
  /// the range (0..SIZE).
  fn ord(&self) -> usize;

  /// The inverse of `ord`.
  fn from_ord(ord: usize) -> Self;

  /// Iterates over every element of the set in ordinal order.
  fn for_each() -> impl Iterator<Item = Self> {
    (0..Self::SIZE).map(Self::from_ord)
  }
}

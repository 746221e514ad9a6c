/// A trait for finite sets. The size of the set depends only on the type, not
/// on how an element was constructed.
pub trait Finite {
  const SIZE: usize;

  fn size() -> usize {
    Self::SIZE
  }
}

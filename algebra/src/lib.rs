pub mod finite;
pub mod group;
pub mod monoid;
pub mod ordinal;
pub mod permutation;
pub mod product;
pub mod semigroup;

pub mod cyclic;
pub mod dihedral;

use std::fmt::Display;

use itertools::Itertools;

/// A permutation of the labels `1..=degree`, in one-line notation.
///
/// Entry `i` holds the label found at position `i + 1` after the permutation
/// is applied to the identity arrangement. Always a bijection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
  images: Vec<u8>,
}

impl Permutation {
  pub fn identity(degree: usize) -> Self {
    debug_assert!(degree <= u8::MAX as usize);
    Self {
      images: (1..=degree as u8).collect(),
    }
  }

  /// Returns `None` unless `images` contains each of `1..=images.len()`
  /// exactly once.
  pub fn from_images(images: Vec<u8>) -> Option<Self> {
    let degree = images.len();
    let mut seen = vec![false; degree];
    for &label in &images {
      let idx = (label as usize).checked_sub(1)?;
      if idx >= degree || seen[idx] {
        return None;
      }
      seen[idx] = true;
    }
    Some(Self { images })
  }

  pub fn degree(&self) -> usize {
    self.images.len()
  }

  pub fn images(&self) -> &[u8] {
    &self.images
  }

  pub fn into_images(self) -> Vec<u8> {
    self.images
  }

  /// The label at 1-indexed `position`.
  pub fn image(&self, position: u8) -> u8 {
    self.images[position as usize - 1]
  }

  pub fn is_identity(&self) -> bool {
    self
      .images
      .iter()
      .enumerate()
      .all(|(idx, &label)| label as usize == idx + 1)
  }

  /// Shifts every occupant `steps` positions forward, wrapping around.
  pub fn shifted(&self, steps: usize) -> Self {
    let n = self.degree();
    if n == 0 {
      return self.clone();
    }
    let steps = steps % n;
    Self {
      images: (0..n).map(|idx| self.images[(idx + n - steps) % n]).collect(),
    }
  }

  /// Exchanges the occupants of two 1-indexed positions.
  pub fn swap_positions(&mut self, a: u8, b: u8) {
    self.images.swap(a as usize - 1, b as usize - 1);
  }

  /// The permutation obtained by first applying `self`, then `other`.
  pub fn then(&self, other: &Self) -> Self {
    debug_assert_eq!(self.degree(), other.degree());
    Self {
      images: other.images.iter().map(|&from| self.image(from)).collect(),
    }
  }

  pub fn inverse(&self) -> Self {
    let mut images = vec![0; self.degree()];
    for (idx, &label) in self.images.iter().enumerate() {
      images[label as usize - 1] = (idx + 1) as u8;
    }
    Self { images }
  }

  pub fn pow(&self, n: u32) -> Self {
    (0..n).fold(Self::identity(self.degree()), |acc, _| acc.then(self))
  }

  /// Decomposes into disjoint cycles by following `position -> image` from
  /// each unvisited position in increasing order. Fixed points are included
  /// as cycles of length 1.
  pub fn cycles(&self) -> Vec<Vec<u8>> {
    let mut visited = vec![false; self.degree()];
    let mut cycles = Vec::new();
    for start in 1..=self.degree() as u8 {
      if visited[start as usize - 1] {
        continue;
      }

      let mut cycle = Vec::new();
      let mut pos = start;
      while !visited[pos as usize - 1] {
        visited[pos as usize - 1] = true;
        cycle.push(pos);
        pos = self.image(pos);
      }
      cycles.push(cycle);
    }
    cycles
  }

  /// Cycles of length at least 2.
  pub fn nontrivial_cycles(&self) -> impl Iterator<Item = Vec<u8>> {
    self.cycles().into_iter().filter(|cycle| cycle.len() > 1)
  }

  pub fn fixed_points(&self) -> impl Iterator<Item = u8> + '_ {
    (1..=self.degree() as u8).filter(|&pos| self.image(pos) == pos)
  }

  /// The lengths of the cycles, longest first.
  pub fn cycle_type(&self) -> Vec<usize> {
    self
      .cycles()
      .iter()
      .map(Vec::len)
      .sorted_unstable_by(|a, b| b.cmp(a))
      .collect()
  }

  /// The least common multiple of the cycle lengths.
  pub fn order(&self) -> usize {
    self
      .cycles()
      .iter()
      .map(Vec::len)
      .fold(1, |acc, len| acc / gcd(acc, len) * len)
  }

  pub fn is_even(&self) -> bool {
    self.cycles().iter().map(|cycle| cycle.len() - 1).sum::<usize>() % 2 == 0
  }
}

fn gcd(a: usize, b: usize) -> usize {
  if b == 0 {
    a
  } else {
    gcd(b, a % b)
  }
}

impl Display for Permutation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", self.images.iter().join(", "))
  }
}

#[cfg(test)]
mod tests {
  use googletest::{gtest, prelude::*};
  use rstest::rstest;

  use super::*;

  fn perm(images: &[u8]) -> Permutation {
    Permutation::from_images(images.to_vec()).unwrap()
  }

  #[gtest]
  fn test_identity() {
    let id = Permutation::identity(4);
    expect_that!(id.images().to_vec(), elements_are![&1, &2, &3, &4]);
    expect_true!(id.is_identity());
    expect_eq!(id.fixed_points().count(), 4);
  }

  #[rstest]
  #[case(vec![1, 1, 2])]
  #[case(vec![0, 1, 2])]
  #[case(vec![1, 2, 4])]
  #[case(vec![2, 3])]
  fn test_rejects_non_bijections(#[case] images: Vec<u8>) {
    assert!(Permutation::from_images(images).is_none());
  }

  #[gtest]
  fn test_shifted() {
    let id = Permutation::identity(4);
    expect_that!(id.shifted(1).images().to_vec(), elements_are![&4, &1, &2, &3]);
    expect_that!(id.shifted(2).images().to_vec(), elements_are![&3, &4, &1, &2]);
    expect_eq!(id.shifted(4), id);
  }

  #[gtest]
  fn test_then() {
    let rot = Permutation::identity(4).shifted(2);
    let flip = perm(&[4, 3, 2, 1]);
    expect_that!(rot.then(&flip).images().to_vec(), elements_are![&2, &1, &4, &3]);
    expect_that!(flip.then(&rot).images().to_vec(), elements_are![&2, &1, &4, &3]);
  }

  #[gtest]
  fn test_inverse() {
    let p = perm(&[4, 1, 2, 3]);
    expect_that!(p.inverse().images().to_vec(), elements_are![&2, &3, &4, &1]);
    expect_true!(p.then(&p.inverse()).is_identity());
    expect_true!(p.inverse().then(&p).is_identity());
  }

  #[gtest]
  fn test_cycles() {
    let p = perm(&[4, 1, 2, 3]);
    expect_eq!(p.cycles(), vec![vec![1, 4, 3, 2]]);

    let q = perm(&[1, 3, 2]);
    expect_eq!(q.cycles(), vec![vec![1], vec![2, 3]]);
    expect_eq!(q.nontrivial_cycles().count(), 1);
    expect_that!(q.fixed_points().collect::<Vec<_>>(), elements_are![&1]);
  }

  #[rstest]
  #[case(&[1, 2, 3, 4], 1, true)]
  #[case(&[4, 1, 2, 3], 4, false)]
  #[case(&[3, 4, 1, 2], 2, true)]
  #[case(&[1, 3, 2], 2, false)]
  #[case(&[2, 3, 1], 3, true)]
  fn test_order_and_parity(#[case] images: &[u8], #[case] order: usize, #[case] even: bool) {
    let p = perm(images);
    assert_eq!(p.order(), order);
    assert_eq!(p.is_even(), even);
    assert!(p.pow(order as u32).is_identity());
  }

  #[test]
  fn test_cycle_type() {
    assert_eq!(perm(&[2, 1, 3, 4]).cycle_type(), vec![2, 1, 1]);
    assert_eq!(perm(&[3, 4, 1, 2]).cycle_type(), vec![2, 2]);
  }

  #[test]
  fn test_display() {
    assert_eq!(perm(&[4, 1, 2, 3]).to_string(), "[4, 1, 2, 3]");
  }
}

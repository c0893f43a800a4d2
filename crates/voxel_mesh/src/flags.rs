//! Dense bit flags for vertex and face tables.
//!
//! One bit vector per flag category keeps the tables compact and makes the
//! "OR-only" accumulation of planar flags explicit via [`FlagSet::raise`].

use glam::BVec3;
use vob::Vob;

/// Growable dense bitset indexed like the table it belongs to.
#[derive(Clone, Debug)]
pub struct FlagSet {
  bits: Vob,
}

impl FlagSet {
  pub fn new() -> Self {
    Self { bits: Vob::new() }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.bits.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.bits.len() == 0
  }

  /// Append a flag for a newly allocated slot.
  #[inline]
  pub fn push(&mut self, value: bool) {
    self.bits.push(value);
  }

  /// Read a flag. Slots past the end read as unset.
  #[inline]
  pub fn get(&self, index: usize) -> bool {
    self.bits.get(index).unwrap_or(false)
  }

  /// Overwrite a flag.
  #[inline]
  pub fn set(&mut self, index: usize, value: bool) {
    self.bits.set(index, value);
  }

  /// Set a flag if `value` is true; never clears.
  #[inline]
  pub fn raise(&mut self, index: usize, value: bool) {
    if value {
      self.bits.set(index, true);
    }
  }

  /// Unset every flag, keeping the length.
  pub fn clear_all(&mut self) {
    for index in 0..self.bits.len() {
      self.bits.set(index, false);
    }
  }

  /// Drop all slots.
  pub fn reset(&mut self) {
    self.bits.clear();
  }

  /// Number of set flags.
  pub fn count_set(&self) -> usize {
    self.bits.iter().filter(|&bit| bit).count()
  }
}

impl Default for FlagSet {
  fn default() -> Self {
    Self::new()
  }
}

/// One [`FlagSet`] per axis.
#[derive(Clone, Debug, Default)]
pub struct AxisFlags {
  pub x: FlagSet,
  pub y: FlagSet,
  pub z: FlagSet,
}

impl AxisFlags {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.x.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x.is_empty()
  }

  pub fn push(&mut self, value: BVec3) {
    self.x.push(value.x);
    self.y.push(value.y);
    self.z.push(value.z);
  }

  #[inline]
  pub fn get(&self, index: usize) -> BVec3 {
    BVec3::new(self.x.get(index), self.y.get(index), self.z.get(index))
  }

  /// OR `value` into the flags at `index`.
  #[inline]
  pub fn raise(&mut self, index: usize, value: BVec3) {
    self.x.raise(index, value.x);
    self.y.raise(index, value.y);
    self.z.raise(index, value.z);
  }

  pub fn reset(&mut self) {
    self.x.reset();
    self.y.reset();
    self.z.reset();
  }
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

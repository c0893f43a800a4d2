//! Voxel storage interface and a sparse reference implementation.

use std::collections::BTreeMap;

use glam::IVec3;

use crate::error::{MeshError, Result};
use crate::material::MaterialList;
use crate::types::{Color, VoxelBounds};

/// A filled voxel: material index plus color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
  pub material: usize,
  pub color: Color,
}

impl Voxel {
  pub fn new(material: usize, color: Color) -> Self {
    Self { material, color }
  }
}

/// Read access to a voxel grid.
///
/// The iteration order of [`VoxelSource::voxels`] becomes the face order of
/// the built mesh, so implementations should iterate deterministically.
pub trait VoxelSource {
  /// Voxel at an integer position, `None` when empty.
  fn voxel(&self, position: IVec3) -> Option<Voxel>;

  /// All filled voxels.
  fn voxels(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_;
}

/// Sparse grid keyed by position, iterated in z, y, x order.
#[derive(Clone, Debug, Default)]
pub struct SparseVoxelGrid {
  voxels: BTreeMap<(i32, i32, i32), Voxel>,
}

impl SparseVoxelGrid {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn key(position: IVec3) -> (i32, i32, i32) {
    (position.z, position.y, position.x)
  }

  /// Set a voxel, returning the one it replaced.
  pub fn insert(&mut self, position: IVec3, voxel: Voxel) -> Option<Voxel> {
    self.voxels.insert(Self::key(position), voxel)
  }

  pub fn remove(&mut self, position: IVec3) -> Option<Voxel> {
    self.voxels.remove(&Self::key(position))
  }

  /// Fill the inclusive box `min..=max`.
  pub fn fill_box(&mut self, min: IVec3, max: IVec3, voxel: Voxel) {
    for z in min.z..=max.z {
      for y in min.y..=max.y {
        for x in min.x..=max.x {
          self.insert(IVec3::new(x, y, z), voxel);
        }
      }
    }
  }

  pub fn len(&self) -> usize {
    self.voxels.len()
  }

  pub fn is_empty(&self) -> bool {
    self.voxels.is_empty()
  }
}

impl VoxelSource for SparseVoxelGrid {
  #[inline]
  fn voxel(&self, position: IVec3) -> Option<Voxel> {
    self.voxels.get(&Self::key(position)).copied()
  }

  fn voxels(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_ {
    self
      .voxels
      .iter()
      .map(|(&(z, y, x), &voxel)| (IVec3::new(x, y, z), voxel))
  }
}

/// Model and per-material bounding boxes of a grid.
#[derive(Clone, Debug)]
pub struct GridBounds {
  pub model: VoxelBounds,
  /// Indexed by material; empty bounds for unused materials.
  pub materials: Vec<VoxelBounds>,
}

/// Compute voxel bounds for the model and each material.
///
/// Fails if a voxel references a material outside `materials`.
pub fn compute_bounds<G: VoxelSource>(grid: &G, materials: &MaterialList) -> Result<GridBounds> {
  let mut bounds = GridBounds {
    model: VoxelBounds::empty(),
    materials: vec![VoxelBounds::empty(); materials.len()],
  };

  for (position, voxel) in grid.voxels() {
    let material_bounds =
      bounds
        .materials
        .get_mut(voxel.material)
        .ok_or(MeshError::UnknownMaterial {
          index: voxel.material,
          position: position.to_array(),
        })?;
    material_bounds.encapsulate(position);
    bounds.model.encapsulate(position);
  }

  Ok(bounds)
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

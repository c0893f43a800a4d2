//! Resolve which planar region and bounds apply to a voxel.

use glam::{BVec3, IVec3, Vec3};

use crate::planar::Planar;
use crate::types::{Direction, VoxelBounds};

/// A planar region paired with the bounds it is measured against.
#[derive(Clone, Copy, Debug)]
pub struct PlanarRegion<'a> {
  pub planar: &'a Planar,
  pub bounds: &'a VoxelBounds,
}

impl<'a> PlanarRegion<'a> {
  /// A material's own region uses the material's bounding box; without one
  /// the model-wide region and model bounds apply.
  pub fn resolve(
    material: Option<&'a Planar>,
    material_bounds: &'a VoxelBounds,
    model: &'a Planar,
    model_bounds: &'a VoxelBounds,
  ) -> Self {
    match material {
      Some(planar) => Self {
        planar,
        bounds: material_bounds,
      },
      None => Self {
        planar: model,
        bounds: model_bounds,
      },
    }
  }

  #[inline]
  pub fn contains_face(&self, direction: Direction, voxel: IVec3) -> bool {
    self.planar.contains_face(direction, voxel, self.bounds)
  }

  #[inline]
  pub fn contains_vertex(&self, vertex: Vec3) -> BVec3 {
    self.planar.contains_vertex(vertex, self.bounds)
  }
}

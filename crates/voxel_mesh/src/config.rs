//! ModelConfig - model-wide planar regions, tiling, shape and arena limits.

use crate::constants::{MAX_FACES, MAX_VERTICES};
use crate::planar::Planar;
use crate::types::Shape;

/// Model-wide build settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
  /// Envelope applied before relaxation.
  pub shape: Shape,

  /// Fallback regions for materials without their own, tested against the
  /// model voxel bounds.
  pub flatten: Planar,
  pub clamp: Planar,
  pub skip: Planar,

  /// Tiled sides. A whole-axis flag tiles both edges of that axis.
  pub tile: Planar,

  /// Vertex arena capacity.
  pub max_vertices: usize,

  /// Face arena capacity.
  pub max_faces: usize,
}

impl Default for ModelConfig {
  fn default() -> Self {
    Self {
      shape: Shape::Box,
      flatten: Planar::NONE,
      clamp: Planar::NONE,
      skip: Planar::NONE,
      tile: Planar::NONE,
      max_vertices: MAX_VERTICES,
      max_faces: MAX_FACES,
    }
  }
}

impl ModelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_shape(mut self, shape: Shape) -> Self {
    self.shape = shape;
    self
  }

  pub fn with_flatten(mut self, flatten: Planar) -> Self {
    self.flatten = flatten;
    self
  }

  pub fn with_clamp(mut self, clamp: Planar) -> Self {
    self.clamp = clamp;
    self
  }

  pub fn with_skip(mut self, skip: Planar) -> Self {
    self.skip = skip;
    self
  }

  /// Set tiled edges. Whole-axis flags expand to both edges of that axis.
  pub fn with_tile(mut self, tile: Planar) -> Self {
    self.tile = tile.edges_only();
    self
  }

  pub fn with_capacity(mut self, max_vertices: usize, max_faces: usize) -> Self {
    self.max_vertices = max_vertices;
    self.max_faces = max_faces;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

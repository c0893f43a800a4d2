//! Materials: visibility, planar regions and deformation settings.

use crate::planar::Planar;
use crate::types::{Deform, Warp};

/// Per-material settings read by the emitter and deformer.
///
/// Every optional field means "this material opts out" when `None`. For
/// deform, warp and scatter that opt-out is sticky: a corner shared with an
/// opted-out material never moves for that reason.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
  /// 0 hides the material entirely.
  pub opacity: f32,
  pub transparent: bool,
  pub wireframe: bool,

  /// Material-specific planar regions, tested against the material's own
  /// bounding box. `None` falls back to the model-wide region.
  pub flatten: Option<Planar>,
  pub clamp: Option<Planar>,
  pub skip: Option<Planar>,

  pub deform: Option<Deform>,
  pub warp: Option<Warp>,
  pub scatter: Option<f32>,
}

impl Default for Material {
  fn default() -> Self {
    Self {
      opacity: 1.0,
      transparent: false,
      wireframe: false,
      flatten: None,
      clamp: None,
      skip: None,
      deform: None,
      warp: None,
      scatter: None,
    }
  }
}

impl Material {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set opacity; anything below 1 makes the material transparent.
  pub fn with_opacity(mut self, opacity: f32) -> Self {
    self.opacity = opacity;
    self.transparent = opacity < 1.0;
    self
  }

  pub fn with_transparent(mut self, transparent: bool) -> Self {
    self.transparent = transparent;
    self
  }

  pub fn with_wireframe(mut self, wireframe: bool) -> Self {
    self.wireframe = wireframe;
    self
  }

  pub fn with_flatten(mut self, flatten: Planar) -> Self {
    self.flatten = Some(flatten);
    self
  }

  pub fn with_clamp(mut self, clamp: Planar) -> Self {
    self.clamp = Some(clamp);
    self
  }

  pub fn with_skip(mut self, skip: Planar) -> Self {
    self.skip = Some(skip);
    self
  }

  pub fn with_deform(mut self, deform: Deform) -> Self {
    self.deform = Some(deform);
    self
  }

  pub fn with_warp(mut self, warp: Warp) -> Self {
    self.warp = Some(warp);
    self
  }

  pub fn with_scatter(mut self, scatter: f32) -> Self {
    self.scatter = Some(scatter);
    self
  }

  /// Light passes through this material into its neighbors.
  #[inline]
  pub fn is_see_through(&self) -> bool {
    self.transparent || self.wireframe
  }
}

/// Ordered material list; voxels refer to materials by index.
#[derive(Clone, Debug, Default)]
pub struct MaterialList {
  materials: Vec<Material>,
}

impl MaterialList {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a material and return its index.
  pub fn push(&mut self, material: Material) -> usize {
    self.materials.push(material);
    self.materials.len() - 1
  }

  #[inline]
  pub fn get(&self, index: usize) -> Option<&Material> {
    self.materials.get(index)
  }

  pub fn len(&self) -> usize {
    self.materials.len()
  }

  pub fn is_empty(&self) -> bool {
    self.materials.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Material> {
    self.materials.iter()
  }

  /// Number of relaxation steps the build needs: the largest deform count of
  /// any material.
  pub fn maximum_deform_count(&self) -> u32 {
    self
      .materials
      .iter()
      .filter_map(|material| material.deform)
      .map(|deform| deform.count)
      .max()
      .unwrap_or(0)
  }
}

impl FromIterator<Material> for MaterialList {
  fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
    Self {
      materials: iter.into_iter().collect(),
    }
  }
}

#[cfg(test)]
#[path = "material_test.rs"]
mod material_test;

//! Face emission and vertex deduplication.
//!
//! Walks every voxel of a [`VoxelSource`], emits the visible faces of each
//! and shares corner vertices between faces through an integer corner key.
//!
//! ```text
//! for voxel in grid (ordered)
//!   for direction in nx px ny py nz pz
//!     visible?  ── no ──► next
//!     skip?     ── yes ─► next (counted)
//!     4 corners ──► lookup[vertex_key(corner)]
//!                     miss: allocate, init deform/warp/scatter from material
//!                     hit:  merge deform/warp/scatter (see merge.rs)
//!                   raise planar flags, append voxel color
//!     add face + sort keys
//!     link corners (only when some material deforms)
//! ```
//!
//! Corner keys pack 21 bits per axis, so corners must lie within ±2^20 of the
//! origin.

mod merge;
mod planar;
mod visibility;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use glam::IVec3;

pub use merge::{merge_deform, merge_scatter, merge_warp};
pub use planar::PlanarRegion;
pub use visibility::is_face_visible;

use crate::config::ModelConfig;
use crate::constants::vertex_key;
use crate::error::{MeshError, Result};
use crate::grid::{GridBounds, Voxel, VoxelSource};
use crate::linker;
use crate::material::{Material, MaterialList};
use crate::mesh::{Mesh, NewFace, VertIndex};
use crate::types::{Color, Deform, Direction, VoxelBounds, Warp};

/// Counters from one emission pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitStats {
  pub voxels: usize,
  pub faces: usize,
  /// Visible faces dropped by a skip region.
  pub skipped: usize,
  /// Corner visits that hit an existing vertex.
  pub shared_corners: usize,
}

/// Emits faces of a voxel grid into a [`Mesh`].
pub struct FaceEmitter<'a, G: VoxelSource> {
  grid: &'a G,
  materials: &'a MaterialList,
  config: &'a ModelConfig,
  bounds: &'a GridBounds,
  link_vertices: bool,
  lookup: HashMap<u64, VertIndex>,
}

impl<'a, G: VoxelSource> FaceEmitter<'a, G> {
  pub fn new(
    grid: &'a G,
    materials: &'a MaterialList,
    config: &'a ModelConfig,
    bounds: &'a GridBounds,
  ) -> Self {
    Self {
      grid,
      materials,
      config,
      bounds,
      link_vertices: false,
      lookup: HashMap::new(),
    }
  }

  /// Build vertex links while emitting.
  pub fn with_linking(mut self, link_vertices: bool) -> Self {
    self.link_vertices = link_vertices;
    self
  }

  /// Emit all visible faces. The mesh should be freshly reset.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "faces::emit"))]
  pub fn emit(&mut self, mesh: &mut Mesh) -> Result<EmitStats> {
    let grid = self.grid;
    let config = self.config;
    let bounds = self.bounds;
    let mut stats = EmitStats::default();
    self.lookup.clear();

    for (position, voxel) in grid.voxels() {
      stats.voxels += 1;
      let material = self.material(voxel, position)?;
      let material_bounds = self.material_bounds(voxel, position)?;

      for direction in Direction::ALL {
        let neighbor_position = position + direction.neighbor_offset();
        let neighbor = match grid.voxel(neighbor_position) {
          Some(neighbor) => Some(self.material(neighbor, neighbor_position)?),
          None => None,
        };
        if !is_face_visible(Some(material), neighbor) {
          continue;
        }

        let skip = PlanarRegion::resolve(
          material.skip.as_ref(),
          material_bounds,
          &config.skip,
          &bounds.model,
        );
        if skip.contains_face(direction, position) {
          stats.skipped += 1;
          continue;
        }

        stats.shared_corners +=
          self.create_face(mesh, position, voxel, direction, material, material_bounds)?;
        stats.faces += 1;
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      faces = stats.faces,
      skipped = stats.skipped,
      vertices = mesh.vertex_count(),
      "faces emitted"
    );

    Ok(stats)
  }

  fn material(&self, voxel: Voxel, position: IVec3) -> Result<&'a Material> {
    let materials = self.materials;
    materials
      .get(voxel.material)
      .ok_or(MeshError::UnknownMaterial {
        index: voxel.material,
        position: position.to_array(),
      })
  }

  fn material_bounds(&self, voxel: Voxel, position: IVec3) -> Result<&'a VoxelBounds> {
    let bounds = self.bounds;
    bounds
      .materials
      .get(voxel.material)
      .ok_or(MeshError::UnknownMaterial {
        index: voxel.material,
        position: position.to_array(),
      })
  }

  /// Add one face with its four corners. Returns how many corners were
  /// shared with earlier faces.
  fn create_face(
    &mut self,
    mesh: &mut Mesh,
    position: IVec3,
    voxel: Voxel,
    direction: Direction,
    material: &'a Material,
    material_bounds: &'a VoxelBounds,
  ) -> Result<usize> {
    // Fail before allocating corners of a face that cannot be stored
    mesh.ensure_face_capacity()?;

    let config = self.config;
    let bounds = self.bounds;
    let model_bounds = &bounds.model;
    let flatten = PlanarRegion::resolve(
      material.flatten.as_ref(),
      material_bounds,
      &config.flatten,
      model_bounds,
    );
    let clamp = PlanarRegion::resolve(
      material.clamp.as_ref(),
      material_bounds,
      &config.clamp,
      model_bounds,
    );

    let mut vertices = [0; 4];
    let mut shared = 0;
    for (slot, offset) in vertices.iter_mut().zip(direction.corner_offsets()) {
      let (index, reused) =
        self.create_vertex(mesh, position + offset, voxel.color, material, &flatten, &clamp)?;
      *slot = index;
      shared += reused as usize;
    }

    let face = mesh.add_face(
      NewFace {
        vertices,
        direction,
        material: voxel.material,
        color: voxel.color,
        flattened: flatten.contains_face(direction, position),
        clamped: clamp.contains_face(direction, position),
      },
      position,
    )?;

    if self.link_vertices {
      linker::link_face(mesh, face);
    }

    Ok(shared)
  }

  /// Find or allocate the vertex at an integer corner and fold this
  /// material's settings into it.
  fn create_vertex(
    &mut self,
    mesh: &mut Mesh,
    corner: IVec3,
    color: Color,
    material: &Material,
    flatten: &PlanarRegion<'_>,
    clamp: &PlanarRegion<'_>,
  ) -> Result<(VertIndex, bool)> {
    let key = vertex_key(corner.x, corner.y, corner.z);
    let position = corner.as_vec3();

    let (index, reused) = match self.lookup.entry(key) {
      Entry::Occupied(entry) => {
        let index = *entry.get();
        let i = index as usize;
        let vertices = &mut mesh.vertices;
        vertices.deform[i] = merge_deform(vertices.deform[i], material.deform);
        vertices.warp[i] = merge_warp(vertices.warp[i], material.warp);
        vertices.scatter[i] = merge_scatter(vertices.scatter[i], material.scatter);
        (index, true)
      }
      Entry::Vacant(entry) => {
        let index = mesh.add_vertex(
          position,
          material.deform.unwrap_or(Deform::ZERO),
          material.warp.unwrap_or(Warp::ZERO),
          material.scatter.unwrap_or(0.0),
        )?;
        entry.insert(index);
        (index, false)
      }
    };

    let i = index as usize;
    mesh.vertices.flattened.raise(i, flatten.contains_vertex(position));
    mesh.vertices.clamped.raise(i, clamp.contains_vertex(position));
    mesh.vertices.add_color(index, color);

    Ok((index, reused))
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

//! Mesh arena: vertex and face tables for one build.
//!
//! ```text
//! ┌──────────────────────────── Mesh ────────────────────────────┐
//! │                                                              │
//! │  Vertices (structure of arrays, indexed by VertIndex)        │
//! │    position  flattened.xyz  clamped.xyz  fully_clamped       │
//! │    deform    warp           scatter      ring                │
//! │    links ≤ 6                clamped_links colors ≤ 5         │
//! │                                                              │
//! │  Faces (structure of arrays, indexed by face index)          │
//! │    vertices[4] ──────────────► VertIndex                     │
//! │    direction  material  color                                │
//! │    flattened  clamped  smooth  equidistant  culled           │
//! │                                                              │
//! │  SortedFaceKeys: xzy / xyz / yzx orderings of the faces      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tables only grow during a build and are reset wholesale before the next
//! one; nothing is patched in place across builds.

use glam::{BVec3, IVec3, Vec3};
use smallvec::SmallVec;

use crate::config::ModelConfig;
use crate::constants::{face_index_from_key, face_sort_keys, MAX_COLORS, MAX_LINKS};
use crate::error::{MeshError, Result};
use crate::flags::{AxisFlags, FlagSet};
use crate::types::{Color, Deform, Direction, VoxelBounds, Warp};

/// Index into the vertex table.
pub type VertIndex = u32;

/// Neighbor list of a vertex; a self-loop is stored as the vertex's own index.
pub type Links = SmallVec<[VertIndex; MAX_LINKS]>;

/// Colors of the faces sharing a vertex.
pub type VertexColors = SmallVec<[Color; MAX_COLORS]>;

// =============================================================================
// Vertices
// =============================================================================

/// Deduplicated corner points.
#[derive(Clone, Debug, Default)]
pub struct Vertices {
  pub position: Vec<Vec3>,
  pub flattened: AxisFlags,
  pub clamped: AxisFlags,
  pub fully_clamped: FlagSet,
  pub deform: Vec<Deform>,
  pub warp: Vec<Warp>,
  pub scatter: Vec<f32>,
  /// Chebyshev radius from the shape morph, 0 until a morph runs.
  pub ring: Vec<f32>,
  pub links: Vec<Links>,
  /// Number of self-loop links from clamped faces.
  pub clamped_links: Vec<u8>,
  pub colors: Vec<VertexColors>,
}

impl Vertices {
  #[inline]
  pub fn len(&self) -> usize {
    self.position.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.position.is_empty()
  }

  fn push(&mut self, position: Vec3, deform: Deform, warp: Warp, scatter: f32) -> VertIndex {
    let index = self.position.len() as VertIndex;
    self.position.push(position);
    self.flattened.push(BVec3::FALSE);
    self.clamped.push(BVec3::FALSE);
    self.fully_clamped.push(false);
    self.deform.push(deform);
    self.warp.push(warp);
    self.scatter.push(scatter);
    self.ring.push(0.0);
    self.links.push(Links::new());
    self.clamped_links.push(0);
    self.colors.push(VertexColors::new());
    index
  }

  fn reset(&mut self) {
    self.position.clear();
    self.flattened.reset();
    self.clamped.reset();
    self.fully_clamped.reset();
    self.deform.clear();
    self.warp.clear();
    self.scatter.clear();
    self.ring.clear();
    self.links.clear();
    self.clamped_links.clear();
    self.colors.clear();
  }

  /// Axes on which the vertex may move: neither clamped nor flattened.
  #[inline]
  pub fn free_axes(&self, index: usize) -> BVec3 {
    !(self.clamped.get(index) | self.flattened.get(index))
  }

  #[inline]
  pub fn has_link(&self, from: VertIndex, to: VertIndex) -> bool {
    self.links[from as usize].contains(&to)
  }

  /// Add a one-way link. Returns false if it already exists or the vertex
  /// already has [`MAX_LINKS`] links.
  pub fn add_link(&mut self, from: VertIndex, to: VertIndex) -> bool {
    if self.has_link(from, to) {
      return false;
    }
    let links = &mut self.links[from as usize];
    if links.len() >= MAX_LINKS {
      #[cfg(feature = "tracing")]
      tracing::warn!(from, to, "vertex link list full, dropping link");
      return false;
    }
    links.push(to);
    true
  }

  /// Append a face color. Returns false once [`MAX_COLORS`] are stored.
  pub fn add_color(&mut self, index: VertIndex, color: Color) -> bool {
    let colors = &mut self.colors[index as usize];
    if colors.len() >= MAX_COLORS {
      #[cfg(feature = "tracing")]
      tracing::warn!(index, "vertex color slots full, dropping color");
      return false;
    }
    colors.push(color);
    true
  }
}

// =============================================================================
// Faces
// =============================================================================

/// Attributes of a face about to be added.
#[derive(Clone, Copy, Debug)]
pub struct NewFace {
  pub vertices: [VertIndex; 4],
  pub direction: Direction,
  pub material: usize,
  pub color: Color,
  pub flattened: bool,
  pub clamped: bool,
}

/// Emitted quads.
#[derive(Clone, Debug, Default)]
pub struct Faces {
  pub vertices: Vec<[VertIndex; 4]>,
  pub direction: Vec<Direction>,
  pub material: Vec<usize>,
  pub color: Vec<Color>,
  pub flattened: FlagSet,
  pub clamped: FlagSet,
  /// Reserved for downstream normal smoothing.
  pub smooth: FlagSet,
  pub equidistant: FlagSet,
  /// Set by downstream simplification.
  pub culled: FlagSet,
}

impl Faces {
  #[inline]
  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  fn push(&mut self, face: NewFace) -> usize {
    self.vertices.push(face.vertices);
    self.direction.push(face.direction);
    self.material.push(face.material);
    self.color.push(face.color);
    self.flattened.push(face.flattened);
    self.clamped.push(face.clamped);
    self.smooth.push(false);
    self.equidistant.push(false);
    self.culled.push(false);
    self.vertices.len() - 1
  }

  fn reset(&mut self) {
    self.vertices.clear();
    self.direction.clear();
    self.material.clear();
    self.color.clear();
    self.flattened.reset();
    self.clamped.reset();
    self.smooth.reset();
    self.equidistant.reset();
    self.culled.reset();
  }
}

// =============================================================================
// SortedFaceKeys
// =============================================================================

/// Three total orderings of the faces by voxel position, used by downstream
/// stages to find neighboring faces without spatial queries.
///
/// Keys are appended unsorted during emission; [`SortedFaceKeys::sort`] runs
/// once all faces exist.
#[derive(Clone, Debug, Default)]
pub struct SortedFaceKeys {
  pub xzy: Vec<u64>,
  pub xyz: Vec<u64>,
  pub yzx: Vec<u64>,
}

impl SortedFaceKeys {
  fn push(&mut self, voxel: IVec3, face_index: usize) {
    let [xzy, xyz, yzx] = face_sort_keys(voxel.x, voxel.y, voxel.z, face_index as u32);
    self.xzy.push(xzy);
    self.xyz.push(xyz);
    self.yzx.push(yzx);
  }

  pub fn sort(&mut self) {
    self.xzy.sort_unstable();
    self.xyz.sort_unstable();
    self.yzx.sort_unstable();
  }

  fn reset(&mut self) {
    self.xzy.clear();
    self.xyz.clear();
    self.yzx.clear();
  }

  /// Face indices in the order of one key array.
  pub fn face_order(keys: &[u64]) -> impl Iterator<Item = usize> + '_ {
    keys.iter().map(|&key| face_index_from_key(key))
  }
}

// =============================================================================
// Mesh
// =============================================================================

/// Vertex and face tables of one build, with fixed capacity limits.
#[derive(Clone, Debug)]
pub struct Mesh {
  pub vertices: Vertices,
  pub faces: Faces,
  pub sorted: SortedFaceKeys,
  /// Voxel bounds of the model this mesh was built from.
  pub bounds: VoxelBounds,
  max_vertices: usize,
  max_faces: usize,
}

impl Mesh {
  pub fn new(max_vertices: usize, max_faces: usize) -> Self {
    Self {
      vertices: Vertices::default(),
      faces: Faces::default(),
      sorted: SortedFaceKeys::default(),
      bounds: VoxelBounds::empty(),
      max_vertices,
      max_faces,
    }
  }

  pub fn from_config(config: &ModelConfig) -> Self {
    Self::new(config.max_vertices, config.max_faces)
  }

  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  #[inline]
  pub fn face_count(&self) -> usize {
    self.faces.len()
  }

  pub fn max_vertices(&self) -> usize {
    self.max_vertices
  }

  pub fn max_faces(&self) -> usize {
    self.max_faces
  }

  /// Drop all vertices and faces and start a build over `bounds`.
  pub fn reset(&mut self, bounds: VoxelBounds) {
    self.vertices.reset();
    self.faces.reset();
    self.sorted.reset();
    self.bounds = bounds;
  }

  /// Fail if another face would not fit.
  pub fn ensure_face_capacity(&self) -> Result<()> {
    if self.faces.len() >= self.max_faces {
      return Err(MeshError::CapacityExceeded {
        what: "face",
        limit: self.max_faces,
      });
    }
    Ok(())
  }

  /// Allocate a vertex slot.
  pub fn add_vertex(
    &mut self,
    position: Vec3,
    deform: Deform,
    warp: Warp,
    scatter: f32,
  ) -> Result<VertIndex> {
    if self.vertices.len() >= self.max_vertices {
      return Err(MeshError::CapacityExceeded {
        what: "vertex",
        limit: self.max_vertices,
      });
    }
    Ok(self.vertices.push(position, deform, warp, scatter))
  }

  /// Allocate a face slot for a face of the voxel at `voxel`.
  pub fn add_face(&mut self, face: NewFace, voxel: IVec3) -> Result<usize> {
    self.ensure_face_capacity()?;
    debug_assert!(face.vertices.iter().all(|&v| (v as usize) < self.vertices.len()));
    let index = self.faces.push(face);
    self.sorted.push(voxel, index);
    Ok(index)
  }

  /// Current corner positions of a face.
  pub fn face_positions(&self, face: usize) -> [Vec3; 4] {
    self.faces.vertices[face].map(|v| self.vertices.position[v as usize])
  }

  /// Number of faces referencing a vertex.
  pub fn faces_using_vertex(&self, vertex: VertIndex) -> usize {
    self
      .faces
      .vertices
      .iter()
      .filter(|corners| corners.contains(&vertex))
      .count()
  }
}

impl Default for Mesh {
  fn default() -> Self {
    Self::from_config(&ModelConfig::default())
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

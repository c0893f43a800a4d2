//! Test utilities shared by the module tests.
//!
//! Grid and material fixtures plus deterministic noise and random sources.

use glam::{IVec3, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ModelConfig;
use crate::faces::FaceEmitter;
use crate::grid::{compute_bounds, SparseVoxelGrid, Voxel};
use crate::material::{Material, MaterialList};
use crate::mesh::Mesh;
use crate::types::{Color, Deform, Warp};

// =============================================================================
// Grids
// =============================================================================

/// One voxel of material 0 at the origin.
pub fn single_voxel_grid() -> SparseVoxelGrid {
  let mut grid = SparseVoxelGrid::new();
  grid.insert(IVec3::ZERO, Voxel::new(0, Color::WHITE));
  grid
}

/// Solid cube of `size`³ voxels of `material`, origin at zero.
pub fn cube_grid(size: i32, material: usize) -> SparseVoxelGrid {
  let mut grid = SparseVoxelGrid::new();
  grid.fill_box(
    IVec3::ZERO,
    IVec3::splat(size - 1),
    Voxel::new(material, Color::WHITE),
  );
  grid
}

/// Voxel ball of the given radius centered on the origin voxel.
pub fn ball_grid(radius: i32, material: usize) -> SparseVoxelGrid {
  let mut grid = SparseVoxelGrid::new();
  let r2 = radius * radius;
  for z in -radius..=radius {
    for y in -radius..=radius {
      for x in -radius..=radius {
        if x * x + y * y + z * z <= r2 {
          grid.insert(IVec3::new(x, y, z), Voxel::new(material, Color::WHITE));
        }
      }
    }
  }
  grid
}

// =============================================================================
// Materials
// =============================================================================

/// Single opaque material without deform, warp or scatter.
pub fn plain_materials() -> MaterialList {
  [Material::new()].into_iter().collect()
}

/// Single opaque material that relaxes `count` steps at full strength.
pub fn deforming_materials(count: u32) -> MaterialList {
  [Material::new().with_deform(Deform::new(count, 1.0, 1.0))]
    .into_iter()
    .collect()
}

/// Single opaque material with warp and scatter.
pub fn warping_materials(amplitude: f32, scatter: f32) -> MaterialList {
  [Material::new()
    .with_warp(Warp::new(amplitude, 1.0))
    .with_scatter(scatter)]
  .into_iter()
  .collect()
}

// =============================================================================
// Noise / RNG
// =============================================================================

pub fn zero_noise(_x: f32, _y: f32, _z: f32) -> f32 {
  0.0
}

pub fn constant_noise(_x: f32, _y: f32, _z: f32) -> f32 {
  0.5
}

pub fn seeded_rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

// =============================================================================
// Helpers
// =============================================================================

/// Bounds, reset and emission, linking when any material deforms.
pub fn emit_mesh(grid: &SparseVoxelGrid, materials: &MaterialList, config: &ModelConfig) -> Mesh {
  let bounds = compute_bounds(grid, materials).unwrap();
  let mut mesh = Mesh::from_config(config);
  mesh.reset(bounds.model);
  FaceEmitter::new(grid, materials, config, &bounds)
    .with_linking(materials.maximum_deform_count() > 0)
    .emit(&mut mesh)
    .unwrap();
  mesh
}

/// All orderings of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
  if items.len() <= 1 {
    return vec![items.to_vec()];
  }
  let mut out = Vec::new();
  for i in 0..items.len() {
    let mut rest = items.to_vec();
    let first = rest.remove(i);
    for mut perm in permutations(&rest) {
      perm.insert(0, first.clone());
      out.push(perm);
    }
  }
  out
}

/// Index of the vertex at an integer corner, if one exists.
pub fn vertex_at(mesh: &Mesh, corner: IVec3) -> Option<usize> {
  let target = corner.as_vec3();
  mesh
    .vertices
    .position
    .iter()
    .position(|&p| p == target)
}

pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
  (a - b).abs().max_element() < 1e-5
}

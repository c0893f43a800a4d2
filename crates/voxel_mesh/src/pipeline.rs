//! End-to-end build: voxel grid in, deformed quad mesh out.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ compute_bounds     model + per-material voxel bounds                 │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ mesh.reset         drop the previous build                           │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ FaceEmitter        faces, shared vertices, links (if any deform)     │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ sorted.sort        xzy / xyz / yzx face orderings                    │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ fix_clamped_links  real links for vertices inside clamped regions    │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ change_shape       sphere / cylinder morph, ring radii               │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ deform             relaxation, max deform count of all materials     │
//! │        │                                                             │
//! │        ▼                                                             │
//! │ warp_and_scatter   noise + jitter outside tile margins               │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once `build` returns, the mesh is stable and ready for downstream normal,
//! UV, color and simplification stages.

use rand::Rng;
use web_time::Instant;

use crate::config::ModelConfig;
use crate::deform::{self, NoiseSampler};
use crate::error::Result;
use crate::faces::FaceEmitter;
use crate::grid::{compute_bounds, VoxelSource};
use crate::linker;
use crate::material::MaterialList;
use crate::mesh::Mesh;
use crate::metrics::{elapsed_us, BuildStats};

/// Build a fresh mesh sized by `config`.
pub fn build<G, N, R>(
  grid: &G,
  materials: &MaterialList,
  config: &ModelConfig,
  noise: &N,
  rng: &mut R,
) -> Result<(Mesh, BuildStats)>
where
  G: VoxelSource,
  N: NoiseSampler + ?Sized,
  R: Rng,
{
  let mut mesh = Mesh::from_config(config);
  let stats = build_into(&mut mesh, grid, materials, config, noise, rng)?;
  Ok((mesh, stats))
}

/// Rebuild into an existing mesh, reusing its allocations.
///
/// On error the mesh holds a partial build and must be rebuilt before use.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::build"))]
pub fn build_into<G, N, R>(
  mesh: &mut Mesh,
  grid: &G,
  materials: &MaterialList,
  config: &ModelConfig,
  noise: &N,
  rng: &mut R,
) -> Result<BuildStats>
where
  G: VoxelSource,
  N: NoiseSampler + ?Sized,
  R: Rng,
{
  let total = Instant::now();
  let mut stats = BuildStats::default();

  let start = Instant::now();
  let bounds = compute_bounds(grid, materials)?;
  let max_deform = materials.maximum_deform_count();
  stats.bounds_us = elapsed_us(start);

  let start = Instant::now();
  mesh.reset(bounds.model);
  let emitted = FaceEmitter::new(grid, materials, config, &bounds)
    .with_linking(max_deform > 0)
    .emit(mesh)?;
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("sort_face_keys").entered();
    mesh.sorted.sort();
  }
  stats.emit_us = elapsed_us(start);

  let start = Instant::now();
  if max_deform > 0 {
    linker::fix_clamped_links(mesh);
  }
  stats.link_us = elapsed_us(start);

  let start = Instant::now();
  deform::change_shape(mesh, config.shape);
  stats.shape_us = elapsed_us(start);

  let start = Instant::now();
  stats.relax_moves = deform::deform(mesh, max_deform);
  stats.relax_us = elapsed_us(start);

  let start = Instant::now();
  stats.warped_vertices = deform::warp_and_scatter(mesh, &config.tile, noise, rng);
  stats.warp_us = elapsed_us(start);

  stats.voxel_count = emitted.voxels;
  stats.face_count = mesh.face_count();
  stats.vertex_count = mesh.vertex_count();
  stats.skipped_faces = emitted.skipped;
  stats.shared_corners = emitted.shared_corners;
  stats.link_count = linker::link_count(mesh);
  stats.fully_clamped_count = mesh.vertices.fully_clamped.count_set();
  stats.deform_steps = max_deform;
  stats.total_us = elapsed_us(total);

  #[cfg(feature = "tracing")]
  tracing::info!(
    faces = stats.face_count,
    vertices = stats.vertex_count,
    steps = stats.deform_steps,
    total_us = stats.total_us,
    "mesh built"
  );

  Ok(stats)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

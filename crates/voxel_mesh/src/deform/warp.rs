//! Noise warp and random scatter.
//!
//! Each output axis samples the noise with its own phase and a rotated input
//! order, so the three displacement components are decorrelated:
//!
//! ```text
//! dx = noise((x + 0.19) f, y f, z f) · a
//! dy = noise((y + 0.17) f, z f, x f) · a
//! dz = noise((z + 0.13) f, x f, y f) · a
//! ```
//!
//! Scatter adds uniform jitter in `[-scatter, scatter]` per axis. Vertices
//! within the seam margin of a tiled side are left alone so tiles keep
//! matching edges.

use glam::Vec3;
use rand::Rng;

use crate::constants::{TILE_MARGIN_NEGATIVE, TILE_MARGIN_POSITIVE, WARP_PHASE};
use crate::mesh::Mesh;
use crate::planar::Planar;

/// Deterministic 3D coherent noise, typically in `[-1, 1]`.
pub trait NoiseSampler {
  fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F> NoiseSampler for F
where
  F: Fn(f32, f32, f32) -> f32,
{
  #[inline]
  fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    self(x, y, z)
  }
}

/// Apply warp and scatter to every vertex outside the tile margins.
///
/// Whole-axis tile flags count as both edges of that axis. Returns the
/// number of vertices that were displaced.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "deform::warp_and_scatter"))]
pub fn warp_and_scatter<N, R>(mesh: &mut Mesh, tile: &Planar, noise: &N, rng: &mut R) -> usize
where
  N: NoiseSampler + ?Sized,
  R: Rng,
{
  let min = mesh.bounds.min.as_vec3() + Vec3::splat(TILE_MARGIN_NEGATIVE);
  let max = mesh.bounds.max.as_vec3() + Vec3::splat(TILE_MARGIN_POSITIVE);
  let tile = tile.edges_only();
  let vertices = &mut mesh.vertices;
  let mut displaced = 0;

  for i in 0..vertices.len() {
    let p = vertices.position[i];
    if in_tile_margin(p, &tile, min, max) {
      continue;
    }

    let warp = vertices.warp[i];
    let scatter = vertices.scatter[i];
    let mut offset = Vec3::ZERO;

    if warp.amplitude > 0.0 {
      let f = warp.frequency;
      let [px, py, pz] = WARP_PHASE;
      offset = Vec3::new(
        noise.sample((p.x + px) * f, p.y * f, p.z * f),
        noise.sample((p.y + py) * f, p.z * f, p.x * f),
        noise.sample((p.z + pz) * f, p.x * f, p.y * f),
      ) * warp.amplitude;
    }

    if scatter > 0.0 {
      // Draw order x, y, z
      let jx = rng.random::<f32>() * 2.0 - 1.0;
      let jy = rng.random::<f32>() * 2.0 - 1.0;
      let jz = rng.random::<f32>() * 2.0 - 1.0;
      offset += Vec3::new(jx, jy, jz) * scatter;
    }

    if offset == Vec3::ZERO {
      continue;
    }

    let free = vertices.free_axes(i);
    vertices.position[i] = Vec3::select(free, p + offset, p);
    displaced += free.any() as usize;
  }

  displaced
}

#[inline]
fn in_tile_margin(p: Vec3, tile: &Planar, min: Vec3, max: Vec3) -> bool {
  (tile.nx && p.x < min.x)
    || (tile.px && p.x > max.x)
    || (tile.ny && p.y < min.y)
    || (tile.py && p.y > max.y)
    || (tile.nz && p.z < min.z)
    || (tile.pz && p.z > max.z)
}

#[cfg(test)]
#[path = "warp_test.rs"]
mod warp_test;

//! Relaxation smoothing over the vertex link graph.
//!
//! Each pass moves every eligible vertex toward the mean of its linked
//! vertices:
//!
//! ```text
//! strength  = damping^step · deform.strength
//! candidate = p + (mean(links) - p) · strength      (free axes only)
//! ```
//!
//! Passes are Jacobi style: candidates are computed from pre-pass positions
//! into a scratch buffer and committed together once the pass is done, so the
//! visiting order never changes the result. A vertex takes part while
//! `step < deform.count` and it has at least one link; a self-loop averages in
//! its own position.

use glam::Vec3;

use crate::flags::FlagSet;
use crate::mesh::Mesh;

/// Scratch state reused across passes.
struct RelaxScratch {
  position: Vec<Vec3>,
  touched: FlagSet,
}

impl RelaxScratch {
  fn new(len: usize) -> Self {
    let mut touched = FlagSet::new();
    for _ in 0..len {
      touched.push(false);
    }
    Self {
      position: vec![Vec3::ZERO; len],
      touched,
    }
  }
}

/// Run `max_steps` relaxation passes. Returns the number of vertex moves
/// committed over all passes.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "deform::relax"))]
pub fn deform(mesh: &mut Mesh, max_steps: u32) -> usize {
  let len = mesh.vertex_count();
  let mut scratch = RelaxScratch::new(len);
  let mut moves = 0;

  for step in 0..max_steps {
    moves += relax_pass(mesh, step, 0..len, &mut scratch);
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(steps = max_steps, moves, "relaxation done");

  moves
}

/// One pass visiting vertices in `order`, then committing all candidates.
fn relax_pass(
  mesh: &mut Mesh,
  step: u32,
  order: impl IntoIterator<Item = usize>,
  scratch: &mut RelaxScratch,
) -> usize {
  let vertices = &mesh.vertices;

  for i in order {
    let deform = vertices.deform[i];
    let links = &vertices.links[i];
    if deform.count <= step || links.is_empty() {
      continue;
    }

    let free = vertices.free_axes(i);
    if !free.any() {
      continue;
    }

    let current = vertices.position[i];
    let mean = links
      .iter()
      .map(|&v| vertices.position[v as usize])
      .sum::<Vec3>()
      / links.len() as f32;
    let strength = deform.damping.powi(step as i32) * deform.strength;
    let candidate = current + (mean - current) * strength;

    scratch.position[i] = Vec3::select(free, candidate, current);
    scratch.touched.set(i, true);
  }

  let mut moves = 0;
  for i in 0..scratch.position.len() {
    if scratch.touched.get(i) {
      mesh.vertices.position[i] = scratch.position[i];
      moves += 1;
    }
  }
  scratch.touched.clear_all();

  moves
}

#[cfg(test)]
#[path = "relax_test.rs"]
mod relax_test;

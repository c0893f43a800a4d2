//! Shape morph: project vertices onto a sphere or cylinder envelope.
//!
//! Offsets are taken from the model center. Under a per-axis strength mask
//! `s` (1 on projected axes, 0 on a cylinder's own axis):
//!
//! ```text
//! sphere_size = max(|o.x s.x|, |o.y s.y|, |o.z s.z|)    Chebyshev radius
//! dist        = sqrt(o.x² s.x + o.y² s.y + o.z² s.z)
//! o'          = o ((1 - s) + s · sphere_size / dist)
//! ```
//!
//! Every projected vertex ends up at Euclidean distance `sphere_size` from the
//! center, so the nested cube shells of a voxel model become nested spheres.
//! Vertices on a shell's face centers already satisfy `sphere_size == dist`
//! and stay put.

use glam::Vec3;

use crate::mesh::Mesh;
use crate::types::Shape;

/// Morph the mesh toward `shape`. The box leaves the mesh untouched.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "deform::change_shape"))]
pub fn change_shape(mesh: &mut Mesh, shape: Shape) {
  let Some(strength) = shape.strength_mask() else {
    return;
  };
  circular_deform(mesh, strength);
  mark_equidistant_faces(mesh);
}

/// Project every vertex onto its shell and record the shell radius in `ring`.
///
/// The vertex at the exact center has no direction and is left alone. An
/// empty model has no center and is skipped.
pub fn circular_deform(mesh: &mut Mesh, strength: Vec3) {
  if !mesh.bounds.is_valid() {
    return;
  }
  let center = mesh.bounds.center();
  let vertices = &mut mesh.vertices;

  for (position, ring) in vertices.position.iter_mut().zip(vertices.ring.iter_mut()) {
    let offset = *position - center;
    let sphere_size = (offset * strength).abs().max_element();
    let dist = (offset * offset * strength).element_sum().sqrt();
    if dist == 0.0 {
      continue;
    }

    let factor = sphere_size / dist;
    *position = offset * ((Vec3::ONE - strength) + strength * factor) + center;
    *ring = sphere_size;
  }
}

/// Flag faces whose four corners share the exact same ring radius.
pub fn mark_equidistant_faces(mesh: &mut Mesh) {
  let rings = &mesh.vertices.ring;
  let faces = &mut mesh.faces;

  for face in 0..faces.len() {
    let [a, b, c, d] = faces.vertices[face].map(|v| rings[v as usize].to_bits());
    faces.equidistant.set(face, a == b && b == c && c == d);
  }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

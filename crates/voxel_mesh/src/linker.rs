//! Vertex link graph for relaxation.
//!
//! Each vertex keeps up to six neighbors. Relaxation pulls a vertex towards
//! the mean of its neighbors, so the link set decides what a vertex follows.
//!
//! ```text
//! regular face          clamped face
//!
//!  3 ◄──► 2              3 ↺      2 ↺
//!  ▲      ▲
//!  ▼      ▼
//!  0 ◄──► 1              0 ↺      1 ↺
//!
//! edges both ways        self-loops, counted in clamped_links
//! ```
//!
//! A vertex whose links are all self-loops touches only clamped faces. Left
//! alone it would average only itself and never move on its free axes, so
//! [`fix_clamped_links`] swaps its self-loops for the real edges of its
//! clamped faces.

use crate::mesh::{Mesh, VertIndex};

/// Link the corners of a freshly emitted face.
pub fn link_face(mesh: &mut Mesh, face: usize) {
  let corners = mesh.faces.vertices[face];
  let vertices = &mut mesh.vertices;

  if mesh.faces.clamped.get(face) {
    for v in corners {
      if vertices.add_link(v, v) {
        vertices.clamped_links[v as usize] += 1;
      }
    }
    return;
  }

  for (from, to) in cyclic_edges(corners) {
    vertices.add_link(from, to);
    vertices.add_link(to, from);
  }
}

/// Replace self-loops of vertices that only touch clamped faces with the
/// edges of those faces.
///
/// Returns false without touching the mesh when every face is clamped.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "linker::fix_clamped_links"))]
pub fn fix_clamped_links(mesh: &mut Mesh) -> bool {
  let faces = &mesh.faces;
  if faces.clamped.count_set() == faces.len() {
    #[cfg(feature = "tracing")]
    tracing::debug!(faces = faces.len(), "all faces clamped, links left as is");
    return false;
  }

  let vertices = &mut mesh.vertices;
  let clamped_faces = || (0..faces.len()).filter(|&f| faces.clamped.get(f));

  for face in clamped_faces() {
    for v in faces.vertices[face] {
      let i = v as usize;
      let only_self = vertices.clamped_links[i] as usize == vertices.links[i].len();
      vertices.fully_clamped.raise(i, only_self);
      if vertices.fully_clamped.get(i) {
        vertices.links[i].clear();
      }
    }
  }

  for face in clamped_faces() {
    for (from, to) in cyclic_edges(faces.vertices[face]) {
      if vertices.fully_clamped.get(from as usize) {
        vertices.add_link(from, to);
      }
      if vertices.fully_clamped.get(to as usize) {
        vertices.add_link(to, from);
      }
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(
    fully_clamped = vertices.fully_clamped.count_set(),
    "clamped links fixed"
  );

  true
}

/// Total number of one-way links, self-loops included.
pub fn link_count(mesh: &Mesh) -> usize {
  mesh.vertices.links.iter().map(|links| links.len()).sum()
}

#[inline]
fn cyclic_edges(corners: [VertIndex; 4]) -> impl Iterator<Item = (VertIndex, VertIndex)> {
  (0..4).map(move |i| (corners[i], corners[(i + 1) % 4]))
}

#[cfg(test)]
#[path = "linker_test.rs"]
mod linker_test;

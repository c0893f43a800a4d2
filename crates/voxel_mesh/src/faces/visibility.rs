//! Face visibility between a voxel and its neighbor.

use crate::material::Material;

/// Decide whether the face between a voxel and its neighbor is emitted.
///
/// First matching row wins:
///
/// ```text
/// voxel                         neighbor                       emit
/// ────────────────────────────  ─────────────────────────────  ────
/// absent or opacity 0           -                              no
/// present                       absent                         yes
/// present                       opaque, not wireframe          no
/// opaque, not wireframe         transparent or wireframe       yes
/// transparent, not wireframe    wireframe                      yes
/// anything else                                                no
/// ```
pub fn is_face_visible(voxel: Option<&Material>, neighbor: Option<&Material>) -> bool {
  let Some(voxel) = voxel else {
    return false;
  };
  if voxel.opacity == 0.0 {
    return false;
  }
  let Some(neighbor) = neighbor else {
    return true;
  };
  if !neighbor.is_see_through() {
    return false;
  }
  if !voxel.is_see_through() {
    return true;
  }
  voxel.transparent && !voxel.wireframe && neighbor.wireframe
}

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

//! Planar regions: per-axis whole-span or single-bound flags.
//!
//! A region names the planes of a bounding box that flatten, clamp, skip or
//! tile applies to. `x` covers the whole x span, `nx`/`px` only the negative
//! or positive bound.
//!
//! ```text
//!          ny bound            py bound
//!             │                   │
//!   nx ───────┼───────────────────┼──────── px
//!             │    x = whole span │
//! ```

use std::fmt;
use std::str::FromStr;

use glam::{BVec3, IVec3, Vec3};

use crate::constants::PLANAR_TOLERANCE;
use crate::error::MeshError;
use crate::types::{Direction, VoxelBounds};

/// Set of planar flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Planar {
  pub x: bool,
  pub y: bool,
  pub z: bool,
  pub nx: bool,
  pub px: bool,
  pub ny: bool,
  pub py: bool,
  pub nz: bool,
  pub pz: bool,
}

impl Planar {
  pub const NONE: Planar = Planar {
    x: false,
    y: false,
    z: false,
    nx: false,
    px: false,
    ny: false,
    py: false,
    nz: false,
    pz: false,
  };

  pub const ALLOWED: &'static str = "x, y, z, nx, px, ny, py, nz and pz";

  pub fn is_empty(&self) -> bool {
    *self == Self::NONE
  }

  /// Rewrite whole-axis flags as their two edges, so only edges are named.
  ///
  /// Used for tiling, where `x` means "seamless on both x sides".
  pub fn edges_only(self) -> Planar {
    Planar {
      x: false,
      y: false,
      z: false,
      nx: self.nx || self.x,
      px: self.px || self.x,
      ny: self.ny || self.y,
      py: self.py || self.y,
      nz: self.nz || self.z,
      pz: self.pz || self.z,
    }
  }

  /// Does a face of `voxel` in `direction` lie on one of this region's
  /// planes?
  pub fn contains_face(&self, direction: Direction, voxel: IVec3, bounds: &VoxelBounds) -> bool {
    let axis = direction.axis();
    let (whole, negative, positive) = self.axis_flags(axis);
    if whole {
      return true;
    }
    if direction.is_positive() {
      positive && voxel[axis] == bounds.max[axis]
    } else {
      negative && voxel[axis] == bounds.min[axis]
    }
  }

  /// `(whole, negative, positive)` flags of one axis (0 = x, 1 = y, 2 = z).
  #[inline]
  fn axis_flags(&self, axis: usize) -> (bool, bool, bool) {
    match axis {
      0 => (self.x, self.nx, self.px),
      1 => (self.y, self.ny, self.py),
      _ => (self.z, self.nz, self.pz),
    }
  }

  /// Per-axis planar membership of a vertex.
  ///
  /// Bounds are voxel origins while vertices run from `min` to `max + 1`, so
  /// a vertex counts as on the negative bound below `min + 0.5` and on the
  /// positive bound above `max + 0.5`.
  pub fn contains_vertex(&self, vertex: Vec3, bounds: &VoxelBounds) -> BVec3 {
    let min = bounds.min.as_vec3() + Vec3::splat(PLANAR_TOLERANCE);
    let max = bounds.max.as_vec3() + Vec3::splat(PLANAR_TOLERANCE);
    BVec3::new(
      self.x || (self.nx && vertex.x < min.x) || (self.px && vertex.x > max.x),
      self.y || (self.ny && vertex.y < min.y) || (self.py && vertex.y > max.y),
      self.z || (self.nz && vertex.z < min.z) || (self.pz && vertex.z > max.z),
    )
  }

  fn flags(&self) -> [(&'static str, bool); 9] {
    [
      ("x", self.x),
      ("y", self.y),
      ("z", self.z),
      ("nx", self.nx),
      ("px", self.px),
      ("ny", self.ny),
      ("py", self.py),
      ("nz", self.nz),
      ("pz", self.pz),
    ]
  }
}

impl FromStr for Planar {
  type Err = MeshError;

  /// Parse a whitespace or comma separated list such as `"x nz pz"`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut planar = Planar::NONE;
    for token in s.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
      let flag = match token.to_ascii_lowercase().as_str() {
        "x" => &mut planar.x,
        "y" => &mut planar.y,
        "z" => &mut planar.z,
        "nx" => &mut planar.nx,
        "px" => &mut planar.px,
        "ny" => &mut planar.ny,
        "py" => &mut planar.py,
        "nz" => &mut planar.nz,
        "pz" => &mut planar.pz,
        _ => {
          return Err(MeshError::Syntax {
            kind: "planar",
            value: token.to_string(),
            allowed: Self::ALLOWED,
          })
        }
      };
      *flag = true;
    }
    Ok(planar)
  }
}

impl fmt::Display for Planar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (name, set) in self.flags() {
      if set {
        if !first {
          f.write_str(" ")?;
        }
        f.write_str(name)?;
        first = false;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "planar_test.rs"]
mod planar_test;

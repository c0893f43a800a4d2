//! Core data types shared by face emission, linking and deformation.

use std::fmt;
use std::str::FromStr;

use glam::{IVec3, Vec3};

use crate::constants::{FACE_CORNERS, NEIGHBOR_OFFSETS};
use crate::error::MeshError;

// =============================================================================
// Direction
// =============================================================================

/// One of the six axis-aligned cube face directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
  Nx = 0,
  Px = 1,
  Ny = 2,
  Py = 3,
  Nz = 4,
  Pz = 5,
}

impl Direction {
  /// All directions in emission order.
  pub const ALL: [Direction; 6] = [
    Direction::Nx,
    Direction::Px,
    Direction::Ny,
    Direction::Py,
    Direction::Nz,
    Direction::Pz,
  ];

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// Axis this direction is perpendicular to (0 = x, 1 = y, 2 = z).
  #[inline]
  pub fn axis(self) -> usize {
    self.index() / 2
  }

  /// True for `px`, `py` and `pz`.
  #[inline]
  pub fn is_positive(self) -> bool {
    self.index() % 2 == 1
  }

  pub fn name(self) -> &'static str {
    match self {
      Direction::Nx => "nx",
      Direction::Px => "px",
      Direction::Ny => "ny",
      Direction::Py => "py",
      Direction::Nz => "nz",
      Direction::Pz => "pz",
    }
  }

  /// Offset to the voxel across this face.
  #[inline]
  pub fn neighbor_offset(self) -> IVec3 {
    IVec3::from_array(NEIGHBOR_OFFSETS[self.index()])
  }

  /// Unit cube corner offsets of this face, in winding order.
  #[inline]
  pub fn corner_offsets(self) -> [IVec3; 4] {
    FACE_CORNERS[self.index()].map(IVec3::from_array)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// =============================================================================
// Color
// =============================================================================

/// Linear RGB voxel color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
}

impl Color {
  pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
  pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

  pub const fn new(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b }
  }
}

// =============================================================================
// VoxelBounds
// =============================================================================

/// Inclusive integer bounding box over voxel origins.
///
/// A voxel at `max` still extends to `max + 1`; stages that need the geometric
/// extent add that themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelBounds {
  pub min: IVec3,
  pub max: IVec3,
}

impl VoxelBounds {
  /// Create bounds with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: IVec3::MAX,
      max: IVec3::MIN,
    }
  }

  pub fn new(min: IVec3, max: IVec3) -> Self {
    Self { min, max }
  }

  /// Expand bounds to include a voxel.
  #[inline]
  pub fn encapsulate(&mut self, voxel: IVec3) {
    self.min = self.min.min(voxel);
    self.max = self.max.max(voxel);
  }

  /// Check if bounds are valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  /// Geometric center of the voxels, accounting for the unit cube extent.
  pub fn center(&self) -> Vec3 {
    (self.min.as_vec3() + self.max.as_vec3()) / 2.0 + Vec3::splat(0.5)
  }
}

impl Default for VoxelBounds {
  fn default() -> Self {
    Self::empty()
  }
}

// =============================================================================
// Deform / Warp
// =============================================================================

/// Relaxation parameters: `count` smoothing steps, each `damping` times
/// weaker than the one before, starting at `strength`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Deform {
  pub count: u32,
  /// Per-step decay in (0, 1].
  pub damping: f32,
  pub strength: f32,
}

impl Deform {
  /// The "never deform" value.
  pub const ZERO: Deform = Deform {
    count: 0,
    damping: 0.0,
    strength: 0.0,
  };

  pub const fn new(count: u32, damping: f32, strength: f32) -> Self {
    Self {
      count,
      damping,
      strength,
    }
  }

  /// Total displacement this configuration applies over all its steps.
  ///
  /// ```text
  /// damping == 1:  strength * (count + 1)
  /// otherwise:     strength * (1 - damping^(count + 1)) / (1 - damping)
  /// ```
  pub fn integral(&self) -> f32 {
    if self.damping == 1.0 {
      self.strength * (self.count as f32 + 1.0)
    } else {
      self.strength * (1.0 - self.damping.powi(self.count as i32 + 1)) / (1.0 - self.damping)
    }
  }
}

/// Noise warp parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Warp {
  pub amplitude: f32,
  pub frequency: f32,
}

impl Warp {
  pub const ZERO: Warp = Warp {
    amplitude: 0.0,
    frequency: 0.0,
  };

  pub const fn new(amplitude: f32, frequency: f32) -> Self {
    Self {
      amplitude,
      frequency,
    }
  }
}

// =============================================================================
// Shape
// =============================================================================

/// Envelope the mesh is morphed toward before relaxation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
  #[default]
  Box,
  Sphere,
  CylinderX,
  CylinderY,
  CylinderZ,
}

impl Shape {
  pub const ALLOWED: &'static str = "box, sphere, cylinder-x, cylinder-y and cylinder-z";

  pub fn name(self) -> &'static str {
    match self {
      Shape::Box => "box",
      Shape::Sphere => "sphere",
      Shape::CylinderX => "cylinder-x",
      Shape::CylinderY => "cylinder-y",
      Shape::CylinderZ => "cylinder-z",
    }
  }

  /// Per-axis circular deform strength, `None` for the box.
  ///
  /// A cylinder keeps its own axis untouched.
  pub fn strength_mask(self) -> Option<Vec3> {
    match self {
      Shape::Box => None,
      Shape::Sphere => Some(Vec3::new(1.0, 1.0, 1.0)),
      Shape::CylinderX => Some(Vec3::new(0.0, 1.0, 1.0)),
      Shape::CylinderY => Some(Vec3::new(1.0, 0.0, 1.0)),
      Shape::CylinderZ => Some(Vec3::new(1.0, 1.0, 0.0)),
    }
  }
}

impl FromStr for Shape {
  type Err = MeshError;

  /// Parse a shape name. Surrounding whitespace is ignored and an empty value
  /// means `box`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "" | "box" => Ok(Shape::Box),
      "sphere" => Ok(Shape::Sphere),
      "cylinder-x" => Ok(Shape::CylinderX),
      "cylinder-y" => Ok(Shape::CylinderY),
      "cylinder-z" => Ok(Shape::CylinderZ),
      other => Err(MeshError::Syntax {
        kind: "shape",
        value: other.to_string(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

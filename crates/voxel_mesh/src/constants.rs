//! Cube topology tables and key packing for voxel face meshes.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//! ```
//!
//! A voxel at integer position `(x, y, z)` occupies the unit cube
//! `[x, x+1] × [y, y+1] × [z, z+1]`. Its corners therefore also land on
//! integer coordinates, which is what makes corner deduplication exact.
//!
//! # Face Directions
//!
//! ```text
//! Index  Name  Neighbor    Corners (counter-clockwise seen from outside)
//! ─────  ────  ──────────  ─────────────────────────────────────────────
//!   0     nx   (-1, 0, 0)  (0,0,0) (0,0,1) (0,1,1) (0,1,0)
//!   1     px   (+1, 0, 0)  (1,0,1) (1,0,0) (1,1,0) (1,1,1)
//!   2     ny   (0, -1, 0)  (0,0,0) (1,0,0) (1,0,1) (0,0,1)
//!   3     py   (0, +1, 0)  (1,1,0) (0,1,0) (0,1,1) (1,1,1)
//!   4     nz   (0, 0, -1)  (1,0,0) (0,0,0) (0,1,0) (1,1,0)
//!   5     pz   (0, 0, +1)  (0,0,1) (1,0,1) (1,1,1) (0,1,1)
//! ```
//!
//! # Vertex Key
//!
//! ```text
//! bit:  63  62 ─────── 42  41 ─────── 21  20 ──────── 0
//!       0   x + 2^20       y + 2^20       z + 2^20
//! ```
//!
//! Each axis gets 21 bits after biasing by 2^20, so every corner coordinate in
//! `[-2^20, 2^20)` maps to a unique key.

/// Faces per voxel.
pub const FACES_PER_VOXEL: usize = 6;

/// Corners per quad face.
pub const CORNERS_PER_FACE: usize = 4;

/// Maximum links per vertex. A corner of the cube lattice has at most six
/// axis-aligned neighbors.
pub const MAX_LINKS: usize = 6;

/// Maximum colors per vertex. A corner belongs to at most five visible faces
/// (a corner on a flat part).
pub const MAX_COLORS: usize = 5;

/// Default vertex arena capacity.
pub const MAX_VERTICES: usize = 1024 * 1024;

/// Default face arena capacity.
pub const MAX_FACES: usize = MAX_VERTICES / 4;

/// Half-voxel tolerance for vertex planar tests.
pub const PLANAR_TOLERANCE: f32 = 0.5;

/// Inward margin at the negative side of a tiled axis.
pub const TILE_MARGIN_NEGATIVE: f32 = 0.1;

/// Inward margin at the positive side of a tiled axis (measured from the
/// maximum voxel origin, whose far face sits at +1).
pub const TILE_MARGIN_POSITIVE: f32 = 0.9;

/// Per-axis phase offsets decorrelating the three warp noise samples.
pub const WARP_PHASE: [f32; 3] = [0.19, 0.17, 0.13];

/// Bits per axis in a vertex key.
pub const VERTEX_KEY_BITS: u32 = 21;

/// Bias added to each axis so negative coordinates pack without sign bits.
pub const VERTEX_KEY_BIAS: i64 = 1 << (VERTEX_KEY_BITS - 1);

const VERTEX_KEY_MASK: u64 = (1 << VERTEX_KEY_BITS) - 1;

/// Mask selecting the face index from a sort key.
pub const SORT_KEY_FACE_MASK: u64 = 0xFFFF_FFFF;

/// Neighbor offsets per face direction, in direction index order.
pub const NEIGHBOR_OFFSETS: [[i32; 3]; FACES_PER_VOXEL] = [
  [-1, 0, 0], // nx
  [1, 0, 0],  // px
  [0, -1, 0], // ny
  [0, 1, 0],  // py
  [0, 0, -1], // nz
  [0, 0, 1],  // pz
];

/// Unit cube corner offsets per face direction, in cyclic winding order.
pub const FACE_CORNERS: [[[i32; 3]; CORNERS_PER_FACE]; FACES_PER_VOXEL] = [
  [[0, 0, 0], [0, 0, 1], [0, 1, 1], [0, 1, 0]], // nx
  [[1, 0, 1], [1, 0, 0], [1, 1, 0], [1, 1, 1]], // px
  [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]], // ny
  [[1, 1, 0], [0, 1, 0], [0, 1, 1], [1, 1, 1]], // py
  [[1, 0, 0], [0, 0, 0], [0, 1, 0], [1, 1, 0]], // nz
  [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]], // pz
];

/// Pack integer corner coordinates into a collision-free dedup key.
#[inline(always)]
pub const fn vertex_key(x: i32, y: i32, z: i32) -> u64 {
  let x = ((x as i64 + VERTEX_KEY_BIAS) as u64) & VERTEX_KEY_MASK;
  let y = ((y as i64 + VERTEX_KEY_BIAS) as u64) & VERTEX_KEY_MASK;
  let z = ((z as i64 + VERTEX_KEY_BIAS) as u64) & VERTEX_KEY_MASK;
  (x << (2 * VERTEX_KEY_BITS)) | (y << VERTEX_KEY_BITS) | z
}

/// Build the three face sort keys `[xzy, xyz, yzx]` for a face.
///
/// The leading axis takes bits 48-63, the other two take 8 bits each at 40
/// and 32, and the face index fills the low 32 bits. Sorting each key array
/// yields three total face orderings grouped by voxel rows along different
/// axes.
#[inline]
pub const fn face_sort_keys(x: i32, y: i32, z: i32, face_index: u32) -> [u64; 3] {
  let face = face_index as u64;
  let (x, y, z) = (x as u64, y as u64, z as u64);
  [
    ((x & 0xFFFF) << 48) | ((z & 0xFF) << 40) | ((y & 0xFF) << 32) | face,
    ((x & 0xFFFF) << 48) | ((y & 0xFF) << 40) | ((z & 0xFF) << 32) | face,
    ((y & 0xFFFF) << 48) | ((z & 0xFF) << 40) | ((x & 0xFF) << 32) | face,
  ]
}

/// Recover the face index from any of the three sort keys.
#[inline(always)]
pub const fn face_index_from_key(key: u64) -> usize {
  (key & SORT_KEY_FACE_MASK) as usize
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;

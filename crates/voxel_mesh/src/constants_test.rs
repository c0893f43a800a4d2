use std::collections::HashSet;

use super::*;

#[test]
fn test_vertex_key_unique_in_neighborhood() {
  let mut keys = HashSet::new();
  for x in -4..4 {
    for y in -4..4 {
      for z in -4..4 {
        assert!(
          keys.insert(vertex_key(x, y, z)),
          "Duplicate key for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_vertex_key_extremes_do_not_collide() {
  let lo = -(VERTEX_KEY_BIAS as i32);
  let hi = VERTEX_KEY_BIAS as i32 - 1;
  assert_ne!(vertex_key(lo, 0, 0), vertex_key(hi, 0, 0));
  assert_ne!(vertex_key(0, lo, 0), vertex_key(0, 0, lo));
  assert_ne!(vertex_key(hi, hi, hi), vertex_key(lo, lo, lo));
}

#[test]
fn test_face_corners_are_on_their_side() {
  for (dir, corners) in FACE_CORNERS.iter().enumerate() {
    let axis = dir / 2;
    let side = (dir % 2) as i32;
    for corner in corners {
      assert_eq!(corner[axis], side, "Face {} corner {:?} off its plane", dir, corner);
    }
  }
}

#[test]
fn test_face_corners_wind_outward() {
  for (dir, corners) in FACE_CORNERS.iter().enumerate() {
    let c = corners.map(glam::IVec3::from_array);
    let normal = (c[1] - c[0]).cross(c[2] - c[1]);
    assert_eq!(normal, glam::IVec3::from_array(NEIGHBOR_OFFSETS[dir]), "Face {}", dir);
  }
}

#[test]
fn test_sort_keys_keep_face_index() {
  let keys = face_sort_keys(3, 7, 11, 42);
  for key in keys {
    assert_eq!(face_index_from_key(key), 42);
  }
}

#[test]
fn test_sort_keys_order_by_leading_axis() {
  let [xzy_a, xyz_a, yzx_a] = face_sort_keys(1, 5, 5, 0);
  let [xzy_b, xyz_b, yzx_b] = face_sort_keys(2, 0, 0, 0);
  assert!(xzy_a < xzy_b);
  assert!(xyz_a < xyz_b);
  // YZX leads with y, so the first voxel sorts last
  assert!(yzx_a > yzx_b);
}

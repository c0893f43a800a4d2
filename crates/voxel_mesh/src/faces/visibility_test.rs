use super::*;

fn opaque() -> Material {
  Material::new()
}

fn glass() -> Material {
  Material::new().with_opacity(0.5)
}

fn wire() -> Material {
  Material::new().with_wireframe(true)
}

#[test]
fn test_absent_or_invisible_voxel_emits_nothing() {
  assert!(!is_face_visible(None, None));
  assert!(!is_face_visible(None, Some(&opaque())));
  assert!(!is_face_visible(Some(&Material::new().with_opacity(0.0)), None));
}

#[test]
fn test_empty_neighbor_emits() {
  assert!(is_face_visible(Some(&opaque()), None));
  assert!(is_face_visible(Some(&glass()), None));
  assert!(is_face_visible(Some(&wire()), None));
}

#[test]
fn test_opaque_neighbor_hides() {
  assert!(!is_face_visible(Some(&opaque()), Some(&opaque())));
  assert!(!is_face_visible(Some(&glass()), Some(&opaque())));
  assert!(!is_face_visible(Some(&wire()), Some(&opaque())));
}

#[test]
fn test_opaque_next_to_see_through_emits() {
  assert!(is_face_visible(Some(&opaque()), Some(&glass())));
  assert!(is_face_visible(Some(&opaque()), Some(&wire())));
}

#[test]
fn test_transparent_next_to_wireframe_emits() {
  assert!(is_face_visible(Some(&glass()), Some(&wire())));
}

#[test]
fn test_remaining_combinations_hidden() {
  assert!(!is_face_visible(Some(&glass()), Some(&glass())));
  assert!(!is_face_visible(Some(&wire()), Some(&glass())));
  assert!(!is_face_visible(Some(&wire()), Some(&wire())));
}

use super::*;
use crate::grid::{compute_bounds, SparseVoxelGrid};
use crate::planar::Planar;
use crate::test_utils::{plain_materials, single_voxel_grid, vertex_at};

fn emit_with(
  grid: &SparseVoxelGrid,
  materials: &MaterialList,
  config: &ModelConfig,
) -> Result<(Mesh, EmitStats)> {
  let bounds = compute_bounds(grid, materials)?;
  let mut mesh = Mesh::from_config(config);
  mesh.reset(bounds.model);
  let stats = FaceEmitter::new(grid, materials, config, &bounds).emit(&mut mesh)?;
  Ok((mesh, stats))
}

fn row_grid(materials: [usize; 2]) -> SparseVoxelGrid {
  let mut grid = SparseVoxelGrid::new();
  grid.insert(IVec3::ZERO, Voxel::new(materials[0], Color::WHITE));
  grid.insert(IVec3::X, Voxel::new(materials[1], Color::BLACK));
  grid
}

// =============================================================================
// Emission and deduplication
// =============================================================================

#[test]
fn test_single_voxel_box() {
  let (mesh, stats) =
    emit_with(&single_voxel_grid(), &plain_materials(), &ModelConfig::default()).unwrap();

  assert_eq!(mesh.face_count(), 6);
  assert_eq!(mesh.vertex_count(), 8);
  assert_eq!(stats.faces, 6);
  assert_eq!(stats.shared_corners, 24 - 8);
  for v in 0..mesh.vertex_count() {
    assert_eq!(mesh.faces_using_vertex(v as VertIndex), 3, "Vertex {}", v);
    assert_eq!(mesh.vertices.colors[v].len(), 3);
  }
}

#[test]
fn test_single_voxel_corners_are_unit_cube() {
  let (mesh, _) =
    emit_with(&single_voxel_grid(), &plain_materials(), &ModelConfig::default()).unwrap();
  for x in 0..=1 {
    for y in 0..=1 {
      for z in 0..=1 {
        assert!(vertex_at(&mesh, IVec3::new(x, y, z)).is_some());
      }
    }
  }
}

#[test]
fn test_adjacent_voxels_share_corners() {
  let (mesh, _) = emit_with(&row_grid([0, 0]), &plain_materials(), &ModelConfig::default()).unwrap();

  // Shared face between the two voxels is hidden on both sides
  assert_eq!(mesh.face_count(), 10);
  assert_eq!(mesh.vertex_count(), 12);

  let shared = vertex_at(&mesh, IVec3::new(1, 0, 0)).unwrap();
  let count = mesh
    .vertices
    .position
    .iter()
    .filter(|&&p| p == mesh.vertices.position[shared])
    .count();
  assert_eq!(count, 1);
}

#[test]
fn test_faces_record_direction_material_and_color() {
  let materials: MaterialList = [Material::new(), Material::new()].into_iter().collect();
  let (mesh, _) = emit_with(&row_grid([0, 1]), &materials, &ModelConfig::default()).unwrap();

  for face in 0..mesh.face_count() {
    let expected_color = if mesh.faces.material[face] == 0 {
      Color::WHITE
    } else {
      Color::BLACK
    };
    assert_eq!(mesh.faces.color[face], expected_color);
  }
  assert!(!mesh.faces.direction[..5].contains(&Direction::Px));
}

// =============================================================================
// Visibility and skip
// =============================================================================

#[test]
fn test_opaque_face_shows_through_glass_neighbor() {
  let materials: MaterialList = [Material::new(), Material::new().with_opacity(0.5)]
    .into_iter()
    .collect();
  let (mesh, _) = emit_with(&row_grid([0, 1]), &materials, &ModelConfig::default()).unwrap();

  // Opaque voxel keeps all 6 faces, glass voxel hides its face against it
  assert_eq!(mesh.face_count(), 11);
  let glass_faces: Vec<_> = (0..mesh.face_count())
    .filter(|&f| mesh.faces.material[f] == 1)
    .map(|f| mesh.faces.direction[f])
    .collect();
  assert_eq!(glass_faces.len(), 5);
  assert!(!glass_faces.contains(&Direction::Nx));
}

#[test]
fn test_invisible_material_emits_nothing() {
  let materials: MaterialList = [Material::new().with_opacity(0.0)].into_iter().collect();
  let (mesh, _) =
    emit_with(&single_voxel_grid(), &materials, &ModelConfig::default()).unwrap();
  assert_eq!(mesh.face_count(), 0);
  assert_eq!(mesh.vertex_count(), 0);
}

#[test]
fn test_model_skip_region_drops_faces() {
  let config = ModelConfig::new().with_skip("ny".parse().unwrap());
  let (mesh, stats) = emit_with(&row_grid([0, 0]), &plain_materials(), &config).unwrap();

  assert_eq!(stats.skipped, 2);
  assert_eq!(mesh.face_count(), 8);
  assert!(!mesh.faces.direction.contains(&Direction::Ny));
}

#[test]
fn test_material_skip_uses_material_bounds() {
  // Material 1 spans x = 1 only, so its nx bound is x = 1
  let materials: MaterialList = [
    Material::new().with_opacity(0.5),
    Material::new().with_skip("nx".parse().unwrap()),
  ]
  .into_iter()
  .collect();
  let (mesh, stats) = emit_with(&row_grid([0, 1]), &materials, &ModelConfig::default()).unwrap();

  assert_eq!(stats.skipped, 1);
  let nx_faces: Vec<_> = (0..mesh.face_count())
    .filter(|&f| mesh.faces.direction[f] == Direction::Nx)
    .map(|f| mesh.faces.material[f])
    .collect();
  assert_eq!(nx_faces, vec![0]);
}

// =============================================================================
// Planar flags and merging
// =============================================================================

#[test]
fn test_flatten_flags_faces_and_vertices() {
  let config = ModelConfig::new().with_flatten("py".parse().unwrap());
  let (mesh, _) = emit_with(&single_voxel_grid(), &plain_materials(), &config).unwrap();

  for face in 0..mesh.face_count() {
    assert_eq!(
      mesh.faces.flattened.get(face),
      mesh.faces.direction[face] == Direction::Py
    );
    assert!(!mesh.faces.clamped.get(face));
  }
  for v in 0..mesh.vertex_count() {
    let flags = mesh.vertices.flattened.get(v);
    assert_eq!(flags.y, mesh.vertices.position[v].y == 1.0);
    assert!(!flags.x && !flags.z);
  }
}

#[test]
fn test_planar_vertex_flags_accumulate() {
  // Voxel 0 clamps x, voxel 1 clamps nothing: shared corners stay clamped
  let materials: MaterialList = [
    Material::new().with_clamp(Planar {
      x: true,
      ..Planar::NONE
    }),
    Material::new().with_clamp(Planar::NONE),
  ]
  .into_iter()
  .collect();
  let (mesh, _) = emit_with(&row_grid([0, 1]), &materials, &ModelConfig::default()).unwrap();

  let shared = vertex_at(&mesh, IVec3::new(1, 1, 1)).unwrap();
  assert!(mesh.vertices.clamped.get(shared).x);
  let far = vertex_at(&mesh, IVec3::new(2, 1, 1)).unwrap();
  assert!(!mesh.vertices.clamped.get(far).x);
}

#[test]
fn test_shared_corners_merge_deform() {
  let materials: MaterialList = [
    Material::new().with_deform(Deform::new(5, 1.0, 1.0)),
    Material::new(),
  ]
  .into_iter()
  .collect();
  let (mesh, _) = emit_with(&row_grid([0, 1]), &materials, &ModelConfig::default()).unwrap();

  let own = vertex_at(&mesh, IVec3::ZERO).unwrap();
  assert_eq!(mesh.vertices.deform[own].count, 5);
  let shared = vertex_at(&mesh, IVec3::new(1, 0, 0)).unwrap();
  assert_eq!(mesh.vertices.deform[shared], Deform::ZERO);
}

#[test]
fn test_colors_capped_at_five() {
  // Two voxels touching along one edge: its corners are used by 6 faces
  let mut grid = SparseVoxelGrid::new();
  grid.insert(IVec3::ZERO, Voxel::new(0, Color::WHITE));
  grid.insert(IVec3::new(1, 1, 0), Voxel::new(0, Color::BLACK));
  let (mesh, _) = emit_with(&grid, &plain_materials(), &ModelConfig::default()).unwrap();

  assert_eq!(mesh.face_count(), 12);
  assert_eq!(mesh.vertex_count(), 14);
  let edge = vertex_at(&mesh, IVec3::new(1, 1, 0)).unwrap();
  assert_eq!(mesh.faces_using_vertex(edge as VertIndex), 6);
  assert_eq!(mesh.vertices.colors[edge].len(), 5);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_vertex_capacity_exceeded() {
  let config = ModelConfig::new().with_capacity(4, 100);
  let err = emit_with(&single_voxel_grid(), &plain_materials(), &config).unwrap_err();
  assert_eq!(
    err,
    MeshError::CapacityExceeded {
      what: "vertex",
      limit: 4
    }
  );
}

#[test]
fn test_face_capacity_exceeded() {
  let config = ModelConfig::new().with_capacity(100, 2);
  let err = emit_with(&single_voxel_grid(), &plain_materials(), &config).unwrap_err();
  assert_eq!(
    err,
    MeshError::CapacityExceeded {
      what: "face",
      limit: 2
    }
  );
}

#[test]
fn test_unknown_material_rejected() {
  let grid = single_voxel_grid();
  let materials = MaterialList::new();
  let config = ModelConfig::default();
  let bounds = GridBounds {
    model: VoxelBounds::new(IVec3::ZERO, IVec3::ZERO),
    materials: Vec::new(),
  };
  let mut mesh = Mesh::from_config(&config);
  let err = FaceEmitter::new(&grid, &materials, &config, &bounds)
    .emit(&mut mesh)
    .unwrap_err();
  assert_eq!(
    err,
    MeshError::UnknownMaterial {
      index: 0,
      position: [0, 0, 0]
    }
  );
}

#[test]
fn test_emit_is_repeatable() {
  let grid = row_grid([0, 0]);
  let materials = plain_materials();
  let config = ModelConfig::default();
  let bounds = compute_bounds(&grid, &materials).unwrap();
  let mut emitter = FaceEmitter::new(&grid, &materials, &config, &bounds);
  let mut mesh = Mesh::from_config(&config);

  mesh.reset(bounds.model);
  emitter.emit(&mut mesh).unwrap();
  let first = mesh.vertices.position.clone();

  mesh.reset(bounds.model);
  emitter.emit(&mut mesh).unwrap();
  assert_eq!(mesh.vertices.position, first);
}

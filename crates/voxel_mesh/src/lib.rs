//! voxel_mesh - Sparse voxel grid to deformable quad mesh
//!
//! This crate turns a sparse grid of unit voxels into a quad mesh whose
//! corners are shared between faces, then bends that blocky mesh into rounder
//! or more organic shapes before downstream shading, UV and simplification
//! stages run.
//!
//! # Features
//!
//! - **Face emission**: Visibility rules for opaque, transparent and wireframe
//!   materials, planar skip regions
//! - **Vertex deduplication**: Corners shared across faces, with
//!   order-independent merging of deform, warp and scatter parameters
//! - **Vertex linking**: Adjacency graph for relaxation, including the
//!   clamped-face topology repair
//! - **Deformation**: Sphere/cylinder shape morph, Jacobi relaxation smoothing
//!   and noise warp with random scatter
//!
//! # Example
//!
//! ```ignore
//! use glam::IVec3;
//! use voxel_mesh::{pipeline, Color, Deform, Material, MaterialList, ModelConfig, Shape, SparseVoxelGrid, Voxel};
//!
//! let mut materials = MaterialList::new();
//! let stone = materials.push(Material::new().with_deform(Deform::new(10, 1.0, 1.0)));
//!
//! let mut grid = SparseVoxelGrid::new();
//! grid.fill_box(IVec3::ZERO, IVec3::splat(3), Voxel::new(stone, Color::WHITE));
//!
//! let config = ModelConfig::new().with_shape(Shape::Sphere);
//! let noise = |_x: f32, _y: f32, _z: f32| 0.0;
//! let (mesh, stats) = pipeline::build(&grid, &materials, &config, &noise, &mut rand::rng())?;
//!
//! println!("{} faces, {} vertices", stats.face_count, stats.vertex_count);
//! ```

pub mod constants;
pub mod error;
pub mod flags;
pub mod planar;
pub mod types;

pub use error::{MeshError, Result};
pub use flags::{AxisFlags, FlagSet};
pub use planar::Planar;
pub use types::{Color, Deform, Direction, Shape, VoxelBounds, Warp};

// External collaborators: voxel storage and materials
pub mod grid;
pub mod material;
pub use grid::{SparseVoxelGrid, Voxel, VoxelSource};
pub use material::{Material, MaterialList};

// Model-wide configuration
pub mod config;
pub use config::ModelConfig;

// Vertex/face arena
pub mod mesh;
pub use mesh::{Faces, Mesh, SortedFaceKeys, VertIndex, Vertices};

// Face emission and vertex deduplication
pub mod faces;

// Vertex adjacency for relaxation
pub mod linker;

// Shape morph, relaxation and warp/scatter
pub mod deform;
pub use deform::NoiseSampler;

// Build statistics
pub mod metrics;
pub use metrics::BuildStats;

// End-to-end build
pub mod pipeline;

#[cfg(test)]
mod test_utils;

//! Error types for mesh building.

/// Errors raised while configuring or building a mesh.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MeshError {
  /// A textual configuration value is not one of the allowed values.
  #[error("Unrecognized {kind} {value}. Allowed are {allowed}")]
  Syntax {
    /// What was being parsed (`shape`, `planar`).
    kind: &'static str,
    /// The rejected input.
    value: String,
    /// Human readable list of accepted values.
    allowed: &'static str,
  },

  /// The vertex or face arena is full.
  #[error("{what} capacity exceeded (limit {limit})")]
  CapacityExceeded { what: &'static str, limit: usize },

  /// A voxel references a material that is not in the material list.
  #[error("voxel at {position:?} references unknown material {index}")]
  UnknownMaterial { index: usize, position: [i32; 3] },
}

/// Result alias used throughout the crate.
pub type Result<T, E = MeshError> = std::result::Result<T, E>;

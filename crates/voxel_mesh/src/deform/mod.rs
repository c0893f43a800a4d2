//! Deformation stages run after emission.
//!
//! ```text
//! change_shape        radial projection onto a sphere / cylinder, ring radius
//!     │
//!     ▼
//! deform              Jacobi relaxation over the link graph
//!     │
//!     ▼
//! warp_and_scatter    coherent noise offset + random jitter
//! ```
//!
//! All three respect the per-axis freeze mask: an axis that is clamped or
//! flattened on a vertex never moves.

mod relax;
mod shape;
mod warp;

pub use relax::deform;
pub use shape::{change_shape, circular_deform, mark_equidistant_faces};
pub use warp::{warp_and_scatter, NoiseSampler};

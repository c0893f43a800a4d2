//! Reducers merging a contributing material into a shared vertex.
//!
//! Each reducer is `(current, contributor) -> updated` and does not depend
//! on the order contributors arrive in:
//!
//! - A contributor without the setting zeroes the vertex, and a zeroed vertex
//!   stays zero.
//! - Otherwise the gentler of the two settings wins.
//!
//! An exact tie on the compared quantity keeps the current value, so equal
//! deform integrals or scatter magnitudes of opposite sign resolve to the
//! first contributor.

use crate::types::{Deform, Warp};

/// Keep the deform with the smallest total displacement.
#[inline]
pub fn merge_deform(current: Deform, contributor: Option<Deform>) -> Deform {
  match contributor {
    None => Deform::ZERO,
    Some(deform) if current != Deform::ZERO && deform.integral() < current.integral() => deform,
    Some(_) => current,
  }
}

/// Keep the weakest warp. On equal amplitude the higher frequency wins.
#[inline]
pub fn merge_warp(current: Warp, contributor: Option<Warp>) -> Warp {
  match contributor {
    None => Warp::ZERO,
    Some(warp)
      if current.amplitude != 0.0
        && (warp.amplitude < current.amplitude
          || (warp.amplitude == current.amplitude && warp.frequency > current.frequency)) =>
    {
      warp
    }
    Some(_) => current,
  }
}

/// Keep the scatter with the smallest magnitude.
#[inline]
pub fn merge_scatter(current: f32, contributor: Option<f32>) -> f32 {
  match contributor {
    None => 0.0,
    Some(scatter) if current != 0.0 && scatter.abs() < current.abs() => scatter,
    Some(_) => current,
  }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;

//! Build statistics and timing history.
//!
//! # Usage
//!
//! ```ignore
//! use voxel_mesh::metrics::BuildHistory;
//!
//! let mut history = BuildHistory::default();
//! let (mesh, stats) = voxel_mesh::pipeline::build(&grid, &materials, &config, &noise, &mut rng)?;
//! history.record(&stats);
//!
//! println!("avg build: {:.0} us", history.total_timings.average());
//! ```

use std::collections::VecDeque;

use web_time::Instant;

/// Counters and stage timings of one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
  // Geometry
  pub voxel_count: usize,
  pub face_count: usize,
  pub vertex_count: usize,
  /// Visible faces dropped by skip regions.
  pub skipped_faces: usize,
  /// Corner visits that reused an existing vertex.
  pub shared_corners: usize,

  // Links
  /// One-way links, self-loops included.
  pub link_count: usize,
  pub fully_clamped_count: usize,

  // Deformation
  pub deform_steps: u32,
  /// Vertex moves committed by relaxation over all steps.
  pub relax_moves: usize,
  /// Vertices displaced by warp or scatter.
  pub warped_vertices: usize,

  // Timing (microseconds)
  pub bounds_us: u64,
  pub emit_us: u64,
  pub link_us: u64,
  pub shape_us: u64,
  pub relax_us: u64,
  pub warp_us: u64,
  pub total_us: u64,
}

/// Microseconds since `start`.
#[inline]
pub fn elapsed_us(start: Instant) -> u64 {
  start.elapsed().as_micros() as u64
}

/// Most recent stage timings in microseconds, oldest first.
///
/// Holds at most `capacity` samples; a zero capacity records nothing.
#[derive(Debug, Clone)]
pub struct TimingWindow {
  samples: VecDeque<u64>,
  capacity: usize,
}

impl TimingWindow {
  /// Samples kept by [`TimingWindow::default`].
  pub const DEFAULT_CAPACITY: usize = 128;

  pub fn new(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Record a timing, evicting the oldest sample when full.
  pub fn record(&mut self, micros: u64) {
    if self.capacity == 0 {
      return;
    }
    if self.samples.len() >= self.capacity {
      self.samples.pop_front();
    }
    self.samples.push_back(micros);
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
    self.samples.iter().copied()
  }

  pub fn latest(&self) -> Option<u64> {
    self.samples.back().copied()
  }

  /// Total time across the window. Saturates instead of wrapping.
  pub fn total(&self) -> u64 {
    self.samples.iter().fold(0u64, |acc, &us| acc.saturating_add(us))
  }

  pub fn average(&self) -> f64 {
    if self.samples.is_empty() {
      return 0.0;
    }
    self.total() as f64 / self.samples.len() as f64
  }

  /// Fastest and slowest sample.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = self.samples.iter().min()?;
    let max = self.samples.iter().max()?;
    Some((*min, *max))
  }

  /// Nearest-rank percentile, `p` in `[0, 100]`.
  ///
  /// ```text
  /// rank = ceil(p / 100 · n), clamped to 1..=n
  /// ```
  pub fn percentile(&self, p: f64) -> Option<u64> {
    if self.samples.is_empty() {
      return None;
    }
    let mut sorted: Vec<u64> = self.samples.iter().copied().collect();
    sorted.sort_unstable();
    let n = sorted.len();
    let rank = ((p.clamp(0.0, 100.0) / 100.0) * n as f64).ceil() as usize;
    Some(sorted[rank.clamp(1, n) - 1])
  }
}

impl Default for TimingWindow {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY)
  }
}

/// Timing history for callers that rebuild the same model repeatedly.
#[derive(Debug, Clone, Default)]
pub struct BuildHistory {
  pub total_timings: TimingWindow,
  pub emit_timings: TimingWindow,
  pub relax_timings: TimingWindow,
  pub builds: u64,
  pub last: Option<BuildStats>,
}

impl BuildHistory {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, stats: &BuildStats) {
    self.total_timings.record(stats.total_us);
    self.emit_timings.record(stats.emit_us);
    self.relax_timings.record(stats.relax_us);
    self.builds += 1;
    self.last = Some(*stats);
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

//! Progress Estimator
//!
//! Maintains a rolling-window throughput estimate and derives percent-complete
//! and ETA from it. Unlike the simpler single-pass progress struct this
//! replaces, the rate here is smoothed across a bounded ring of samples
//! rather than recomputed from total elapsed time alone.

use crate::domain::value_objects::RateSample;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Instant;

const RING_CAPACITY: usize = 10;
const SMOOTHING_ALPHA: f64 = 0.3;

struct EstimatorState {
    samples: VecDeque<RateSample>,
    current_rate: f64,
    total_files: u64,
    total_bytes: u64,
    started_at: Instant,
}

/// Thread-safe under concurrent readers and writers.
pub struct ProgressEstimator {
    state: Mutex<EstimatorState>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub percent: f64,
    pub eta_secs: f64,
    pub rate_files_per_sec: f64,
}

impl ProgressEstimator {
    pub fn new(total_files: u64, total_bytes: u64) -> Self {
        Self {
            state: Mutex::new(EstimatorState {
                samples: VecDeque::with_capacity(RING_CAPACITY),
                current_rate: 0.0,
                total_files,
                total_bytes,
                started_at: Instant::now(),
            }),
        }
    }

    /// Updates the denominator as the walker discovers more files. The
    /// walk is streaming, so the true total is only known once it finishes;
    /// until then this tracks files/bytes found so far.
    pub fn set_totals(&self, total_files: u64, total_bytes: u64) {
        let mut state = self.state.lock().unwrap();
        state.total_files = total_files;
        state.total_bytes = total_bytes;
    }

    /// Appends a sample, trims the ring, and recomputes `current_rate`.
    pub fn update(&self, processed_files: u64, processed_bytes: u64) {
        let mut state = self.state.lock().unwrap();
        state.samples.push_back(RateSample {
            timestamp: Instant::now(),
            processed_files,
            processed_bytes,
        });
        while state.samples.len() > RING_CAPACITY {
            state.samples.pop_front();
        }

        if state.samples.len() < 2 {
            return;
        }
        let oldest = *state.samples.front().unwrap();
        let newest = *state.samples.back().unwrap();
        let delta_t = newest.timestamp.duration_since(oldest.timestamp).as_secs_f64();
        if delta_t <= 0.0 {
            return;
        }
        let instantaneous = (newest.processed_files - oldest.processed_files) as f64 / delta_t;
        state.current_rate = if state.current_rate == 0.0 {
            instantaneous
        } else {
            SMOOTHING_ALPHA * instantaneous + (1.0 - SMOOTHING_ALPHA) * state.current_rate
        };
    }

    pub fn estimate(&self) -> Estimate {
        let state = self.state.lock().unwrap();
        let (processed_files, processed_bytes) = state
            .samples
            .back()
            .map(|s| (s.processed_files, s.processed_bytes))
            .unwrap_or((0, 0));

        let percent = if state.total_files > 0 {
            100.0 * processed_files as f64 / state.total_files as f64
        } else if state.total_bytes > 0 {
            100.0 * processed_bytes as f64 / state.total_bytes as f64
        } else {
            0.0
        };

        if percent >= 100.0 || (processed_files == 0 && processed_bytes == 0) {
            return Estimate {
                percent,
                eta_secs: 0.0,
                rate_files_per_sec: state.current_rate,
            };
        }

        let remaining_files = state.total_files.saturating_sub(processed_files) as f64;
        let eta_secs = if state.current_rate > 0.0 {
            remaining_files / state.current_rate
        } else {
            let elapsed = state.started_at.elapsed().as_secs_f64();
            let avg_rate = if elapsed > 0.0 {
                processed_files as f64 / elapsed
            } else {
                0.0
            };
            if avg_rate > 0.0 {
                remaining_files / avg_rate
            } else if percent > 0.0 {
                elapsed * (100.0 / percent - 1.0)
            } else {
                0.0
            }
        };

        Estimate {
            percent,
            eta_secs,
            rate_files_per_sec: state.current_rate,
        }
    }
}

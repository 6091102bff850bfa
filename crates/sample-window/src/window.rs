//! Bounded Sample History Buffer

use crate::{Pollutant, Sample};
use std::collections::VecDeque;

/// Default window capacity (7 days of hourly samples)
pub const DEFAULT_CAPACITY: usize = 168;

/// Bounded chronological buffer of hourly samples.
///
/// Oldest samples are evicted first once capacity is reached, so the window
/// always holds the most recent observations in arrival order.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    data: VecDeque<Sample>,
    capacity: usize,
}

impl SampleWindow {
    /// Create a window with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Create a window with the default capacity (168 samples)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Push a sample, evicting the oldest when full
    pub fn push(&mut self, sample: Sample) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(sample);
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.data.iter()
    }

    /// Copy the window contents into a contiguous, oldest-first vector
    pub fn to_vec(&self) -> Vec<Sample> {
        self.data.iter().copied().collect()
    }

    /// Extract the value series for one pollutant, oldest-first
    pub fn series(&self, pollutant: Pollutant) -> Vec<f64> {
        self.data.iter().map(|s| s.value(pollutant)).collect()
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

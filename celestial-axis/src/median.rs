//! Sliding-window median filters.
//!
//! The window is a fixed ring buffer that starts full of zeros, and every
//! update returns the median of the whole buffer. Until `N` samples have been
//! written the zeros take part in the median, so the first outputs are pulled
//! towards zero:
//!
//! ```
//! use celestial_axis::MedianFilter;
//!
//! let mut m = MedianFilter::<f64>::new(5).unwrap();
//! assert_eq!(m.update(10.0), 0.0);
//! assert_eq!(m.update(10.0), 0.0);
//! assert_eq!(m.update(10.0), 10.0);
//! ```

use std::marker::PhantomData;

use celestial_units::{Angle, AstroError, AstroResult};

/// A value the median filter can buffer as an `f64`.
pub trait MedianSample: Copy {
    fn to_sample(self) -> f64;
    fn from_median(median: f64) -> Self;
}

impl MedianSample for f64 {
    fn to_sample(self) -> f64 {
        self
    }

    fn from_median(median: f64) -> Self {
        median
    }
}

/// Even-window medians are truncated toward zero.
impl MedianSample for i64 {
    fn to_sample(self) -> f64 {
        self as f64
    }

    fn from_median(median: f64) -> Self {
        median as i64
    }
}

impl MedianSample for i32 {
    fn to_sample(self) -> f64 {
        f64::from(self)
    }

    fn from_median(median: f64) -> Self {
        median as i32
    }
}

/// Buffered in degrees; the median comes back as a degree-unit angle.
impl MedianSample for Angle {
    fn to_sample(self) -> f64 {
        self.degrees()
    }

    fn from_median(median: f64) -> Self {
        Angle::from_degrees(median)
    }
}

/// Median over the last `N` samples (zeros until filled).
#[derive(Debug, Clone)]
pub struct MedianFilter<T: MedianSample> {
    buffer: Vec<f64>,
    cursor: usize,
    _sample: PhantomData<T>,
}

impl<T: MedianSample> MedianFilter<T> {
    pub fn new(capacity: usize) -> AstroResult<Self> {
        if capacity == 0 {
            return Err(AstroError::invalid_config(
                "median_window",
                "must be at least 1",
            ));
        }
        Ok(Self {
            buffer: vec![0.0; capacity],
            cursor: 0,
            _sample: PhantomData,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Stores `value` over the oldest slot and returns the window median.
    pub fn update(&mut self, value: T) -> T {
        self.buffer[self.cursor] = value.to_sample();
        self.cursor = (self.cursor + 1) % self.buffer.len();
        T::from_median(median(&self.buffer))
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

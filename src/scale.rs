//! Color and radius scales configured from join domains.

use crate::join::Domain;

/// Choropleth palette, lightest bucket first.
pub const PALETTE: [&str; 5] = ["#D5D8DC", "#808B96", "#2C3E50", "#212F3D", "#17202A"];

/// Marker radius range in pixels.
pub const RADIUS_RANGE: (f64, f64) = (2.0, 7.0);

/// Splits a continuous domain into equal-width buckets, one per color.
///
/// | Value                     | Bucket      |
/// |---------------------------|-------------|
/// | `<= min`                  | first       |
/// | `>= max`                  | last        |
/// | anything, `min == max`    | first       |
/// | NaN                       | none        |
#[derive(Debug, Clone)]
pub struct QuantizeScale {
    domain: Domain<f64>,
    range: Vec<String>,
}

impl QuantizeScale {
    pub fn new(domain: Domain<f64>, range: Vec<String>) -> Self {
        Self { domain, range }
    }

    /// Index of the bucket `value` falls into.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        let n = self.range.len();
        if n == 0 || value.is_nan() {
            return None;
        }
        if self.domain.is_degenerate() {
            return Some(0);
        }

        let t = (value - self.domain.min) / (self.domain.max - self.domain.min);
        let idx = (t * n as f64).floor();
        Some(idx.clamp(0.0, (n - 1) as f64) as usize)
    }

    pub fn apply(&self, value: f64) -> Option<&str> {
        self.bucket(value).map(|i| self.range[i].as_str())
    }
}

/// Clamped linear map from a domain onto an output range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: Domain<f64>,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain<f64>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps `value` into the range. A degenerate domain, or a value with no
    /// position in the domain (NaN), maps to the midpoint of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = (value - self.domain.min) / (self.domain.max - self.domain.min);
        let t = if self.domain.is_degenerate() || t.is_nan() {
            0.5
        } else {
            t.clamp(0.0, 1.0)
        };
        r0 + t * (r1 - r0)
    }
}

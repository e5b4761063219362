use serde::Serialize;
use std::fmt;

use super::error::{ConsensusError, Result};

/// Triangular fuzzy number: pessimistic, most likely and optimistic estimate.
///
/// The type carries whatever it is given. Ordering and finiteness of the
/// components are checked by the intake layer before opinions reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangularValue {
    lower: f64,
    peak: f64,
    upper: f64,
}

impl TriangularValue {
    pub fn new(lower: f64, peak: f64, upper: f64) -> Self {
        Self { lower, peak, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Defuzzified value used for ordering and for the agreement metric.
    pub fn centroid(&self) -> f64 {
        let centroid = (self.lower + self.peak + self.upper) / 3.0;
        if centroid.is_finite() {
            centroid
        } else {
            // sum overflowed; scale first
            self.lower / 3.0 + self.peak / 3.0 + self.upper / 3.0
        }
    }

    /// All components finite and `lower <= peak <= upper`.
    pub fn is_well_formed(&self) -> bool {
        self.lower.is_finite()
            && self.peak.is_finite()
            && self.upper.is_finite()
            && self.lower <= self.peak
            && self.peak <= self.upper
    }

    /// Component-wise arithmetic mean of `values`.
    pub fn average<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = TriangularValue>,
    {
        let mut lowers = Vec::new();
        let mut peaks = Vec::new();
        let mut uppers = Vec::new();

        for value in values {
            lowers.push(value.lower);
            peaks.push(value.peak);
            uppers.push(value.upper);
        }

        if lowers.is_empty() {
            return Err(ConsensusError::empty("average"));
        }

        Ok(Self {
            lower: ordered_mean(&mut lowers),
            peak: ordered_mean(&mut peaks),
            upper: ordered_mean(&mut uppers),
        })
    }
}

// Summing in ascending order makes the result independent of input order.
// Components near f64::MAX are scaled before summing so the mean stays finite.
fn ordered_mean(components: &mut [f64]) -> f64 {
    components.sort_by(f64::total_cmp);
    let count = components.len() as f64;
    let sum: f64 = components.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        components.iter().map(|c| c / count).sum()
    }
}

impl fmt::Display for TriangularValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.lower, self.peak, self.upper)
    }
}

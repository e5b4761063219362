use serde::Serialize;
use std::fmt;

use super::fuzzy::TriangularValue;
use super::median::MedianStrategy;

/// Output of one `compromise` call. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    best_compromise: TriangularValue,
    arithmetic_mean: TriangularValue,
    median: TriangularValue,
    max_error: f64,
    num_experts: usize,
    is_even: bool,
}

impl AggregationResult {
    pub(crate) fn new(
        best_compromise: TriangularValue,
        arithmetic_mean: TriangularValue,
        median: TriangularValue,
        max_error: f64,
        num_experts: usize,
    ) -> Self {
        Self {
            best_compromise,
            arithmetic_mean,
            median,
            max_error,
            num_experts,
            is_even: num_experts % 2 == 0,
        }
    }

    pub fn best_compromise(&self) -> TriangularValue {
        self.best_compromise
    }

    pub fn arithmetic_mean(&self) -> TriangularValue {
        self.arithmetic_mean
    }

    pub fn median(&self) -> TriangularValue {
        self.median
    }

    /// Half the centroid distance between mean and median. Lower is stronger
    /// agreement.
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    pub fn num_experts(&self) -> usize {
        self.num_experts
    }

    pub fn is_even(&self) -> bool {
        self.is_even
    }

    pub fn median_strategy(&self) -> MedianStrategy {
        MedianStrategy::for_count(self.num_experts)
    }
}

impl fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "best compromise {} (mean {}, median {}, max error {:.4}, {} experts)",
            self.best_compromise, self.arithmetic_mean, self.median, self.max_error, self.num_experts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_metadata() {
        let v = TriangularValue::new(1.0, 2.0, 3.0);

        let odd = AggregationResult::new(v, v, v, 0.0, 3);
        assert!(!odd.is_even());
        assert_eq!(odd.median_strategy(), MedianStrategy::Odd);

        let even = AggregationResult::new(v, v, v, 0.0, 4);
        assert!(even.is_even());
        assert_eq!(even.median_strategy(), MedianStrategy::Even);
    }

    #[test]
    fn test_serialized_fields() {
        let v = TriangularValue::new(1.0, 2.0, 3.0);
        let result = AggregationResult::new(v, v, v, 0.5, 2);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["num_experts"], 2);
        assert_eq!(json["is_even"], true);
        assert_eq!(json["max_error"], 0.5);
        assert_eq!(json["best_compromise"]["peak"], 2.0);
    }
}

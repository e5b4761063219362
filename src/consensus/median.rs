use std::fmt;

use super::fuzzy::TriangularValue;
use super::opinion::ExpertOpinion;

/// How the middle of a centroid-sorted set of opinions is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianStrategy {
    /// Odd count: the middle opinion, unblended.
    Odd,
    /// Even count: component-wise average of the two middle opinions.
    Even,
}

impl MedianStrategy {
    pub fn for_count(count: usize) -> Self {
        if count % 2 == 0 {
            MedianStrategy::Even
        } else {
            MedianStrategy::Odd
        }
    }

    /// `sorted` must be ordered ascending by centroid. Returns `None` only
    /// for an empty slice.
    pub fn compute(&self, sorted: &[&ExpertOpinion]) -> Option<TriangularValue> {
        if sorted.is_empty() {
            return None;
        }

        let mid = sorted.len() / 2;
        match self {
            MedianStrategy::Odd => Some(sorted[mid].value()),
            MedianStrategy::Even => {
                let below = sorted.get(mid.checked_sub(1)?)?.value();
                let above = sorted.get(mid)?.value();
                TriangularValue::average([below, above]).ok()
            }
        }
    }
}

impl fmt::Display for MedianStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedianStrategy::Odd => write!(f, "ODD"),
            MedianStrategy::Even => write!(f, "EVEN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opinion(id: &str, lower: f64, peak: f64, upper: f64) -> ExpertOpinion {
        ExpertOpinion::new(id, TriangularValue::new(lower, peak, upper))
    }

    #[test]
    fn test_strategy_follows_parity() {
        assert_eq!(MedianStrategy::for_count(1), MedianStrategy::Odd);
        assert_eq!(MedianStrategy::for_count(2), MedianStrategy::Even);
        assert_eq!(MedianStrategy::for_count(7), MedianStrategy::Odd);
        assert_eq!(MedianStrategy::for_count(10), MedianStrategy::Even);
    }

    #[test]
    fn test_odd_takes_middle_exactly() {
        let a = opinion("a", 0.0, 1.0, 2.0);
        let b = opinion("b", 3.0, 7.0, 8.0);
        let c = opinion("c", 9.0, 10.0, 11.0);

        let median = MedianStrategy::Odd.compute(&[&a, &b, &c]).unwrap();
        assert_eq!(median, b.value());
    }

    #[test]
    fn test_even_blends_two_middle() {
        let a = opinion("a", 0.0, 0.0, 0.0);
        let b = opinion("b", 2.0, 4.0, 6.0);
        let c = opinion("c", 4.0, 8.0, 10.0);
        let d = opinion("d", 100.0, 100.0, 100.0);

        let median = MedianStrategy::Even.compute(&[&a, &b, &c, &d]).unwrap();
        assert_eq!(median, TriangularValue::new(3.0, 6.0, 8.0));
    }

    #[test]
    fn test_empty_has_no_median() {
        assert!(MedianStrategy::Odd.compute(&[]).is_none());
        assert!(MedianStrategy::Even.compute(&[]).is_none());
    }
}

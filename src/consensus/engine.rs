//! Stateless aggregation over a borrowed set of expert opinions.
//!
//! Every function here is pure: the input slice is only read, nothing is
//! cached between calls, and the same multiset of opinions always yields the
//! same output.

use super::error::{ConsensusError, Result};
use super::fuzzy::TriangularValue;
use super::median::MedianStrategy;
use super::opinion::ExpertOpinion;
use super::result::AggregationResult;

const OP_MEAN: &str = "arithmetic mean";
const OP_MEDIAN: &str = "median";
const OP_COMPROMISE: &str = "compromise";

/// Component-wise mean of every opinion ("Gamma").
pub fn arithmetic_mean(opinions: &[ExpertOpinion]) -> Result<TriangularValue> {
    let mean = mean_of(opinions, OP_MEAN)?;
    tracing::debug!("Arithmetic mean of {} opinions: {}", opinions.len(), mean);
    Ok(mean)
}

/// Parity-dependent median of the centroid-sorted opinions ("Omega").
pub fn median(opinions: &[ExpertOpinion]) -> Result<TriangularValue> {
    let median = median_of(opinions, OP_MEDIAN)?;
    tracing::debug!("Median of {} opinions: {}", opinions.len(), median);
    Ok(median)
}

/// Mean, median, their average and the agreement indicator in one result.
pub fn compromise(opinions: &[ExpertOpinion]) -> Result<AggregationResult> {
    if opinions.is_empty() {
        tracing::debug!("Compromise requested with no opinions");
        return Err(ConsensusError::empty(OP_COMPROMISE));
    }

    let mean = mean_of(opinions, OP_COMPROMISE)?;
    let median = median_of(opinions, OP_COMPROMISE)?;

    let best_compromise = TriangularValue::average([mean, median])?;
    // Halving first keeps the distance finite for centroids of opposite sign near f64::MAX.
    let max_error = (mean.centroid() / 2.0 - median.centroid() / 2.0).abs();

    let result = AggregationResult::new(best_compromise, mean, median, max_error, opinions.len());

    tracing::debug!(
        "Compromise over {} opinions ({} median): {} max_error={:.4}",
        result.num_experts(),
        result.median_strategy(),
        result.best_compromise(),
        result.max_error()
    );

    Ok(result)
}

/// Opinions ordered ascending by centroid. Stable: equal centroids keep their
/// input order. The input is left untouched.
pub fn sort_by_centroid(opinions: &[ExpertOpinion]) -> Vec<&ExpertOpinion> {
    let mut sorted: Vec<&ExpertOpinion> = opinions.iter().collect();
    sorted.sort_by(|a, b| a.centroid().total_cmp(&b.centroid()));
    sorted
}

fn mean_of(opinions: &[ExpertOpinion], operation: &'static str) -> Result<TriangularValue> {
    TriangularValue::average(opinions.iter().map(ExpertOpinion::value))
        .map_err(|_| ConsensusError::empty(operation))
}

fn median_of(opinions: &[ExpertOpinion], operation: &'static str) -> Result<TriangularValue> {
    let sorted = sort_by_centroid(opinions);
    MedianStrategy::for_count(sorted.len())
        .compute(&sorted)
        .ok_or_else(|| ConsensusError::empty(operation))
}

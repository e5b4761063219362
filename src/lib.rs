pub mod consensus;
pub mod core;
pub mod intake;
pub mod report;

pub use consensus::{
    arithmetic_mean, compromise, median, sort_by_centroid, AggregationResult, ConsensusError,
    ExpertOpinion, MedianStrategy, TriangularValue,
};

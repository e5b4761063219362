pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod median;
pub mod opinion;
pub mod result;

pub use engine::{arithmetic_mean, compromise, median, sort_by_centroid};
pub use error::{ConsensusError, Result};
pub use fuzzy::TriangularValue;
pub use median::MedianStrategy;
pub use opinion::ExpertOpinion;
pub use result::AggregationResult;

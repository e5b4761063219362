use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsensusError>;

/// The only way an aggregation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("cannot compute {operation}: no expert opinions supplied")]
    EmptyOpinions { operation: &'static str },
}

impl ConsensusError {
    pub fn empty(operation: &'static str) -> Self {
        ConsensusError::EmptyOpinions { operation }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            ConsensusError::EmptyOpinions { operation } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operation() {
        let err = ConsensusError::empty("median");
        assert_eq!(err.operation(), "median");
        assert_eq!(
            err.to_string(),
            "cannot compute median: no expert opinions supplied"
        );
    }
}

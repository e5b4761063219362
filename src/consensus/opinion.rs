use super::fuzzy::TriangularValue;

/// One contributor's estimate. Replacing an opinion means building a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertOpinion {
    expert_id: String,
    value: TriangularValue,
}

impl ExpertOpinion {
    pub fn new(expert_id: impl Into<String>, value: TriangularValue) -> Self {
        Self {
            expert_id: expert_id.into(),
            value,
        }
    }

    pub fn expert_id(&self) -> &str {
        &self.expert_id
    }

    pub fn value(&self) -> TriangularValue {
        self.value
    }

    pub fn centroid(&self) -> f64 {
        self.value.centroid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_delegates_to_value() {
        let opinion = ExpertOpinion::new("alice", TriangularValue::new(0.0, 30.0, 60.0));
        assert_eq!(opinion.expert_id(), "alice");
        assert_eq!(opinion.centroid(), 30.0);
    }
}

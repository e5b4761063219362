use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::consensus::{ExpertOpinion, TriangularValue};

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("opinion from {expert_id} has a non-finite component")]
    NonFinite { expert_id: String },

    #[error("opinion from {expert_id} is not ordered: lower={lower}, peak={peak}, upper={upper}")]
    Unordered {
        expert_id: String,
        lower: f64,
        peak: f64,
        upper: f64,
    },

    #[error("malformed submissions: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raw submission as it arrives from the outside.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub expert_id: Option<String>,
    pub lower: f64,
    pub peak: f64,
    pub upper: f64,
}

impl Submission {
    pub fn new(expert_id: impl Into<String>, lower: f64, peak: f64, upper: f64) -> Self {
        Self {
            expert_id: Some(expert_id.into()),
            lower,
            peak,
            upper,
        }
    }

    pub fn value(&self) -> TriangularValue {
        TriangularValue::new(self.lower, self.peak, self.upper)
    }

    /// Trimmed id, `None` when missing or blank.
    fn provided_id(&self) -> Option<&str> {
        self.expert_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    fn display_id(&self) -> &str {
        self.provided_id().unwrap_or("<anonymous>")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    pub expert_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct IntakeOutcome {
    pub opinions: Vec<ExpertOpinion>,
    pub rejected: Vec<Rejection>,
}

pub fn parse_submissions(json: &str) -> Result<Vec<Submission>, IntakeError> {
    Ok(serde_json::from_str(json)?)
}

pub fn validate(submission: &Submission) -> Result<(), IntakeError> {
    let value = submission.value();
    if value.is_well_formed() {
        return Ok(());
    }

    let expert_id = submission.display_id().to_string();
    if !(submission.lower.is_finite() && submission.peak.is_finite() && submission.upper.is_finite())
    {
        return Err(IntakeError::NonFinite { expert_id });
    }

    Err(IntakeError::Unordered {
        expert_id,
        lower: submission.lower,
        peak: submission.peak,
        upper: submission.upper,
    })
}

/// Validates every submission and builds one opinion per expert.
///
/// Submissions without an id get a generated one. A later submission from the
/// same expert replaces the earlier opinion in place.
pub fn into_opinions<I>(submissions: I) -> IntakeOutcome
where
    I: IntoIterator<Item = Submission>,
{
    let mut outcome = IntakeOutcome::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for submission in submissions {
        if let Err(e) = validate(&submission) {
            tracing::warn!("❌ Rejected submission: {}", e);
            outcome.rejected.push(Rejection {
                expert_id: submission.display_id().to_string(),
                reason: e.to_string(),
            });
            continue;
        }

        let expert_id = match submission.provided_id() {
            Some(id) => id.to_string(),
            None => {
                let generated = Uuid::new_v4().to_string();
                tracing::debug!("Assigned expert id {} to anonymous submission", generated);
                generated
            }
        };

        let opinion = ExpertOpinion::new(expert_id.clone(), submission.value());
        match positions.get(&expert_id) {
            Some(&index) => {
                tracing::info!("🔄 Replacing earlier opinion from {}", expert_id);
                outcome.opinions[index] = opinion;
            }
            None => {
                positions.insert(expert_id, outcome.opinions.len());
                outcome.opinions.push(opinion);
            }
        }
    }

    tracing::debug!(
        "Intake accepted {} opinions, rejected {}",
        outcome.opinions.len(),
        outcome.rejected.len()
    );

    outcome
}

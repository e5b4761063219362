use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::consensus::{self, AggregationResult, ConsensusError};
use crate::intake::{IntakeOutcome, Rejection};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Ready { result: AggregationResult },
    NoResultYet { message: String },
}

/// What the driver prints for one panel of submissions.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusReport {
    pub generated_at: DateTime<Utc>,
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    pub outcome: ReportOutcome,
}

impl ConsensusReport {
    /// Runs the compromise over the accepted opinions. An empty panel is not a
    /// failure here, it just has no result yet.
    pub fn build(intake: IntakeOutcome) -> Self {
        let outcome = match consensus::compromise(&intake.opinions) {
            Ok(result) => {
                tracing::info!("✅ Consensus reached: {}", result);
                ReportOutcome::Ready { result }
            }
            Err(e @ ConsensusError::EmptyOpinions { .. }) => {
                tracing::warn!("No consensus yet: {}", e);
                ReportOutcome::NoResultYet {
                    message: e.to_string(),
                }
            }
        };

        Self {
            generated_at: Utc::now(),
            accepted: intake.opinions.len(),
            rejected: intake.rejected,
            outcome,
        }
    }

    pub fn result(&self) -> Option<&AggregationResult> {
        match &self.outcome {
            ReportOutcome::Ready { result } => Some(result),
            ReportOutcome::NoResultYet { .. } => None,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{into_opinions, Submission};

    #[test]
    fn test_report_with_result() {
        let intake = into_opinions(vec![
            Submission::new("a", 20.0, 40.0, 60.0),
            Submission::new("b", 40.0, 60.0, 80.0),
        ]);

        let report = ConsensusReport::build(intake);
        assert_eq!(report.accepted, 2);

        let result = report.result().unwrap();
        assert_eq!(result.num_experts(), 2);
        assert!(result.is_even());

        let json: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
        assert_eq!(json["outcome"]["status"], "ready");
        assert_eq!(json["outcome"]["result"]["best_compromise"]["peak"], 50.0);
    }

    #[test]
    fn test_empty_panel_has_no_result_yet() {
        let intake = into_opinions(vec![Submission::new("bad", 9.0, 1.0, 2.0)]);

        let report = ConsensusReport::build(intake);
        assert!(report.result().is_none());
        assert_eq!(report.rejected.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "no_result_yet");
        assert_eq!(
            json["outcome"]["message"],
            "cannot compute compromise: no expert opinions supplied"
        );
    }
}

use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Sample panel shipped with the crate, used when `CONSENSUS_INPUT` is unset.
pub const DEFAULT_SUBMISSIONS_PATH: &str = "demos/submissions.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub submissions_path: PathBuf,
    pub pretty_output: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            input: InputConfig {
                submissions_path: env::var("CONSENSUS_INPUT")
                    .unwrap_or_else(|_| DEFAULT_SUBMISSIONS_PATH.to_string())
                    .into(),
                pretty_output: env::var("CONSENSUS_PRETTY")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
            monitoring: MonitoringConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }

    /// Command-line path overrides `CONSENSUS_INPUT`.
    pub fn with_input_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.input.submissions_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_path_override() {
        let config = Config {
            input: InputConfig {
                submissions_path: DEFAULT_SUBMISSIONS_PATH.into(),
                pretty_output: true,
            },
            monitoring: MonitoringConfig {
                log_level: "info".to_string(),
            },
        };

        let kept = config.clone().with_input_path(None);
        assert_eq!(kept.input.submissions_path, PathBuf::from(DEFAULT_SUBMISSIONS_PATH));

        let overridden = config.with_input_path(Some("panel.json".into()));
        assert_eq!(overridden.input.submissions_path, PathBuf::from("panel.json"));
    }

    #[test]
    fn test_default_input_is_the_shipped_demo_panel() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SUBMISSIONS_PATH);
        let raw = std::fs::read_to_string(&path).unwrap();

        let submissions = crate::intake::parse_submissions(&raw).unwrap();
        let outcome = crate::intake::into_opinions(submissions);
        assert_eq!(outcome.opinions.len(), 4);
        assert_eq!(outcome.rejected.len(), 1);
    }
}

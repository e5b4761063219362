use anyhow::{Context, Result};
use expert_consensus::core::{logging, Config};
use expert_consensus::intake;
use expert_consensus::report::ConsensusReport;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; an explicit path argument wins over CONSENSUS_INPUT
    let config = Config::from_env()?.with_input_path(std::env::args().nth(1).map(PathBuf::from));

    // Initialize logging
    logging::init_logging(&config.monitoring.log_level);

    tracing::info!("Expert consensus engine v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Reading submissions from {}", config.input.submissions_path.display());

    let raw = tokio::fs::read_to_string(&config.input.submissions_path)
        .await
        .with_context(|| {
            format!(
                "failed to read submissions from {}",
                config.input.submissions_path.display()
            )
        })?;

    let submissions = intake::parse_submissions(&raw).context("failed to decode submissions")?;
    tracing::info!("📥 {} submissions received", submissions.len());

    let report = ConsensusReport::build(intake::into_opinions(submissions));

    println!("{}", report.to_json(config.input.pretty_output)?);

    Ok(())
}

use crate::core::models::result::SimulationResult;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::kernel;
use chrono::Utc;
use tracing::{info, instrument};

/// Runs one simulation and stamps the result with the current UTC time.
///
/// All numeric content comes from [`kernel::evaluate`]; the timestamp is the
/// only field that differs between two runs of the same configuration.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, EngineError> {
    info!(
        sequence_length = config.sequence.len(),
        ion_concentration = config.conditions.ion_concentration,
        temperature = config.conditions.temperature,
        crowding_index = config.conditions.crowding_index,
        "Initialising kernel simulation."
    );

    let profile = kernel::evaluate(&config.sequence, &config.conditions)?;
    let result = SimulationResult {
        sequence: config.sequence.clone(),
        profile,
        timestamp: Utc::now(),
    };

    info!(
        label = %result.efficiency_label(),
        observed_rate = result.profile.observed_rate,
        "Computation complete."
    );
    Ok(result)
}

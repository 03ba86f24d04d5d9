use crate::core::models::result::{KineticRegime, SweepPoint};
use crate::engine::config::SweepConfig;
use crate::engine::error::EngineError;
use crate::engine::kernel;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates the kernel at every point of a one-axis sweep.
///
/// Points are returned in axis order regardless of how they were scheduled.
/// When some points fall in the unstable regime, a [`Progress::Message`]
/// counting them is reported after the task finishes.
#[instrument(skip_all, name = "sweep_workflow", fields(axis = %config.axis))]
pub fn run(
    config: &SweepConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<SweepPoint>, EngineError> {
    let values = config.axis_values();
    info!(
        points = values.len(),
        start = config.start,
        end = config.end,
        "Starting parameter sweep."
    );

    let points = reporter.phase("Parameter Sweep", || {
        reporter.report(Progress::TaskStart {
            total_steps: values.len() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = values.iter();

        #[cfg(feature = "parallel")]
        let iterator = values.par_iter();

        let points: Result<Vec<SweepPoint>, EngineError> = iterator
            .map(|&axis_value| {
                let conditions = config.axis.apply(config.base_conditions, axis_value);
                let profile = kernel::evaluate(&config.sequence, &conditions)?;
                reporter.report(Progress::TaskIncrement { amount: 1 });
                Ok(SweepPoint {
                    axis_value,
                    profile,
                })
            })
            .collect();

        reporter.report(Progress::TaskFinish);

        if let Ok(points) = &points {
            let unstable = points
                .iter()
                .filter(|p| p.profile.kinetic_regime == KineticRegime::Unstable)
                .count();
            if unstable > 0 {
                reporter.report(Progress::Message(format!(
                    "{} of {} points are in the unstable regime (observed rate clamped to 0)",
                    unstable,
                    points.len()
                )));
            }
        }
        points
    })?;

    info!(points = points.len(), "Parameter sweep complete.");
    Ok(points)
}

use crate::cli::SweepArgs;
use crate::config::build_settings;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use rnanav::core::io::table;
use rnanav::core::models::result::SweepPoint;
use rnanav::engine::config::{SweepAxis, SweepConfigBuilder};
use rnanav::engine::error::EngineError;
use rnanav::engine::progress::ProgressReporter;
use rnanav::workflows;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

pub async fn run(args: SweepArgs, quiet: bool) -> Result<()> {
    let settings = build_settings(&args.conditions)?;
    let axis = SweepAxis::from(args.axis);

    let config = SweepConfigBuilder::new()
        .sequence(settings.sequence)
        .base_conditions(settings.conditions)
        .axis(axis)
        .range(args.from, args.to)
        .steps(args.steps)
        .build()
        .map_err(EngineError::from)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Sweeping {} from {} to {} over {} points...",
        axis, config.start, config.end, config.steps
    );
    let points = tokio::task::block_in_place(|| workflows::sweep::run(&config, &reporter))?;

    match &args.output {
        Some(path) => {
            write_table(&points, axis, BufWriter::new(File::create(path)?))?;
            println!("✓ Sweep table ({} rows) written to: {}", points.len(), path.display());
        }
        None => write_table(&points, axis, io::stdout().lock())?,
    }

    Ok(())
}

fn write_table<W: io::Write>(points: &[SweepPoint], axis: SweepAxis, writer: W) -> Result<()> {
    table::write_sweep(points, axis.column_name(), writer)?;
    Ok(())
}

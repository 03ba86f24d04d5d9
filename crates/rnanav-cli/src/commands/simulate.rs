use crate::cli::{OutputFormat, SimulateArgs};
use crate::config::build_settings;
use crate::error::Result;
use rnanav::core::io::audit;
use rnanav::core::models::result::SimulationResult;
use rnanav::engine::config::SimulationConfigBuilder;
use rnanav::engine::error::EngineError;
use rnanav::workflows;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub async fn run(args: SimulateArgs) -> Result<()> {
    let settings = build_settings(&args.conditions)?;
    let format = args.format.unwrap_or(settings.format);
    let export_directory = args.export.or(settings.export_directory);

    let config = SimulationConfigBuilder::new()
        .sequence(settings.sequence)
        .conditions(settings.conditions)
        .build()
        .map_err(EngineError::from)?;

    info!("Invoking the simulation workflow...");
    let result = tokio::task::block_in_place(|| workflows::simulate::run(&config))?;

    let exported = match export_directory {
        Some(dir) => Some(audit::write_audit(&result, &dir)?),
        None => None,
    };

    write_report(
        &result,
        format,
        exported.as_deref(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(())
}

/// Prints the result in `format` to `out`. The export notice goes to `out`
/// for text and to `err` for JSON, so JSON output stays parseable.
fn write_report<O: Write, E: Write>(
    result: &SimulationResult,
    format: OutputFormat,
    exported: Option<&Path>,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    let notice = exported.map(|path| format!("✓ Audit record written to: {}", path.display()));
    match format {
        OutputFormat::Text => {
            write!(out, "{}", render_summary(result))?;
            if let Some(notice) = notice {
                writeln!(out, "{}", notice)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", audit::to_json_string(result)?)?;
            if let Some(notice) = notice {
                writeln!(err, "{}", notice)?;
            }
        }
    }
    Ok(())
}

/// Plain-text report of one result, one quantity per line.
pub fn render_summary(result: &SimulationResult) -> String {
    let profile = &result.profile;
    let audit = &profile.audit_detail;
    let mut out = String::new();

    let _ = writeln!(out, "Sequence:            {} ({} nt)", result.sequence, result.sequence.len());
    let _ = writeln!(out, "Efficiency:          {}", profile.efficiency_label);
    let _ = writeln!(out, "Observed rate:       {:.4} min^-1", profile.observed_rate);
    let _ = writeln!(out, "Free energy (dG):    {:.4} kcal/mol", profile.free_energy_estimate);
    let _ = writeln!(out, "Sweet-spot progress: {:.2} %", audit.sweet_spot_progress);
    let _ = writeln!(out, "Resonance sync:      {:.4}", audit.resonance_sync);
    let _ = writeln!(out, "Warp factor:         {:.4}", audit.warp_factor);
    let _ = writeln!(out, "Diffusion limit:     {:.4} min^-1", audit.diffusion_limit);
    let _ = writeln!(out, "Kinetic regime:      {}", profile.kinetic_regime);
    let _ = writeln!(out, "Interpretation:      {}", result.interpretation_hint());
    out
}

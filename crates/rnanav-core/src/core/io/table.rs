use super::ExportError;
use crate::core::models::result::SweepPoint;
use std::io::Write;

const FIXED_COLUMNS: [&str; 7] = [
    "efficiency_label",
    "observed_rate",
    "free_energy_estimate",
    "sweet_spot_progress",
    "resonance_sync",
    "warp_factor",
    "kinetic_regime",
];

/// Writes one CSV row per sweep point, preceded by a header whose first
/// column is `axis_column`.
pub fn write_sweep<W: Write>(
    points: &[SweepPoint],
    axis_column: &str,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(FIXED_COLUMNS.len() + 1);
    header.push(axis_column);
    header.extend_from_slice(&FIXED_COLUMNS);
    csv_writer.write_record(&header)?;

    for point in points {
        let profile = &point.profile;
        let audit = &profile.audit_detail;
        csv_writer.write_record(&[
            point.axis_value.to_string(),
            profile.efficiency_label.to_string(),
            profile.observed_rate.to_string(),
            profile.free_energy_estimate.to_string(),
            audit.sweet_spot_progress.to_string(),
            audit.resonance_sync.to_string(),
            audit.warp_factor.to_string(),
            profile.kinetic_regime.to_string(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::conditions::Conditions;
    use crate::core::models::sequence::Sequence;
    use crate::engine::kernel;

    fn point(ion: f64) -> SweepPoint {
        let sequence = Sequence::parse("GGGCGACUGAAGCGCCC").unwrap();
        SweepPoint {
            axis_value: ion,
            profile: kernel::evaluate(&sequence, &Conditions::new(ion, 37.0, 25.0)).unwrap(),
        }
    }

    #[test]
    fn write_sweep_emits_header_and_one_row_per_point() {
        let mut buffer = Vec::new();
        write_sweep(&[point(0.0), point(10.0)], "ion_concentration_mm", &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ion_concentration_mm,efficiency_label,observed_rate,free_energy_estimate,\
             sweet_spot_progress,resonance_sync,warp_factor,kinetic_regime"
        );
        assert!(lines[1].starts_with("0,LOW,0,"));
        assert!(lines[1].ends_with(",UNSTABLE"));
        assert!(lines[2].starts_with("10,QUANTUM_SYNC,"));
        assert!(lines[2].ends_with(",STABLE"));
    }

    #[test]
    fn write_sweep_with_no_points_writes_only_header() {
        let mut buffer = Vec::new();
        write_sweep(&[], "temperature_c", &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("temperature_c,"));
    }
}

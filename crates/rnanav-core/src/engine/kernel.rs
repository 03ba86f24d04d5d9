use crate::core::kinetics::potentials::{self, GAS_CONSTANT};
use crate::core::models::conditions::Conditions;
use crate::core::models::result::{
    AuditDetail, EfficiencyLabel, Interpretation, KineticProfile, KineticRegime,
};
use crate::core::models::sequence::Sequence;
use crate::engine::error::EngineError;
use tracing::{debug, trace, warn};

const QUANTUM_SYNC_PROGRESS: f64 = 99.0;
const EXTREME_PROGRESS: f64 = 85.0;
const HIGH_RATE: f64 = 8.0; // min⁻¹
const MEDIUM_RATE: f64 = 2.0; // min⁻¹
const INHIBITORY_ION_CONCENTRATION: f64 = 35.0; // mM

#[derive(Debug, Clone, Copy)]
struct Canonical {
    gc_fraction: f64,
    temp_k: f64,
}

#[derive(Debug, Clone, Copy)]
struct Transport {
    stacking_stability: f64,
    diffusion_limit: f64,
}

#[derive(Debug, Clone, Copy)]
struct IonSaturation {
    ion_effect: f64,
    ion_inhibition: f64,
}

#[derive(Debug, Clone, Copy)]
struct Thermodynamics {
    free_energy: f64,
    synergy: f64,
    warp_factor: f64,
}

#[derive(Debug, Clone, Copy)]
struct Kinetics {
    product_affinity: f64,
    release_rate: f64,
    coherence: f64,
    observed_rate: f64,
    progress: f64,
    regime: KineticRegime,
}

/// Evaluates the biophysical model for one sequence under one set of
/// conditions.
///
/// The computation is pure: identical inputs always yield an identical
/// profile. Non-finite conditions are rejected with
/// [`EngineError::InvalidInput`], as is a negative ion concentration, for
/// which the Hill saturation has no real value. A zero, negative or
/// non-finite internal or diffusion-limited rate is not an error; the
/// observed rate and progress are clamped to zero and the profile is marked
/// [`KineticRegime::Unstable`].
///
/// Every returned profile has finite audit fields. Any other input that would
/// leave one non-finite is reported as [`EngineError::InvalidInput`] naming
/// that field.
pub fn evaluate(sequence: &Sequence, conditions: &Conditions) -> Result<KineticProfile, EngineError> {
    if let Some(field) = conditions.first_non_finite() {
        return Err(EngineError::InvalidInput(format!(
            "{} must be a finite number",
            field
        )));
    }

    let canonical = canonicalize(sequence, conditions);
    let transport = transport(&canonical, conditions);
    let ions = ion_saturation(conditions.ion_concentration);
    if !ions.ion_effect.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "ion_concentration must be non-negative, got {}",
            conditions.ion_concentration
        )));
    }
    let thermo = thermodynamics(&canonical, &transport, &ions, conditions);
    let kinetics = kinetics(&canonical, &transport, &ions, &thermo);

    let efficiency_label = classify(kinetics.progress, kinetics.observed_rate);
    let interpretation = interpret(efficiency_label, conditions.ion_concentration);

    let audit_detail = AuditDetail {
        active_state_pop: thermo.warp_factor,
        product_affinity: kinetics.product_affinity,
        release_rate: kinetics.release_rate,
        vibrational_coherence: kinetics.coherence,
        resonance_sync: thermo.synergy,
        entropy_recovery: thermo.synergy * 100.0,
        warp_factor: thermo.warp_factor,
        sweet_spot_progress: kinetics.progress,
        gibbs_energy: thermo.free_energy,
        diffusion_limit: transport.diffusion_limit,
        tunneling_probability: potentials::tunneling_probability(
            kinetics.coherence,
            thermo.warp_factor,
        ),
        stacking_stability: transport.stacking_stability,
        ion_saturation: ions.ion_effect * ions.ion_inhibition,
    };
    if let Some(field) = audit_detail.first_non_finite() {
        return Err(EngineError::InvalidInput(format!(
            "conditions {:?} leave {} without a finite value",
            conditions, field
        )));
    }

    debug!(
        sequence = %sequence,
        label = %efficiency_label,
        observed_rate = kinetics.observed_rate,
        progress = kinetics.progress,
        "Kernel evaluation complete."
    );

    Ok(KineticProfile {
        free_energy_estimate: thermo.free_energy,
        observed_rate: kinetics.observed_rate,
        efficiency_label,
        interpretation,
        kinetic_regime: kinetics.regime,
        audit_detail,
    })
}

/// Validates a raw sequence and evaluates it.
///
/// An empty or otherwise malformed sequence is reported as
/// [`EngineError::InvalidInput`].
pub fn evaluate_raw(
    sequence: &str,
    ion_concentration: f64,
    temperature: f64,
    crowding_index: f64,
) -> Result<KineticProfile, EngineError> {
    let sequence =
        Sequence::parse(sequence).map_err(|e| EngineError::InvalidInput(e.to_string()))?;
    evaluate(
        &sequence,
        &Conditions::new(ion_concentration, temperature, crowding_index),
    )
}

/// Ordered decision list; the first matching rule wins.
pub fn classify(progress: f64, observed_rate: f64) -> EfficiencyLabel {
    if progress > QUANTUM_SYNC_PROGRESS {
        EfficiencyLabel::QuantumSync
    } else if progress > EXTREME_PROGRESS {
        EfficiencyLabel::Extreme
    } else if observed_rate > HIGH_RATE {
        EfficiencyLabel::High
    } else if observed_rate > MEDIUM_RATE {
        EfficiencyLabel::Medium
    } else {
        EfficiencyLabel::Low
    }
}

pub fn interpret(label: EfficiencyLabel, ion_concentration: f64) -> Interpretation {
    if label == EfficiencyLabel::QuantumSync {
        Interpretation::ResonanceTunneling
    } else if ion_concentration > INHIBITORY_ION_CONCENTRATION {
        Interpretation::IonInhibition
    } else {
        Interpretation::StochasticLimit
    }
}

fn canonicalize(sequence: &Sequence, conditions: &Conditions) -> Canonical {
    Canonical {
        gc_fraction: sequence.gc_fraction(),
        temp_k: conditions.temperature_kelvin(),
    }
}

fn transport(canonical: &Canonical, conditions: &Conditions) -> Transport {
    let stacking_stability = potentials::stacking_stability(canonical.gc_fraction);
    let viscosity = potentials::viscosity(conditions.crowding_index);
    let diffusion_limit = potentials::diffusion_limit(canonical.temp_k, viscosity);
    trace!(stacking_stability, viscosity, diffusion_limit, "Transport stage.");
    Transport {
        stacking_stability,
        diffusion_limit,
    }
}

fn ion_saturation(ion_concentration: f64) -> IonSaturation {
    IonSaturation {
        ion_effect: potentials::hill_saturation(ion_concentration),
        ion_inhibition: potentials::ion_inhibition(ion_concentration),
    }
}

fn thermodynamics(
    canonical: &Canonical,
    transport: &Transport,
    ions: &IonSaturation,
    conditions: &Conditions,
) -> Thermodynamics {
    let delta_h = potentials::enthalpy(transport.stacking_stability);
    let delta_s = potentials::entropy(conditions.crowding_index);
    let free_energy = potentials::gibbs_free_energy(delta_h, delta_s, canonical.temp_k);
    let synergy = potentials::resonance_synergy(
        conditions.crowding_index,
        conditions.temperature,
        ions.ion_effect,
    );
    let warp_factor = potentials::warp_factor(synergy);
    trace!(free_energy, synergy, warp_factor, "Thermodynamic stage.");
    Thermodynamics {
        free_energy,
        synergy,
        warp_factor,
    }
}

fn kinetics(
    canonical: &Canonical,
    transport: &Transport,
    ions: &IonSaturation,
    thermo: &Thermodynamics,
) -> Kinetics {
    let product_affinity =
        potentials::product_affinity(thermo.free_energy, thermo.synergy, thermo.warp_factor);
    let release_rate = potentials::release_rate(canonical.temp_k, product_affinity, thermo.synergy);
    let coherence = potentials::vibrational_coherence(canonical.gc_fraction, canonical.temp_k);
    let catalytic_rate = potentials::catalytic_rate(
        coherence,
        ions.ion_effect,
        ions.ion_inhibition,
        thermo.warp_factor,
    );
    let internal_rate = potentials::internal_rate(catalytic_rate, release_rate);
    let diffusion_limit = transport.diffusion_limit;

    let (observed_rate, progress, regime) =
        if is_usable_rate(internal_rate) && is_usable_rate(diffusion_limit) {
            let observed = potentials::series_rate(internal_rate, diffusion_limit);
            let progress = potentials::sweet_spot_progress(observed, diffusion_limit);
            (observed, progress, KineticRegime::Stable)
        } else {
            warn!(
                internal_rate,
                diffusion_limit,
                rt = GAS_CONSTANT * canonical.temp_k,
                "Unstable kinetic regime; clamping observed rate to zero."
            );
            (0.0, 0.0, KineticRegime::Unstable)
        };

    trace!(
        product_affinity,
        release_rate,
        coherence,
        catalytic_rate,
        internal_rate,
        "Kinetic stage."
    );

    Kinetics {
        product_affinity,
        release_rate,
        coherence,
        observed_rate,
        progress,
        regime,
    }
}

#[inline]
fn is_usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

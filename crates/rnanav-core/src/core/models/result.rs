use super::sequence::Sequence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete efficiency classification, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EfficiencyLabel {
    Low,
    Medium,
    High,
    Extreme,
    QuantumSync,
}

impl EfficiencyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyLabel::Low => "LOW",
            EfficiencyLabel::Medium => "MEDIUM",
            EfficiencyLabel::High => "HIGH",
            EfficiencyLabel::Extreme => "EXTREME",
            EfficiencyLabel::QuantumSync => "QUANTUM_SYNC",
        }
    }
}

impl fmt::Display for EfficiencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RESONANCE_MESSAGE: &str =
    "Coherence achieved via stacking resonance. Theoretical tunneling detected.";
const ION_INHIBITION_MESSAGE: &str =
    "Inhibition observed. High ion concentration likely reduces flexibility.";
const STOCHASTIC_LIMIT_MESSAGE: &str =
    "Stochastic limit. Activation barrier remains primary kinetic bottleneck.";

/// Human-readable hint attached to every result. Serialized as its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Interpretation {
    ResonanceTunneling,
    IonInhibition,
    StochasticLimit,
}

impl Interpretation {
    pub fn message(&self) -> &'static str {
        match self {
            Interpretation::ResonanceTunneling => RESONANCE_MESSAGE,
            Interpretation::IonInhibition => ION_INHIBITION_MESSAGE,
            Interpretation::StochasticLimit => STOCHASTIC_LIMIT_MESSAGE,
        }
    }
}

impl From<Interpretation> for String {
    fn from(value: Interpretation) -> Self {
        value.message().to_string()
    }
}

impl TryFrom<String> for Interpretation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            RESONANCE_MESSAGE => Ok(Interpretation::ResonanceTunneling),
            ION_INHIBITION_MESSAGE => Ok(Interpretation::IonInhibition),
            STOCHASTIC_LIMIT_MESSAGE => Ok(Interpretation::StochasticLimit),
            other => Err(format!("unrecognized interpretation hint: '{}'", other)),
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether the rate combination could be carried out without a zero or
/// non-finite denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KineticRegime {
    #[default]
    Stable,
    /// The observed rate and progress were clamped to zero.
    Unstable,
}

impl fmt::Display for KineticRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KineticRegime::Stable => f.write_str("STABLE"),
            KineticRegime::Unstable => f.write_str("UNSTABLE"),
        }
    }
}

/// The intermediate quantities of one evaluation, kept verbatim for
/// downstream inspection.
///
/// `active_state_pop` and `warp_factor` carry the same value, as do
/// `resonance_sync` and `entropy_recovery` up to a factor of 100. Consumers
/// read them under either name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetail {
    pub active_state_pop: f64,
    /// kcal/mol.
    pub product_affinity: f64,
    /// min⁻¹.
    pub release_rate: f64,
    pub vibrational_coherence: f64,
    pub resonance_sync: f64,
    pub entropy_recovery: f64,
    pub warp_factor: f64,
    /// Percent of the empirical maximum rate, in `[0, 100]`.
    pub sweet_spot_progress: f64,
    /// kcal/mol.
    pub gibbs_energy: f64,
    /// min⁻¹.
    pub diffusion_limit: f64,
    pub tunneling_probability: f64,
    pub stacking_stability: f64,
    pub ion_saturation: f64,
}

impl AuditDetail {
    /// Returns the serialized name of the first field that is `NaN` or
    /// infinite.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("activeStatePop", self.active_state_pop),
            ("productAffinity", self.product_affinity),
            ("releaseRate", self.release_rate),
            ("vibrationalCoherence", self.vibrational_coherence),
            ("resonanceSync", self.resonance_sync),
            ("entropyRecovery", self.entropy_recovery),
            ("warpFactor", self.warp_factor),
            ("sweetSpotProgress", self.sweet_spot_progress),
            ("gibbsEnergy", self.gibbs_energy),
            ("diffusionLimit", self.diffusion_limit),
            ("tunnelingProbability", self.tunneling_probability),
            ("stackingStability", self.stacking_stability),
            ("ionSaturation", self.ion_saturation),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

/// The deterministic part of an evaluation: everything except the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticProfile {
    /// Net folding/binding free energy in kcal/mol.
    pub free_energy_estimate: f64,
    /// Rate-limited kinetic estimate in min⁻¹.
    pub observed_rate: f64,
    pub efficiency_label: EfficiencyLabel,
    #[serde(rename = "interpretationHint")]
    pub interpretation: Interpretation,
    pub kinetic_regime: KineticRegime,
    pub audit_detail: AuditDetail,
}

/// A complete, timestamped simulation record as handed to callers and
/// exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub sequence: Sequence,
    #[serde(flatten)]
    pub profile: KineticProfile,
    /// Wall-clock time of computation. Informational only.
    pub timestamp: DateTime<Utc>,
}

impl SimulationResult {
    pub fn efficiency_label(&self) -> EfficiencyLabel {
        self.profile.efficiency_label
    }

    pub fn interpretation_hint(&self) -> &'static str {
        self.profile.interpretation.message()
    }
}

/// One evaluated point of a parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// Value of the swept parameter at this point.
    pub axis_value: f64,
    pub profile: KineticProfile,
}

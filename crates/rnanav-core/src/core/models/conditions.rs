use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Environmental conditions under which a sequence is evaluated.
///
/// Values are taken at face value. Typical ranges are 0–50 mM for the
/// divalent-ion concentration, 0–95 °C for temperature and 0–100 % for the
/// crowding index, but values outside those ranges are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    /// Divalent-ion (Mg²⁺) concentration in mM.
    pub ion_concentration: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Macromolecular crowding index in %.
    pub crowding_index: f64,
}

impl Conditions {
    pub fn new(ion_concentration: f64, temperature: f64, crowding_index: f64) -> Self {
        Self {
            ion_concentration,
            temperature,
            crowding_index,
        }
    }

    #[inline]
    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature + KELVIN_OFFSET
    }

    /// Returns the name of the first field that is `NaN` or infinite.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("ion_concentration", self.ion_concentration),
            ("temperature", self.temperature),
            ("crowding_index", self.crowding_index),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

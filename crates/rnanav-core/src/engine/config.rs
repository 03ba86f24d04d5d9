use crate::core::models::conditions::Conditions;
use crate::core::models::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub sequence: Sequence,
    pub conditions: Conditions,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    sequence: Option<Sequence>,
    ion_concentration: Option<f64>,
    temperature: Option<f64>,
    crowding_index: Option<f64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = Some(sequence);
        self
    }
    pub fn ion_concentration(mut self, mm: f64) -> Self {
        self.ion_concentration = Some(mm);
        self
    }
    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }
    pub fn crowding_index(mut self, percent: f64) -> Self {
        self.crowding_index = Some(percent);
        self
    }
    pub fn conditions(self, conditions: Conditions) -> Self {
        self.ion_concentration(conditions.ion_concentration)
            .temperature(conditions.temperature)
            .crowding_index(conditions.crowding_index)
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let conditions = Conditions {
            ion_concentration: self
                .ion_concentration
                .ok_or(ConfigError::MissingParameter("ion_concentration"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            crowding_index: self
                .crowding_index
                .ok_or(ConfigError::MissingParameter("crowding_index"))?,
        };
        Ok(SimulationConfig {
            sequence: self
                .sequence
                .ok_or(ConfigError::MissingParameter("sequence"))?,
            conditions,
        })
    }
}

/// The environmental parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepAxis {
    Ion,
    Temperature,
    Crowding,
}

impl SweepAxis {
    /// Column header used when tabulating sweep results.
    pub fn column_name(&self) -> &'static str {
        match self {
            SweepAxis::Ion => "ion_concentration_mm",
            SweepAxis::Temperature => "temperature_c",
            SweepAxis::Crowding => "crowding_index_pct",
        }
    }

    /// Returns `base` with this axis replaced by `value`.
    pub fn apply(&self, base: Conditions, value: f64) -> Conditions {
        let mut conditions = base;
        match self {
            SweepAxis::Ion => conditions.ion_concentration = value,
            SweepAxis::Temperature => conditions.temperature = value,
            SweepAxis::Crowding => conditions.crowding_index = value,
        }
        conditions
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::Ion => f.write_str("ion"),
            SweepAxis::Temperature => f.write_str("temperature"),
            SweepAxis::Crowding => f.write_str("crowding"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub sequence: Sequence,
    pub base_conditions: Conditions,
    pub axis: SweepAxis,
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl SweepConfig {
    /// Evenly spaced axis values from `start` to `end`, both inclusive.
    ///
    /// A hand-built config with fewer than two steps yields no values for
    /// zero steps and just `start` for one.
    pub fn axis_values(&self) -> Vec<f64> {
        if self.steps < 2 {
            return std::iter::repeat_n(self.start, self.steps).collect();
        }
        let span = self.end - self.start;
        let last = (self.steps - 1) as f64;
        (0..self.steps)
            .map(|i| {
                if i + 1 == self.steps {
                    self.end
                } else {
                    self.start + span * (i as f64 / last)
                }
            })
            .collect()
    }
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    sequence: Option<Sequence>,
    base_conditions: Option<Conditions>,
    axis: Option<SweepAxis>,
    start: Option<f64>,
    end: Option<f64>,
    steps: Option<usize>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = Some(sequence);
        self
    }
    pub fn base_conditions(mut self, conditions: Conditions) -> Self {
        self.base_conditions = Some(conditions);
        self
    }
    pub fn axis(mut self, axis: SweepAxis) -> Self {
        self.axis = Some(axis);
        self
    }
    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let start = self.start.ok_or(ConfigError::MissingParameter("start"))?;
        let end = self.end.ok_or(ConfigError::MissingParameter("end"))?;
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::InvalidValue {
                parameter: "range",
                reason: format!("bounds must be finite, got {}..{}", start, end),
            });
        }

        let steps = self.steps.ok_or(ConfigError::MissingParameter("steps"))?;
        if steps < 2 {
            return Err(ConfigError::InvalidValue {
                parameter: "steps",
                reason: format!("at least 2 points are required, got {}", steps),
            });
        }

        Ok(SweepConfig {
            sequence: self
                .sequence
                .ok_or(ConfigError::MissingParameter("sequence"))?,
            base_conditions: self
                .base_conditions
                .ok_or(ConfigError::MissingParameter("base_conditions"))?,
            axis: self.axis.ok_or(ConfigError::MissingParameter("axis"))?,
            start,
            end,
            steps,
        })
    }
}

use crate::cli::OutputFormat;

pub struct DefaultsConfig {
    pub sequence: String,
    pub ion_concentration: f64,
    pub temperature: f64,
    pub crowding_index: f64,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sequence: "GGGCGACUGAAGCGCCC".to_string(),
            ion_concentration: 10.0,
            temperature: 37.0,
            crowding_index: 25.0,
            format: OutputFormat::Text,
        }
    }
}

//! Configuration module - simulation parameters with TOML file loading

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    pub setpoint: f32,
    pub initial_position: f32,
    pub process_gain: f32,
    pub num_iterations: u32,
    pub step_delay_ms: u64,
    pub noise_amplitude: f32,
    pub noise_seed: u64,
    pub integral_warn_threshold: f32,
    pub chart_path: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            kp: 2.0,
            ki: 0.2,
            kd: 0.02,
            setpoint: 100.0,
            initial_position: 0.0,
            process_gain: 0.05,
            num_iterations: 100,
            step_delay_ms: 0,
            noise_amplitude: 0.0,
            noise_seed: 42,
            integral_warn_threshold: 10_000.0,
            chart_path: None,
        }
    }
}

pub fn load_config(path: &str) -> SimConfig {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str::<SimConfig>(&s).unwrap_or_default(),
        Err(_) => SimConfig::default(),
    }
}

//! Plant module - simulated motor the control loop acts on

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First-order linear motor model with optional measurement noise.
pub struct MotorPlant {
    position: f32,
    process_gain: f32,
    rng: StdRng,
    noise_amplitude: f32,
}

impl MotorPlant {
    pub fn new(initial_position: f32, process_gain: f32, seed: u64) -> Self {
        Self {
            position: initial_position,
            process_gain,
            rng: StdRng::seed_from_u64(seed),
            noise_amplitude: 0.0,
        }
    }

    pub fn set_noise_amplitude(&mut self, amplitude: f32) {
        self.noise_amplitude = amplitude;
    }

    /// Apply a control signal: the position moves by
    /// `control_signal * process_gain`. Returns the new position.
    pub fn apply(&mut self, control_signal: f32) -> f32 {
        self.position += control_signal * self.process_gain;
        self.position
    }

    /// Read the current position, with seeded noise when an amplitude is set.
    pub fn measure(&mut self) -> f32 {
        if self.noise_amplitude > 0.0 {
            let noise = self
                .rng
                .gen_range(-self.noise_amplitude..self.noise_amplitude);
            self.position + noise
        } else {
            self.position
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Shift the position by an external disturbance.
    pub fn inject_disturbance(&mut self, delta: f32) {
        self.position += delta;
    }
}

//! PID controller - the control law driving the simulated loop

/// Extra scaling applied to the derivative term on top of `kd`.
///
/// Kept as its own constant rather than folded into the gain so the gain
/// values stay directly comparable with the reference tuning.
pub const DERIVATIVE_SCALE: f32 = 0.1;

/// Controller gains, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct PidGains {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}

impl Default for PidGains {
    fn default() -> Self {
        // Reference tuning
        Self {
            kp: 2.0,
            ki: 0.2,
            kd: 0.02,
        }
    }
}

pub struct PidController {
    gains: PidGains,
    integral: f32,
    // Most recent measurement, not the error. The derivative on the next
    // step is taken against this value, so a steady zero-error input does
    // not keep the derivative at zero from the second call on.
    prev_sample: f32,
    last_error: f32,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            integral: 0.0,
            prev_sample: 0.0,
            last_error: 0.0,
        }
    }

    /// Compute the control signal for one timestep and update internal state.
    ///
    /// Error is measured-minus-setpoint; the integral accumulates the raw
    /// error with no anti-windup clamp.
    pub fn step(&mut self, setpoint: f32, measured_value: f32) -> f32 {
        let error = measured_value - setpoint;
        self.last_error = error;

        self.integral += error;

        let derivative = error - self.prev_sample;

        let output = self.gains.kp * error
            + self.gains.ki * self.integral
            + self.gains.kd * derivative * DERIVATIVE_SCALE;

        self.prev_sample = measured_value;

        output
    }

    pub fn integral(&self) -> f32 {
        self.integral
    }

    pub fn prev_sample(&self) -> f32 {
        self.prev_sample
    }

    pub fn last_error(&self) -> f32 {
        self.last_error
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_sample = 0.0;
        self.last_error = 0.0;
    }
}

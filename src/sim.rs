//! Simulation module - the loop that drives controller and plant

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::controller::{PidController, PidGains};
use crate::metrics::LoopMetrics;
use crate::plant::MotorPlant;

/// One report row: the iteration index, the control signal computed that
/// iteration, and the measured value fed to the controller.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord {
    pub iteration: u32,
    pub control_signal: f32,
    pub position: f32,
}

// ============================================================================
// DIAGNOSTIC LOG - bounded in-memory diagnostics
// ============================================================================

pub struct DiagnosticLog {
    entries: VecDeque<String>,
    max_size: usize,
}

impl DiagnosticLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn write(&mut self, message: String) {
        self.entries.push_back(message);
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    pub fn read_all(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

// ============================================================================
// SIMULATION DRIVER - iterate the control loop over the plant
// ============================================================================

pub struct SimulationSummary {
    pub trace: Vec<StepRecord>,
    pub final_position: f32,
    pub diagnostics: Vec<String>,
}

pub struct SimulationDriver {
    config: SimConfig,
    controller: PidController,
    plant: MotorPlant,
    diagnostics: DiagnosticLog,
}

impl SimulationDriver {
    pub fn new(config: SimConfig) -> Self {
        let controller = PidController::new(PidGains {
            kp: config.kp,
            ki: config.ki,
            kd: config.kd,
        });
        let mut plant = MotorPlant::new(
            config.initial_position,
            config.process_gain,
            config.noise_seed,
        );
        plant.set_noise_amplitude(config.noise_amplitude);

        Self {
            config,
            controller,
            plant,
            diagnostics: DiagnosticLog::new(200),
        }
    }

    /// Run the configured number of timesteps and collect the trace.
    pub fn run(&mut self, metrics: &mut LoopMetrics) -> SimulationSummary {
        let mut trace = Vec::with_capacity(self.config.num_iterations as usize);
        let mut windup_flagged = false;

        for iteration in 0..self.config.num_iterations {
            let step_start = Instant::now();

            let measured = self.plant.measure();
            let control = self.controller.step(self.config.setpoint, measured);
            self.plant.apply(control);

            metrics.record_step(step_start.elapsed());

            trace.push(StepRecord {
                iteration,
                control_signal: control,
                position: measured,
            });

            if !windup_flagged
                && self.controller.integral().abs() > self.config.integral_warn_threshold
            {
                self.diagnostics.write(format!(
                    "[CONTROL] Integral windup at iteration {}: |{:.2}| > {:.2}",
                    iteration,
                    self.controller.integral(),
                    self.config.integral_warn_threshold
                ));
                windup_flagged = true;
            }

            if iteration % 25 == 0 {
                self.diagnostics.write(format!(
                    "[LOOP] Iteration {}: error {:.2}, control {:.2}",
                    iteration,
                    self.controller.last_error(),
                    control
                ));
            }

            if self.config.step_delay_ms > 0 {
                thread::sleep(Duration::from_millis(self.config.step_delay_ms));
            }
        }

        SimulationSummary {
            trace,
            final_position: self.plant.position(),
            diagnostics: self.diagnostics.read_all(),
        }
    }
}

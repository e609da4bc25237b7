pub mod analysis;
pub mod config;
pub mod controller;
pub mod metrics;
pub mod plant;
pub mod sim;

pub use config::{load_config, SimConfig};
pub use controller::{PidController, PidGains, DERIVATIVE_SCALE};
pub use metrics::{LoopMetrics, MetricsReport};
pub use plant::MotorPlant;
pub use sim::{SimulationDriver, SimulationSummary, StepRecord};

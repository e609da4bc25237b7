use pid_loop_sim::analysis::generate_response_chart;
use pid_loop_sim::{load_config, LoopMetrics, SimulationDriver};

fn main() {
    println!("===========================================");
    println!("Starting Single-Loop PID Simulation");
    println!("===========================================\n");

    let cfg = load_config("config/sim_config.toml");
    println!(
        "Gains: kp={}, ki={}, kd={} | Setpoint: {} | Iterations: {}\n",
        cfg.kp, cfg.ki, cfg.kd, cfg.setpoint, cfg.num_iterations
    );

    let mut metrics = LoopMetrics::new();
    let mut driver = SimulationDriver::new(cfg.clone());
    let summary = driver.run(&mut metrics);

    for record in &summary.trace {
        println!(
            "Iteration {}: Control Signal = {:.3}, Current Position = {:.3}",
            record.iteration, record.control_signal, record.position
        );
    }

    println!("\n===========================================");
    println!("FINAL SIMULATION RESULTS");
    println!("===========================================");
    println!("Final Position: {:.3}", summary.final_position);
    println!("Setpoint: {:.3}", cfg.setpoint);
    println!(
        "Residual Error: {:.3}",
        summary.final_position - cfg.setpoint
    );

    if !summary.diagnostics.is_empty() {
        println!("\n=== Diagnostics ===");
        for entry in &summary.diagnostics {
            println!("{}", entry);
        }
    }

    let report = metrics.report();
    println!("\n=== Performance Metrics ===");
    println!("Steps: {}", report.total_steps);
    println!(
        "Step P50: {:?}, P99: {:?}, Max: {:?}",
        report.step_p50, report.step_p99, report.step_max
    );

    if let Some(path) = &cfg.chart_path {
        match generate_response_chart(&summary.trace, cfg.setpoint, path) {
            Ok(()) => println!("\nResponse chart written to {}", path),
            Err(e) => println!("\n[CHART] Rendering failed: {}", e),
        }
    }
}

use criterion::{criterion_group, criterion_main, Criterion};
use pid_loop_sim::{LoopMetrics, PidController, PidGains, SimConfig, SimulationDriver};

fn benchmark_pid_step(c: &mut Criterion) {
    let mut pid = PidController::new(PidGains::default());
    c.bench_function("pid_step", |b| b.iter(|| pid.step(100.0, 48.0)));
}

fn benchmark_full_run(c: &mut Criterion) {
    c.bench_function("sim_run_100", |b| {
        b.iter(|| {
            let mut metrics = LoopMetrics::new();
            let mut driver = SimulationDriver::new(SimConfig::default());
            driver.run(&mut metrics)
        })
    });
}

criterion_group!(benches, benchmark_pid_step, benchmark_full_run);
criterion_main!(benches);

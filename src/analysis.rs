//! Analysis module - chart rendering for a finished run

use crate::sim::StepRecord;
use plotters::prelude::*;

/// Render the measured position against the setpoint over the run.
pub fn generate_response_chart(
    trace: &[StepRecord],
    setpoint: f32,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let samples: Vec<(f64, f64)> = trace
        .iter()
        .filter(|r| r.position.is_finite())
        .map(|r| (r.iteration as f64, r.position as f64))
        .collect();

    let n = trace.len().max(1) as f64;
    let mut min_y = setpoint as f64;
    let mut max_y = setpoint as f64;
    for &(_, y) in &samples {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    let pad = ((max_y - min_y) * 0.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Loop Response", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..n, (min_y - pad)..(max_y + pad))?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Position")
        .draw()?;

    chart.draw_series(LineSeries::new(samples, &RED))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, setpoint as f64), (n, setpoint as f64)],
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

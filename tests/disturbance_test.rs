use pid_loop_sim::MotorPlant;

#[test]
fn disturbance_shifts_measurement() {
    let mut plant = MotorPlant::new(0.0, 0.05, 1);
    let before = plant.measure();
    plant.inject_disturbance(5.0);
    let after = plant.measure();
    assert_eq!(after - before, 5.0);
}

#[test]
fn noisy_measurement_stays_bounded() {
    let mut plant = MotorPlant::new(20.0, 0.05, 7);
    plant.set_noise_amplitude(2.0);

    for _ in 0..200 {
        let measured = plant.measure();
        assert!(
            (measured - 20.0).abs() < 2.0,
            "Noise should stay within the configured amplitude"
        );
    }
}

#[test]
fn noise_is_reproducible_per_seed() {
    let mut a = MotorPlant::new(0.0, 0.05, 99);
    let mut b = MotorPlant::new(0.0, 0.05, 99);
    a.set_noise_amplitude(1.0);
    b.set_noise_amplitude(1.0);

    for _ in 0..50 {
        assert_eq!(a.measure(), b.measure(), "Same seed should give the same noise");
    }
}

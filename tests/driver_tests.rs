//! Integration tests for the per-frame animation driver.

use starfield::{twinkle_alpha, Driver, DriverConfig, TimeStep, Vec3};

fn driver(timing: TimeStep) -> Driver {
    let config = DriverConfig {
        timing,
        ..DriverConfig::default()
    };
    Driver::new(&config, 800, 600)
}

#[test]
fn test_first_frame_scenario() {
    let mut d = driver(TimeStep::PerFrame);
    // Cursor 100px right of and 50px below the centre of an 800x600 window
    d.on_cursor_moved(500.0, 350.0);
    d.step(1.0 / 60.0);

    let position = d.viewpoint().position;
    assert!((position.x - 0.5).abs() < 1e-5);
    assert!((position.y + 0.25).abs() < 1e-5);
    assert_eq!(position.z, 400.0);
}

#[test]
fn test_parallax_is_density_independent() {
    // Same 800x600 logical window as above, on a 2x display
    let mut d = Driver::new(&DriverConfig::default(), 1600, 1200);
    d.set_scale_factor(2.0);
    d.on_cursor_moved(1000.0, 700.0);
    d.step(1.0 / 60.0);

    let position = d.viewpoint().position;
    assert!((position.x - 0.5).abs() < 1e-5);
    assert!((position.y + 0.25).abs() < 1e-5);
}

#[test]
fn test_twinkle_starts_at_mean() {
    let d = driver(TimeStep::PerFrame);
    assert!((twinkle_alpha(d.time(), 0.0) - 0.7).abs() < 1e-6);
}

#[test]
fn test_easing_converges_without_overshoot() {
    let mut d = driver(TimeStep::PerFrame);
    d.on_cursor_moved(500.0, 350.0);

    for _ in 0..5000 {
        d.step(0.0);
        let p = d.viewpoint().position;
        assert!(p.x <= 100.0 && p.x >= 0.0);
        assert!(p.y >= -50.0 && p.y <= 0.0);
    }

    let p = d.viewpoint().position;
    assert!((p.x - 100.0).abs() < 0.01);
    assert!((p.y + 50.0).abs() < 0.01);
}

#[test]
fn test_drift_is_frame_linear() {
    let mut d = driver(TimeStep::PerFrame);
    for _ in 0..1000 {
        d.step(0.25);
    }

    assert!((d.drift().x - 1000.0 * 0.0002).abs() < 1e-4);
    assert!((d.drift().y - 1000.0 * 0.0005).abs() < 1e-4);
    assert!((d.time() - 1000.0 * 0.02).abs() < 1e-3);
    assert_eq!(d.frame(), 1000);
}

#[test]
fn test_per_second_matches_per_frame_at_reference_rate() {
    let mut per_frame = driver(TimeStep::PerFrame);
    let mut per_second = driver(TimeStep::PerSecond { reference_fps: 60.0 });
    let mut half_rate = driver(TimeStep::PerSecond { reference_fps: 60.0 });
    for d in [&mut per_frame, &mut per_second, &mut half_rate] {
        d.on_cursor_moved(700.0, 100.0);
    }

    for _ in 0..120 {
        per_frame.step(0.0);
        per_second.step(1.0 / 60.0);
    }
    for _ in 0..60 {
        half_rate.step(1.0 / 30.0);
    }

    for d in [&per_second, &half_rate] {
        assert!((d.time() - per_frame.time()).abs() < 1e-3);
        assert!((d.drift().y - per_frame.drift().y).abs() < 1e-4);
        let gap = d.viewpoint().position - per_frame.viewpoint().position;
        assert!(gap.length() < 0.05, "camera off by {gap}");
    }
}

#[test]
fn test_uniforms_follow_state() {
    let mut d = driver(TimeStep::PerFrame);
    let uniforms = d.step(0.0);

    assert_eq!(uniforms.time, d.time());
    assert_eq!(uniforms.viewport, [800.0, 600.0]);
    assert_eq!(uniforms.size_attenuation, 300.0);

    // The origin sits straight ahead of the camera, 400 units away
    let model_view = glam::Mat4::from_cols_array_2d(&uniforms.model_view);
    let origin = model_view.transform_point3(Vec3::ZERO);
    assert!(origin.truncate().length() < 1e-3);
    assert!((origin.z + 400.0).abs() < 1e-2);
}

// Host-side tests for the background star field simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}

use field::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(width: f64) -> StarField {
    StarField::new(&mut StdRng::seed_from_u64(42), width)
}

#[test]
fn starfield_count_switches_at_mobile_threshold() {
    assert_eq!(starfield_count(767.0), 200);
    assert_eq!(starfield_count(767.9), 200);
    assert_eq!(starfield_count(768.0), 800);
    assert_eq!(starfield_count(1920.0), 800);
}

#[test]
fn layer_sizes_match_viewport() {
    let mobile = make_field(375.0);
    assert_eq!(mobile.starfield.len(), STARFIELD_COUNT_MOBILE);
    let desktop = make_field(1440.0);
    assert_eq!(desktop.starfield.len(), STARFIELD_COUNT_DESKTOP);
    for f in [&mobile, &desktop] {
        assert_eq!(f.nebula.len(), NEBULA_COUNT);
        assert_eq!(f.constellation.len(), CONSTELLATION_COUNT);
        assert_eq!(f.ambient.len(), AMBIENT_COUNT);
        for layer in f.layers() {
            assert_eq!(layer.colors.len(), layer.len());
            assert_eq!(layer.sizes.len(), layer.len());
        }
    }
}

#[test]
fn only_nebula_drifts() {
    let f = make_field(1024.0);
    assert_eq!(f.nebula.velocities.as_ref().map(Vec::len), Some(NEBULA_COUNT));
    assert!(f.starfield.velocities.is_none());
    assert!(f.constellation.velocities.is_none());
    assert!(f.ambient.velocities.is_none());
}

#[test]
fn buffers_keep_their_size_over_many_frames() {
    let mut f = make_field(1024.0);
    let before: Vec<usize> = f.layers().iter().map(|l| l.len()).collect();
    for _ in 0..5_000 {
        f.step();
    }
    let after: Vec<usize> = f.layers().iter().map(|l| l.len()).collect();
    assert_eq!(before, after);
    assert_eq!(f.frame, 5_000);
}

#[test]
fn nebula_stays_near_its_extents() {
    let mut f = make_field(1024.0);
    for p in &f.nebula.positions {
        assert!(p.z <= 0.0 && p.z >= -NEBULA_EXTENT.z);
    }
    let max_speed = Vec3::new(NEBULA_DRIFT_XY, NEBULA_DRIFT_XY, NEBULA_DRIFT_Z) * 0.5;
    for _ in 0..50_000 {
        f.step();
        for p in &f.nebula.positions {
            assert!(p.x.abs() <= NEBULA_EXTENT.x + max_speed.x + 1e-5);
            assert!(p.y.abs() <= NEBULA_EXTENT.y + max_speed.y + 1e-5);
            assert!(p.z.abs() <= NEBULA_EXTENT.z + max_speed.z + 1e-5);
        }
    }
}

#[test]
fn drift_reflects_outward_velocity() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut layer = PointLayer::nebula(&mut rng);
    layer.positions[0] = Vec3::new(NEBULA_EXTENT.x - 0.0005, 0.0, -1.0);
    layer.velocities.as_mut().unwrap()[0] = Vec3::new(0.001, 0.0, 0.0);
    layer.drift();
    assert!(layer.positions[0].x > NEBULA_EXTENT.x);
    assert!(layer.velocities.as_ref().unwrap()[0].x < 0.0);
    layer.drift();
    assert!(layer.positions[0].x < NEBULA_EXTENT.x);
    // heading inward again: no second flip
    assert!(layer.velocities.as_ref().unwrap()[0].x < 0.0);
}

#[test]
fn drift_is_a_noop_without_velocities() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut layer = PointLayer::ambient(&mut rng);
    let before = layer.positions.clone();
    layer.drift();
    assert_eq!(layer.positions, before);
}

#[test]
fn time_advances_by_fixed_step() {
    let mut f = make_field(1024.0);
    for _ in 0..1000 {
        f.step();
    }
    assert!((f.time - 1000.0 * TIME_STEP).abs() < 1e-4);
}

#[test]
fn cursor_aim_maps_client_pixels_to_ndc() {
    let mut c = Cursor::default();
    c.aim_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!((c.target_x, c.target_y), (-1.0, 1.0));
    c.aim_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!((c.target_x, c.target_y), (0.0, 0.0));
    c.aim_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!((c.target_x, c.target_y), (1.0, -1.0));
    c.aim_client(5000.0, -50.0, 800.0, 600.0);
    assert_eq!((c.target_x, c.target_y), (1.0, 1.0));
    // degenerate viewport leaves the target alone
    c.aim_client(10.0, 10.0, 0.0, 600.0);
    assert_eq!((c.target_x, c.target_y), (1.0, 1.0));
}

#[test]
fn cursor_eases_three_percent_per_frame() {
    let mut c = Cursor {
        target_x: 1.0,
        target_y: -1.0,
        ..Cursor::default()
    };
    c.ease();
    assert!((c.x - 0.03).abs() < 1e-6);
    assert!((c.y + 0.03).abs() < 1e-6);
    for _ in 0..1000 {
        c.ease();
    }
    assert!((c.x - 1.0).abs() < 1e-4);
    assert!((c.y + 1.0).abs() < 1e-4);
}

#[test]
fn constellation_pulse_stays_in_range() {
    let mut t = 0.0f32;
    while t < 10.0 {
        let o = constellation_pulse(t);
        assert!((0.6 - 1e-6..=1.0 + 1e-6).contains(&o));
        t += 0.01;
    }
    assert!((constellation_pulse(0.0) - 0.8).abs() < 1e-6);
}

#[test]
fn parallax_follows_eased_cursor() {
    let mut f = make_field(1024.0);
    f.cursor.target_x = 1.0;
    f.cursor.target_y = 0.5;
    for _ in 0..2000 {
        f.step();
    }
    let (mx, my) = (f.cursor.x, f.cursor.y);
    assert!((mx - 1.0).abs() < 1e-3);
    assert!((f.starfield.pose.offset.x - mx * STARFIELD_PARALLAX.1).abs() < 1e-5);
    assert!((f.starfield.pose.rotation.x - my * STARFIELD_PARALLAX.0).abs() < 1e-5);
    assert!((f.constellation.pose.offset.y - my * CONSTELLATION_PARALLAX.1).abs() < 1e-5);
    assert!((f.ambient.pose.offset.x - mx * AMBIENT_PARALLAX.1).abs() < 1e-5);
    assert!((f.nebula.pose.rotation.z - mx * NEBULA_ROLL).abs() < 1e-5);
    assert!((f.constellation.pose.opacity - constellation_pulse(f.time)).abs() < 1e-6);
    // nearer layers move further than the ambient dust
    assert!(f.starfield.pose.offset.x > f.ambient.pose.offset.x);
}

#[test]
fn camera_sits_on_axis_at_rest_and_dollies_with_cursor() {
    let mut f = make_field(1024.0);
    assert_eq!(f.camera_eye(), Vec3::new(0.0, 0.0, CAMERA_BASE_Z));
    f.cursor.x = 1.0;
    f.cursor.y = -1.0;
    let eye = f.camera_eye();
    assert_eq!(eye, Vec3::new(CAMERA_PARALLAX, -CAMERA_PARALLAX, CAMERA_BASE_Z + CAMERA_DOLLY));
}

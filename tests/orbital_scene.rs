// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use orbit_folio::components::solar_system::{Camera, OrbitalScene, SceneConfig};
use proptest::prelude::*;

fn scene(seed: u64) -> OrbitalScene {
	let mut config = SceneConfig::default();
	config.starfield.count = 16;
	OrbitalScene::generate(&config, &mut fastrand::Rng::with_seed(seed))
}

proptest! {
	#[test]
	fn body_angle_is_phase_plus_speed_times_t(seed in any::<u64>(), t in -1.0e4f64..1.0e4) {
		let scene = scene(seed);
		for (i, body) in scene.bodies.iter().enumerate() {
			prop_assert_eq!(scene.body_angle(i, t), Some(body.phase + t * body.angular_speed));
			prop_assert_eq!(scene.body_spin(i, t), Some(t * body.spin_rate));
		}
		prop_assert_eq!(scene.body_angle(scene.bodies.len(), t), None);
	}

	#[test]
	fn bodies_stay_on_their_orbits(seed in any::<u64>(), t in 0.0f64..1.0e3) {
		let scene = scene(seed);
		for (i, body) in scene.bodies.iter().enumerate() {
			let p = scene.body_position(i, t).unwrap();
			let r = (p.x * p.x + p.z * p.z).sqrt();
			prop_assert!((r - body.distance).abs() < 1e-9);
			prop_assert_eq!(p.y, 0.0);
		}
	}

	#[test]
	fn same_seed_same_scene(seed in any::<u64>()) {
		prop_assert_eq!(scene(seed), scene(seed));
	}
}

#[test]
fn the_sun_projects_near_the_canvas_center() {
	let scene = scene(1);
	let frame = scene.frame(0.0);
	let projected = Camera::default()
		.project(frame.sun_position, 800.0, 600.0)
		.unwrap();
	assert!((projected.x - 400.0).abs() < 1.0);
	assert!((projected.y - 300.0).abs() < 60.0);
}

#[test]
fn every_default_planet_is_in_front_of_the_camera() {
	let scene = scene(9);
	let camera = Camera::default();
	for t in [0.0, 1.5, 12.0, 90.0] {
		let frame = scene.frame(t);
		assert_eq!(frame.bodies.len(), 4);
		for pose in &frame.bodies {
			assert!(camera.project(pose.position, 1280.0, 800.0).is_some());
		}
	}
}

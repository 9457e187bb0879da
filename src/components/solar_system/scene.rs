//! Procedural orbital scene.
//!
//! Everything random is drawn once in [`OrbitalScene::generate`]. After that
//! the scene is a pure function of elapsed time: [`OrbitalScene::frame`]
//! returns the same snapshot for the same `t`, however many frames were
//! skipped in between.

use std::f64::consts::{PI, TAU};

use glam::DVec3;
use serde::Deserialize;

use crate::components::effects::particles::Span;
use crate::theme::Color;

/// Flat ring around a planet, in world units.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RingConfig {
	pub inner: f64,
	pub outer: f64,
	/// Tilt around the x axis, in radians.
	pub tilt: f64,
	pub color: Color,
}

/// Satellite orbiting a planet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MoonConfig {
	pub radius: f64,
	pub distance: f64,
	/// Radians per second around the parent.
	pub speed: f64,
	pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanetConfig {
	pub radius: f64,
	/// Orbit radius around the sun.
	pub distance: f64,
	/// Radians per second around the sun.
	pub speed: f64,
	pub color: Color,
	#[serde(default)]
	pub ring: Option<RingConfig>,
	#[serde(default)]
	pub moon: Option<MoonConfig>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SunConfig {
	pub radius: f64,
	pub color: Color,
	/// Self-rotation, radians per second.
	pub spin: f64,
	pub float_speed: f64,
	/// Peak vertical bob, in world units.
	pub float_intensity: f64,
}

impl Default for SunConfig {
	fn default() -> Self {
		Self {
			radius: 1.2,
			color: Color::rgb(0x00, 0xd4, 0xff),
			spin: 0.12,
			float_speed: 2.0,
			float_intensity: 0.5,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeltConfig {
	pub count: usize,
	/// Orbit radius range.
	pub radius: Span,
	/// Vertical jitter, `+-height`.
	pub height: f64,
	pub scale: Span,
	/// Rotation of the whole belt, radians per second.
	pub speed: f64,
	pub color: Color,
}

impl Default for BeltConfig {
	fn default() -> Self {
		Self {
			count: 120,
			radius: Span::new(5.2, 5.9),
			height: 0.15,
			scale: Span::new(0.02, 0.07),
			speed: 0.05,
			color: Color::rgb(0x94, 0xa3, 0xb8),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShootingStarConfig {
	pub count: usize,
	/// Seconds between passes of the same star.
	pub period: f64,
	/// Fraction of the period during which the star is visible.
	pub visible_fraction: f64,
	/// Distance covered during one pass.
	pub length: f64,
}

impl Default for ShootingStarConfig {
	fn default() -> Self {
		Self {
			count: 3,
			period: 5.0,
			visible_fraction: 0.3,
			length: 6.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	pub count: usize,
	/// Inner radius of the star shell.
	pub radius: f64,
	/// Thickness of the star shell.
	pub depth: f64,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			count: 2000,
			radius: 50.0,
			depth: 50.0,
		}
	}
}

/// Everything that shapes a generated scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	pub sun: SunConfig,
	pub planets: Vec<PlanetConfig>,
	/// Planet self-rotation, radians per second.
	pub planet_spin: f64,
	/// Randomize starting angles. When false every body starts at angle 0.
	pub random_phases: bool,
	pub belt: Option<BeltConfig>,
	pub shooting_stars: ShootingStarConfig,
	pub starfield: StarfieldConfig,
	/// Segments per projected orbit line.
	pub orbit_segments: usize,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			sun: SunConfig::default(),
			planets: vec![
				PlanetConfig {
					radius: 0.3,
					distance: 3.0,
					speed: 0.5,
					color: Color::rgb(0xa8, 0x55, 0xf7),
					ring: None,
					moon: None,
				},
				PlanetConfig {
					radius: 0.4,
					distance: 4.5,
					speed: 0.35,
					color: Color::rgb(0xec, 0x48, 0x99),
					ring: None,
					moon: Some(MoonConfig {
						radius: 0.08,
						distance: 0.7,
						speed: 1.6,
						color: Color::rgb(0xe2, 0xe8, 0xf0),
					}),
				},
				PlanetConfig {
					radius: 0.35,
					distance: 6.5,
					speed: 0.25,
					color: Color::rgb(0x06, 0xb6, 0xd4),
					ring: Some(RingConfig {
						inner: 0.5,
						outer: 0.75,
						tilt: 0.4,
						color: Color::rgba(0x06, 0xb6, 0xd4, 0.35),
					}),
					moon: None,
				},
				PlanetConfig {
					radius: 0.25,
					distance: 8.5,
					speed: 0.15,
					color: Color::rgb(0x10, 0xb9, 0x81),
					ring: None,
					moon: None,
				},
			],
			planet_spin: 0.6,
			random_phases: true,
			belt: Some(BeltConfig::default()),
			shooting_stars: ShootingStarConfig::default(),
			starfield: StarfieldConfig::default(),
			orbit_segments: 64,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Moon {
	pub radius: f64,
	pub distance: f64,
	pub angular_speed: f64,
	pub phase: f64,
	pub color: Color,
}

/// A planet on a circular orbit in the y = 0 plane.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingBody {
	pub radius: f64,
	pub distance: f64,
	pub angular_speed: f64,
	pub spin_rate: f64,
	pub phase: f64,
	pub color: Color,
	pub ring: Option<RingConfig>,
	pub moon: Option<Moon>,
}

impl OrbitingBody {
	pub fn angle(&self, t: f64) -> f64 {
		self.phase + t * self.angular_speed
	}

	pub fn spin(&self, t: f64) -> f64 {
		t * self.spin_rate
	}

	/// World position at `t`. Angles increase counter-clockwise seen from +y.
	pub fn position(&self, t: f64) -> DVec3 {
		orbit_point(self.distance, self.angle(t), 0.0)
	}

	pub fn moon_position(&self, t: f64) -> Option<DVec3> {
		let moon = self.moon.as_ref()?;
		let angle = moon.phase + t * moon.angular_speed;
		Some(self.position(t) + orbit_point(moon.distance, angle, 0.0))
	}
}

/// Point at `radius` and `angle` around the y axis, lifted by `y`.
pub fn orbit_point(radius: f64, angle: f64, y: f64) -> DVec3 {
	DVec3::new(radius * angle.cos(), y, -radius * angle.sin())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
	pub angle: f64,
	pub radius: f64,
	pub height: f64,
	pub scale: f64,
}

impl Asteroid {
	pub fn position(&self, belt_rotation: f64) -> DVec3 {
		orbit_point(self.radius, self.angle + belt_rotation, self.height)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
	pub start: DVec3,
	/// Unit vector.
	pub direction: DVec3,
	/// Seconds into the period at t = 0.
	pub offset: f64,
}

/// Visible segment of a shooting star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreakPose {
	pub head: DVec3,
	pub tail: DVec3,
	pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
	pub position: DVec3,
	pub size: f64,
	pub twinkle_phase: f64,
}

impl Star {
	/// Brightness in `[0.35, 1]`.
	pub fn brightness(&self, t: f64) -> f64 {
		0.675 + 0.325 * (t * 1.5 + self.twinkle_phase).sin()
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPose {
	pub position: DVec3,
	pub spin: f64,
	pub moon: Option<DVec3>,
}

/// Snapshot of the scene at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
	pub t: f64,
	pub sun_position: DVec3,
	pub sun_spin: f64,
	pub bodies: Vec<BodyPose>,
	pub belt_rotation: f64,
	pub streaks: Vec<Option<StreakPose>>,
}

/// Sun, planets, belt, shooting stars and starfield for one mount.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalScene {
	pub sun: SunConfig,
	pub bodies: Vec<OrbitingBody>,
	pub belt: Vec<Asteroid>,
	pub belt_speed: f64,
	pub belt_color: Color,
	pub shooting: ShootingStarConfig,
	pub shooting_stars: Vec<ShootingStar>,
	pub stars: Vec<Star>,
	pub orbit_segments: usize,
}

impl OrbitalScene {
	pub fn generate(config: &SceneConfig, rng: &mut fastrand::Rng) -> Self {
		let phase = |rng: &mut fastrand::Rng| {
			if config.random_phases {
				rng.f64() * TAU
			} else {
				0.0
			}
		};

		let bodies = config
			.planets
			.iter()
			.map(|p| OrbitingBody {
				radius: p.radius,
				distance: p.distance,
				angular_speed: p.speed,
				spin_rate: config.planet_spin,
				phase: phase(rng),
				color: p.color,
				ring: p.ring.clone(),
				moon: p.moon.as_ref().map(|m| Moon {
					radius: m.radius,
					distance: m.distance,
					angular_speed: m.speed,
					phase: phase(rng),
					color: m.color,
				}),
			})
			.collect();

		let (belt, belt_speed, belt_color) = match &config.belt {
			Some(b) => (
				(0..b.count)
					.map(|_| Asteroid {
						angle: rng.f64() * TAU,
						radius: b.radius.sample(rng),
						height: (rng.f64() * 2.0 - 1.0) * b.height,
						scale: b.scale.sample(rng),
					})
					.collect(),
				b.speed,
				b.color,
			),
			None => (Vec::new(), 0.0, Color::rgb(0, 0, 0)),
		};

		let shooting_stars = (0..config.shooting_stars.count)
			.map(|_| {
				let start = DVec3::new(
					Span::new(-12.0, 12.0).sample(rng),
					Span::new(4.0, 9.0).sample(rng),
					Span::new(-12.0, -4.0).sample(rng),
				);
				let direction = DVec3::new(
					Span::new(-1.0, -0.5).sample(rng),
					Span::new(-0.5, -0.2).sample(rng),
					Span::new(0.0, 0.3).sample(rng),
				)
				.normalize_or_zero();
				ShootingStar {
					start,
					direction,
					offset: rng.f64() * config.shooting_stars.period,
				}
			})
			.collect();

		let sf = &config.starfield;
		let stars = (0..sf.count)
			.map(|_| {
				// Uniform direction on the sphere.
				let z = 1.0 - 2.0 * rng.f64();
				let azimuth = rng.f64() * TAU;
				let planar = (1.0 - z * z).max(0.0).sqrt();
				let r = sf.radius + rng.f64() * sf.depth;
				Star {
					position: DVec3::new(planar * azimuth.cos(), z, planar * azimuth.sin()) * r,
					size: Span::new(0.5, 1.6).sample(rng),
					twinkle_phase: rng.f64() * TAU,
				}
			})
			.collect();

		Self {
			sun: config.sun.clone(),
			bodies,
			belt,
			belt_speed,
			belt_color,
			shooting: config.shooting_stars.clone(),
			shooting_stars,
			stars,
			orbit_segments: config.orbit_segments.max(3),
		}
	}

	pub fn body_angle(&self, i: usize, t: f64) -> Option<f64> {
		self.bodies.get(i).map(|b| b.angle(t))
	}

	pub fn body_spin(&self, i: usize, t: f64) -> Option<f64> {
		self.bodies.get(i).map(|b| b.spin(t))
	}

	pub fn body_position(&self, i: usize, t: f64) -> Option<DVec3> {
		self.bodies.get(i).map(|b| b.position(t))
	}

	pub fn belt_rotation(&self, t: f64) -> f64 {
		t * self.belt_speed
	}

	/// Vertical bob of the sun.
	pub fn sun_offset(&self, t: f64) -> f64 {
		(t * self.sun.float_speed / 4.0).sin() / 10.0 * self.sun.float_intensity
	}

	pub fn sun_spin(&self, t: f64) -> f64 {
		t * self.sun.spin
	}

	/// Streak of shooting star `i` at `t`, or `None` while it is between passes.
	pub fn shooting_star(&self, i: usize, t: f64) -> Option<StreakPose> {
		let star = self.shooting_stars.get(i)?;
		let cfg = &self.shooting;
		let visible = cfg.period * cfg.visible_fraction.clamp(0.0, 1.0);
		if cfg.period <= 0.0 || visible <= 0.0 {
			return None;
		}
		let local = (t + star.offset).rem_euclid(cfg.period);
		if local >= visible {
			return None;
		}
		let progress = local / visible;
		let head = star.start + star.direction * cfg.length * progress;
		let trail = (cfg.length * progress).min(cfg.length * 0.25);
		Some(StreakPose {
			head,
			tail: head - star.direction * trail,
			opacity: (progress * PI).sin(),
		})
	}

	/// Points of the orbit line at `distance`, closed (first point repeated).
	pub fn orbit_line(&self, distance: f64) -> impl Iterator<Item = DVec3> + '_ {
		let n = self.orbit_segments;
		(0..=n).map(move |i| orbit_point(distance, i as f64 / n as f64 * TAU, 0.0))
	}

	pub fn frame(&self, t: f64) -> SceneFrame {
		SceneFrame {
			t,
			sun_position: DVec3::new(0.0, self.sun_offset(t), 0.0),
			sun_spin: self.sun_spin(t),
			bodies: self
				.bodies
				.iter()
				.map(|b| BodyPose {
					position: b.position(t),
					spin: b.spin(t),
					moon: b.moon_position(t),
				})
				.collect(),
			belt_rotation: self.belt_rotation(t),
			streaks: (0..self.shooting_stars.len())
				.map(|i| self.shooting_star(i, t))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scene(seed: u64) -> OrbitalScene {
		OrbitalScene::generate(&SceneConfig::default(), &mut fastrand::Rng::with_seed(seed))
	}

	#[test]
	fn default_scene_matches_layout() {
		let s = scene(1);
		let distances: Vec<f64> = s.bodies.iter().map(|b| b.distance).collect();
		assert_eq!(distances, vec![3.0, 4.5, 6.5, 8.5]);
		assert_eq!(s.belt.len(), 120);
		assert_eq!(s.stars.len(), 2000);
		assert_eq!(s.shooting_stars.len(), 3);
		assert_eq!(s.orbit_line(3.0).count(), 65);
	}

	#[test]
	fn fixed_phases_start_on_the_x_axis() {
		let config = SceneConfig {
			random_phases: false,
			..SceneConfig::default()
		};
		let s = OrbitalScene::generate(&config, &mut fastrand::Rng::with_seed(9));
		let p = s.body_position(0, 0.0).unwrap();
		assert!((p - DVec3::new(3.0, 0.0, 0.0)).length() < 1e-9);
		// Quarter turn later the planet sits at -z.
		let q = s.body_position(0, PI / 2.0 / 0.5).unwrap();
		assert!((q - DVec3::new(0.0, 0.0, -3.0)).length() < 1e-9);
	}

	#[test]
	fn frame_is_a_function_of_time() {
		let s = scene(3);
		assert_eq!(s.frame(12.5), s.frame(12.5));
		let before = s.belt.clone();
		let _ = s.frame(100.0);
		assert_eq!(s.belt, before);
	}

	#[test]
	fn belt_stays_within_bounds() {
		let s = scene(4);
		let cfg = BeltConfig::default();
		for a in &s.belt {
			assert!(cfg.radius.contains(a.radius));
			assert!(a.height.abs() <= cfg.height);
			let r = a.position(s.belt_rotation(33.0));
			let planar = (r.x * r.x + r.z * r.z).sqrt();
			assert!((planar - a.radius).abs() < 1e-9);
		}
	}

	#[test]
	fn shooting_stars_are_periodic_and_mostly_hidden() {
		let s = scene(5);
		for i in 0..s.shooting_stars.len() {
			let visible = (0..500)
				.filter(|k| s.shooting_star(i, *k as f64 * 0.01).is_some())
				.count();
			// 30% of a 5s period, sampled every 10ms.
			assert!((140..=160).contains(&visible), "visible samples: {visible}");
			let (a, b) = (s.shooting_star(i, 0.4), s.shooting_star(i, 5.4));
			assert_eq!(a.is_some(), b.is_some());
			if let (Some(a), Some(b)) = (a, b) {
				assert!((a.head - b.head).length() < 1e-6);
			}
		}
		assert_eq!(s.shooting_star(99, 0.0), None);
	}

	#[test]
	fn stars_lie_on_the_shell() {
		let s = scene(6);
		for star in &s.stars {
			let r = star.position.length();
			assert!((50.0..=100.0 + 1e-9).contains(&r));
			let b = star.brightness(2.0);
			assert!((0.35 - 1e-9..=1.0 + 1e-9).contains(&b));
		}
	}
}

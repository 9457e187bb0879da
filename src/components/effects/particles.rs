//! Randomized floating-orb particle fields.
//!
//! A field is generated once per mount from an injected RNG and never changes
//! afterwards. Motion is a pure function of time: each orb rises from just
//! below the viewport to above it, drifting sideways, and loops forever.

use serde::Deserialize;

use crate::theme::Color;

/// Sampling range, inclusive of `min` and exclusive of `max`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a value in `[min, max)`. A degenerate span always yields `min`.
	pub fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
		let v = self.min + rng.f64() * (self.max - self.min);
		// Rounding can land exactly on `max` for r close to 1.
		if v < self.max { v } else { self.min }
	}

	pub fn contains(&self, v: f64) -> bool {
		(v >= self.min && v < self.max) || v == self.min
	}
}

/// Particle field configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of orbs.
	pub count: usize,
	/// Diameter in pixels.
	pub size: Span,
	/// Seconds before an orb first appears.
	pub delay: Span,
	/// Seconds for one full rise.
	pub duration: Span,
	/// Extra travel beyond the viewport height, in pixels.
	pub margin: f64,
	/// Colors assigned round-robin by particle index.
	pub palette: Vec<Color>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 20,
			size: Span::new(3.0, 11.0),
			delay: Span::new(0.0, 10.0),
			duration: Span::new(20.0, 35.0),
			margin: 200.0,
			palette: vec![
				Color::rgba(59, 130, 246, 0.12),  // Blue
				Color::rgba(147, 51, 234, 0.10),  // Purple
				Color::rgba(20, 184, 166, 0.08),  // Teal
				Color::rgba(244, 63, 94, 0.08),   // Rose
			],
		}
	}
}

/// Travel used when the viewport height is unknown at generation time.
pub const FALLBACK_TRAVEL: f64 = 1000.0;

/// Opacity keyframes, evenly spaced over one rise.
const OPACITY_KEYS: [f64; 4] = [0.0, 0.8, 0.8, 0.0];

/// A single floating orb.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	pub size: f64,
	/// Horizontal position as a percentage of viewport width, in `[0, 100)`.
	pub left: f64,
	pub color: Color,
	pub delay: f64,
	pub duration: f64,
	/// Horizontal offset reached at the top of the rise, in pixels.
	pub drift: f64,
}

/// Where an orb is at a given moment, relative to its start point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePose {
	/// Upward distance travelled, in pixels.
	pub rise: f64,
	pub drift: f64,
	pub opacity: f64,
}

impl Particle {
	/// Distance to travel so the orb fully clears the viewport.
	pub fn travel(&self, viewport_height: Option<f64>, margin: f64) -> f64 {
		match viewport_height {
			Some(h) if h > 0.0 => h + self.size + margin,
			_ => FALLBACK_TRAVEL,
		}
	}

	/// Fraction of the current loop completed at `t` seconds, or `None` while
	/// the orb is still waiting out its delay.
	pub fn phase(&self, t: f64) -> Option<f64> {
		let local = t - self.delay;
		if local < 0.0 {
			return None;
		}
		if self.duration <= 0.0 {
			return Some(0.0);
		}
		Some(local.rem_euclid(self.duration) / self.duration)
	}

	/// Pose at `t` seconds for a rise of `travel` pixels.
	pub fn sample(&self, t: f64, travel: f64) -> Option<ParticlePose> {
		let phase = self.phase(t)?;
		Some(ParticlePose {
			rise: travel * phase,
			drift: self.drift * phase,
			opacity: keyframe_opacity(phase),
		})
	}
}

/// Piecewise-linear interpolation over [`OPACITY_KEYS`].
pub fn keyframe_opacity(phase: f64) -> f64 {
	let segments = (OPACITY_KEYS.len() - 1) as f64;
	let scaled = phase.clamp(0.0, 1.0) * segments;
	let i = (scaled.floor() as usize).min(OPACITY_KEYS.len() - 2);
	let t = scaled - i as f64;
	OPACITY_KEYS[i] + (OPACITY_KEYS[i + 1] - OPACITY_KEYS[i]) * t
}

/// Generate `config.count` particles.
pub fn generate(config: &FieldConfig, rng: &mut fastrand::Rng) -> Vec<Particle> {
	let fallback = Color::rgba(255, 255, 255, 0.08);
	(0..config.count)
		.map(|id| Particle {
			id,
			size: config.size.sample(rng),
			left: Span::new(0.0, 100.0).sample(rng),
			color: config
				.palette
				.get(id % config.palette.len().max(1))
				.copied()
				.unwrap_or(fallback),
			delay: config.delay.sample(rng),
			duration: config.duration.sample(rng),
			drift: (id as f64 * 0.5).sin() * 40.0,
		})
		.collect()
}

//! Canvas rendering for the orbital scene.
//!
//! Drawing happens in passes, back to front:
//! 1. Starfield (screen space, twinkling)
//! 2. Orbit lines
//! 3. Sun, planets, moons and asteroids, sorted by depth
//! 4. Shooting stars on top

use std::f64::consts::PI;

use glam::DVec3;
use web_sys::CanvasRenderingContext2d;

use super::camera::{Camera, Projected};
use super::scene::{OrbitalScene, RingConfig, SceneFrame, orbit_point};
use crate::theme::{Color, Theme};

/// Which body a depth-sorted sprite stands for.
#[derive(Clone, Copy)]
enum Sprite<'a> {
	Sun,
	Ringed(&'a RingConfig, DVec3, Color, f64),
	Plain(Color, f64),
}

/// Renders one frame of the scene onto a transparent canvas.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	scene: &OrbitalScene,
	frame: &SceneFrame,
	camera: &Camera,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);

	draw_stars(ctx, scene, frame.t, camera, theme, width, height);
	draw_orbits(ctx, scene, camera, theme, width, height);

	let mut sprites: Vec<(Projected, f64, Sprite<'_>)> = Vec::new();
	if let Some(p) = camera.project(frame.sun_position, width, height) {
		sprites.push((p, scene.sun.radius, Sprite::Sun));
	}
	for (body, pose) in scene.bodies.iter().zip(&frame.bodies) {
		if let Some(p) = camera.project(pose.position, width, height) {
			let sprite = match &body.ring {
				Some(ring) => Sprite::Ringed(ring, pose.position, body.color, pose.spin),
				None => Sprite::Plain(body.color, pose.spin),
			};
			sprites.push((p, body.radius, sprite));
		}
		if let (Some(moon), Some(pos)) = (&body.moon, pose.moon) {
			if let Some(p) = camera.project(pos, width, height) {
				sprites.push((p, moon.radius, Sprite::Plain(moon.color, 0.0)));
			}
		}
	}
	for asteroid in &scene.belt {
		let pos = asteroid.position(frame.belt_rotation);
		if let Some(p) = camera.project(pos, width, height) {
			sprites.push((p, asteroid.scale, Sprite::Plain(scene.belt_color, 0.0)));
		}
	}

	// Farthest first.
	sprites.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

	for (p, radius, sprite) in &sprites {
		match sprite {
			Sprite::Sun => draw_sun(ctx, scene, frame.sun_spin, p, *radius),
			Sprite::Ringed(ring, center, color, spin) => {
				draw_ring(ctx, ring, *center, camera, width, height, true);
				draw_sphere(ctx, p, *radius, *color, *spin);
				draw_ring(ctx, ring, *center, camera, width, height, false);
			}
			Sprite::Plain(color, spin) => draw_sphere(ctx, p, *radius, *color, *spin),
		}
	}

	draw_streaks(ctx, frame, camera, theme, width, height);
}

fn draw_stars(
	ctx: &CanvasRenderingContext2d,
	scene: &OrbitalScene,
	t: f64,
	camera: &Camera,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	let c = theme.starlight;
	for star in &scene.stars {
		let Some(p) = camera.project(star.position, width, height) else {
			continue;
		};
		if p.x < 0.0 || p.y < 0.0 || p.x > width || p.y > height {
			continue;
		}
		// Farther stars are dimmer.
		let fade = (1.0 - (p.depth - 40.0) / 80.0).clamp(0.2, 1.0);
		ctx.set_fill_style_str(&c.with_alpha(star.brightness(t) * fade).to_css());
		let s = star.size;
		ctx.fill_rect(p.x - s / 2.0, p.y - s / 2.0, s, s);
	}
}

fn draw_orbits(
	ctx: &CanvasRenderingContext2d,
	scene: &OrbitalScene,
	camera: &Camera,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	ctx.set_stroke_style_str(&theme.orbit_line.to_css());
	ctx.set_line_width(1.0);
	for body in &scene.bodies {
		ctx.begin_path();
		let mut started = false;
		for point in scene.orbit_line(body.distance) {
			match camera.project(point, width, height) {
				Some(p) if started => ctx.line_to(p.x, p.y),
				Some(p) => {
					ctx.move_to(p.x, p.y);
					started = true;
				}
				None => started = false,
			}
		}
		ctx.stroke();
	}
}

fn draw_sun(ctx: &CanvasRenderingContext2d, scene: &OrbitalScene, spin: f64, p: &Projected, radius: f64) {
	let r = radius * p.scale;
	let color = scene.sun.color;

	// Corona
	if let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, r * 0.8, p.x, p.y, r * 3.0) {
		let _ = glow.add_color_stop(0.0, &color.with_alpha(0.35).to_css());
		let _ = glow.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
		#[allow(deprecated)]
		ctx.set_fill_style(&glow);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, r * 3.0, 0.0, PI * 2.0);
		ctx.fill();
	}

	draw_sphere(ctx, p, radius, color.lighten(0.15), spin);
}

/// Shaded disc with the highlight rotated by `spin`.
fn draw_sphere(ctx: &CanvasRenderingContext2d, p: &Projected, radius: f64, color: Color, spin: f64) {
	let r = (radius * p.scale).max(0.5);
	let (hx, hy) = (
		p.x - r * 0.35 * (spin.cos() * 0.5 + 0.5),
		p.y - r * 0.35,
	);
	match ctx.create_radial_gradient(hx, hy, r * 0.1, p.x, p.y, r) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &color.lighten(0.45).to_css());
			let _ = gradient.add_color_stop(0.6, &color.to_css());
			let _ = gradient.add_color_stop(1.0, &color.darken(0.55).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&color.to_css()),
	}
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, r, 0.0, PI * 2.0);
	ctx.fill();
}

/// Half of a planet ring: the far half is drawn before the planet, the near
/// half after it.
fn draw_ring(
	ctx: &CanvasRenderingContext2d,
	ring: &RingConfig,
	center: DVec3,
	camera: &Camera,
	width: f64,
	height: f64,
	far_half: bool,
) {
	const SEGMENTS: usize = 32;
	let (sin_t, cos_t) = ring.tilt.sin_cos();
	let tilt = |v: DVec3| DVec3::new(v.x, v.y * cos_t - v.z * sin_t, v.y * sin_t + v.z * cos_t);
	let to_eye = camera.eye - center;

	ctx.set_stroke_style_str(&ring.color.to_css());
	ctx.set_line_width(1.0);
	for radius in [ring.inner, (ring.inner + ring.outer) / 2.0, ring.outer] {
		ctx.begin_path();
		let mut started = false;
		for i in 0..=SEGMENTS {
			let local = tilt(orbit_point(radius, i as f64 / SEGMENTS as f64 * PI * 2.0, 0.0));
			let is_far = local.dot(to_eye) < 0.0;
			let projected = camera.project(center + local, width, height);
			match projected {
				Some(p) if is_far == far_half => {
					if started {
						ctx.line_to(p.x, p.y);
					} else {
						ctx.move_to(p.x, p.y);
						started = true;
					}
				}
				_ => started = false,
			}
		}
		ctx.stroke();
	}
}

fn draw_streaks(
	ctx: &CanvasRenderingContext2d,
	frame: &SceneFrame,
	camera: &Camera,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	for streak in frame.streaks.iter().flatten() {
		let (Some(head), Some(tail)) = (
			camera.project(streak.head, width, height),
			camera.project(streak.tail, width, height),
		) else {
			continue;
		};
		let gradient = ctx.create_linear_gradient(tail.x, tail.y, head.x, head.y);
		let _ = gradient.add_color_stop(0.0, &theme.starlight.with_alpha(0.0).to_css());
		let _ = gradient.add_color_stop(1.0, &theme.starlight.with_alpha(streak.opacity).to_css());
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(1.5);
		ctx.begin_path();
		ctx.move_to(tail.x, tail.y);
		ctx.line_to(head.x, head.y);
		ctx.stroke();
	}
}

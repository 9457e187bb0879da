//! Perspective projection from scene space onto the canvas.

use glam::DVec3;

/// Anything closer than this to the camera plane is culled.
const NEAR: f64 = 0.1;

/// Pinhole camera looking at a fixed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
	pub eye: DVec3,
	pub target: DVec3,
	/// Vertical field of view, in degrees.
	pub fov_deg: f64,
}

/// A point on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Canvas pixels per world unit at this depth.
	pub scale: f64,
	/// Distance along the view direction; larger is farther.
	pub depth: f64,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			eye: DVec3::new(0.0, 8.0, 12.0),
			target: DVec3::ZERO,
			fov_deg: 45.0,
		}
	}
}

impl Camera {
	/// Orthonormal (right, up, forward) basis.
	fn basis(&self) -> (DVec3, DVec3, DVec3) {
		let forward = (self.target - self.eye).normalize_or_zero();
		let right = forward.cross(DVec3::Y).normalize_or_zero();
		let up = right.cross(forward);
		(right, up, forward)
	}

	/// Project `p` onto a `width` x `height` canvas, or `None` behind the camera.
	pub fn project(&self, p: DVec3, width: f64, height: f64) -> Option<Projected> {
		let (right, up, forward) = self.basis();
		let rel = p - self.eye;
		let depth = rel.dot(forward);
		if depth < NEAR {
			return None;
		}
		let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
		let scale = focal * (height / 2.0) / depth;
		Some(Projected {
			x: width / 2.0 + rel.dot(right) * scale,
			y: height / 2.0 - rel.dot(up) * scale,
			scale,
			depth,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn target_lands_in_the_center() {
		let cam = Camera::default();
		let p = cam.project(DVec3::ZERO, 800.0, 600.0).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!((p.y - 300.0).abs() < 1e-9);
		assert!((p.depth - (8.0f64 * 8.0 + 12.0 * 12.0).sqrt()).abs() < 1e-9);
	}

	#[test]
	fn right_and_up_keep_screen_orientation() {
		let cam = Camera::default();
		let right = cam.project(DVec3::new(1.0, 0.0, 0.0), 800.0, 600.0).unwrap();
		let up = cam.project(DVec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
		assert!(right.x > 400.0);
		assert!(up.y < 300.0);
	}

	#[test]
	fn points_behind_the_eye_are_culled() {
		let cam = Camera::default();
		assert_eq!(cam.project(DVec3::new(0.0, 10.0, 20.0), 800.0, 600.0), None);
	}

	#[test]
	fn nearer_points_are_larger() {
		let cam = Camera::default();
		let near = cam.project(DVec3::new(0.0, 0.0, 4.0), 800.0, 600.0).unwrap();
		let far = cam.project(DVec3::new(0.0, 0.0, -4.0), 800.0, 600.0).unwrap();
		assert!(near.scale > far.scale);
		assert!(near.depth < far.depth);
	}
}

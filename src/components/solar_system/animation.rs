//! Per-frame driver for an [`OrbitalScene`].

use std::cell::RefCell;
use std::ops::ControlFlow;

use log::debug;

use super::scene::{OrbitalScene, SceneFrame};
use crate::runtime::{EventKind, FrameLoop, HostEvent, SharedHost, Subscription};

/// Runs a scene until torn down: one [`SceneFrame`] per animation frame plus
/// a window resize listener.
pub struct OrbitalAnimation {
	frame_loop: RefCell<Option<FrameLoop>>,
	resize: RefCell<Option<Subscription>>,
}

impl OrbitalAnimation {
	pub fn start(
		host: SharedHost,
		scene: OrbitalScene,
		mut on_resize: impl FnMut(f64, f64) + 'static,
		mut on_frame: impl FnMut(&OrbitalScene, &SceneFrame) + 'static,
	) -> Self {
		let resize = Subscription::new(
			host.clone(),
			EventKind::Resize,
			Box::new(move |ev: &HostEvent| {
				if let HostEvent::Resize { width, height } = *ev {
					on_resize(width, height);
				}
			}),
		);
		debug!(
			"solar system: {} bodies, {} asteroids, {} stars",
			scene.bodies.len(),
			scene.belt.len(),
			scene.stars.len()
		);
		let frame_loop = FrameLoop::start(host, move |t| {
			let frame = scene.frame(t);
			on_frame(&scene, &frame);
			ControlFlow::Continue(())
		});

		Self {
			frame_loop: RefCell::new(Some(frame_loop)),
			resize: RefCell::new(Some(resize)),
		}
	}

	pub fn is_running(&self) -> bool {
		self.frame_loop
			.borrow()
			.as_ref()
			.is_some_and(FrameLoop::is_running)
	}

	/// Stop the frame loop and remove the resize listener. Safe to call more than once.
	pub fn teardown(&self) {
		let stopped = self.frame_loop.borrow_mut().take();
		if let Some(frame_loop) = stopped {
			frame_loop.teardown();
			debug!("solar system: torn down");
		}
		if let Some(sub) = self.resize.borrow_mut().take() {
			sub.cancel();
		}
	}
}

impl Drop for OrbitalAnimation {
	fn drop(&mut self) {
		self.teardown();
	}
}

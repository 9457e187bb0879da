//! Self-rescheduling animation-frame driver.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use super::{FrameId, Host, SharedHost};

type Step = Rc<RefCell<dyn FnMut(f64) -> ControlFlow<()>>>;

/// Calls `on_frame` once per animation frame with the seconds elapsed since
/// [`start`](Self::start).
///
/// Elapsed time is read from the host clock on every frame rather than summed
/// from per-frame deltas, so a dropped frame only produces a jump. The loop
/// ends when the callback returns `ControlFlow::Break`, on
/// [`teardown`](Self::teardown), or when the handle is dropped.
pub struct FrameLoop {
	host: SharedHost,
	pending: Rc<Cell<Option<FrameId>>>,
	stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
	pub fn start(host: SharedHost, on_frame: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Self {
		let started_at = host.now();
		let pending = Rc::new(Cell::new(None));
		let stopped = Rc::new(Cell::new(false));
		let step: Step = Rc::new(RefCell::new(on_frame));

		schedule(
			Rc::downgrade(&host),
			started_at,
			step,
			pending.clone(),
			stopped.clone(),
		);

		Self {
			host,
			pending,
			stopped,
		}
	}

	pub fn is_running(&self) -> bool {
		!self.stopped.get()
	}

	/// Cancel the pending frame, if any. Safe to call more than once.
	pub fn teardown(&self) {
		if self.stopped.replace(true) {
			return;
		}
		if let Some(id) = self.pending.take() {
			self.host.cancel_frame(id);
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.teardown();
	}
}

fn schedule(
	host: Weak<dyn Host>,
	started_at: f64,
	step: Step,
	pending: Rc<Cell<Option<FrameId>>>,
	stopped: Rc<Cell<bool>>,
) {
	if stopped.get() {
		return;
	}
	let Some(strong) = host.upgrade() else {
		return;
	};

	let (pending_cb, stopped_cb) = (pending.clone(), stopped.clone());
	let id = strong.request_frame(Box::new(move || {
		pending_cb.set(None);
		if stopped_cb.get() {
			return;
		}
		let Some(h) = host.upgrade() else {
			return;
		};
		let elapsed = (h.now() - started_at) / 1000.0;
		let flow = (*step.borrow_mut())(elapsed);
		if flow.is_break() {
			stopped_cb.set(true);
			return;
		}
		schedule(host, started_at, step, pending_cb, stopped_cb);
	}));
	pending.set(Some(id));
}

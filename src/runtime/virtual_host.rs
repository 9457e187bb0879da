//! Deterministic host driven by a manual clock.
//!
//! Used by the test suite: events are injected with [`VirtualHost::dispatch`],
//! timers fire from [`VirtualHost::advance`], and animation frames run from
//! [`VirtualHost::run_frame`]. Live registrations are counted so a test can
//! assert that an effect left nothing behind after teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{EventKind, FrameId, Handler, Host, HostEvent, ListenerId, TimerId};

struct PendingTimer {
	id: u64,
	due: f64,
	callback: Box<dyn FnOnce()>,
}

/// In-memory [`Host`] with a manual clock and registration counters.
pub struct VirtualHost {
	clock: Cell<f64>,
	coarse_pointer: Cell<bool>,
	viewport: Cell<Option<(f64, f64)>>,
	scroll_y: Cell<f64>,
	next_id: Cell<u64>,
	listeners: RefCell<Vec<(u64, EventKind, Rc<RefCell<Handler>>)>>,
	timers: RefCell<Vec<PendingTimer>>,
	frames: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
	scheduled_delays: RefCell<Vec<f64>>,
	scroll_requests: RefCell<Vec<(f64, bool)>>,
	listens_total: Cell<usize>,
}

impl Default for VirtualHost {
	fn default() -> Self {
		Self {
			clock: Cell::new(0.0),
			coarse_pointer: Cell::new(false),
			viewport: Cell::new(Some((1280.0, 800.0))),
			scroll_y: Cell::new(0.0),
			next_id: Cell::new(1),
			listeners: RefCell::new(Vec::new()),
			timers: RefCell::new(Vec::new()),
			frames: RefCell::new(Vec::new()),
			scheduled_delays: RefCell::new(Vec::new()),
			scroll_requests: RefCell::new(Vec::new()),
			listens_total: Cell::new(0),
		}
	}
}

impl VirtualHost {
	/// Fine-pointer host with a 1280x800 viewport at t = 0.
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// Host reporting a touch-primary device.
	pub fn coarse() -> Rc<Self> {
		let host = Self::default();
		host.coarse_pointer.set(true);
		Rc::new(host)
	}

	pub fn set_viewport(&self, viewport: Option<(f64, f64)>) {
		self.viewport.set(viewport);
	}

	fn next_id(&self) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		id
	}

	/// Deliver an event to every listener registered for its kind.
	pub fn dispatch(&self, event: HostEvent) {
		if let HostEvent::Scroll { y } = event {
			self.scroll_y.set(y);
		}
		if let HostEvent::Resize { width, height } = event {
			self.viewport.set(Some((width, height)));
		}

		let kind = event.kind();
		let handlers: Vec<_> = self
			.listeners
			.borrow()
			.iter()
			.filter(|(_, k, _)| *k == kind)
			.map(|(_, _, h)| h.clone())
			.collect();
		for handler in handlers {
			(*handler.borrow_mut())(&event);
		}
	}

	/// Advance the clock by `ms`, firing due timers in deadline order.
	///
	/// Timers scheduled by a firing callback run in the same call if they fall
	/// due before the new clock value.
	pub fn advance(&self, ms: f64) {
		let target = self.clock.get() + ms;
		loop {
			let next = {
				let mut timers = self.timers.borrow_mut();
				let position = timers
					.iter()
					.enumerate()
					.filter(|(_, t)| t.due <= target)
					.min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
					.map(|(i, _)| i);
				position.map(|i| timers.remove(i))
			};
			let Some(timer) = next else {
				break;
			};
			self.clock.set(timer.due.max(self.clock.get()));
			(timer.callback)();
		}
		self.clock.set(target);
	}

	/// Run every animation-frame callback requested before this call.
	///
	/// Returns the number of callbacks that ran.
	pub fn run_frame(&self) -> usize {
		let batch = std::mem::take(&mut *self.frames.borrow_mut());
		let count = batch.len();
		for (_, callback) in batch {
			callback();
		}
		count
	}

	/// Advance the clock by `ms`, then run one frame.
	pub fn tick(&self, ms: f64) -> usize {
		self.advance(ms);
		self.run_frame()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	pub fn listeners_for(&self, kind: EventKind) -> usize {
		self.listeners
			.borrow()
			.iter()
			.filter(|(_, k, _)| *k == kind)
			.count()
	}

	/// Listeners ever registered, including removed ones.
	pub fn listens_total(&self) -> usize {
		self.listens_total.get()
	}

	pub fn pending_timers(&self) -> usize {
		self.timers.borrow().len()
	}

	pub fn pending_frames(&self) -> usize {
		self.frames.borrow().len()
	}

	/// Delay of every timeout ever scheduled, in registration order.
	pub fn scheduled_delays(&self) -> Vec<f64> {
		self.scheduled_delays.borrow().clone()
	}

	/// Every `scroll_to` request as `(y, smooth)`, oldest first.
	pub fn scroll_requests(&self) -> Vec<(f64, bool)> {
		self.scroll_requests.borrow().clone()
	}

	/// True when no listener, timer or frame request is outstanding.
	pub fn is_quiescent(&self) -> bool {
		self.listener_count() == 0 && self.pending_timers() == 0 && self.pending_frames() == 0
	}
}

impl Host for VirtualHost {
	fn now(&self) -> f64 {
		self.clock.get()
	}

	fn coarse_pointer(&self) -> bool {
		self.coarse_pointer.get()
	}

	fn viewport(&self) -> Option<(f64, f64)> {
		self.viewport.get()
	}

	fn scroll_y(&self) -> f64 {
		self.scroll_y.get()
	}

	fn scroll_to(&self, y: f64, smooth: bool) {
		self.scroll_requests.borrow_mut().push((y, smooth));
		self.dispatch(HostEvent::Scroll { y });
	}

	fn listen(&self, kind: EventKind, handler: Handler) -> ListenerId {
		let id = self.next_id();
		self.listens_total.set(self.listens_total.get() + 1);
		self.listeners
			.borrow_mut()
			.push((id, kind, Rc::new(RefCell::new(handler))));
		ListenerId(id)
	}

	fn unlisten(&self, id: ListenerId) {
		self.listeners.borrow_mut().retain(|(i, _, _)| *i != id.0);
	}

	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> TimerId {
		let id = self.next_id();
		self.scheduled_delays.borrow_mut().push(delay_ms);
		self.timers.borrow_mut().push(PendingTimer {
			id,
			due: self.clock.get() + delay_ms.max(0.0),
			callback,
		});
		TimerId(id)
	}

	fn clear_timeout(&self, id: TimerId) {
		self.timers.borrow_mut().retain(|t| t.id != id.0);
	}

	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameId {
		let id = self.next_id();
		self.frames.borrow_mut().push((id, callback));
		FrameId(id)
	}

	fn cancel_frame(&self, id: FrameId) {
		self.frames.borrow_mut().retain(|(i, _)| *i != id.0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timers_fire_in_deadline_order() {
		let host = VirtualHost::new();
		let log = Rc::new(RefCell::new(Vec::new()));

		for (delay, tag) in [(30.0, "c"), (10.0, "a"), (20.0, "b")] {
			let log = log.clone();
			host.set_timeout(delay, Box::new(move || log.borrow_mut().push(tag)));
		}
		host.advance(15.0);
		assert_eq!(*log.borrow(), vec!["a"]);
		host.advance(100.0);
		assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
		assert_eq!(host.pending_timers(), 0);
	}

	#[test]
	fn callbacks_may_reschedule_within_one_advance() {
		let host = VirtualHost::new();
		let fired = Rc::new(Cell::new(0));

		let (h, f) = (host.clone(), fired.clone());
		host.set_timeout(
			10.0,
			Box::new(move || {
				f.set(f.get() + 1);
				let f = f.clone();
				h.set_timeout(10.0, Box::new(move || f.set(f.get() + 1)));
			}),
		);
		host.advance(25.0);
		assert_eq!(fired.get(), 2);
		assert_eq!(host.now(), 25.0);
	}

	#[test]
	fn frames_requested_during_a_frame_wait_for_the_next() {
		let host = VirtualHost::new();
		let h = host.clone();
		host.request_frame(Box::new(move || {
			h.request_frame(Box::new(|| {}));
		}));
		assert_eq!(host.run_frame(), 1);
		assert_eq!(host.pending_frames(), 1);
	}
}

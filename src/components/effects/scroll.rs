//! Scroll-offset threshold tracking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use serde::Deserialize;

use crate::runtime::{EventKind, HostEvent, SharedHost, Subscription};

/// Thresholds, in CSS pixels, used by the layout chrome.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
	/// Offset past which the navbar switches to its compact style.
	pub navbar_threshold: f64,
	/// Offset past which the back-to-top button appears.
	pub back_to_top_threshold: f64,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			navbar_threshold: 20.0,
			back_to_top_threshold: 400.0,
		}
	}
}

/// Whether the page is scrolled past a threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
	pub past_threshold: bool,
}

impl ScrollState {
	/// Update from a scroll offset. Returns true if the state flipped.
	pub fn observe(&mut self, y: f64, threshold: f64) -> bool {
		let past = y > threshold;
		let changed = past != self.past_threshold;
		self.past_threshold = past;
		changed
	}
}

/// Scroll listener bound to one threshold.
pub struct ScrollTracker {
	subscription: RefCell<Option<Subscription>>,
	state: Rc<Cell<ScrollState>>,
}

impl ScrollTracker {
	/// Read the current offset and start listening.
	///
	/// `on_change` is called with the new value each time the state flips,
	/// never for scroll events that leave it unchanged. The initial state is
	/// available from [`is_past`](Self::is_past) right after mount.
	pub fn mount(host: SharedHost, threshold: f64, mut on_change: impl FnMut(bool) + 'static) -> Self {
		let mut initial = ScrollState::default();
		initial.observe(host.scroll_y(), threshold);
		let state = Rc::new(Cell::new(initial));

		let handler = {
			let state = state.clone();
			move |ev: &HostEvent| {
				let HostEvent::Scroll { y } = *ev else {
					return;
				};
				let mut current = state.get();
				if current.observe(y, threshold) {
					state.set(current);
					on_change(current.past_threshold);
				}
			}
		};
		let subscription = Subscription::new(host, EventKind::Scroll, Box::new(handler));
		debug!("scroll: tracking threshold {}", threshold);

		Self {
			subscription: RefCell::new(Some(subscription)),
			state,
		}
	}

	pub fn is_past(&self) -> bool {
		self.state.get().past_threshold
	}

	pub fn is_active(&self) -> bool {
		self.subscription.borrow().is_some()
	}

	/// Remove the scroll listener. Safe to call more than once.
	pub fn teardown(&self) {
		if let Some(sub) = self.subscription.borrow_mut().take() {
			sub.cancel();
			debug!("scroll: torn down");
		}
	}
}

impl Drop for ScrollTracker {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::VirtualHost;

	#[test]
	fn threshold_is_exclusive() {
		let mut state = ScrollState::default();
		assert!(!state.observe(20.0, 20.0));
		assert!(state.observe(20.5, 20.0));
		assert!(state.past_threshold);
		assert!(!state.observe(300.0, 20.0));
		assert!(state.observe(0.0, 20.0));
	}

	#[test]
	fn notifies_only_on_flip() {
		let host = VirtualHost::new();
		let seen = Rc::new(RefCell::new(Vec::new()));
		let log = seen.clone();
		let tracker = ScrollTracker::mount(host.clone(), 20.0, move |past| log.borrow_mut().push(past));

		for y in [5.0, 10.0, 25.0, 50.0, 400.0, 19.0, 0.0] {
			host.dispatch(HostEvent::Scroll { y });
		}
		assert_eq!(*seen.borrow(), vec![true, false]);
		assert!(!tracker.is_past());
	}

	#[test]
	fn initial_offset_is_read_at_mount() {
		let host = VirtualHost::new();
		host.dispatch(HostEvent::Scroll { y: 500.0 });
		let tracker = ScrollTracker::mount(host.clone(), 400.0, |_| {});
		assert!(tracker.is_past());
		assert_eq!(host.listeners_for(EventKind::Scroll), 1);
	}
}

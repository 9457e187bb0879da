//! Pointer tracking for the custom cursor.
//!
//! [`CursorState`] is the plain model (position, hover, press, trail).
//! [`CursorTracker`] wires it to a [`Host`]: four window listeners plus a
//! frame loop that prunes faded trail points while the trail is non-empty.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use log::debug;
use serde::Deserialize;

use crate::runtime::{ElementPath, EventKind, FrameLoop, Host, HostEvent, SharedHost, Subscription};

/// Cursor tracker configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	pub enabled: bool,
	/// Maximum number of trail points kept.
	pub trail_cap: usize,
	/// Milliseconds for a trail point to fade out completely.
	pub trail_fade_ms: f64,
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			trail_cap: 8,
			trail_fade_ms: 500.0,
		}
	}
}

/// Class that marks a non-link, non-button element as clickable.
pub const CLICKABLE_CLASS: &str = "clickable";

/// True if the target or any ancestor is a link, a button, or marked clickable.
pub fn is_interactive(path: &ElementPath) -> bool {
	path.iter()
		.any(|el| el.tag == "A" || el.tag == "BUTTON" || el.has_class(CLICKABLE_CLASS))
}

/// A recorded pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
	/// Monotonically increasing across the tracker's lifetime.
	pub id: u64,
	pub x: f64,
	pub y: f64,
	/// Host clock (ms) when the point was recorded.
	pub born_at: f64,
}

impl TrailPoint {
	/// Remaining visibility in `[0, 1]`.
	pub fn opacity(&self, now: f64, fade_ms: f64) -> f64 {
		if fade_ms <= 0.0 {
			return 0.0;
		}
		(1.0 - (now - self.born_at) / fade_ms).clamp(0.0, 1.0)
	}
}

/// Pointer state driving the cursor visuals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorState {
	pub x: f64,
	pub y: f64,
	/// False until the first move event.
	pub visible: bool,
	pub hovering: bool,
	pub pressed: bool,
	trail: VecDeque<TrailPoint>,
	next_id: u64,
}

impl CursorState {
	pub fn record_move(&mut self, x: f64, y: f64, now: f64, cap: usize) {
		self.x = x;
		self.y = y;
		self.visible = true;
		if cap == 0 {
			return;
		}
		self.trail.push_back(TrailPoint {
			id: self.next_id,
			x,
			y,
			born_at: now,
		});
		self.next_id += 1;
		while self.trail.len() > cap {
			self.trail.pop_front();
		}
	}

	pub fn record_over(&mut self, path: &ElementPath) {
		self.hovering = is_interactive(path);
	}

	pub fn set_pressed(&mut self, pressed: bool) {
		self.pressed = pressed;
	}

	/// Drop fully faded trail points. Returns true if anything was removed.
	pub fn prune(&mut self, now: f64, fade_ms: f64) -> bool {
		let before = self.trail.len();
		self.trail.retain(|p| p.opacity(now, fade_ms) > 0.0);
		self.trail.len() != before
	}

	pub fn trail(&self) -> &VecDeque<TrailPoint> {
		&self.trail
	}

	/// Outer ring diameter in pixels.
	pub fn ring_size(&self) -> f64 {
		if self.hovering {
			48.0
		} else if self.pressed {
			24.0
		} else {
			32.0
		}
	}

	/// Center dot diameter in pixels.
	pub fn dot_size(&self) -> f64 {
		if self.hovering { 6.0 } else { 4.0 }
	}

	pub fn dot_scale(&self) -> f64 {
		if self.pressed { 1.8 } else { 1.0 }
	}

	/// Soft glow diameter in pixels.
	pub fn glow_size(&self) -> f64 {
		if self.hovering { 80.0 } else { 60.0 }
	}
}

type ChangeFn = Rc<RefCell<dyn FnMut(&CursorState, f64)>>;

struct Active {
	subscriptions: Vec<Subscription>,
	fade_loop: Rc<RefCell<Option<FrameLoop>>>,
}

/// Cursor tracker bound to a host for one mounted lifetime.
///
/// Whether the tracker is active is decided once, at mount: coarse-pointer
/// hosts (and disabled configs) get an inert tracker that registers nothing.
pub struct CursorTracker {
	active: RefCell<Option<Active>>,
	state: Rc<RefCell<CursorState>>,
}

impl CursorTracker {
	/// `on_change` receives the new state and the host clock after every update.
	pub fn mount(
		host: SharedHost,
		config: &CursorConfig,
		on_change: impl FnMut(&CursorState, f64) + 'static,
	) -> Self {
		let state = Rc::new(RefCell::new(CursorState::default()));

		if !config.enabled || host.coarse_pointer() {
			debug!("cursor: inert (coarse pointer or disabled)");
			return Self {
				active: RefCell::new(None),
				state,
			};
		}

		let notify: ChangeFn = Rc::new(RefCell::new(on_change));
		let fade_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
		let weak_host = Rc::downgrade(&host);
		let (cap, fade_ms) = (config.trail_cap, config.trail_fade_ms);

		let on_move = {
			let (state, notify, fade_loop, weak_host) =
				(state.clone(), notify.clone(), fade_loop.clone(), weak_host.clone());
			move |ev: &HostEvent| {
				let HostEvent::MouseMove { x, y } = *ev else {
					return;
				};
				let Some(host) = weak_host.upgrade() else {
					return;
				};
				let now = host.now();
				state.borrow_mut().record_move(x, y, now, cap);
				(*notify.borrow_mut())(&state.borrow(), now);
				if cap > 0 {
					ensure_fade_loop(&host, &fade_loop, &state, &notify, fade_ms);
				}
			}
		};

		let on_over = {
			let (state, notify, weak_host) = (state.clone(), notify.clone(), weak_host.clone());
			move |ev: &HostEvent| {
				let HostEvent::MouseOver { path } = ev else {
					return;
				};
				let hovering = is_interactive(path);
				if state.borrow().hovering == hovering {
					return;
				}
				state.borrow_mut().record_over(path);
				let now = weak_host.upgrade().map_or(0.0, |h| h.now());
				(*notify.borrow_mut())(&state.borrow(), now);
			}
		};

		let press = |pressed: bool| {
			let (state, notify, weak_host) = (state.clone(), notify.clone(), weak_host.clone());
			move |_: &HostEvent| {
				state.borrow_mut().set_pressed(pressed);
				let now = weak_host.upgrade().map_or(0.0, |h| h.now());
				(*notify.borrow_mut())(&state.borrow(), now);
			}
		};

		let subscriptions = vec![
			Subscription::new(host.clone(), EventKind::MouseMove, Box::new(on_move)),
			Subscription::new(host.clone(), EventKind::MouseOver, Box::new(on_over)),
			Subscription::new(host.clone(), EventKind::MouseDown, Box::new(press(true))),
			Subscription::new(host, EventKind::MouseUp, Box::new(press(false))),
		];
		debug!("cursor: tracking with trail cap {}", cap);

		Self {
			active: RefCell::new(Some(Active {
				subscriptions,
				fade_loop,
			})),
			state,
		}
	}

	pub fn is_active(&self) -> bool {
		self.active.borrow().is_some()
	}

	pub fn state(&self) -> CursorState {
		self.state.borrow().clone()
	}

	/// Remove every listener and stop the fade loop. Safe to call more than once.
	pub fn teardown(&self) {
		let Some(active) = self.active.borrow_mut().take() else {
			return;
		};
		for sub in &active.subscriptions {
			sub.cancel();
		}
		if let Some(fade) = active.fade_loop.borrow_mut().take() {
			fade.teardown();
		}
		debug!("cursor: torn down");
	}
}

impl Drop for CursorTracker {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Start the trail fade loop unless one is already running.
fn ensure_fade_loop(
	host: &SharedHost,
	slot: &Rc<RefCell<Option<FrameLoop>>>,
	state: &Rc<RefCell<CursorState>>,
	notify: &ChangeFn,
	fade_ms: f64,
) {
	if slot.borrow().as_ref().is_some_and(FrameLoop::is_running) {
		return;
	}
	let weak_host: Weak<dyn Host> = Rc::downgrade(host);
	let (state, notify) = (state.clone(), notify.clone());
	let frame_loop = FrameLoop::start(host.clone(), move |_| {
		let Some(host) = weak_host.upgrade() else {
			return ControlFlow::Break(());
		};
		let now = host.now();
		let pruned = state.borrow_mut().prune(now, fade_ms);
		// Opacities change every frame even when nothing was pruned.
		(*notify.borrow_mut())(&state.borrow(), now);
		if pruned && state.borrow().trail().is_empty() {
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	});
	*slot.borrow_mut() = Some(frame_loop);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::ElementInfo;

	fn path(els: &[ElementInfo]) -> ElementPath {
		ElementPath(els.to_vec())
	}

	#[test]
	fn interactive_check_walks_ancestors() {
		let span_in_link = path(&[
			ElementInfo::new("span"),
			ElementInfo::new("div"),
			ElementInfo::new("a"),
			ElementInfo::new("body"),
		]);
		assert!(is_interactive(&span_in_link));

		let marked = path(&[ElementInfo::new("svg"), ElementInfo::new("div").with_class("clickable")]);
		assert!(is_interactive(&marked));

		let plain = path(&[ElementInfo::new("p"), ElementInfo::new("section")]);
		assert!(!is_interactive(&plain));
		assert!(!is_interactive(&ElementPath::default()));
	}

	#[test]
	fn trail_is_bounded_fifo() {
		let mut state = CursorState::default();
		for i in 0..20 {
			state.record_move(i as f64, 0.0, i as f64, 8);
			assert!(state.trail().len() <= 8);
		}
		let ids: Vec<u64> = state.trail().iter().map(|p| p.id).collect();
		assert_eq!(ids, (12..20).collect::<Vec<_>>());
	}

	#[test]
	fn zero_cap_keeps_no_trail() {
		let mut state = CursorState::default();
		state.record_move(1.0, 2.0, 0.0, 0);
		assert!(state.trail().is_empty());
		assert!(state.visible);
	}

	#[test]
	fn prune_drops_only_faded_points() {
		let mut state = CursorState::default();
		state.record_move(0.0, 0.0, 0.0, 8);
		state.record_move(1.0, 1.0, 300.0, 8);
		assert!(state.prune(500.0, 500.0));
		assert_eq!(state.trail().len(), 1);
		assert!(!state.prune(600.0, 500.0));
		assert!((state.trail()[0].opacity(550.0, 500.0) - 0.5).abs() < 1e-9);
	}

	#[test]
	fn visual_sizes_follow_hover_and_press() {
		let mut state = CursorState::default();
		assert_eq!(state.ring_size(), 32.0);
		state.set_pressed(true);
		assert_eq!(state.ring_size(), 24.0);
		assert_eq!(state.dot_scale(), 1.8);
		state.hovering = true;
		assert_eq!(state.ring_size(), 48.0);
		assert_eq!(state.dot_size(), 6.0);
		assert_eq!(state.glow_size(), 80.0);
	}
}

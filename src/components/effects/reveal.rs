//! Timed text reveal: per-character stagger and typewriter.
//!
//! Both engines work in Unicode scalar values, so a multi-byte character is
//! revealed as one unit and every intermediate string is valid UTF-8.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use serde::Deserialize;

use crate::runtime::{Host, SharedHost, TimerId};

/// Default reveal timings, in milliseconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub stagger_delay_ms: f64,
	pub typewriter_interval_ms: f64,
	pub typewriter_initial_delay_ms: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			stagger_delay_ms: 50.0,
			typewriter_interval_ms: 80.0,
			typewriter_initial_delay_ms: 600.0,
		}
	}
}

/// Text plus its timing.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSchedule {
	pub text: String,
	pub per_unit_delay_ms: f64,
	pub initial_delay_ms: f64,
}

impl RevealSchedule {
	pub fn new(text: impl Into<String>, per_unit_delay_ms: f64, initial_delay_ms: f64) -> Self {
		Self {
			text: text.into(),
			per_unit_delay_ms: per_unit_delay_ms.max(0.0),
			initial_delay_ms: initial_delay_ms.max(0.0),
		}
	}

	pub fn total_units(&self) -> usize {
		self.text.chars().count()
	}

	/// Start offset of character `i` in a stagger reveal.
	pub fn stagger_offset(&self, i: usize) -> f64 {
		self.initial_delay_ms + i as f64 * self.per_unit_delay_ms
	}

	pub fn stagger_offsets(&self) -> Vec<f64> {
		(0..self.total_units()).map(|i| self.stagger_offset(i)).collect()
	}

	/// Time at which a typewriter shows its first `step` characters.
	pub fn typewriter_offset(&self, step: usize) -> f64 {
		self.initial_delay_ms + step as f64 * self.per_unit_delay_ms
	}

	/// The first `units` characters of the text.
	pub fn prefix(&self, units: usize) -> &str {
		match self.text.char_indices().nth(units) {
			Some((end, _)) => &self.text[..end],
			None => &self.text,
		}
	}
}

/// Reveals every character on its own timer, all started at once.
pub struct StaggerReveal {
	host: SharedHost,
	pending: Rc<RefCell<Vec<Option<TimerId>>>>,
	revealed: Rc<Cell<usize>>,
}

impl StaggerReveal {
	/// `on_reveal(i)` runs once per character index, at `schedule.stagger_offset(i)`.
	pub fn start(host: SharedHost, schedule: &RevealSchedule, on_reveal: impl FnMut(usize) + 'static) -> Self {
		let n = schedule.total_units();
		let pending = Rc::new(RefCell::new(vec![None; n]));
		let revealed = Rc::new(Cell::new(0));
		let on_reveal: Rc<RefCell<dyn FnMut(usize)>> = Rc::new(RefCell::new(on_reveal));

		for i in 0..n {
			let (pending_cb, revealed_cb, on_reveal) = (pending.clone(), revealed.clone(), on_reveal.clone());
			let id = host.set_timeout(
				schedule.stagger_offset(i),
				Box::new(move || {
					if pending_cb.borrow_mut()[i].take().is_none() {
						return;
					}
					revealed_cb.set(revealed_cb.get() + 1);
					(*on_reveal.borrow_mut())(i);
				}),
			);
			pending.borrow_mut()[i] = Some(id);
		}
		debug!("reveal: staggering {} characters", n);

		Self {
			host,
			pending,
			revealed,
		}
	}

	pub fn revealed_count(&self) -> usize {
		self.revealed.get()
	}

	pub fn pending_count(&self) -> usize {
		self.pending.borrow().iter().flatten().count()
	}

	/// Clear every timer that has not fired yet. Safe to call more than once.
	pub fn teardown(&self) {
		let ids: Vec<TimerId> = self
			.pending
			.borrow_mut()
			.iter_mut()
			.filter_map(Option::take)
			.collect();
		for id in ids {
			self.host.clear_timeout(id);
		}
	}
}

impl Drop for StaggerReveal {
	fn drop(&mut self) {
		self.teardown();
	}
}

struct Chain {
	host: Weak<dyn Host>,
	schedule: RevealSchedule,
	shown: Cell<usize>,
	pending: Cell<Option<TimerId>>,
	cancelled: Cell<bool>,
	on_text: RefCell<Box<dyn FnMut(&str)>>,
}

impl Chain {
	fn schedule_next(self: &Rc<Self>, delay_ms: f64) {
		let Some(host) = self.host.upgrade() else {
			return;
		};
		let chain = self.clone();
		let id = host.set_timeout(delay_ms, Box::new(move || chain.step()));
		self.pending.set(Some(id));
	}

	fn step(self: &Rc<Self>) {
		self.pending.set(None);
		if self.cancelled.get() {
			return;
		}
		let shown = self.shown.get() + 1;
		self.shown.set(shown);
		(*self.on_text.borrow_mut())(self.schedule.prefix(shown));
		if shown < self.schedule.total_units() {
			self.schedule_next(self.schedule.per_unit_delay_ms);
		}
	}
}

/// Reveals a growing prefix one character at a time.
///
/// A single timer is pending at any moment; each firing shows one more
/// character and schedules the next.
pub struct TypewriterReveal {
	host: SharedHost,
	chain: Rc<Chain>,
}

impl TypewriterReveal {
	/// `on_text` receives each prefix from one character up to the full text.
	pub fn start(host: SharedHost, schedule: &RevealSchedule, on_text: impl FnMut(&str) + 'static) -> Self {
		let chain = Rc::new(Chain {
			host: Rc::downgrade(&host),
			schedule: schedule.clone(),
			shown: Cell::new(0),
			pending: Cell::new(None),
			cancelled: Cell::new(false),
			on_text: RefCell::new(Box::new(on_text)),
		});
		if schedule.total_units() > 0 {
			chain.schedule_next(schedule.typewriter_offset(1));
		}
		Self { host, chain }
	}

	/// Characters currently shown.
	pub fn shown(&self) -> usize {
		self.chain.shown.get()
	}

	pub fn text(&self) -> &str {
		self.chain.schedule.prefix(self.shown())
	}

	pub fn is_complete(&self) -> bool {
		self.shown() == self.chain.schedule.total_units()
	}

	/// Cancel the pending timer. Safe to call more than once.
	pub fn teardown(&self) {
		if self.chain.cancelled.replace(true) {
			return;
		}
		if let Some(id) = self.chain.pending.take() {
			self.host.clear_timeout(id);
		}
	}
}

impl Drop for TypewriterReveal {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::VirtualHost;

	#[test]
	fn prefix_counts_chars_not_bytes() {
		let s = RevealSchedule::new("héllo→", 10.0, 0.0);
		assert_eq!(s.total_units(), 6);
		assert_eq!(s.prefix(0), "");
		assert_eq!(s.prefix(2), "hé");
		assert_eq!(s.prefix(6), "héllo→");
		assert_eq!(s.prefix(99), "héllo→");
	}

	#[test]
	fn stagger_offsets_are_evenly_spaced() {
		let s = RevealSchedule::new("abcd", 25.0, 0.0);
		assert_eq!(s.stagger_offsets(), vec![0.0, 25.0, 50.0, 75.0]);
	}

	#[test]
	fn typewriter_keeps_one_timer_pending() {
		let host = VirtualHost::new();
		let schedule = RevealSchedule::new("abc", 100.0, 500.0);
		let tw = TypewriterReveal::start(host.clone(), &schedule, |_| {});

		assert_eq!(host.pending_timers(), 1);
		host.advance(599.0);
		assert_eq!(tw.text(), "");
		host.advance(1.0);
		assert_eq!(tw.text(), "a");
		assert_eq!(host.pending_timers(), 1);
		host.advance(200.0);
		assert!(tw.is_complete());
		assert_eq!(host.pending_timers(), 0);
	}

	#[test]
	fn empty_text_schedules_nothing() {
		let host = VirtualHost::new();
		let schedule = RevealSchedule::new("", 100.0, 0.0);
		let tw = TypewriterReveal::start(host.clone(), &schedule, |_| {});
		let st = StaggerReveal::start(host.clone(), &schedule, |_| {});
		assert!(tw.is_complete());
		assert_eq!(st.pending_count(), 0);
		assert!(host.is_quiescent());
	}
}

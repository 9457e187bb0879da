//! Simulated contact form submission.
//!
//! There is no backend: a valid submit waits out a fixed delay, clears the
//! form and raises a success notification, then shows the "sent" state for a
//! while before returning to idle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use super::form::{ContactForm, Field, FieldErrors};
use crate::runtime::{Host, SharedHost, TimerId};

/// Submission timings, in milliseconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
	/// Simulated network delay.
	pub send_delay_ms: f64,
	/// How long the sent confirmation stays up.
	pub sent_display_ms: f64,
}

impl Default for SubmissionConfig {
	fn default() -> Self {
		Self {
			send_delay_ms: 1500.0,
			sent_display_ms: 3000.0,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
	#[default]
	Idle,
	Submitting,
	Sent,
}

/// Toast raised after a successful send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
	pub title: String,
	pub description: String,
}

impl Notification {
	pub fn sent() -> Self {
		Self {
			title: "Message sent successfully!".into(),
			description: "Thank you for reaching out. I will get back to you soon.".into(),
		}
	}
}

/// Everything the form view renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
	pub form: ContactForm,
	pub errors: FieldErrors,
	pub phase: SubmissionPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent {
	StateChanged(ContactState),
	Notified(Notification),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
	#[error("{} field(s) failed validation", .0.len())]
	Invalid(FieldErrors),
	#[error("a submission is already in progress")]
	Busy,
}

struct Inner {
	host: Weak<dyn Host>,
	config: SubmissionConfig,
	state: RefCell<ContactState>,
	pending: Cell<Option<TimerId>>,
	listener: RefCell<Box<dyn FnMut(&ContactEvent)>>,
}

impl Inner {
	fn emit(&self, event: ContactEvent) {
		(*self.listener.borrow_mut())(&event);
	}

	fn emit_state(&self) {
		let snapshot = self.state.borrow().clone();
		self.emit(ContactEvent::StateChanged(snapshot));
	}

	/// Replace the pending timer with one firing `step` after `delay_ms`.
	fn schedule(self: &Rc<Self>, delay_ms: f64, step: fn(&Rc<Inner>)) {
		let Some(host) = self.host.upgrade() else {
			return;
		};
		if let Some(id) = self.pending.take() {
			host.clear_timeout(id);
		}
		let inner = Rc::downgrade(self);
		let id = host.set_timeout(
			delay_ms,
			Box::new(move || {
				if let Some(inner) = inner.upgrade() {
					inner.pending.set(None);
					step(&inner);
				}
			}),
		);
		self.pending.set(Some(id));
	}

	fn finish_send(self: &Rc<Self>) {
		{
			let mut state = self.state.borrow_mut();
			state.form.clear();
			state.phase = SubmissionPhase::Sent;
		}
		info!("contact: message sent (simulated)");
		self.emit_state();
		self.emit(ContactEvent::Notified(Notification::sent()));
		self.schedule(self.config.sent_display_ms, Inner::reset);
	}

	fn reset(self: &Rc<Self>) {
		self.state.borrow_mut().phase = SubmissionPhase::Idle;
		self.emit_state();
	}
}

/// Contact form state machine: `Idle -> Submitting -> Sent -> Idle`.
///
/// At most one timer is pending at any time; [`teardown`](Self::teardown)
/// cancels it.
pub struct ContactController {
	host: SharedHost,
	inner: Rc<Inner>,
}

impl ContactController {
	pub fn new(host: SharedHost, config: SubmissionConfig, on_event: impl FnMut(&ContactEvent) + 'static) -> Self {
		let inner = Rc::new(Inner {
			host: Rc::downgrade(&host),
			config,
			state: RefCell::new(ContactState::default()),
			pending: Cell::new(None),
			listener: RefCell::new(Box::new(on_event)),
		});
		Self { host, inner }
	}

	pub fn state(&self) -> ContactState {
		self.inner.state.borrow().clone()
	}

	pub fn phase(&self) -> SubmissionPhase {
		self.inner.state.borrow().phase
	}

	/// Update one field. Any error shown for that field is cleared.
	pub fn edit(&self, field: Field, value: impl Into<String>) {
		{
			let mut state = self.inner.state.borrow_mut();
			state.form.set(field, value);
			state.errors.clear(field);
		}
		self.inner.emit_state();
	}

	/// Validate and, if valid, start the simulated send.
	pub fn submit(&self) -> Result<(), SubmitError> {
		if self.phase() == SubmissionPhase::Submitting {
			return Err(SubmitError::Busy);
		}
		let verdict = self.inner.state.borrow().form.validate();
		match verdict {
			Err(errors) => {
				debug!("contact: {} invalid field(s)", errors.len());
				self.inner.state.borrow_mut().errors = errors.clone();
				self.inner.emit_state();
				Err(SubmitError::Invalid(errors))
			}
			Ok(()) => {
				{
					let mut state = self.inner.state.borrow_mut();
					state.errors = FieldErrors::default();
					state.phase = SubmissionPhase::Submitting;
				}
				self.inner.emit_state();
				self.inner.schedule(self.inner.config.send_delay_ms, Inner::finish_send);
				Ok(())
			}
		}
	}

	pub fn has_pending_timer(&self) -> bool {
		self.inner.pending.get().is_some()
	}

	/// Cancel the pending timer, if any. Safe to call more than once.
	pub fn teardown(&self) {
		if let Some(id) = self.inner.pending.take() {
			self.host.clear_timeout(id);
			debug!("contact: pending submission cancelled");
		}
	}
}

impl Drop for ContactController {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::VirtualHost;

	fn controller(host: &Rc<VirtualHost>) -> (ContactController, Rc<RefCell<Vec<ContactEvent>>>) {
		let events = Rc::new(RefCell::new(Vec::new()));
		let log = events.clone();
		let c = ContactController::new(host.clone(), SubmissionConfig::default(), move |e| {
			log.borrow_mut().push(e.clone())
		});
		(c, events)
	}

	fn fill(c: &ContactController) {
		c.edit(Field::Name, "Grace Hopper");
		c.edit(Field::Email, "grace@navy.mil");
		c.edit(Field::Subject, "Compilers");
		c.edit(Field::Message, "A ship in port is safe, but that is not what ships are for.");
	}

	#[test]
	fn edit_clears_only_that_fields_error() {
		let host = VirtualHost::new();
		let (c, _) = controller(&host);
		assert!(c.submit().is_err());
		assert_eq!(c.state().errors.len(), 4);
		c.edit(Field::Subject, "x");
		let errors = c.state().errors;
		assert_eq!(errors.len(), 3);
		assert_eq!(errors.get(Field::Subject), None);
	}

	#[test]
	fn second_submit_while_sending_is_busy() {
		let host = VirtualHost::new();
		let (c, _) = controller(&host);
		fill(&c);
		assert_eq!(c.submit(), Ok(()));
		assert_eq!(c.submit(), Err(SubmitError::Busy));
		assert_eq!(host.pending_timers(), 1);
	}

	#[test]
	fn sent_state_returns_to_idle() {
		let host = VirtualHost::new();
		let (c, _) = controller(&host);
		fill(&c);
		c.submit().unwrap();
		host.advance(1500.0);
		assert_eq!(c.phase(), SubmissionPhase::Sent);
		host.advance(2999.0);
		assert_eq!(c.phase(), SubmissionPhase::Sent);
		host.advance(1.0);
		assert_eq!(c.phase(), SubmissionPhase::Idle);
		assert!(!c.has_pending_timer());
	}

	#[test]
	fn teardown_mid_send_cancels_the_timer() {
		let host = VirtualHost::new();
		let (c, events) = controller(&host);
		fill(&c);
		c.submit().unwrap();
		c.teardown();
		c.teardown();
		assert_eq!(host.pending_timers(), 0);
		host.advance(10_000.0);
		assert!(!events.borrow().iter().any(|e| matches!(e, ContactEvent::Notified(_))));
	}
}

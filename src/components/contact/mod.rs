//! Contact form: field validation, simulated submission and the form view.

mod component;
pub mod form;
pub mod submission;

pub use component::ContactPanel;
pub use form::{ContactForm, Field, FieldErrors, ValidationError};
pub use submission::{
	ContactController, ContactEvent, ContactState, Notification, SubmissionConfig, SubmissionPhase,
	SubmitError,
};

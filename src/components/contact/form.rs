//! Contact form fields and client-side validation.

use std::collections::BTreeMap;

use thiserror::Error;

/// A contact form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	Name,
	Email,
	Subject,
	Message,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

	/// Value of the input's `name` attribute.
	pub const fn key(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Email => "email",
			Field::Subject => "subject",
			Field::Message => "message",
		}
	}

	pub const fn label(self) -> &'static str {
		match self {
			Field::Name => "Your Name",
			Field::Email => "Email Address",
			Field::Subject => "Subject",
			Field::Message => "Message",
		}
	}

	pub const fn placeholder(self) -> &'static str {
		match self {
			Field::Name => "John Doe",
			Field::Email => "john@example.com",
			Field::Subject => "Project Collaboration",
			Field::Message => "Tell me about your project...",
		}
	}
}

/// Why a field was rejected. The display text is shown under the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Name is required")]
	NameRequired,
	#[error("Name must be at least 2 characters")]
	NameTooShort,
	#[error("Email is required")]
	EmailRequired,
	#[error("Please enter a valid email")]
	EmailInvalid,
	#[error("Subject is required")]
	SubjectRequired,
	#[error("Message is required")]
	MessageRequired,
	#[error("Message must be at least 10 characters")]
	MessageTooShort,
}

impl ValidationError {
	pub const fn field(self) -> Field {
		match self {
			ValidationError::NameRequired | ValidationError::NameTooShort => Field::Name,
			ValidationError::EmailRequired | ValidationError::EmailInvalid => Field::Email,
			ValidationError::SubjectRequired => Field::Subject,
			ValidationError::MessageRequired | ValidationError::MessageTooShort => Field::Message,
		}
	}
}

/// At most one error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
	pub fn insert(&mut self, error: ValidationError) {
		self.0.insert(error.field(), error);
	}

	pub fn get(&self, field: Field) -> Option<ValidationError> {
		self.0.get(&field).copied()
	}

	/// Drop the error for `field`. Returns true if there was one.
	pub fn clear(&mut self, field: Field) -> bool {
		self.0.remove(&field).is_some()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
		self.0.iter().map(|(f, e)| (*f, *e))
	}
}

/// Minimum trimmed lengths, in characters.
const NAME_MIN: usize = 2;
const MESSAGE_MIN: usize = 10;

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with at least one character on either side.
pub fn is_valid_email(s: &str) -> bool {
	if s.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = s.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.char_indices()
		.any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Current values of the four inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Subject => &self.subject,
			Field::Message => &self.message,
		}
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		let slot = match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Subject => &mut self.subject,
			Field::Message => &mut self.message,
		};
		*slot = value.into();
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn is_blank(&self) -> bool {
		Field::ALL.iter().all(|f| self.get(*f).trim().is_empty())
	}

	pub fn validate(&self) -> Result<(), FieldErrors> {
		let mut errors = FieldErrors::default();

		let name = self.name.trim();
		if name.is_empty() {
			errors.insert(ValidationError::NameRequired);
		} else if name.chars().count() < NAME_MIN {
			errors.insert(ValidationError::NameTooShort);
		}

		// The shape check runs on the raw value, so surrounding spaces fail it.
		if self.email.trim().is_empty() {
			errors.insert(ValidationError::EmailRequired);
		} else if !is_valid_email(&self.email) {
			errors.insert(ValidationError::EmailInvalid);
		}

		if self.subject.trim().is_empty() {
			errors.insert(ValidationError::SubjectRequired);
		}

		let message = self.message.trim();
		if message.is_empty() {
			errors.insert(ValidationError::MessageRequired);
		} else if message.chars().count() < MESSAGE_MIN {
			errors.insert(ValidationError::MessageTooShort);
		}

		if errors.is_empty() { Ok(()) } else { Err(errors) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> ContactForm {
		ContactForm {
			name: "Ada Lovelace".into(),
			email: "ada@example.com".into(),
			subject: "Engines".into(),
			message: "Let us talk about the analytical engine.".into(),
		}
	}

	#[test]
	fn accepts_a_complete_form() {
		assert_eq!(filled().validate(), Ok(()));
	}

	#[test]
	fn reports_one_error_per_bad_field() {
		let form = ContactForm {
			name: "A".into(),
			email: "bad".into(),
			subject: "".into(),
			message: "short".into(),
		};
		let errors = form.validate().unwrap_err();
		assert_eq!(errors.len(), 4);
		assert_eq!(errors.get(Field::Name), Some(ValidationError::NameTooShort));
		assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailInvalid));
		assert_eq!(errors.get(Field::Subject), Some(ValidationError::SubjectRequired));
		assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageTooShort));
	}

	#[test]
	fn whitespace_only_counts_as_missing() {
		let mut form = filled();
		form.name = "   ".into();
		form.email = " \t".into();
		form.message = "\n".into();
		let errors = form.validate().unwrap_err();
		assert_eq!(errors.get(Field::Name), Some(ValidationError::NameRequired));
		assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailRequired));
		assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageRequired));
	}

	#[test]
	fn lengths_are_measured_after_trimming() {
		let mut form = filled();
		form.name = " A ".into();
		form.message = "   123456789   ".into();
		let errors = form.validate().unwrap_err();
		assert_eq!(errors.len(), 2);
		form.message = "1234567890".into();
		form.name = "Al".into();
		assert!(form.validate().is_ok());
	}

	#[test]
	fn email_shape() {
		for ok in ["a@b.co", "first.last@sub.example.org", "x@y.z", "a.@b..c"] {
			assert!(is_valid_email(ok), "{ok} should pass");
		}
		for bad in ["bad", "a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", " a@b.co"] {
			assert!(!is_valid_email(bad), "{bad} should fail");
		}
	}

	#[test]
	fn messages_match_the_form_copy() {
		assert_eq!(ValidationError::EmailInvalid.to_string(), "Please enter a valid email");
		assert_eq!(
			ValidationError::MessageTooShort.to_string(),
			"Message must be at least 10 characters"
		);
	}

	#[test]
	fn clearing_one_error_leaves_the_rest() {
		let mut errors = ContactForm::default().validate().unwrap_err();
		assert_eq!(errors.len(), 4);
		assert!(errors.clear(Field::Email));
		assert!(!errors.clear(Field::Email));
		assert_eq!(errors.len(), 3);
	}
}

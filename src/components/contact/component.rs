//! Leptos view over [`ContactController`].

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::debug;

use super::form::Field;
use super::submission::{ContactController, ContactEvent, ContactState, Notification, SubmissionPhase};
use crate::config::SiteConfig;
use crate::runtime::BrowserHost;

/// Contact form with inline errors and a success toast.
#[component]
pub fn ContactPanel() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let state = RwSignal::new(ContactState::default());
	let toast = RwSignal::new(None::<Notification>);

	let controller = StoredValue::new_local(ContactController::new(
		BrowserHost::shared(),
		config.contact.clone(),
		move |event| match event {
			ContactEvent::StateChanged(next) => {
				if next.phase == SubmissionPhase::Idle {
					toast.set(None);
				}
				state.set(next.clone());
			}
			ContactEvent::Notified(n) => toast.set(Some(n.clone())),
		},
	));
	on_cleanup(move || {
		controller.try_with_value(|c| c.teardown());
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		controller.with_value(|c| {
			if let Err(e) = c.submit() {
				debug!("contact: submit rejected: {}", e);
			}
		});
	};

	let phase = move || state.with(|s| s.phase);

	view! {
		<form class="contact-form glass-card" on:submit=on_submit novalidate=true>
			{Field::ALL
				.into_iter()
				.map(|field| view! { <FieldInput field=field state=state controller=controller /> })
				.collect_view()}
			<button
				type="submit"
				class="button primary contact-submit"
				disabled=move || phase() == SubmissionPhase::Submitting
			>
				{move || match phase() {
					SubmissionPhase::Idle => "Send Message",
					SubmissionPhase::Submitting => "Sending...",
					SubmissionPhase::Sent => "Message Sent!",
				}}
			</button>
		</form>
		{move || {
			toast
				.get()
				.map(|n| {
					view! {
						<div class="toast" role="status">
							<p class="toast-title">{n.title}</p>
							<p class="toast-description">{n.description}</p>
							<button class="toast-close" on:click=move |_| toast.set(None)>
								"Dismiss"
							</button>
						</div>
					}
				})
		}}
	}
}

#[component]
fn FieldInput(
	field: Field,
	state: RwSignal<ContactState>,
	controller: StoredValue<ContactController, LocalStorage>,
) -> impl IntoView {
	let value = move || state.with(|s| s.form.get(field).to_string());
	let error = move || state.with(|s| s.errors.get(field));
	let on_input = move |ev: leptos::ev::Event| {
		let text = event_target_value(&ev);
		controller.with_value(|c| c.edit(field, text));
	};
	let disabled = move || state.with(|s| s.phase == SubmissionPhase::Submitting);
	let input_type = if field == Field::Email { "email" } else { "text" };

	let input = if field == Field::Message {
		view! {
			<textarea
				id=field.key()
				name=field.key()
				rows="6"
				placeholder=field.placeholder()
				class:invalid=move || error().is_some()
				prop:value=value
				on:input=on_input
				disabled=disabled
			/>
		}
		.into_any()
	} else {
		view! {
			<input
				id=field.key()
				name=field.key()
				type=input_type
				placeholder=field.placeholder()
				class:invalid=move || error().is_some()
				prop:value=value
				on:input=on_input
				disabled=disabled
			/>
		}
		.into_any()
	};

	view! {
		<div class="form-field">
			<label for=field.key()>{field.label()}</label>
			{input}
			{move || error().map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
		</div>
	}
}

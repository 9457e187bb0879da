//! Text reveal components built on the reveal engines.

use leptos::prelude::*;

use super::reveal::{RevealSchedule, StaggerReveal, TypewriterReveal};
use crate::config::SiteConfig;
use crate::runtime::BrowserHost;

/// Fades characters in one after another.
///
/// Each character is its own `span`. Spaces render as `&nbsp;`.
#[component]
pub fn StaggerText(
	#[prop(into)] text: String,
	/// Per-character delay in ms. Defaults to the site configuration.
	#[prop(optional)]
	delay_ms: Option<f64>,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let schedule = RevealSchedule::new(text, delay_ms.unwrap_or(config.reveal.stagger_delay_ms), 0.0);
	let revealed = RwSignal::new(vec![false; schedule.total_units()]);

	let reveal = StaggerReveal::start(BrowserHost::shared(), &schedule, move |i| {
		revealed.update(|r| {
			if let Some(slot) = r.get_mut(i) {
				*slot = true;
			}
		});
	});
	let reveal = StoredValue::new_local(reveal);
	on_cleanup(move || {
		reveal.try_with_value(|r| r.teardown());
	});

	let chars = schedule
		.text
		.chars()
		.enumerate()
		.map(|(i, c)| {
			let shown = move || revealed.with(|r| r.get(i).copied().unwrap_or(true));
			let glyph = if c == ' ' { '\u{a0}' } else { c };
			view! { <span class="reveal-char" class:revealed=shown>{glyph.to_string()}</span> }
		})
		.collect_view();

	view! {
		<span class=format!("stagger-text {class}") aria-label=schedule.text.clone()>
			{chars}
		</span>
	}
}

/// Types the text out one character at a time behind a blinking caret.
#[component]
pub fn TypewriterText(
	#[prop(into)] text: String,
	/// Per-character interval in ms. Defaults to the site configuration.
	#[prop(optional)]
	interval_ms: Option<f64>,
	/// Delay before the first character in ms. Defaults to the site configuration.
	#[prop(optional)]
	initial_delay_ms: Option<f64>,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let schedule = RevealSchedule::new(
		text,
		interval_ms.unwrap_or(config.reveal.typewriter_interval_ms),
		initial_delay_ms.unwrap_or(config.reveal.typewriter_initial_delay_ms),
	);
	let shown = RwSignal::new(String::new());

	let reveal = TypewriterReveal::start(BrowserHost::shared(), &schedule, move |prefix| {
		shown.set(prefix.to_string());
	});
	let reveal = StoredValue::new_local(reveal);
	on_cleanup(move || {
		reveal.try_with_value(|r| r.teardown());
	});

	view! {
		<span class=format!("typewriter {class}") aria-label=schedule.text>
			{move || shown.get()}
			<span class="caret" aria-hidden="true">"|"</span>
		</span>
	}
}

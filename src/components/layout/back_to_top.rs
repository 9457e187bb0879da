//! Floating back-to-top button.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::debug;

use crate::components::effects::ScrollTracker;
use crate::config::SiteConfig;
use crate::runtime::BrowserHost;

/// Appears once the page is scrolled past the configured threshold and
/// smooth-scrolls to the top when clicked.
///
/// Also resets the scroll offset whenever the route changes.
#[component]
pub fn BackToTop() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let pathname = use_location().pathname;
	let visible = RwSignal::new(false);

	let tracker = ScrollTracker::mount(
		BrowserHost::shared(),
		config.scroll.back_to_top_threshold,
		move |past| visible.set(past),
	);
	visible.set(tracker.is_past());
	let tracker = StoredValue::new_local(tracker);
	on_cleanup(move || {
		tracker.try_with_value(|t| t.teardown());
	});

	Effect::new(move |previous: Option<String>| {
		let path = pathname.get();
		if previous.is_some_and(|p| p != path) {
			debug!("navigation to {}, resetting scroll", path);
			BrowserHost::shared().scroll_to(0.0, false);
		}
		path
	});

	view! {
		<Show when=move || visible.get()>
			<button
				class="back-to-top glass-card"
				aria-label="Back to top"
				on:click=move |_| BrowserHost::shared().scroll_to(0.0, true)
			>
				"\u{2191}"
			</button>
		</Show>
	}
}

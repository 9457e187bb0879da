//! Fixed header with the page links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::effects::ScrollTracker;
use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::routes::SiteRoute;
use crate::runtime::BrowserHost;

/// Site header.
///
/// Turns compact once the page is scrolled past the configured threshold and
/// closes the mobile menu whenever the route changes.
#[component]
pub fn Navbar() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let content = use_context::<SiteContent>().unwrap_or_default();
	let pathname = use_location().pathname;

	let compact = RwSignal::new(false);
	let menu_open = RwSignal::new(false);

	let tracker = ScrollTracker::mount(
		BrowserHost::shared(),
		config.scroll.navbar_threshold,
		move |past| compact.set(past),
	);
	compact.set(tracker.is_past());
	let tracker = StoredValue::new_local(tracker);
	on_cleanup(move || {
		tracker.try_with_value(|t| t.teardown());
	});

	Effect::new(move |_| {
		pathname.track();
		menu_open.set(false);
	});

	let links = move |class: &'static str| {
		SiteRoute::NAV
			.into_iter()
			.map(|route| {
				let active = move || route.is_active_at(&pathname.get());
				view! {
					<li>
						<a href=route.path() class=class class:active=active>
							{route.label()}
						</a>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<header class="navbar" class:compact=move || compact.get()>
			<nav class="navbar-inner">
				<a href="/" class="brand">
					<span class="brand-mark" aria-hidden="true" />
					<span class="brand-name gradient-text">{content.profile.brand()}</span>
				</a>
				<ul class="nav-links">{links("nav-link")}</ul>
				<button
					class="menu-toggle"
					aria-label="Toggle menu"
					aria-expanded=move || menu_open.get().to_string()
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
			</nav>
			<Show when=move || menu_open.get()>
				<ul class="mobile-menu glass-card">{links("mobile-link")}</ul>
			</Show>
		</header>
	}
}

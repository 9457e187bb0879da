//! Ring-and-dot pointer that replaces the system cursor.

use leptos::prelude::*;

use super::cursor::{CursorState, CursorTracker};
use crate::config::SiteConfig;
use crate::runtime::BrowserHost;

fn disc_style(x: f64, y: f64, size: f64) -> String {
	format!("left: {x}px; top: {y}px; width: {size}px; height: {size}px;")
}

/// Custom cursor with a fading trail.
///
/// Renders nothing on touch-primary devices or when disabled in the site
/// configuration.
#[component]
pub fn CustomCursor() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let fade_ms = config.cursor.trail_fade_ms;
	let snapshot = RwSignal::new((CursorState::default(), 0.0_f64));

	let tracker = CursorTracker::mount(BrowserHost::shared(), &config.cursor, move |state, now| {
		snapshot.set((state.clone(), now));
	});
	let active = tracker.is_active();
	let tracker = StoredValue::new_local(tracker);
	on_cleanup(move || {
		tracker.try_with_value(|t| t.teardown());
	});

	if !active {
		return ().into_any();
	}

	let state = move || snapshot.with(|(s, _)| s.clone());
	let visible = move || snapshot.with(|(s, _)| s.visible);

	view! {
		<Show when=visible>
			{move || {
				let (s, now) = snapshot.get();
				s.trail()
					.iter()
					.map(|p| {
						let opacity = p.opacity(now, fade_ms) * 0.5;
						let size = 4.0 + 4.0 * opacity;
						view! {
							<div
								class="cursor-trail"
								style=format!("{} opacity: {opacity};", disc_style(p.x, p.y, size))
							/>
						}
					})
					.collect_view()
			}}
			<div
				class="cursor-glow"
				style=move || {
					let s = state();
					disc_style(s.x, s.y, s.glow_size())
				}
			/>
			<div
				class="cursor-ring"
				class:hovering=move || snapshot.with(|(s, _)| s.hovering)
				class:pressed=move || snapshot.with(|(s, _)| s.pressed)
				style=move || {
					let s = state();
					disc_style(s.x, s.y, s.ring_size())
				}
			/>
			<div
				class="cursor-dot"
				style=move || {
					let s = state();
					format!(
						"{} transform: translate(-50%, -50%) scale({});",
						disc_style(s.x, s.y, s.dot_size()),
						s.dot_scale()
					)
				}
			/>
		</Show>
	}
	.into_any()
}

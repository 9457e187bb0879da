//! Leptos component wrapping the orbital scene canvas.
//!
//! The scene is generated once when the canvas mounts and then animated
//! through [`OrbitalAnimation`]. The canvas tracks its parent's size on window
//! resize.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::HtmlCanvasElement;

use super::animation::OrbitalAnimation;
use super::camera::Camera;
use super::render;
use super::scene::OrbitalScene;
use crate::components::canvas;
use crate::config::SiteConfig;
use crate::runtime::BrowserHost;
use crate::theme::Theme;

/// Renders the sun, planets, belt and starfield behind its parent.
#[component]
pub fn SolarSystem() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation = StoredValue::new_local(None::<OrbitalAnimation>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = canvas::context_2d(&canvas) else {
			return;
		};

		let (w, h) = canvas::parent_size(&canvas);
		canvas::fit(&canvas, w, h);
		let size = Rc::new(Cell::new((w, h)));

		let scene = OrbitalScene::generate(&config.scene, &mut config.rng());
		let (camera, theme) = (Camera::default(), Theme::default());
		debug!("solar system: mounted at {}x{}", w, h);

		let (canvas_resize, size_resize) = (canvas.clone(), size.clone());
		let running = OrbitalAnimation::start(
			BrowserHost::shared(),
			scene,
			move |_, _| {
				let (nw, nh) = canvas::parent_size(&canvas_resize);
				canvas::fit(&canvas_resize, nw, nh);
				size_resize.set((nw, nh));
			},
			move |scene, frame| {
				let (w, h) = size.get();
				render::render(&ctx, scene, frame, &camera, &theme, w, h);
			},
		);
		// Replacing a previous animation drops it, which tears it down.
		animation.set_value(Some(running));
	});

	on_cleanup(move || {
		animation.try_update_value(|a| {
			if let Some(a) = a.take() {
				a.teardown();
			}
		});
	});

	view! {
		<div class="solar-system">
			<canvas node_ref=canvas_ref class="solar-system-canvas" />
		</div>
	}
}

//! Floating-orb background canvas.

use std::cell::Cell;
use std::f64::consts::PI;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::{self, FieldConfig, Particle};
use crate::components::canvas;
use crate::config::SiteConfig;
use crate::runtime::{BrowserHost, EventKind, FrameLoop, Host, HostEvent, Subscription};
use crate::theme::{Color, Theme};

/// Slow breathing glow behind the orbs.
struct AmbientGlow {
	/// Center, as fractions of the viewport.
	anchor: (f64, f64),
	radius: f64,
	color: Color,
	period: f64,
	delay: f64,
	max_scale: f64,
	opacity: (f64, f64),
}

impl AmbientGlow {
	fn pair(theme: &Theme) -> [AmbientGlow; 2] {
		[
			AmbientGlow {
				anchor: (0.0, 0.25),
				radius: 192.0,
				color: theme.ambient_glows[0],
				period: 8.0,
				delay: 0.0,
				max_scale: 1.1,
				opacity: (0.5, 0.7),
			},
			AmbientGlow {
				anchor: (1.0, 0.75),
				radius: 192.0,
				color: theme.ambient_glows[1],
				period: 10.0,
				delay: 2.0,
				max_scale: 1.15,
				opacity: (0.4, 0.6),
			},
		]
	}

	/// Ease-in-out position within the breath, 0 at rest and 1 at the peak.
	fn swell(&self, t: f64) -> f64 {
		let local = (t - self.delay).max(0.0);
		(1.0 - (local / self.period * 2.0 * PI).cos()) / 2.0
	}
}

/// Fixed, full-viewport canvas of slowly rising orbs.
///
/// The field is generated once per mount; the canvas follows the window size.
#[component]
pub fn BubbleBackground() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<(FrameLoop, Subscription)>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = canvas::context_2d(&canvas) else {
			return;
		};
		let host = BrowserHost::shared();
		let viewport = host.viewport();
		let (w, h) = viewport.unwrap_or((800.0, 600.0));
		canvas::fit(&canvas, w, h);
		let size = Rc::new(Cell::new((w, h)));

		let field_config = config.particles.clone();
		let field = particles::generate(&field_config, &mut config.rng());
		debug!("bubbles: {} orbs at {}x{}", field.len(), w, h);

		let (canvas_resize, size_resize) = (canvas.clone(), size.clone());
		let resize = Subscription::new(
			host.clone(),
			EventKind::Resize,
			Box::new(move |ev: &HostEvent| {
				if let HostEvent::Resize { width, height } = *ev {
					canvas::fit(&canvas_resize, width, height);
					size_resize.set((width, height));
				}
			}),
		);

		let glows = AmbientGlow::pair(&Theme::default());
		let frame_loop = FrameLoop::start(host, move |t| {
			let (w, h) = size.get();
			draw(&ctx, &field, &field_config, &glows, t, w, h);
			ControlFlow::Continue(())
		});
		running.set_value(Some((frame_loop, resize)));
	});

	on_cleanup(move || {
		running.try_update_value(|r| {
			if let Some((frame_loop, resize)) = r.take() {
				frame_loop.teardown();
				resize.cancel();
			}
		});
	});

	view! { <canvas node_ref=canvas_ref class="bubble-canvas" aria-hidden="true" /> }
}

fn draw(
	ctx: &CanvasRenderingContext2d,
	field: &[Particle],
	config: &FieldConfig,
	glows: &[AmbientGlow],
	t: f64,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);

	for glow in glows {
		let swell = glow.swell(t);
		let r = glow.radius * (1.0 + (glow.max_scale - 1.0) * swell);
		let alpha = glow.opacity.0 + (glow.opacity.1 - glow.opacity.0) * swell;
		let (cx, cy) = (glow.anchor.0 * width, glow.anchor.1 * height);
		fill_radial(ctx, cx, cy, r, glow.color.with_alpha(glow.color.a * alpha));
	}

	for p in field {
		let travel = p.travel(Some(height), config.margin);
		let Some(pose) = p.sample(t, travel) else {
			continue;
		};
		if pose.opacity <= 0.0 {
			continue;
		}
		// Orbs start two diameters below the bottom edge.
		let x = p.left / 100.0 * width + pose.drift;
		let y = height + p.size * 2.0 - pose.rise;
		let halo = p.color.with_alpha(p.color.a * pose.opacity);
		fill_radial(ctx, x, y, p.size * 2.0, halo.with_alpha(halo.a * 0.5));
		fill_radial(ctx, x, y, p.size / 2.0, halo.lighten(0.2));
	}
}

fn fill_radial(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: Color) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &color.to_css());
	let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, PI * 2.0);
	ctx.fill();
}

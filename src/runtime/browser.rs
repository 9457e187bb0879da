//! [`Host`] backed by the browser window.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{
	AnimationFrameRequestHandle, TimeoutHandle, WindowListenerHandle,
	request_animation_frame_with_handle, set_timeout_with_handle, window_event_listener_untyped,
};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use super::{
	ElementInfo, ElementPath, EventKind, FrameId, Handler, Host, HostEvent, ListenerId,
	SharedHost, TimerId,
};

thread_local! {
	static SHARED: Rc<BrowserHost> = Rc::new(BrowserHost::default());
}

/// Window-backed host. Use [`BrowserHost::shared`] to get the per-thread instance.
#[derive(Default)]
pub struct BrowserHost {
	next_id: Cell<u64>,
	listeners: RefCell<HashMap<u64, WindowListenerHandle>>,
	timers: Rc<RefCell<HashMap<u64, TimeoutHandle>>>,
	frames: Rc<RefCell<HashMap<u64, AnimationFrameRequestHandle>>>,
}

impl BrowserHost {
	pub fn shared() -> SharedHost {
		SHARED.with(|host| host.clone() as SharedHost)
	}

	fn next_id(&self) -> u64 {
		let id = self.next_id.get() + 1;
		self.next_id.set(id);
		id
	}

	fn window() -> Option<Window> {
		web_sys::window()
	}
}

/// Translate a raw DOM event into a [`HostEvent`].
fn translate(kind: EventKind, ev: &web_sys::Event) -> Option<HostEvent> {
	match kind {
		EventKind::MouseMove => {
			let ev = ev.dyn_ref::<MouseEvent>()?;
			Some(HostEvent::MouseMove {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			})
		}
		EventKind::MouseOver => {
			let target = ev.target()?.dyn_into::<Element>().ok()?;
			Some(HostEvent::MouseOver {
				path: element_path(target),
			})
		}
		EventKind::MouseDown => Some(HostEvent::MouseDown),
		EventKind::MouseUp => Some(HostEvent::MouseUp),
		EventKind::Scroll => Some(HostEvent::Scroll {
			y: BrowserHost::window()?.scroll_y().ok()?,
		}),
		EventKind::Resize => {
			let win = BrowserHost::window()?;
			Some(HostEvent::Resize {
				width: win.inner_width().ok()?.as_f64()?,
				height: win.inner_height().ok()?.as_f64()?,
			})
		}
	}
}

/// Walk from `target` up through its ancestors.
fn element_path(target: Element) -> ElementPath {
	let mut path = Vec::new();
	let mut current = Some(target);
	while let Some(el) = current {
		let list = el.class_list();
		let classes = (0..list.length()).filter_map(|i| list.item(i)).collect();
		path.push(ElementInfo {
			tag: el.tag_name().to_ascii_uppercase(),
			classes,
		});
		current = el.parent_element();
	}
	ElementPath(path)
}

impl Host for BrowserHost {
	fn now(&self) -> f64 {
		Self::window()
			.and_then(|w| w.performance())
			.map(|p| p.now())
			.unwrap_or_else(js_sys::Date::now)
	}

	fn coarse_pointer(&self) -> bool {
		Self::window()
			.and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
			.is_some_and(|mq| mq.matches())
	}

	fn viewport(&self) -> Option<(f64, f64)> {
		let win = Self::window()?;
		Some((
			win.inner_width().ok()?.as_f64()?,
			win.inner_height().ok()?.as_f64()?,
		))
	}

	fn scroll_y(&self) -> f64 {
		Self::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0)
	}

	fn scroll_to(&self, y: f64, smooth: bool) {
		let Some(win) = Self::window() else {
			return;
		};
		let options = ScrollToOptions::new();
		options.set_top(y);
		options.set_behavior(if smooth {
			ScrollBehavior::Smooth
		} else {
			ScrollBehavior::Instant
		});
		win.scroll_to_with_scroll_to_options(&options);
	}

	fn listen(&self, kind: EventKind, handler: Handler) -> ListenerId {
		let id = self.next_id();
		let handler = RefCell::new(handler);
		let handle = window_event_listener_untyped(kind.dom_name(), move |ev| {
			if let Some(event) = translate(kind, &ev) {
				(*handler.borrow_mut())(&event);
			}
		});
		self.listeners.borrow_mut().insert(id, handle);
		ListenerId(id)
	}

	fn unlisten(&self, id: ListenerId) {
		let handle = self.listeners.borrow_mut().remove(&id.0);
		if let Some(handle) = handle {
			handle.remove();
		}
	}

	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> TimerId {
		let id = self.next_id();
		let timers = self.timers.clone();
		let delay = Duration::from_secs_f64(delay_ms.max(0.0) / 1000.0);
		match set_timeout_with_handle(
			move || {
				timers.borrow_mut().remove(&id);
				callback();
			},
			delay,
		) {
			Ok(handle) => {
				self.timers.borrow_mut().insert(id, handle);
			}
			Err(e) => warn!("timeout registration failed: {:?}", e),
		}
		TimerId(id)
	}

	fn clear_timeout(&self, id: TimerId) {
		let handle = self.timers.borrow_mut().remove(&id.0);
		if let Some(handle) = handle {
			handle.clear();
		}
	}

	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameId {
		let id = self.next_id();
		let frames = self.frames.clone();
		match request_animation_frame_with_handle(move || {
			frames.borrow_mut().remove(&id);
			callback();
		}) {
			Ok(handle) => {
				self.frames.borrow_mut().insert(id, handle);
			}
			Err(e) => warn!("animation frame request failed: {:?}", e),
		}
		FrameId(id)
	}

	fn cancel_frame(&self, id: FrameId) {
		let handle = self.frames.borrow_mut().remove(&id.0);
		if let Some(handle) = handle {
			handle.cancel();
		}
	}
}

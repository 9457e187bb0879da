//! Host abstraction over window listeners, timers and animation frames.
//!
//! Effects never reach for `web_sys::window()` themselves. Every listener,
//! timeout and animation-frame request goes through a [`Host`], so the browser
//! build and the tests drive the same code, and tests can count what is still
//! registered after an effect has been torn down.
//!
//! - [`BrowserHost`] forwards to the real window.
//! - [`VirtualHost`] runs on a manual clock and records every registration.
//! - [`FrameLoop`] and [`Subscription`] are the RAII handles effects hold on to.

mod browser;
mod frame_loop;
mod virtual_host;

use std::cell::Cell;
use std::rc::Rc;

pub use browser::BrowserHost;
pub use frame_loop::FrameLoop;
pub use virtual_host::VirtualHost;

/// Handle for a registered window event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Handle for a pending timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Handle for a pending animation-frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// Window events the effects subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
	MouseMove,
	MouseOver,
	MouseDown,
	MouseUp,
	Scroll,
	Resize,
}

impl EventKind {
	/// DOM event name passed to `addEventListener`.
	pub const fn dom_name(self) -> &'static str {
		match self {
			EventKind::MouseMove => "mousemove",
			EventKind::MouseOver => "mouseover",
			EventKind::MouseDown => "mousedown",
			EventKind::MouseUp => "mouseup",
			EventKind::Scroll => "scroll",
			EventKind::Resize => "resize",
		}
	}
}

/// One element on the path from an event target up to the document root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementInfo {
	/// Upper-case tag name, as reported by `Element.tagName` for HTML.
	pub tag: String,
	pub classes: Vec<String>,
}

impl ElementInfo {
	pub fn new(tag: &str) -> Self {
		Self {
			tag: tag.to_ascii_uppercase(),
			classes: Vec::new(),
		}
	}

	pub fn with_class(mut self, class: &str) -> Self {
		self.classes.push(class.to_string());
		self
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}
}

/// Event target followed by its ancestors, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementPath(pub Vec<ElementInfo>);

impl ElementPath {
	pub fn iter(&self) -> impl Iterator<Item = &ElementInfo> {
		self.0.iter()
	}
}

/// A window event, already translated out of `web_sys` types.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
	MouseMove { x: f64, y: f64 },
	MouseOver { path: ElementPath },
	MouseDown,
	MouseUp,
	Scroll { y: f64 },
	Resize { width: f64, height: f64 },
}

impl HostEvent {
	pub fn kind(&self) -> EventKind {
		match self {
			HostEvent::MouseMove { .. } => EventKind::MouseMove,
			HostEvent::MouseOver { .. } => EventKind::MouseOver,
			HostEvent::MouseDown => EventKind::MouseDown,
			HostEvent::MouseUp => EventKind::MouseUp,
			HostEvent::Scroll { .. } => EventKind::Scroll,
			HostEvent::Resize { .. } => EventKind::Resize,
		}
	}
}

/// Listener callback.
pub type Handler = Box<dyn FnMut(&HostEvent)>;

/// Everything an effect needs from its environment.
///
/// Callbacks run on the single UI thread. Implementations must not hold any
/// internal borrow while invoking a callback, since callbacks routinely
/// register or cancel other callbacks.
pub trait Host {
	/// Monotonic clock in milliseconds.
	fn now(&self) -> f64;
	/// Whether the primary input is coarse (touch).
	fn coarse_pointer(&self) -> bool;
	/// Viewport size in CSS pixels, if known.
	fn viewport(&self) -> Option<(f64, f64)>;
	/// Current vertical scroll offset in CSS pixels.
	fn scroll_y(&self) -> f64;
	/// Scroll the window to the vertical offset `y`.
	fn scroll_to(&self, y: f64, smooth: bool);

	fn listen(&self, kind: EventKind, handler: Handler) -> ListenerId;
	fn unlisten(&self, id: ListenerId);

	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> TimerId;
	fn clear_timeout(&self, id: TimerId);

	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameId;
	fn cancel_frame(&self, id: FrameId);
}

/// Reference-counted host shared by the effects of one page.
pub type SharedHost = Rc<dyn Host>;

/// A listener registration that is removed on [`cancel`](Self::cancel) or drop.
pub struct Subscription {
	host: SharedHost,
	id: Cell<Option<ListenerId>>,
}

impl Subscription {
	pub fn new(host: SharedHost, kind: EventKind, handler: Handler) -> Self {
		let id = host.listen(kind, handler);
		Self {
			host,
			id: Cell::new(Some(id)),
		}
	}

	pub fn is_active(&self) -> bool {
		self.id.get().is_some()
	}

	pub fn cancel(&self) {
		if let Some(id) = self.id.take() {
			self.host.unlisten(id);
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.cancel();
	}
}

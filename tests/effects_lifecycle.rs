// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

//! Mount, drive and tear down each effect against a virtual host, then check
//! that nothing is left registered.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use orbit_folio::components::effects::{
	CursorConfig, CursorTracker, RevealSchedule, ScrollTracker, StaggerReveal, TypewriterReveal,
};
use orbit_folio::components::solar_system::{OrbitalAnimation, OrbitalScene, SceneConfig};
use orbit_folio::runtime::{ElementInfo, ElementPath, EventKind, Host, HostEvent, VirtualHost};

fn mouse_move(x: f64, y: f64) -> HostEvent {
	HostEvent::MouseMove { x, y }
}

fn small_scene() -> OrbitalScene {
	let mut config = SceneConfig::default();
	config.starfield.count = 50;
	OrbitalScene::generate(&config, &mut fastrand::Rng::with_seed(3))
}

#[test]
fn cursor_registers_four_listeners_and_removes_them() {
	let host = VirtualHost::new();
	let tracker = CursorTracker::mount(host.clone(), &CursorConfig::default(), |_, _| {});
	assert!(tracker.is_active());
	assert_eq!(host.listener_count(), 4);
	for kind in [
		EventKind::MouseMove,
		EventKind::MouseOver,
		EventKind::MouseDown,
		EventKind::MouseUp,
	] {
		assert_eq!(host.listeners_for(kind), 1);
	}

	host.dispatch(mouse_move(10.0, 10.0));
	assert_eq!(host.pending_frames(), 1);

	tracker.teardown();
	assert!(host.is_quiescent());
	tracker.teardown();
	assert!(host.is_quiescent());
	assert!(!tracker.is_active());
}

#[test]
fn dropping_the_cursor_tracker_tears_it_down() {
	let host = VirtualHost::new();
	{
		let _tracker = CursorTracker::mount(host.clone(), &CursorConfig::default(), |_, _| {});
		host.dispatch(mouse_move(1.0, 2.0));
	}
	assert!(host.is_quiescent());
}

#[test]
fn coarse_pointer_registers_nothing() {
	let host = VirtualHost::coarse();
	let calls = Rc::new(Cell::new(0));
	let c = calls.clone();
	let tracker = CursorTracker::mount(host.clone(), &CursorConfig::default(), move |_, _| {
		c.set(c.get() + 1)
	});

	assert!(!tracker.is_active());
	assert_eq!(host.listens_total(), 0);
	host.dispatch(mouse_move(5.0, 5.0));
	assert_eq!(calls.get(), 0);
	assert!(host.is_quiescent());
}

#[test]
fn disabled_cursor_registers_nothing() {
	let host = VirtualHost::new();
	let config = CursorConfig {
		enabled: false,
		..CursorConfig::default()
	};
	let tracker = CursorTracker::mount(host.clone(), &config, |_, _| {});
	assert!(!tracker.is_active());
	assert_eq!(host.listens_total(), 0);
}

#[test]
fn trail_stays_bounded_under_a_burst() {
	let host = VirtualHost::new();
	let config = CursorConfig {
		trail_cap: 8,
		..CursorConfig::default()
	};
	let max_seen = Rc::new(Cell::new(0));
	let m = max_seen.clone();
	let tracker = CursorTracker::mount(host.clone(), &config, move |state, _| {
		m.set(m.get().max(state.trail().len()));
	});

	for i in 0..500 {
		host.dispatch(mouse_move(i as f64, 0.0));
	}
	let state = tracker.state();
	assert_eq!(max_seen.get(), 8);
	assert_eq!(state.trail().len(), 8);
	assert_eq!(state.trail().back().map(|p| p.x), Some(499.0));
	let ids: Vec<u64> = state.trail().iter().map(|p| p.id).collect();
	assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn fade_loop_stops_once_the_trail_is_gone() {
	let host = VirtualHost::new();
	let tracker = CursorTracker::mount(host.clone(), &CursorConfig::default(), |_, _| {});

	host.dispatch(mouse_move(0.0, 0.0));
	host.dispatch(mouse_move(4.0, 4.0));
	assert_eq!(host.pending_frames(), 1);

	assert_eq!(host.tick(16.0), 1);
	assert_eq!(host.pending_frames(), 1);

	host.tick(600.0);
	assert!(tracker.state().trail().is_empty());
	assert_eq!(host.pending_frames(), 0);
	assert_eq!(host.listener_count(), 4);

	host.dispatch(mouse_move(8.0, 8.0));
	assert_eq!(host.pending_frames(), 1);
}

#[test]
fn hover_and_press_follow_events() {
	let host = VirtualHost::new();
	let tracker = CursorTracker::mount(host.clone(), &CursorConfig::default(), |_, _| {});

	let link = ElementPath(vec![ElementInfo::new("span"), ElementInfo::new("a")]);
	host.dispatch(HostEvent::MouseOver { path: link });
	assert!(tracker.state().hovering);

	let card = ElementPath(vec![ElementInfo::new("div").with_class("clickable")]);
	host.dispatch(HostEvent::MouseOver { path: card });
	assert!(tracker.state().hovering);

	let plain = ElementPath(vec![ElementInfo::new("p"), ElementInfo::new("body")]);
	host.dispatch(HostEvent::MouseOver { path: plain });
	assert!(!tracker.state().hovering);

	host.dispatch(HostEvent::MouseDown);
	assert!(tracker.state().pressed);
	host.dispatch(HostEvent::MouseUp);
	assert!(!tracker.state().pressed);
}

#[test]
fn scroll_tracker_stops_notifying_after_teardown() {
	let host = VirtualHost::new();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let s = seen.clone();
	let tracker = ScrollTracker::mount(host.clone(), 20.0, move |past| s.borrow_mut().push(past));

	host.dispatch(HostEvent::Scroll { y: 21.0 });
	tracker.teardown();
	tracker.teardown();
	host.dispatch(HostEvent::Scroll { y: 0.0 });

	assert_eq!(*seen.borrow(), vec![true]);
	assert!(host.is_quiescent());
	assert!(!tracker.is_active());
}

#[test]
fn scroll_to_reaches_scroll_listeners() {
	let host = VirtualHost::new();
	let tracker = ScrollTracker::mount(host.clone(), 400.0, |_| {});
	host.dispatch(HostEvent::Scroll { y: 900.0 });
	assert!(tracker.is_past());

	host.scroll_to(0.0, true);
	assert!(!tracker.is_past());
	assert_eq!(host.scroll_requests(), vec![(0.0, true)]);
}

#[test]
fn scene_animation_renders_frames_from_the_clock() {
	let host = VirtualHost::new();
	let scene = small_scene();
	let expected = scene.clone();
	let frames = Rc::new(RefCell::new(Vec::new()));
	let sizes = Rc::new(RefCell::new(Vec::new()));

	let (f, s) = (frames.clone(), sizes.clone());
	let animation = OrbitalAnimation::start(
		host.clone(),
		scene,
		move |w, h| s.borrow_mut().push((w, h)),
		move |_, frame| f.borrow_mut().push(frame.clone()),
	);
	assert!(animation.is_running());

	host.tick(16.0);
	host.tick(16.0);
	host.dispatch(HostEvent::Resize {
		width: 640.0,
		height: 480.0,
	});

	let frames = frames.borrow();
	assert_eq!(frames.len(), 2);
	assert_eq!(frames[0], expected.frame(0.016));
	assert_eq!(frames[1], expected.frame(0.032));
	assert_eq!(*sizes.borrow(), vec![(640.0, 480.0)]);

	animation.teardown();
	assert!(!animation.is_running());
	assert!(host.is_quiescent());
	assert_eq!(host.tick(16.0), 0);
}

#[test]
fn stagger_teardown_clears_the_remaining_timers() {
	let host = VirtualHost::new();
	let schedule = RevealSchedule::new("hello", 50.0, 0.0);
	let reveal = StaggerReveal::start(host.clone(), &schedule, |_| {});
	assert_eq!(host.pending_timers(), 5);

	host.advance(120.0);
	assert_eq!(reveal.revealed_count(), 3);
	assert_eq!(reveal.pending_count(), 2);

	reveal.teardown();
	reveal.teardown();
	assert!(host.is_quiescent());
	host.advance(1_000.0);
	assert_eq!(reveal.revealed_count(), 3);
}

#[test]
fn typewriter_teardown_cancels_the_single_pending_timer() {
	let host = VirtualHost::new();
	let schedule = RevealSchedule::new("orbit", 80.0, 600.0);
	let reveal = TypewriterReveal::start(host.clone(), &schedule, |_| {});

	host.advance(700.0);
	assert_eq!(reveal.text(), "o");
	assert_eq!(host.pending_timers(), 1);

	reveal.teardown();
	assert!(host.is_quiescent());
	host.advance(10_000.0);
	assert_eq!(reveal.text(), "o");
	assert!(!reveal.is_complete());
}

#[test]
fn leaving_a_page_releases_every_effect() {
	let host = VirtualHost::new();

	let cursor = CursorTracker::mount(host.clone(), &CursorConfig::default(), |_, _| {});
	let navbar = ScrollTracker::mount(host.clone(), 20.0, |_| {});
	let back_to_top = ScrollTracker::mount(host.clone(), 400.0, |_| {});
	let scene = OrbitalAnimation::start(host.clone(), small_scene(), |_, _| {}, |_, _| {});
	let name = StaggerReveal::start(host.clone(), &RevealSchedule::new("Ayush", 50.0, 0.0), |_| {});
	let role = TypewriterReveal::start(
		host.clone(),
		&RevealSchedule::new("Full-Stack Developer", 80.0, 600.0),
		|_| {},
	);

	host.dispatch(mouse_move(3.0, 3.0));
	host.dispatch(HostEvent::Scroll { y: 500.0 });
	host.tick(100.0);
	assert!(!host.is_quiescent());

	drop((cursor, navbar, back_to_top, scene, name, role));
	assert!(host.is_quiescent());
	assert_eq!(host.listener_count(), 0);
	assert_eq!(host.pending_timers(), 0);
	assert_eq!(host.pending_frames(), 0);
}

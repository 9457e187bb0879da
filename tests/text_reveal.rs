// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::cell::RefCell;
use std::rc::Rc;

use orbit_folio::components::effects::{RevealSchedule, StaggerReveal, TypewriterReveal};
use orbit_folio::runtime::VirtualHost;
use proptest::prelude::*;

#[test]
fn typewriter_shows_every_prefix_in_order() {
	let host = VirtualHost::new();
	let text = "Hi, I'm Ayush";
	let schedule = RevealSchedule::new(text, 80.0, 600.0);
	let shown = Rc::new(RefCell::new(Vec::new()));
	let s = shown.clone();
	let reveal = TypewriterReveal::start(host.clone(), &schedule, move |prefix| {
		s.borrow_mut().push(prefix.to_string())
	});

	assert_eq!(reveal.text(), "");
	host.advance(599.0);
	assert!(shown.borrow().is_empty());

	let n = text.chars().count();
	for i in 1..=n {
		host.advance(if i == 1 { 81.0 } else { 80.0 });
		assert_eq!(reveal.shown(), i);
		assert!(host.pending_timers() <= 1);
	}

	let expected: Vec<String> = (1..=n).map(|i| text.chars().take(i).collect()).collect();
	assert_eq!(*shown.borrow(), expected);
	assert_eq!(reveal.text(), text);
	assert!(reveal.is_complete());
	assert!(host.is_quiescent());
}

#[test]
fn stagger_fire_times_are_evenly_spaced() {
	let host = VirtualHost::new();
	let schedule = RevealSchedule::new("KATIYAR", 50.0, 0.0);
	let order = Rc::new(RefCell::new(Vec::new()));
	let o = order.clone();
	let reveal = StaggerReveal::start(host.clone(), &schedule, move |i| o.borrow_mut().push(i));

	assert_eq!(
		host.scheduled_delays(),
		vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0]
	);
	host.advance(300.0);
	assert_eq!(*order.borrow(), (0..7).collect::<Vec<_>>());
	assert_eq!(reveal.revealed_count(), 7);
	assert!(host.is_quiescent());
}

proptest! {
	#[test]
	fn typewriter_intermediates_are_prefixes(text in "\\PC{0,24}", interval in 1.0f64..200.0) {
		let host = VirtualHost::new();
		let schedule = RevealSchedule::new(text.clone(), interval, 0.0);
		let shown = Rc::new(RefCell::new(Vec::new()));
		let s = shown.clone();
		let reveal = TypewriterReveal::start(host.clone(), &schedule, move |p| s.borrow_mut().push(p.to_string()));

		let n = text.chars().count();
		host.advance(interval * (n as f64 + 1.0));

		prop_assert_eq!(shown.borrow().len(), n);
		for (i, prefix) in shown.borrow().iter().enumerate() {
			prop_assert!(text.starts_with(prefix.as_str()));
			prop_assert_eq!(prefix.chars().count(), i + 1);
		}
		prop_assert_eq!(reveal.text(), text.as_str());
		prop_assert!(host.is_quiescent());
	}

	#[test]
	fn stagger_reveals_each_char_once(text in "\\PC{0,32}", delay in 0.0f64..100.0) {
		let host = VirtualHost::new();
		let schedule = RevealSchedule::new(text.clone(), delay, 0.0);
		let hits = Rc::new(RefCell::new(vec![0u32; text.chars().count()]));
		let h = hits.clone();
		let _reveal = StaggerReveal::start(host.clone(), &schedule, move |i| h.borrow_mut()[i] += 1);

		let n = text.chars().count();
		let expected: Vec<f64> = (0..n).map(|i| i as f64 * delay).collect();
		prop_assert_eq!(host.scheduled_delays(), expected);

		host.advance(delay * n as f64 + 1.0);
		prop_assert!(hits.borrow().iter().all(|&c| c == 1));
	}
}

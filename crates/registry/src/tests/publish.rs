use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{
	Delivery, DuplicatePolicy, Host, ImplementorList, LibraryId, PublicationSink, Registry,
	RegistryBuilder, SlotWrite, builtins, implementors, publish, publish_builtins,
};

/// Records every delivery without choosing a path itself.
#[derive(Default)]
struct MockSink {
	delivered: Vec<Registry>,
}

impl PublicationSink for MockSink {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		self.delivered.push(registry);
		Delivery::Invoked
	}
}

fn authored() -> Registry {
	implementors! {
		"libA" => ["impl <a>Send</a> for <a>A</a>", "impl <a>Send</a> for <a>B</a>"],
		"libB" => [],
		"libC" => ["impl <a>Send</a> for <a>C</a>"],
	}
}

fn ordered(registry: Registry) -> Vec<(LibraryId, ImplementorList)> {
	registry.into_iter().collect()
}

/// Installs a hook that counts calls and keeps the last registry it saw.
fn counting_hook(host: &mut Host) -> (Arc<AtomicUsize>, Arc<Mutex<Option<Registry>>>) {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::new(Mutex::new(None));
	let (hook_calls, hook_seen) = (calls.clone(), seen.clone());
	host.install_hook(move |registry: &Registry| {
		hook_calls.fetch_add(1, Ordering::SeqCst);
		*hook_seen.lock() = Some(registry.clone());
	});
	(calls, seen)
}

#[test]
fn test_publish_hands_registry_to_sink_once() {
	let mut sink = MockSink::default();
	publish(&mut sink, authored());
	assert_eq!(sink.delivered.len(), 1);
	assert_eq!(ordered(sink.delivered.remove(0)), ordered(authored()));
}

#[test]
fn test_publish_through_dyn_sink() {
	let mut sink = MockSink::default();
	let dyn_sink: &mut dyn PublicationSink = &mut sink;
	assert!(publish(dyn_sink, authored()).is_invoked());
	assert_eq!(sink.delivered.len(), 1);
}

#[test]
fn test_undefined_hook_buffers_lib_a_in_authored_order() {
	let mut host = Host::default();
	assert_eq!(host.publish(authored()), Delivery::Buffered(SlotWrite::Filled));

	let pending = host.pending().take().expect("registry buffered");
	let lib_a: Vec<&str> = pending.get("libA").unwrap().iter().map(|f| f.as_str()).collect();
	assert_eq!(lib_a, vec!["impl <a>Send</a> for <a>A</a>", "impl <a>Send</a> for <a>B</a>"]);
}

#[test]
fn test_recorder_hook_called_once_with_full_key_set() {
	let mut host = Host::default();
	let (calls, seen) = counting_hook(&mut host);

	assert_eq!(host.publish(authored()), Delivery::Invoked);

	assert_eq!(calls.load(Ordering::SeqCst), 1);
	let seen = seen.lock().take().expect("hook saw registry");
	let keys: Vec<&str> = seen.libraries().map(|l| l.as_str()).collect();
	assert_eq!(keys, vec!["libA", "libB", "libC"]);
}

#[test]
fn test_hook_path_never_writes_slot() {
	let mut host = Host::default();
	let (calls, _) = counting_hook(&mut host);
	host.publish(authored());

	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert!(host.pending().is_empty());
}

#[test]
fn test_buffer_path_never_calls_hook() {
	let mut host = Host::default();
	let pending = host.pending().clone();
	host.publish(authored());

	assert!(!host.has_hook());
	assert!(!pending.is_empty());
}

#[test]
fn test_publish_builtins_delivers_baked_literal() {
	let mut sink = MockSink::default();
	publish_builtins(&mut sink);
	assert_eq!(ordered(sink.delivered.remove(0)), ordered(builtins::registry()));
}

#[test]
#[should_panic(expected = "host hook failed")]
fn test_hook_panic_propagates() {
	let mut host = Host::default();
	host.install_hook(|_: &Registry| panic!("host hook failed"));
	host.publish(authored());
}

fn arb_registry() -> impl Strategy<Value = Registry> {
	prop::collection::vec(
		("[a-z_]{1,8}", prop::collection::vec("[ -~]{0,32}", 0..6)),
		0..8,
	)
	.prop_map(|entries| {
		let mut builder = RegistryBuilder::new().policy(DuplicatePolicy::FirstWins);
		for (library, fragments) in entries {
			builder.insert(library, fragments);
		}
		builder.build()
	})
}

proptest! {
	/// Whichever path runs, the host receives exactly the authored registry,
	/// with library and fragment order intact, and the other path stays untouched.
	#[test]
	fn prop_exactly_one_path_with_identical_registry(registry in arb_registry(), hooked in any::<bool>()) {
		let mut host = Host::default();
		let hook = hooked.then(|| counting_hook(&mut host));

		let delivery = host.publish(registry.clone());

		match hook {
			Some((calls, seen)) => {
				prop_assert!(delivery.is_invoked());
				prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
				prop_assert!(host.pending().is_empty());
				let seen = seen.lock().take().unwrap();
				prop_assert_eq!(ordered(seen), ordered(registry));
			}
			None => {
				prop_assert_eq!(delivery, Delivery::Buffered(SlotWrite::Filled));
				let pending = host.pending().take().unwrap();
				prop_assert_eq!(ordered(pending), ordered(registry));
			}
		}
	}

	/// Building the same entries twice yields identical registries.
	#[test]
	fn prop_construction_is_deterministic(entries in prop::collection::vec(
		("[a-z]{1,6}", prop::collection::vec("[ -~]{0,16}", 0..4)),
		0..6,
	)) {
		let build = || {
			let mut builder = RegistryBuilder::new().policy(DuplicatePolicy::LastWins);
			for (library, fragments) in entries.clone() {
				builder.insert(library, fragments);
			}
			builder.build()
		};
		prop_assert_eq!(ordered(build()), ordered(build()));
	}
}

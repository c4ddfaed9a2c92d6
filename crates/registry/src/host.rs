//! Host environment for publication.
//!
//! The documentation viewer owns two bindings: an optional registration hook
//! and a pending slot. [`Host`] keeps both as explicit state and picks the
//! matching [`PublicationSink`] at publish time, instead of the publisher
//! probing for globals.

use crate::config::PublishConfig;
use crate::sink::{Delivery, PendingSlot, PublicationSink, RepeatPolicy};
use crate::{Registry, publish};

/// Host registration hook.
pub type Hook = Box<dyn FnMut(&Registry) + Send>;

/// Documentation host: a registration hook (once ready) and a pending slot.
pub struct Host {
	hook: Option<Hook>,
	pending: PendingSlot,
	policy: RepeatPolicy,
}

impl Default for Host {
	fn default() -> Self {
		Self::new(&PublishConfig::default())
	}
}

impl std::fmt::Debug for Host {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Host")
			.field("has_hook", &self.hook.is_some())
			.field("pending", &self.pending)
			.field("policy", &self.policy)
			.finish()
	}
}

impl Host {
	pub fn new(config: &PublishConfig) -> Self {
		Self {
			hook: None,
			pending: PendingSlot::new(),
			policy: config.handoff.on_repeat,
		}
	}

	#[inline]
	pub fn has_hook(&self) -> bool {
		self.hook.is_some()
	}

	/// The pending slot; clones observe the same registry.
	#[inline]
	pub fn pending(&self) -> &PendingSlot {
		&self.pending
	}

	/// Selects the sink for the current host state.
	pub fn sink(&mut self) -> HostSink<'_> {
		match self.hook.as_mut() {
			Some(hook) => HostSink::Immediate(hook),
			None => HostSink::Buffered {
				slot: &self.pending,
				policy: self.policy,
			},
		}
	}

	/// Publishes `registry` through [`Host::sink`].
	pub fn publish(&mut self, registry: Registry) -> Delivery {
		publish(&mut self.sink(), registry)
	}

	/// Installs the registration hook, replacing any previous one.
	///
	/// A registry already waiting in the pending slot is taken out and passed
	/// to the new hook right away. Returns whether that happened.
	pub fn install_hook(&mut self, hook: impl FnMut(&Registry) + Send + 'static) -> bool {
		let hook = self.hook.insert(Box::new(hook));
		let Some(pending) = self.pending.take() else {
			return false;
		};
		tracing::debug!(libraries = pending.len(), "delivering pending implementors to new hook");
		(*hook)(&pending);
		true
	}

	/// Removes the registration hook; later publishes are buffered again.
	pub fn remove_hook(&mut self) -> Option<Hook> {
		self.hook.take()
	}
}

/// Sink chosen by [`Host::sink`].
pub enum HostSink<'a> {
	/// The hook is installed.
	Immediate(&'a mut Hook),
	/// No hook yet; buffer into the slot.
	Buffered {
		slot: &'a PendingSlot,
		policy: RepeatPolicy,
	},
}

impl PublicationSink for HostSink<'_> {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		match self {
			HostSink::Immediate(hook) => {
				(**hook)(&registry);
				Delivery::Invoked
			}
			HostSink::Buffered { slot, policy } => Delivery::Buffered(slot.store(registry, *policy)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use parking_lot::Mutex;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::config::HandoffConfig;
	use crate::implementors;
	use crate::sink::SlotWrite;

	fn recorder() -> (Arc<Mutex<Vec<Registry>>>, impl FnMut(&Registry) + Send + 'static) {
		let calls = Arc::new(Mutex::new(Vec::new()));
		let sink = calls.clone();
		(calls, move |registry: &Registry| sink.lock().push(registry.clone()))
	}

	fn sample() -> Registry {
		implementors! {
			"libA" => ["impl Send for A", "impl Send for B"],
			"libB" => ["impl Send for C"],
		}
	}

	#[test]
	fn test_publish_without_hook_buffers() {
		let mut host = Host::default();
		assert_eq!(host.publish(sample()), Delivery::Buffered(SlotWrite::Filled));
		assert_eq!(host.pending().take(), Some(sample()));
	}

	#[test]
	fn test_publish_with_hook_invokes_and_leaves_slot_empty() {
		let (calls, hook) = recorder();
		let mut host = Host::default();
		assert!(!host.install_hook(hook));

		assert_eq!(host.publish(sample()), Delivery::Invoked);
		assert!(host.pending().is_empty());
		assert_eq!(*calls.lock(), vec![sample()]);
	}

	#[test]
	fn test_install_hook_drains_pending() {
		let (calls, hook) = recorder();
		let mut host = Host::default();
		host.publish(sample());

		assert!(host.install_hook(hook));
		assert!(host.pending().is_empty());
		assert_eq!(*calls.lock(), vec![sample()]);
	}

	#[test]
	fn test_remove_hook_returns_to_buffering() {
		let (calls, hook) = recorder();
		let mut host = Host::default();
		host.install_hook(hook);
		assert!(host.remove_hook().is_some());
		assert!(!host.has_hook());

		assert!(host.publish(sample()).is_buffered());
		assert!(calls.lock().is_empty());
	}

	#[test]
	fn test_config_policy_applies_to_repeated_publish() {
		let config = PublishConfig {
			handoff: HandoffConfig {
				on_repeat: RepeatPolicy::KeepFirst,
			},
		};
		let mut host = Host::new(&config);
		host.publish(sample());

		let later = implementors! { "libC" => [] };
		assert_eq!(host.publish(later), Delivery::Buffered(SlotWrite::Ignored));
		assert_eq!(host.pending().take(), Some(sample()));
	}
}

//! Publication sinks.
//!
//! A sink is where a published [`Registry`] ends up. The host composes one of
//! two sinks:
//!
//! * [`ImmediateSink`]: the host's registration hook is ready; the registry is
//!   passed to it synchronously.
//! * [`BufferedSink`]: the hook is not ready yet; the registry is parked in a
//!   [`PendingSlot`] until the host picks it up.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;

use crate::Registry;


/// Destination for a published registry.
pub trait PublicationSink {
	/// Takes ownership of `registry` and hands it to the host.
	fn deliver(&mut self, registry: Registry) -> Delivery;
}

impl<S: PublicationSink + ?Sized> PublicationSink for &mut S {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		(**self).deliver(registry)
	}
}

impl<S: PublicationSink + ?Sized> PublicationSink for Box<S> {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		(**self).deliver(registry)
	}
}

/// Which handoff path a publish took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
	/// The host hook was called with the registry.
	Invoked,
	/// The registry was written to the pending slot.
	Buffered(SlotWrite),
}

impl Delivery {
	pub fn is_invoked(self) -> bool {
		matches!(self, Delivery::Invoked)
	}

	pub fn is_buffered(self) -> bool {
		matches!(self, Delivery::Buffered(_))
	}
}

/// Effect of a write to a [`PendingSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWrite {
	/// The slot was empty and now holds the registry.
	Filled,
	/// A pending registry was overwritten.
	Replaced,
	/// The registry was merged into the pending one, library by library.
	Merged,
	/// A pending registry was already present and kept; the new one was dropped.
	Ignored,
}

/// What a buffered write does when the slot already holds a registry.
///
/// Only reachable when the publisher is loaded more than once before the host
/// picks the slot up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatPolicy {
	/// The newest registry overwrites the pending one.
	#[default]
	LastWriteWins,
	/// Libraries from the newest registry replace or extend the pending one.
	MergeByKey,
	/// The pending registry stays; later ones are dropped.
	KeepFirst,
}

/// Shared handoff slot for a registry awaiting pickup.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct PendingSlot {
	inner: Arc<Mutex<Option<Registry>>>,
}

impl PendingSlot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes `registry` into the slot, resolving an occupied slot by `policy`.
	pub fn store(&self, registry: Registry, policy: RepeatPolicy) -> SlotWrite {
		let mut slot = self.inner.lock();
		let write = match (slot.take(), policy) {
			(None, _) => {
				*slot = Some(registry);
				SlotWrite::Filled
			}
			(Some(_), RepeatPolicy::LastWriteWins) => {
				tracing::warn!("pending implementors overwritten by a repeated publish");
				*slot = Some(registry);
				SlotWrite::Replaced
			}
			(Some(pending), RepeatPolicy::MergeByKey) => {
				*slot = Some(pending.merge_by_key(registry));
				SlotWrite::Merged
			}
			(Some(pending), RepeatPolicy::KeepFirst) => {
				tracing::warn!(
					dropped_libraries = registry.len(),
					"pending implementors already present; repeated publish dropped"
				);
				*slot = Some(pending);
				SlotWrite::Ignored
			}
		};
		tracing::trace!(?write, ?policy, "pending implementors slot written");
		write
	}

	/// Removes and returns the pending registry, leaving the slot empty.
	pub fn take(&self) -> Option<Registry> {
		self.inner.lock().take()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_none()
	}

	/// Runs `f` against the pending registry without taking it.
	pub fn with<R>(&self, f: impl FnOnce(Option<&Registry>) -> R) -> R {
		f(self.inner.lock().as_ref())
	}
}

/// Sink that invokes a registration callback synchronously.
///
/// The callback sees the registry by reference; a panic inside it unwinds
/// through [`deliver`](PublicationSink::deliver) to the caller.
pub struct ImmediateSink<F> {
	hook: F,
}

impl<F: FnMut(&Registry)> ImmediateSink<F> {
	pub fn new(hook: F) -> Self {
		Self { hook }
	}

	pub fn into_inner(self) -> F {
		self.hook
	}
}

impl<F: FnMut(&Registry)> PublicationSink for ImmediateSink<F> {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		(self.hook)(&registry);
		Delivery::Invoked
	}
}

impl<F> std::fmt::Debug for ImmediateSink<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ImmediateSink").finish_non_exhaustive()
	}
}

/// Sink that parks the registry in a [`PendingSlot`].
#[derive(Debug, Clone)]
pub struct BufferedSink {
	slot: PendingSlot,
	policy: RepeatPolicy,
}

impl BufferedSink {
	pub fn new(slot: PendingSlot) -> Self {
		Self {
			slot,
			policy: RepeatPolicy::default(),
		}
	}

	/// Sets how a write into an occupied slot is resolved.
	pub fn policy(mut self, policy: RepeatPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn slot(&self) -> &PendingSlot {
		&self.slot
	}
}

impl PublicationSink for BufferedSink {
	fn deliver(&mut self, registry: Registry) -> Delivery {
		Delivery::Buffered(self.slot.store(registry, self.policy))
	}
}

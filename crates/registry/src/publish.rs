//! The load-time publish step.

use crate::sink::{Delivery, PublicationSink};
use crate::{Registry, builtins};

/// Hands `registry` to `sink`, which either invokes the host hook or buffers
/// the registry. Exactly one of the two happens.
///
/// Publishing cannot fail. A panicking host hook is not caught.
pub fn publish<S>(sink: &mut S, registry: Registry) -> Delivery
where
	S: PublicationSink + ?Sized,
{
	let libraries = registry.len();
	let fragments = registry.fragment_count();
	let delivery = sink.deliver(registry);
	tracing::debug!(libraries, fragments, ?delivery, "implementors published");
	delivery
}

/// Publishes the baked [`builtins::registry`].
pub fn publish_builtins<S>(sink: &mut S) -> Delivery
where
	S: PublicationSink + ?Sized,
{
	tracing::debug!(trait_path = builtins::TRAIT_PATH, "publishing builtin implementors");
	publish(sink, builtins::registry())
}

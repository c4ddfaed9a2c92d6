//! Trait implementor registry and its handoff to a documentation host.
//!
//! A [`Registry`] maps library names to pre-rendered implementor markup for
//! one trait. At load time the registry is published exactly once:
//!
//! * if the host has a registration hook, it is called with the registry;
//! * otherwise the registry waits in a [`PendingSlot`] until the host
//!   installs its hook and picks it up.
//!
//! The host chooses between the two through [`Host::sink`]; tests and other
//! embedders can pass any [`PublicationSink`] to [`publish()`] directly.
//!
//! # Modules
//!
//! - [`registry`] - Registry, builder and duplicate handling
//! - [`sink`] - Immediate and buffered sinks, pending slot
//! - [`host`] - Host-side hook and pending state
//! - [`builtins`] - Baked registry literal
//! - [`config`] - TOML publish configuration

#[macro_use]
mod macros;

pub mod builtins;
pub mod config;
pub mod error;
pub mod fragment;
pub mod host;
pub mod publish;
pub mod registry;
pub mod sink;

#[cfg(test)]
mod tests;

pub use config::{HandoffConfig, PublishConfig};
pub use error::{ConfigError, RegistryError};
pub use fragment::{LibraryId, MarkupFragment};
pub use host::{Hook, Host, HostSink};
pub use publish::{publish, publish_builtins};
pub use registry::{DuplicatePolicy, ImplementorList, InsertAction, Registry, RegistryBuilder};
pub use sink::{BufferedSink, Delivery, ImmediateSink, PendingSlot, PublicationSink, RepeatPolicy, SlotWrite};

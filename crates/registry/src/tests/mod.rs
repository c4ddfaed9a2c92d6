//! Publish-path integration tests across registry, sinks and host.

mod publish;

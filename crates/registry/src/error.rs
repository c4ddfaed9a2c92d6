use std::path::PathBuf;

/// Errors raised while assembling a registry from host-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two entries named the same library.
	#[error("duplicate library: {library:?}")]
	DuplicateLibrary { library: String },
}

/// Errors raised while loading a [`PublishConfig`](crate::PublishConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The config file could not be read.
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	/// The config file is not valid TOML or does not match the schema.
	#[error("failed to parse publish config: {0}")]
	Parse(#[from] toml::de::Error),
}

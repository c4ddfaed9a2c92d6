//! Opaque string values stored in a registry.
//!
//! # Trust boundary
//!
//! [`MarkupFragment`] carries pre-rendered HTML exactly as the artifact
//! generator authored it. Nothing here parses, validates or escapes it; the
//! renderer that eventually displays a fragment owns sanitization.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a documented library, e.g. `glutin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryId(Box<str>);

impl LibraryId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self(id.into())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for LibraryId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for LibraryId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LibraryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for LibraryId {
	fn from(id: &str) -> Self {
		Self(id.into())
	}
}

impl From<String> for LibraryId {
	fn from(id: String) -> Self {
		Self(id.into_boxed_str())
	}
}

/// Pre-rendered markup describing one trait implementation.
///
/// Treated as an uninterpreted payload; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkupFragment(Box<str>);

impl MarkupFragment {
	pub fn new(markup: impl Into<Box<str>>) -> Self {
		Self(markup.into())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl AsRef<str> for MarkupFragment {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for MarkupFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for MarkupFragment {
	fn from(markup: &str) -> Self {
		Self(markup.into())
	}
}

impl From<String> for MarkupFragment {
	fn from(markup: String) -> Self {
		Self(markup.into_boxed_str())
	}
}

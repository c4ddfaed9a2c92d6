//! The implementor registry.
//!
//! A [`Registry`] maps each [`LibraryId`] to the ordered list of
//! [`MarkupFragment`]s documenting that library's implementations of one
//! trait. Registries are built once through [`RegistryBuilder`] (usually via
//! the [`implementors!`](crate::implementors) literal macro) and never mutated
//! afterwards; publishing moves the value to the host.

use std::ops::Deref;

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::fragment::{LibraryId, MarkupFragment};


/// Ordered implementor fragments for one library. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementorList(Vec<MarkupFragment>);

impl ImplementorList {
	/// An empty list; a library may document no implementors.
	pub const fn empty() -> Self {
		Self(Vec::new())
	}

	pub fn as_slice(&self) -> &[MarkupFragment] {
		&self.0
	}

	pub fn into_vec(self) -> Vec<MarkupFragment> {
		self.0
	}
}

impl Deref for ImplementorList {
	type Target = [MarkupFragment];

	fn deref(&self) -> &[MarkupFragment] {
		&self.0
	}
}

impl<F: Into<MarkupFragment>> FromIterator<F> for ImplementorList {
	fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<'a> IntoIterator for &'a ImplementorList {
	type Item = &'a MarkupFragment;
	type IntoIter = std::slice::Iter<'a, MarkupFragment>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Immutable mapping from library to its implementor fragments.
///
/// Keys iterate in insertion order so rendering is deterministic, but
/// equality ignores key order: two registries are equal when they hold the
/// same libraries with identical, identically ordered lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	entries: IndexMap<LibraryId, ImplementorList>,
}

impl Registry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Builds a registry from entries that did not come from a literal.
	///
	/// Unlike [`RegistryBuilder`], duplicates are never resolved: the first
	/// repeated library aborts construction.
	pub fn try_from_entries<I, L>(entries: I) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = (L, ImplementorList)>,
		L: Into<LibraryId>,
	{
		let mut map = IndexMap::new();
		for (library, list) in entries {
			let library = library.into();
			if map.contains_key(&library) {
				return Err(RegistryError::DuplicateLibrary {
					library: library.as_str().to_owned(),
				});
			}
			map.insert(library, list);
		}
		Ok(Self { entries: map })
	}

	#[inline]
	pub fn get(&self, library: &str) -> Option<&ImplementorList> {
		self.entries.get(library)
	}

	#[inline]
	pub fn contains(&self, library: &str) -> bool {
		self.entries.contains_key(library)
	}

	pub fn libraries(&self) -> impl Iterator<Item = &LibraryId> {
		self.entries.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&LibraryId, &ImplementorList)> {
		self.entries.iter()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Total number of fragments across all libraries.
	pub fn fragment_count(&self) -> usize {
		self.entries.values().map(|list| list.len()).sum()
	}

	/// Combines two registries library by library.
	///
	/// A library present in both takes `other`'s list, keeping its original
	/// position; libraries only in `other` are appended in `other`'s order.
	pub fn merge_by_key(mut self, other: Registry) -> Registry {
		for (library, list) in other.entries {
			self.entries.insert(library, list);
		}
		self
	}
}

impl IntoIterator for Registry {
	type Item = (LibraryId, ImplementorList);
	type IntoIter = indexmap::map::IntoIter<LibraryId, ImplementorList>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// How [`RegistryBuilder::insert`] resolves a library that is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with the offending library name.
	Panic,
	/// Keep the first list seen for a library.
	FirstWins,
	/// Overwrite with the last list seen.
	#[default]
	LastWins,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::LastWins
		}
	}
}

/// Result of a [`RegistryBuilder::insert`] call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Library was new; list inserted.
	InsertedNew,
	/// Library existed; kept the existing list (policy chose existing).
	KeptExisting,
	/// Library existed; replaced with the new list (policy chose new).
	ReplacedExisting,
}

/// Builder for constructing a [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
	entries: IndexMap<LibraryId, ImplementorList>,
	policy: DuplicatePolicy,
}

impl Default for RegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self {
			entries: IndexMap::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Sets the duplicate resolution policy.
	pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Returns the number of libraries registered so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no libraries have been registered so far.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Adds a library and its fragments, in authored order.
	pub fn insert<L, I, F>(&mut self, library: L, fragments: I) -> InsertAction
	where
		L: Into<LibraryId>,
		I: IntoIterator<Item = F>,
		F: Into<MarkupFragment>,
	{
		let library = library.into();
		let list: ImplementorList = fragments.into_iter().collect();

		let Some(existing) = self.entries.get_mut(&library) else {
			self.entries.insert(library, list);
			return InsertAction::InsertedNew;
		};

		match self.policy {
			DuplicatePolicy::Panic => {
				panic!("duplicate library in implementor registry: {library:?}")
			}
			DuplicatePolicy::FirstWins => InsertAction::KeptExisting,
			DuplicatePolicy::LastWins => {
				*existing = list;
				InsertAction::ReplacedExisting
			}
		}
	}

	pub fn build(self) -> Registry {
		Registry {
			entries: self.entries,
		}
	}
}

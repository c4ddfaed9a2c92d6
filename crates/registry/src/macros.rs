//! Registry literal macro.

/// Builds a [`Registry`](crate::Registry) literal.
///
/// Libraries keep their authored order, as do the fragments within each
/// library. Duplicate libraries follow [`DuplicatePolicy::for_build`]:
/// a panic in debug builds, last-wins otherwise.
///
/// ```
/// let registry = implementors_registry::implementors! {
/// 	"libA" => ["impl Send for A", "impl Send for B"],
/// 	"libB" => [],
/// };
/// assert_eq!(registry.len(), 2);
/// ```
///
/// [`DuplicatePolicy::for_build`]: crate::DuplicatePolicy::for_build
#[macro_export]
macro_rules! implementors {
	($($library:expr => [$($fragment:expr),* $(,)?]),* $(,)?) => {{
		#[allow(unused_mut)]
		let mut builder = $crate::RegistryBuilder::new();
		$(
			builder.insert(
				$library,
				::std::vec::Vec::<$crate::MarkupFragment>::from([
					$($crate::MarkupFragment::from($fragment)),*
				]),
			);
		)*
		builder.build()
	}};
}

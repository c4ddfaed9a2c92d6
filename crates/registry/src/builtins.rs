//! Baked implementor registry for `core::marker::Send`.

use crate::Registry;

/// Path of the trait whose implementors [`registry`] lists.
pub const TRAIT_PATH: &str = "core::marker::Send";

/// Builds the baked registry.
///
/// Pure literal: every call yields an identical value.
pub fn registry() -> Registry {
	crate::implementors! {
		"glutin" => [
			r#"impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/marker/trait.Send.html' title='core::marker::Send'>Send</a> for <a class='struct' href='glutin/api/x11/struct.XWindow.html' title='glutin::api::x11::XWindow'>XWindow</a>"#,
			r#"impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/marker/trait.Send.html' title='core::marker::Send'>Send</a> for <a class='struct' href='glutin/api/x11/struct.Window.html' title='glutin::api::x11::Window'>Window</a>"#,
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_registry_shape() {
		let registry = registry();
		assert_eq!(registry.len(), 1);
		assert_eq!(registry.get("glutin").map(|l| l.len()), Some(2));
	}

	#[test]
	fn test_builtin_fragments_name_the_trait() {
		let registry = registry();
		for (_, list) in registry.iter() {
			for fragment in list {
				assert!(fragment.as_str().contains("title='core::marker::Send'"), "{fragment}");
			}
		}
	}

	#[test]
	fn test_builtin_construction_is_deterministic() {
		let a: Vec<_> = registry().into_iter().collect();
		let b: Vec<_> = registry().into_iter().collect();
		assert_eq!(a, b);
	}
}

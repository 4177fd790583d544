//! English word inflection for code generators.
//!
//! Nouns are moved between singular and plural by two ordered rule tables, and identifiers are
//! moved between naming conventions (`snake_case`, `CamelCase`, titles, dashes, ordinals).
//!
//! ```
//! assert_eq!(inflection::tableize("MyClass").unwrap(), "my_classes");
//! assert_eq!(inflection::classify("my_classes").unwrap(), "MyClass");
//! assert_eq!(inflection::foreign_key("Admin::Post", false).unwrap(), "post_id");
//! ```
//!
//! The module-level functions share one uncached [`Inflector`]. Build your own to add irregular
//! forms, extra uncountable words, or a [`MemoCache`].

#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate, clippy::missing_errors_doc)]
#![forbid(unsafe_code)]

use once_cell::sync::Lazy;

pub use self::cache::{Cache, CacheKey, MemoCache, NoCache};
pub use self::error::{Error, Result};
pub use self::inflector::Inflector;
pub use self::irregulars::{Irregulars, OverlapError};
pub use self::rules::{apply_rules, RuleTable};
pub use self::transform::{Pipeline, Transform, TransformFromStrError};
pub use self::word_list::WordList;

pub mod case;
pub mod ordinal;

mod cache;
mod error;
mod inflector;
mod irregulars;
mod rules;
mod transform;
mod word_list;

static DEFAULT: Lazy<Inflector> = Lazy::new(Inflector::new);

/// The inflector behind the module-level functions.
pub fn default() -> &'static Inflector {
	&DEFAULT
}

pub fn pluralize(word: &str, plural: Option<&str>) -> Result<String> {
	DEFAULT.pluralize(word, plural)
}

pub fn singularize(word: &str, singular: Option<&str>) -> Result<String> {
	DEFAULT.singularize(word, singular)
}

pub fn inflect(word: &str, count: f64, singular: Option<&str>, plural: Option<&str>) -> Result<String> {
	DEFAULT.inflect(word, count, singular, plural)
}

pub fn camelize(word: &str, low_first_letter: bool) -> Result<String> {
	DEFAULT.camelize(word, low_first_letter)
}

pub fn underscore(word: &str, all_upper_case: bool) -> Result<String> {
	DEFAULT.underscore(word, all_upper_case)
}

pub fn humanize(word: &str, low_first_letter: bool) -> Result<String> {
	DEFAULT.humanize(word, low_first_letter)
}

pub fn capitalize(word: &str) -> Result<String> {
	DEFAULT.capitalize(word)
}

pub fn dasherize(word: &str) -> Result<String> {
	DEFAULT.dasherize(word)
}

pub fn titleize(word: &str) -> Result<String> {
	DEFAULT.titleize(word)
}

pub fn demodulize(word: &str) -> Result<String> {
	DEFAULT.demodulize(word)
}

pub fn tableize(word: &str) -> Result<String> {
	DEFAULT.tableize(word)
}

pub fn classify(word: &str) -> Result<String> {
	DEFAULT.classify(word)
}

pub fn foreign_key(word: &str, drop_id_separator: bool) -> Result<String> {
	DEFAULT.foreign_key(word, drop_id_separator)
}

pub fn ordinalize(word: &str) -> Result<String> {
	DEFAULT.ordinalize(word)
}

pub fn transform<S: AsRef<str>>(word: &str, names: &[S]) -> Result<String> {
	DEFAULT.transform(word, names)
}

#[cfg(test)]
mod tests {
	use crate::{Error, WordList};

	#[test]
	fn test_uncountable_both_ways() {
		for word in WordList::uncountable().iter() {
			assert_eq!(crate::pluralize(word, None).unwrap(), word);
			assert_eq!(crate::singularize(word, None).unwrap(), word);
		}
	}

	#[test]
	fn test_round_trip() {
		for word in ["cat", "person", "category", "analysis", "knife", "box", "octopus", "matrix", "quiz"] {
			let plural = crate::pluralize(word, None).unwrap();
			assert_eq!(crate::singularize(&plural, None).unwrap(), word, "via {plural:?}");
		}
	}

	#[test]
	fn test_idempotent() {
		for word in ["hello world", "HELLO_world", "the rise and fall of rome", "out-of-state"] {
			let capitalized = crate::capitalize(word).unwrap();
			assert_eq!(crate::capitalize(&capitalized).unwrap(), capitalized);
			let titled = crate::titleize(word).unwrap();
			assert_eq!(crate::titleize(&titled).unwrap(), titled);
		}
	}

	#[test]
	fn test_module_functions() {
		assert_eq!(crate::inflect("person", 2.0, None, None).unwrap(), "people");
		assert_eq!(crate::camelize("hello_world", true).unwrap(), "helloWorld");
		assert_eq!(crate::underscore("HelloWorld", false).unwrap(), "hello_world");
		assert_eq!(crate::humanize("author_id", false).unwrap(), "Author");
		assert_eq!(crate::dasherize("a_b c").unwrap(), "a-b-c");
		assert_eq!(crate::demodulize("A::B").unwrap(), "B");
		assert_eq!(crate::ordinalize("12 13 22").unwrap(), "12th 13th 22nd");
		assert_eq!(
			crate::transform("Admin::UserAccount", &["demodulize", "tableize"]).unwrap(),
			"user_accounts",
		);
		assert!(matches!(crate::transform("x", &["nope"]), Err(Error::UnknownTransform(_))));
		assert_eq!(crate::tableize(""), Err(Error::EmptyInput));
	}
}

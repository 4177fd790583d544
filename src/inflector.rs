use std::fmt::Debug;

use crate::cache::{Cache, CacheKey, NoCache};
use crate::case;
use crate::error::{validate, Result};
use crate::irregulars::Irregulars;
use crate::ordinal;
use crate::rules::{apply_rules, RuleTable};
use crate::transform::Pipeline;
use crate::word_list::WordList;

/// The public entry points.
///
/// Every method rejects an empty `word` with [`crate::Error::EmptyInput`]. Results are memoized in
/// `C`, which is [`NoCache`] unless one is supplied with [`Inflector::with_cache`].
#[derive(Debug)]
pub struct Inflector<C = NoCache> {
	uncountable: WordList,
	irregulars: Irregulars,
	cache: C,
}

impl Default for Inflector {
	fn default() -> Self {
		Self::new()
	}
}

impl Inflector {
	pub fn new() -> Self {
		Self::with_cache(NoCache)
	}
}

impl<C: Cache> Inflector<C> {
	pub fn with_cache(cache: C) -> Self {
		Self {
			uncountable: WordList::uncountable(),
			irregulars: Irregulars::default(),
			cache,
		}
	}

	/// Adds to the built-in uncountable words.
	#[must_use]
	pub fn with_uncountable<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
		self.uncountable.extend(words);
		self
	}

	#[must_use]
	pub fn with_irregulars(mut self, irregulars: Irregulars) -> Self {
		self.irregulars = irregulars;
		self
	}

	pub fn cache(&self) -> &C {
		&self.cache
	}

	fn cached(&self, function: &'static str, args: &impl Debug, compute: impl FnOnce() -> Result<String>) -> Result<String> {
		let key = CacheKey::new(function, args);
		if let Some(hit) = self.cache.get(&key) {
			return Ok(hit);
		}

		let value = compute()?;
		self.cache.insert(key, value.clone());
		Ok(value)
	}

	fn plural(&self, word: &str, plural: Option<&str>) -> String {
		let plural = plural.or_else(|| self.irregulars.plural_of(word));
		apply_rules(word, RuleTable::plural(), &self.uncountable, plural)
	}

	fn singular(&self, word: &str, singular: Option<&str>) -> String {
		let singular = singular.or_else(|| self.irregulars.singular_of(word));
		apply_rules(word, RuleTable::singular(), &self.uncountable, singular)
	}

	/// `person` becomes `people`; a non-empty `plural` is returned as is.
	pub fn pluralize(&self, word: &str, plural: Option<&str>) -> Result<String> {
		let word = validate(word)?;
		self.cached("pluralize", &(word, plural), || Ok(self.plural(word, plural)))
	}

	/// `people` becomes `person`; a non-empty `singular` is returned as is.
	pub fn singularize(&self, word: &str, singular: Option<&str>) -> Result<String> {
		let word = validate(word)?;
		self.cached("singularize", &(word, singular), || Ok(self.singular(word, singular)))
	}

	/// Singularizes for a `count` of exactly one and pluralizes otherwise. A NaN `count` leaves
	/// `word` alone.
	#[allow(clippy::float_cmp /* exactly one */)]
	pub fn inflect(&self, word: &str, count: f64, singular: Option<&str>, plural: Option<&str>) -> Result<String> {
		let word = validate(word)?;
		self.cached("inflect", &(word, count, singular, plural), || {
			Ok(if count.is_nan() {
				word.to_owned()
			} else if count == 1.0 {
				self.singular(word, singular)
			} else {
				self.plural(word, plural)
			})
		})
	}

	pub fn camelize(&self, word: &str, low_first_letter: bool) -> Result<String> {
		let word = validate(word)?;
		self.cached("camelize", &(word, low_first_letter), || {
			Ok(case::camelize(word, low_first_letter))
		})
	}

	pub fn underscore(&self, word: &str, all_upper_case: bool) -> Result<String> {
		let word = validate(word)?;
		self.cached("underscore", &(word, all_upper_case), || {
			Ok(case::underscore(word, all_upper_case))
		})
	}

	pub fn humanize(&self, word: &str, low_first_letter: bool) -> Result<String> {
		let word = validate(word)?;
		self.cached("humanize", &(word, low_first_letter), || {
			Ok(case::humanize(word, low_first_letter))
		})
	}

	pub fn capitalize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("capitalize", &(word,), || Ok(case::capitalize(word)))
	}

	pub fn dasherize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("dasherize", &(word,), || Ok(case::dasherize(word)))
	}

	pub fn titleize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("titleize", &(word,), || Ok(case::titleize(word)))
	}

	pub fn demodulize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("demodulize", &(word,), || Ok(case::demodulize(word).to_owned()))
	}

	/// `MyClass` becomes `my_classes`.
	pub fn tableize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("tableize", &(word,), || {
			self.pluralize(&self.underscore(word, false)?, None)
		})
	}

	/// `my_classes` becomes `MyClass`.
	pub fn classify(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("classify", &(word,), || {
			self.singularize(&self.camelize(word, false)?, None)
		})
	}

	/// `Message::MyClass` becomes `my_class_id`, or `my_classid` with `drop_id_separator`.
	pub fn foreign_key(&self, word: &str, drop_id_separator: bool) -> Result<String> {
		let word = validate(word)?;
		self.cached("foreign_key", &(word, drop_id_separator), || {
			let mut key = self.underscore(&self.demodulize(word)?, false)?;
			if !drop_id_separator {
				key.push('_');
			}
			key.push_str("id");
			Ok(key)
		})
	}

	/// `the 1 pitch` becomes `the 1st pitch`.
	pub fn ordinalize(&self, word: &str) -> Result<String> {
		let word = validate(word)?;
		self.cached("ordinalize", &(word,), || Ok(ordinal::ordinalize(word)))
	}

	/// Runs the named transforms left to right. All names are resolved before the first step runs.
	pub fn transform<S: AsRef<str>>(&self, word: &str, names: &[S]) -> Result<String> {
		let word = validate(word)?;
		let pipeline = Pipeline::resolve(names)?;
		self.apply(word, &pipeline)
	}

	pub fn apply(&self, word: &str, pipeline: &Pipeline) -> Result<String> {
		let word = validate(word)?;
		self.cached("transform", &(word, pipeline.steps()), || {
			pipeline
				.steps()
				.iter()
				.try_fold(word.to_owned(), |word, step| step.apply(self, &word))
		})
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::Inflector;
	use crate::cache::MemoCache;
	use crate::error::Error;
	use crate::irregulars::Irregulars;
	use crate::transform::{Pipeline, Transform};

	#[test]
	fn test_scenarios() {
		let inflector = Inflector::new();
		assert_eq!(inflector.pluralize("person", None).unwrap(), "people");
		assert_eq!(inflector.pluralize("octopus", None).unwrap(), "octopuses");
		assert_eq!(inflector.singularize("people", None).unwrap(), "person");
		assert_eq!(inflector.singularize("octopuses", None).unwrap(), "octopus");
		assert_eq!(inflector.camelize("hello_world", false).unwrap(), "HelloWorld");
		assert_eq!(inflector.camelize("hello_world", true).unwrap(), "helloWorld");
		assert_eq!(inflector.underscore("HelloWorld", false).unwrap(), "hello_world");
		assert_eq!(inflector.humanize("hello_world", false).unwrap(), "Hello world");
		assert_eq!(inflector.humanize("hello_world", true).unwrap(), "hello world");
		assert_eq!(inflector.titleize("hello world").unwrap(), "Hello World");
		assert_eq!(inflector.tableize("MyClass").unwrap(), "my_classes");
		assert_eq!(inflector.classify("my_classes").unwrap(), "MyClass");
		assert_eq!(inflector.foreign_key("MyClass", false).unwrap(), "my_class_id");
		assert_eq!(inflector.foreign_key("MyClass", true).unwrap(), "my_classid");
		assert_eq!(inflector.ordinalize("the 1 pitch").unwrap(), "the 1st pitch");
		assert_eq!(inflector.capitalize("hELLO").unwrap(), "Hello");
		assert_eq!(inflector.dasherize("hello_world").unwrap(), "hello-world");
		assert_eq!(inflector.demodulize("Message::Bus::Properties").unwrap(), "Properties");
	}

	#[test]
	fn test_composites() {
		let inflector = Inflector::new();
		assert_eq!(inflector.tableize("RawScaledScorer").unwrap(), "raw_scaled_scorers");
		assert_eq!(inflector.tableize("Person").unwrap(), "people");
		assert_eq!(inflector.classify("egg_and_hams").unwrap(), "EggAndHam");
		assert_eq!(inflector.classify("people").unwrap(), "Person");
		assert_eq!(inflector.foreign_key("Admin::Post", false).unwrap(), "post_id");
		assert_eq!(inflector.foreign_key("Message::BusProperties", true).unwrap(), "bus_propertiesid");
	}

	#[test]
	fn test_inflect() {
		let inflector = Inflector::new();
		assert_eq!(inflector.inflect("people", 1.0, None, None).unwrap(), "person");
		assert_eq!(inflector.inflect("person", 2.0, None, None).unwrap(), "people");
		assert_eq!(inflector.inflect("person", 0.0, None, None).unwrap(), "people");
		assert_eq!(inflector.inflect("person", 1.5, None, None).unwrap(), "people");
		assert_eq!(inflector.inflect("person", f64::NAN, None, None).unwrap(), "person");
		assert_eq!(inflector.inflect("octopus", 1.0, Some("octopus"), Some("octopi")).unwrap(), "octopus");
		assert_eq!(inflector.inflect("octopus", 3.0, Some("octopus"), Some("octopi")).unwrap(), "octopi");
	}

	#[test]
	fn test_override_wins() {
		let inflector = Inflector::new();
		assert_eq!(inflector.pluralize("person", Some("persons")).unwrap(), "persons");
		assert_eq!(inflector.singularize("octopi", Some("octopus")).unwrap(), "octopus");
		assert_eq!(inflector.pluralize("sheep", Some("sheeps")).unwrap(), "sheeps");
	}

	#[test]
	fn test_empty_input() {
		let inflector = Inflector::new();
		assert_eq!(inflector.pluralize("", None), Err(Error::EmptyInput));
		assert_eq!(inflector.singularize("", Some("x")), Err(Error::EmptyInput));
		assert_eq!(inflector.inflect("", 1.0, None, None), Err(Error::EmptyInput));
		assert_eq!(inflector.camelize("", false), Err(Error::EmptyInput));
		assert_eq!(inflector.underscore("", true), Err(Error::EmptyInput));
		assert_eq!(inflector.humanize("", false), Err(Error::EmptyInput));
		assert_eq!(inflector.capitalize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.dasherize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.titleize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.demodulize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.tableize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.classify(""), Err(Error::EmptyInput));
		assert_eq!(inflector.foreign_key("", false), Err(Error::EmptyInput));
		assert_eq!(inflector.ordinalize(""), Err(Error::EmptyInput));
		assert_eq!(inflector.transform("", &["pluralize"]), Err(Error::EmptyInput));
	}

	#[test]
	fn test_transform() {
		let inflector = Inflector::new();
		assert_eq!(
			inflector.transform("MyClass", &["underscore", "pluralize"]).unwrap(),
			inflector.tableize("MyClass").unwrap(),
		);
		assert_eq!(
			inflector.transform("my_classes", &["camelize", "singularize"]).unwrap(),
			inflector.classify("my_classes").unwrap(),
		);
		assert_eq!(
			inflector.transform("all job", &["pluralize", "capitalize", "dasherize"]).unwrap(),
			"All-jobs",
		);
		assert_eq!(inflector.transform::<&str>("MyClass", &[]).unwrap(), "MyClass");

		let err = inflector.transform("MyClass", &["underscore", "shout"]).unwrap_err();
		assert!(matches!(&err, Error::UnknownTransform(inner) if inner.name() == "shout"));
		assert_eq!(err.to_string(), r#"unrecognized transform "shout""#);
	}

	#[test]
	fn test_transform_empty_step() {
		let inflector = Inflector::new();
		let pipeline = Pipeline(vec![Transform::Demodulize, Transform::Pluralize]);
		assert_eq!(inflector.apply("Admin::", &pipeline), Err(Error::EmptyInput));
	}

	#[test]
	fn test_every_transform() {
		let inflector = Inflector::new();
		for &step in Transform::ALL {
			let output = step.apply(&inflector, "Admin::user_account").unwrap();
			assert_eq!(output, inflector.transform("Admin::user_account", &[step.as_str()]).unwrap());
		}
	}

	#[test]
	fn test_irregulars() {
		let irregulars = Irregulars::try_from(&[("cactus", "cacti"), ("person", "persons")][..]).unwrap();
		let inflector = Inflector::new().with_irregulars(irregulars);
		assert_eq!(inflector.pluralize("cactus", None).unwrap(), "cacti");
		assert_eq!(inflector.singularize("cacti", None).unwrap(), "cactus");
		assert_eq!(inflector.pluralize("person", None).unwrap(), "persons");
		assert_eq!(inflector.inflect("cacti", 1.0, None, None).unwrap(), "cactus");
		// An explicit override still wins.
		assert_eq!(inflector.pluralize("person", Some("people")).unwrap(), "people");
		assert_eq!(inflector.pluralize("cat", None).unwrap(), "cats");
	}

	#[test]
	fn test_uncountable() {
		let inflector = Inflector::new().with_uncountable(["Kudos", "moose"]);
		assert_eq!(inflector.pluralize("moose", None).unwrap(), "moose");
		assert_eq!(inflector.singularize("kudos", None).unwrap(), "kudos");
		assert_eq!(inflector.pluralize("sheep", None).unwrap(), "sheep");
		assert_eq!(Inflector::new().singularize("kudos", None).unwrap(), "kudo");
	}

	#[test]
	fn test_cache() {
		let cache = Arc::new(MemoCache::new());
		let inflector = Inflector::with_cache(Arc::clone(&cache));

		assert_eq!(inflector.tableize("MyClass").unwrap(), "my_classes");
		// tableize, underscore, pluralize
		assert_eq!(cache.len(), 3);
		assert_eq!(inflector.tableize("MyClass").unwrap(), "my_classes");
		assert_eq!(cache.len(), 3);

		// Arguments are part of the key.
		assert_eq!(inflector.pluralize("person", None).unwrap(), "people");
		assert_eq!(inflector.pluralize("person", Some("persons")).unwrap(), "persons");
		assert_eq!(cache.len(), 5);

		assert_eq!(inflector.pluralize("", None), Err(Error::EmptyInput));
		assert_eq!(cache.len(), 5);

		let uncached = Inflector::new();
		for word in ["person", "MyClass", "the 2 pitch"] {
			assert_eq!(inflector.titleize(word), uncached.titleize(word));
			assert_eq!(inflector.ordinalize(word), uncached.ordinalize(word));
		}
	}

	#[test]
	fn test_shared_cache() {
		let inflector = Inflector::with_cache(MemoCache::new());
		std::thread::scope(|scope| {
			for _ in 0..4 {
				scope.spawn(|| {
					for word in ["person", "octopus", "matrix", "cat"] {
						inflector.pluralize(word, None).unwrap();
					}
				});
			}
		});
		assert_eq!(inflector.cache().len(), 4);
		assert_eq!(inflector.pluralize("matrix", None).unwrap(), "matrices");
	}
}

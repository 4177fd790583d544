use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Caller-supplied singular/plural pairs, consulted before the rule tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Irregulars {
	plurals: HashMap<Box<str>, Box<str>>,
	singulars: HashMap<Box<str>, Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlapError {
	#[error("overlap on singular {singular:?}; prev was {prev:?}, current is {current:?}")]
	Singular {
		singular: Box<str>,
		prev: Box<str>,
		current: Box<str>,
	},
	#[error("overlap on plural {plural:?}; prev was {prev:?}, current is {current:?}")]
	Plural {
		plural: Box<str>,
		prev: Box<str>,
		current: Box<str>,
	},
}

impl Irregulars {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a pair, matched case-insensitively from either side.
	pub fn insert(&mut self, singular: &str, plural: &str) -> Result<(), OverlapError> {
		let singular: Box<str> = singular.trim().to_lowercase().into();
		let plural: Box<str> = plural.trim().to_lowercase().into();

		if let Some(prev) = self.plurals.get(&singular) {
			return Err(OverlapError::Singular {
				singular,
				prev: prev.clone(),
				current: plural,
			});
		}
		if let Some(prev) = self.singulars.get(&plural) {
			return Err(OverlapError::Plural {
				plural,
				prev: prev.clone(),
				current: singular,
			});
		}

		self.plurals.insert(singular.clone(), plural.clone());
		self.singulars.insert(plural, singular);
		Ok(())
	}

	pub fn plural_of(&self, singular: &str) -> Option<&str> {
		self.plurals.get(singular.to_lowercase().as_str()).map(|plural| &**plural)
	}

	pub fn singular_of(&self, plural: &str) -> Option<&str> {
		self.singulars.get(plural.to_lowercase().as_str()).map(|singular| &**singular)
	}

	pub fn len(&self) -> usize {
		self.plurals.len()
	}

	pub fn is_empty(&self) -> bool {
		self.plurals.is_empty()
	}
}

impl<'a> TryFrom<&[(&'a str, &'a str)]> for Irregulars {
	type Error = OverlapError;

	fn try_from(pairs: &[(&'a str, &'a str)]) -> Result<Self, Self::Error> {
		let mut irregulars = Self::new();
		for &(singular, plural) in pairs {
			irregulars.insert(singular, plural)?;
		}
		Ok(irregulars)
	}
}

impl<'de> Deserialize<'de> for Irregulars {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct MapVisitor {}

		impl<'de> Visitor<'de> for MapVisitor {
			type Value = Irregulars;

			fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
				formatter.write_str("a map from singular to plural")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut irregulars = Irregulars::new();

				while let Some((singular, plural)) = access.next_entry::<String, String>()? {
					irregulars
						.insert(&singular, &plural)
						.map_err(serde::de::Error::custom)?;
				}

				Ok(irregulars)
			}
		}

		let visitor = MapVisitor {};
		deserializer.deserialize_map(visitor)
	}
}

#[cfg(test)]
mod tests {
	use super::{Irregulars, OverlapError};

	#[test]
	fn test_lookup() {
		let irregulars = Irregulars::try_from(&[("Cactus", "cacti"), ("moose", "moose")][..]).unwrap();
		assert_eq!(irregulars.len(), 2);
		assert_eq!(irregulars.plural_of("cactus"), Some("cacti"));
		assert_eq!(irregulars.plural_of("CACTUS"), Some("cacti"));
		assert_eq!(irregulars.singular_of("Cacti"), Some("cactus"));
		assert_eq!(irregulars.singular_of("moose"), Some("moose"));
		assert_eq!(irregulars.plural_of("cacti"), None);
	}

	#[test]
	fn test_overlap() {
		let mut irregulars = Irregulars::new();
		irregulars.insert("cactus", "cacti").unwrap();
		assert!(matches!(
			irregulars.insert("cactus", "cactuses"),
			Err(OverlapError::Singular { .. })
		));
		assert!(matches!(
			irregulars.insert("cactu", "cacti"),
			Err(OverlapError::Plural { .. })
		));
		assert_eq!(irregulars.len(), 1);
	}

	#[test]
	fn test_deserialize() {
		let irregulars: Irregulars =
			serde_json::from_str(r#"{"cactus": "cacti", "person": "persons"}"#).unwrap();
		assert_eq!(irregulars.plural_of("person"), Some("persons"));

		let err = serde_json::from_str::<Irregulars>(r#"{"cactus": "cacti", "Cactus": "cactuses"}"#)
			.unwrap_err();
		assert!(err.to_string().starts_with(r#"overlap on singular "cactus""#));
	}
}

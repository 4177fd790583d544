use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use paste::paste;
use serde_with::DeserializeFromStr;
use thiserror::Error;

use crate::cache::Cache;
use crate::error::Result;
use crate::inflector::Inflector;

macro_rules! str_enum {
	(#[description = $descr:tt] $(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $variant_str:tt),* $(,)? }) => { paste! {
		$(#[$meta])* $vis enum $name {
			$($variant,)*
		}

		#[derive(Debug, Clone, PartialEq, Eq, Error)]
		#[error("unrecognized {} {0:?}", Self::DESCRIPTION)]
		pub struct [<$name FromStrError>](Box<str>);

		impl [<$name FromStrError>] {
			const DESCRIPTION: &'static str = $descr;

			pub fn name(&self) -> &str {
				&self.0
			}
		}

		impl FromStr for $name {
			type Err = [<$name FromStrError>];

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Ok(match s {
					$($variant_str => Self::$variant,)*
					_ => return Err([<$name FromStrError>](s.into())),
				})
			}
		}

		impl $name {
			pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $variant_str,)*
				}
			}
		}
	} }
}

str_enum! {
#[description = "transform"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
	Pluralize = "pluralize",
	Singularize = "singularize",
	Camelize = "camelize",
	Underscore = "underscore",
	Humanize = "humanize",
	Capitalize = "capitalize",
	Dasherize = "dasherize",
	Titleize = "titleize",
	Demodulize = "demodulize",
	Tableize = "tableize",
	Classify = "classify",
	ForeignKey = "foreign_key",
	Ordinalize = "ordinalize",
}
}

impl Transform {
	/// Runs this step with default flags and no override.
	pub fn apply<C: Cache>(self, inflector: &Inflector<C>, word: &str) -> Result<String> {
		match self {
			Self::Pluralize => inflector.pluralize(word, None),
			Self::Singularize => inflector.singularize(word, None),
			Self::Camelize => inflector.camelize(word, false),
			Self::Underscore => inflector.underscore(word, false),
			Self::Humanize => inflector.humanize(word, false),
			Self::Capitalize => inflector.capitalize(word),
			Self::Dasherize => inflector.dasherize(word),
			Self::Titleize => inflector.titleize(word),
			Self::Demodulize => inflector.demodulize(word),
			Self::Tableize => inflector.tableize(word),
			Self::Classify => inflector.classify(word),
			Self::ForeignKey => inflector.foreign_key(word, false),
			Self::Ordinalize => inflector.ordinalize(word),
		}
	}
}

impl Display for Transform {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(self.as_str())
	}
}

/// Transforms applied left to right, written as a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, DeserializeFromStr)]
pub struct Pipeline(pub Vec<Transform>);

impl Pipeline {
	pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Self, TransformFromStrError> {
		names
			.iter()
			.map(|name| name.as_ref().parse())
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}

	pub fn steps(&self) -> &[Transform] {
		&self.0
	}
}

impl From<Vec<Transform>> for Pipeline {
	fn from(steps: Vec<Transform>) -> Self {
		Self(steps)
	}
}

impl FromStr for Pipeline {
	type Err = TransformFromStrError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		if raw.trim().is_empty() {
			return Ok(Self::default());
		}

		raw
			.split(',')
			.map(|name| name.trim().parse())
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}
}

impl Display for Pipeline {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		let [first, rest @ ..] = self.0.as_slice() else { return Ok(()); };
		first.fmt(formatter)?;
		for step in rest {
			formatter.write_str(",")?;
			step.fmt(formatter)?;
		}
		Ok(())
	}
}

use std::path::Path;

use anyhow::Context as _;
use inflection::{Irregulars, Pipeline};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub irregular: Irregulars,
	#[serde(default)]
	pub uncountable: Vec<Box<str>>,
	#[serde(default)]
	pub pipeline: Option<Pipeline>,
}

impl Config {
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let raw = std::fs::read_to_string(path).with_context(|| format!("reading from {path:?}"))?;
		serde_json::from_str(&raw).with_context(|| format!("parsing config {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use inflection::Transform;

	use super::Config;

	#[test]
	fn test_parse() {
		let config: Config = serde_json::from_str(
			r#"{
				"irregular": {"cactus": "cacti"},
				"uncountable": ["kudos"],
				"pipeline": "demodulize,tableize"
			}"#,
		)
		.unwrap();
		assert_eq!(config.irregular.plural_of("cactus"), Some("cacti"));
		assert_eq!(&*config.uncountable, [Box::<str>::from("kudos")]);
		assert_eq!(
			config.pipeline.unwrap().steps(),
			&[Transform::Demodulize, Transform::Tableize]
		);
	}

	#[test]
	fn test_defaults() {
		let config: Config = serde_json::from_str("{}").unwrap();
		assert!(config.irregular.is_empty());
		assert!(config.uncountable.is_empty());
		assert!(config.pipeline.is_none());
	}

	#[test]
	fn test_invalid() {
		assert!(serde_json::from_str::<Config>(r#"{"pipeline": "shout"}"#).is_err());
		assert!(serde_json::from_str::<Config>(r#"{"plurals": {}}"#).is_err());
		assert!(Config::load("does/not/exist.json".as_ref()).is_err());
	}
}

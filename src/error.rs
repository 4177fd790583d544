use thiserror::Error;

use crate::transform::TransformFromStrError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("expected a non-empty string")]
	EmptyInput,
	#[error(transparent)]
	UnknownTransform(#[from] TransformFromStrError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn validate(word: &str) -> Result<&str> {
	if word.is_empty() {
		Err(Error::EmptyInput)
	} else {
		Ok(word)
	}
}

#[test]
fn test_validate() {
	assert_eq!(validate("word"), Ok("word"));
	assert_eq!(validate(""), Err(Error::EmptyInput));
	assert_eq!(Error::EmptyInput.to_string(), "expected a non-empty string");
}

fn is_integer(token: &str) -> bool {
	let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The English ordinal suffix for an integer written in decimal.
pub fn suffix(number: &str) -> &'static str {
	let bytes = number.as_bytes();
	let tens = bytes.len().checked_sub(2).map(|idx| bytes[idx]);
	if tens == Some(b'1') {
		return "th";
	}

	match bytes.last() {
		Some(b'1') => "st",
		Some(b'2') => "nd",
		Some(b'3') => "rd",
		_ => "th",
	}
}

/// Appends an ordinal suffix to every space-separated integer in `text`.
pub fn ordinalize(text: &str) -> String {
	text
		.split(' ')
		.map(|token| {
			if is_integer(token) {
				[token, suffix(token)].concat()
			} else {
				token.to_owned()
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[test]
fn test_suffix() {
	const TESTS: &[(&str, &str)] = &[
		("0", "th"),
		("1", "st"),
		("2", "nd"),
		("3", "rd"),
		("4", "th"),
		("10", "th"),
		("11", "th"),
		("12", "th"),
		("13", "th"),
		("21", "st"),
		("22", "nd"),
		("23", "rd"),
		("101", "st"),
		("111", "th"),
		("112", "th"),
		("1013", "th"),
		("-1", "st"),
		("-11", "th"),
	];

	for &(number, expected) in TESTS {
		assert_eq!(suffix(number), expected, "suffix for {number}");
	}
}

#[test]
fn test_ordinalize() {
	assert_eq!(ordinalize("the 1 pitch"), "the 1st pitch");
	assert_eq!(ordinalize("11 12 13"), "11th 12th 13th");
	assert_eq!(ordinalize("Hello 2 and 103 and 1002"), "Hello 2nd and 103rd and 1002nd");
	assert_eq!(ordinalize("no numbers here"), "no numbers here");
	// Only whole integers count.
	assert_eq!(ordinalize("1st 2x - +"), "1st 2x - +");
	assert_eq!(ordinalize("a  3"), "a  3rd");
}

//! Identifier case conversions.
//!
//! These do no validation; [`crate::Inflector`] rejects empty input before calling them.

use std::borrow::Cow;

pub const NAMESPACE_SEPARATOR: &str = "::";

/// Words that [`titleize`] leaves lower-case unless they start the string.
pub const NON_TITLECASED: &[&str] = &[
	"and", "or", "nor", "a", "an", "the", "so", "but", "to", "of", "at", "by", "from", "into", "on",
	"onto", "off", "out", "in", "over", "with", "for",
];

fn map_first(s: &str, map: impl FnOnce(char) -> String) -> String {
	let mut chars = s.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => map(first) + chars.as_str(),
	}
}

fn upper_first(s: &str) -> String {
	map_first(s, |first| first.to_uppercase().collect())
}

fn lower_first(s: &str) -> String {
	map_first(s, |first| first.to_lowercase().collect())
}

/// `active_record/errors` becomes `ActiveRecord::Errors`.
pub fn camelize(word: &str, low_first_letter: bool) -> String {
	word
		.split('/')
		.enumerate()
		.map(|(segment_idx, segment)| {
			segment
				.split('_')
				.enumerate()
				.map(|(part_idx, part)| {
					let part = if part_idx == 0 {
						Cow::Borrowed(part)
					} else {
						Cow::Owned(part.to_lowercase())
					};

					if low_first_letter && segment_idx == 0 && part_idx == 0 {
						lower_first(&part)
					} else {
						upper_first(&part)
					}
				})
				.collect::<String>()
		})
		.collect::<Vec<_>>()
		.join(NAMESPACE_SEPARATOR)
}

/// `ActiveRecord::Errors` becomes `active_record/errors`.
pub fn underscore(word: &str, all_upper_case: bool) -> String {
	if all_upper_case && word == word.to_uppercase() {
		return word.to_owned();
	}

	word
		.split(NAMESPACE_SEPARATOR)
		.map(|segment| {
			let mut out = String::with_capacity(segment.len() + 4);
			for ch in segment.chars() {
				if ch.is_ascii_uppercase() {
					out.push('_');
				}
				out.push(ch);
			}

			match out.strip_prefix('_') {
				Some(rest) => rest.to_owned(),
				None => out,
			}
		})
		.collect::<Vec<_>>()
		.join("/")
		.to_lowercase()
}

pub fn humanize(word: &str, low_first_letter: bool) -> String {
	let lower = word.to_lowercase();
	let without_id = lower
		.strip_suffix("_ids")
		.or_else(|| lower.strip_suffix("_id"))
		.unwrap_or(&lower);
	let spaced = without_id.replace('_', " ");

	if low_first_letter {
		spaced
	} else {
		capitalize(&spaced)
	}
}

pub fn capitalize(word: &str) -> String {
	upper_first(&word.to_lowercase())
}

pub fn dasherize(word: &str) -> String {
	word.replace([' ', '_'], "-")
}

pub fn titleize(word: &str) -> String {
	let lower = word.to_lowercase().replace('_', " ");

	let titled = lower
		.split(' ')
		.map(|word| {
			word
				.split('-')
				.map(|part| {
					if NON_TITLECASED.contains(&part) {
						Cow::Borrowed(part)
					} else {
						Cow::Owned(upper_first(part))
					}
				})
				.collect::<Vec<_>>()
				.join("-")
		})
		.collect::<Vec<_>>()
		.join(" ");

	upper_first(&titled)
}

/// `Message::Bus::Properties` becomes `Properties`.
pub fn demodulize(word: &str) -> &str {
	word
		.rsplit_once(NAMESPACE_SEPARATOR)
		.map_or(word, |(_namespace, last)| last)
}

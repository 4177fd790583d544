//! Ordered pluralization and singularization rules.
//!
//! Each table is scanned top to bottom and the first matching pattern wins, so the order of the
//! entries below is part of the behavior. Entries without a replacement are guards: they match
//! words that are already in the target form and return them untouched.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::word_list::WordList;


/// Plural forms.
mod plural {
	pub const MEN: &str = "^(m|wom)en$";
	pub const PEOPLE: &str = "(pe)ople$";
	pub const CHILDREN: &str = "(child)ren$";
	pub const TIA: &str = "([ti])a$";
	pub const ANALYSES: &str = "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$";
	pub const DATABASES: &str = "(database)s$";
	pub const DRIVES: &str = "(drive)s$";
	pub const HIVES: &str = "(hi|ti)ves$";
	pub const CURVES: &str = "(curve)s$";
	pub const LRVES: &str = "([lr])ves$";
	pub const AVES: &str = "([a])ves$";
	pub const FOVES: &str = "([^fo])ves$";
	pub const MOVIES: &str = "(m)ovies$";
	pub const AEIOUYIES: &str = "([^aeiouy]|qu)ies$";
	pub const SERIES: &str = "(s)eries$";
	pub const XES: &str = "(x|ch|ss|sh)es$";
	pub const MICE: &str = "([m|l])ice$";
	pub const BUSES: &str = "(bus)es$";
	pub const OES: &str = "(o)es$";
	pub const SHOES: &str = "(shoe)s$";
	pub const CRISES: &str = "(cris|ax|test)es$";
	pub const OCTOPUSES: &str = "(octop|vir)uses$";
	pub const ALIASES: &str = "(alias|canvas|status|campus)es$";
	pub const SUMMONSES: &str = "^(summons|bonus)es$";
	pub const OXEN: &str = "^(ox)en";
	pub const MATRICES: &str = "(matr)ices$";
	pub const VERTICES: &str = "(vert|ind)ices$";
	pub const FEET: &str = "^feet$";
	pub const TEETH: &str = "^teeth$";
	pub const GEESE: &str = "^geese$";
	pub const QUIZZES: &str = "(quiz)zes$";
	pub const WHEREASES: &str = "^(whereas)es$";
	pub const CRITERIA: &str = "^(criteri)a$";
	pub const GENERA: &str = "^genera$";
	pub const METAS: &str = "^(meta)s$";
	pub const SS: &str = "ss$";
	pub const S: &str = "s$";
}

/// Singular forms.
mod singular {
	pub const MAN: &str = "^(m|wom)an$";
	pub const PERSON: &str = "(pe)rson$";
	pub const CHILD: &str = "(child)$";
	pub const DRIVE: &str = "(drive)$";
	pub const OX: &str = "^(ox)$";
	pub const AXIS: &str = "(ax|test)is$";
	pub const OCTOPUS: &str = "(octop|vir)us$";
	pub const ALIAS: &str = "(alias|status|canvas|campus)$";
	pub const SUMMONS: &str = "^(summons|bonus)$";
	pub const BUS: &str = "(bu)s$";
	pub const BUFFALO: &str = "(buffal|tomat|potat)o$";
	pub const TIUM: &str = "([ti])um$";
	pub const SIS: &str = "sis$";
	pub const FFE: &str = "(?:([^f])fe|([lr])f)$";
	pub const FOCUS: &str = "^(focus)$";
	pub const HIVE: &str = "(hi|ti)ve$";
	pub const AEIOUYY: &str = "([^aeiouy]|qu)y$";
	pub const X: &str = "(x|ch|ss|sh)$";
	pub const MATRIX: &str = "(matr)ix$";
	pub const VERTEX: &str = "(vert|ind)ex$";
	pub const MOUSE: &str = "([m|l])ouse$";
	pub const FOOT: &str = "^foot$";
	pub const TOOTH: &str = "^tooth$";
	pub const GOOSE: &str = "^goose$";
	pub const QUIZ: &str = "(quiz)$";
	pub const WHEREAS: &str = "^(whereas)$";
	pub const CRITERION: &str = "^(criteri)on$";
	pub const GENUS: &str = "^genus$";
	pub const S: &str = "s$";
	pub const COMMON: &str = "$";
}

type RuleSource = (&'static str, Option<&'static str>);

const PLURAL_RULES: &[RuleSource] = &[
	// Already plural.
	(plural::MEN, None),
	(plural::PEOPLE, None),
	(plural::CHILDREN, None),
	(plural::TIA, None),
	(plural::ANALYSES, None),
	(plural::DATABASES, None),
	(plural::DRIVES, None),
	(plural::HIVES, None),
	(plural::CURVES, None),
	(plural::LRVES, None),
	(plural::FOVES, None),
	(plural::AEIOUYIES, None),
	(plural::SERIES, None),
	(plural::MOVIES, None),
	(plural::XES, None),
	(plural::MICE, None),
	(plural::BUSES, None),
	(plural::OES, None),
	(plural::SHOES, None),
	(plural::CRISES, None),
	(plural::OCTOPUSES, None),
	(plural::ALIASES, None),
	(plural::SUMMONSES, None),
	(plural::OXEN, None),
	(plural::MATRICES, None),
	(plural::FEET, None),
	(plural::TEETH, None),
	(plural::GEESE, None),
	(plural::QUIZZES, None),
	(plural::WHEREASES, None),
	(plural::CRITERIA, None),
	(plural::GENERA, None),
	// Transformations.
	(singular::MAN, Some("${1}en")),
	(singular::PERSON, Some("${1}ople")),
	(singular::CHILD, Some("${1}ren")),
	(singular::DRIVE, Some("${1}s")),
	(singular::OX, Some("${1}en")),
	(singular::AXIS, Some("${1}es")),
	(singular::OCTOPUS, Some("${1}uses")),
	(singular::ALIAS, Some("${1}es")),
	(singular::SUMMONS, Some("${1}es")),
	(singular::BUS, Some("${1}ses")),
	(singular::BUFFALO, Some("${1}oes")),
	(singular::TIUM, Some("${1}a")),
	(singular::SIS, Some("ses")),
	(singular::FFE, Some("${1}${2}ves")),
	(singular::FOCUS, Some("${1}es")),
	(singular::HIVE, Some("${1}ves")),
	(singular::AEIOUYY, Some("${1}ies")),
	(singular::MATRIX, Some("${1}ices")),
	(singular::VERTEX, Some("${1}ices")),
	(singular::X, Some("${1}es")),
	(singular::MOUSE, Some("${1}ice")),
	(singular::FOOT, Some("feet")),
	(singular::TOOTH, Some("teeth")),
	(singular::GOOSE, Some("geese")),
	(singular::QUIZ, Some("${1}zes")),
	(singular::WHEREAS, Some("${1}es")),
	(singular::CRITERION, Some("${1}a")),
	(singular::GENUS, Some("genera")),
	// Catch-alls.
	(singular::S, Some("s")),
	(singular::COMMON, Some("s")),
];

const SINGULAR_RULES: &[RuleSource] = &[
	// Already singular.
	(singular::MAN, None),
	(singular::PERSON, None),
	(singular::CHILD, None),
	(singular::DRIVE, None),
	(singular::OX, None),
	(singular::AXIS, None),
	(singular::OCTOPUS, None),
	(singular::ALIAS, None),
	(singular::SUMMONS, None),
	(singular::BUS, None),
	(singular::BUFFALO, None),
	(singular::TIUM, None),
	(singular::SIS, None),
	(singular::FFE, None),
	(singular::FOCUS, None),
	(singular::HIVE, None),
	(singular::AEIOUYY, None),
	(singular::X, None),
	(singular::MATRIX, None),
	(singular::MOUSE, None),
	(singular::FOOT, None),
	(singular::TOOTH, None),
	(singular::GOOSE, None),
	(singular::QUIZ, None),
	(singular::WHEREAS, None),
	(singular::CRITERION, None),
	(singular::GENUS, None),
	// Transformations.
	(plural::METAS, Some("${1}")),
	(plural::MEN, Some("${1}an")),
	(plural::PEOPLE, Some("${1}rson")),
	(plural::CHILDREN, Some("${1}")),
	(plural::DATABASES, Some("${1}")),
	(plural::DRIVES, Some("${1}")),
	(plural::GENERA, Some("genus")),
	(plural::CRITERIA, Some("${1}on")),
	(plural::TIA, Some("${1}um")),
	(plural::ANALYSES, Some("${1}sis")),
	(plural::HIVES, Some("${1}ve")),
	(plural::CURVES, Some("${1}")),
	(plural::LRVES, Some("${1}f")),
	(plural::AVES, Some("${1}ve")),
	(plural::FOVES, Some("${1}fe")),
	(plural::MOVIES, Some("${1}ovie")),
	(plural::AEIOUYIES, Some("${1}y")),
	(plural::SERIES, Some("${1}eries")),
	(plural::XES, Some("${1}")),
	(plural::MICE, Some("${1}ouse")),
	(plural::BUSES, Some("${1}")),
	(plural::OES, Some("${1}")),
	(plural::SHOES, Some("${1}")),
	(plural::CRISES, Some("${1}is")),
	(plural::OCTOPUSES, Some("${1}us")),
	(plural::ALIASES, Some("${1}")),
	(plural::SUMMONSES, Some("${1}")),
	(plural::OXEN, Some("${1}")),
	(plural::MATRICES, Some("${1}ix")),
	(plural::VERTICES, Some("${1}ex")),
	(plural::FEET, Some("foot")),
	(plural::TEETH, Some("tooth")),
	(plural::GEESE, Some("goose")),
	(plural::QUIZZES, Some("${1}")),
	(plural::WHEREASES, Some("${1}")),
	// Catch-alls.
	(plural::SS, Some("ss")),
	(plural::S, Some("")),
];

static PLURAL: Lazy<RuleTable> = Lazy::new(|| RuleTable::compile(PLURAL_RULES));
static SINGULAR: Lazy<RuleTable> = Lazy::new(|| RuleTable::compile(SINGULAR_RULES));

#[derive(Debug)]
struct Rule {
	pattern: Regex,
	/// `None` for guards.
	replacement: Option<&'static str>,
}

#[derive(Debug)]
pub struct RuleTable {
	rules: Box<[Rule]>,
}

impl RuleTable {
	fn compile(source: &[RuleSource]) -> Self {
		let rules = source
			.iter()
			.map(|&(pattern, replacement)| Rule {
				pattern: RegexBuilder::new(pattern)
					.case_insensitive(true)
					.build()
					.unwrap_or_else(|error| panic!("invalid inflection pattern {pattern:?}: {error}")),
				replacement,
			})
			.collect();
		Self { rules }
	}

	/// Singular to plural.
	pub fn plural() -> &'static Self {
		&PLURAL
	}

	/// Plural to singular.
	pub fn singular() -> &'static Self {
		&SINGULAR
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	fn apply(&self, word: &str) -> String {
		let Some(rule) = self.rules.iter().find(|rule| rule.pattern.is_match(word)) else {
			return word.to_owned();
		};

		match rule.replacement {
			Some(replacement) => rule.pattern.replace(word, replacement).into_owned(),
			None => word.to_owned(),
		}
	}
}

/// Inflects `word` through `table`.
///
/// A non-empty `forced` result wins over everything else; uncountable words come back unchanged.
/// Otherwise the first matching rule in `table` decides, and a word no rule matches is returned
/// as is.
pub fn apply_rules(word: &str, table: &RuleTable, uncountable: &WordList, forced: Option<&str>) -> String {
	if let Some(forced) = forced.filter(|forced| !forced.is_empty()) {
		return forced.to_owned();
	}

	if uncountable.contains(word) {
		return word.to_owned();
	}

	table.apply(word)
}

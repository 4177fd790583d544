use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

/// Nouns whose singular and plural forms are the same.
const UNCOUNTABLE: &[&str] = &[
	"accommodation", "adulthood", "advertising", "advice", "aggression", "aid", "air", "aircraft",
	"alcohol", "anger", "applause", "arithmetic", "assistance", "athletics",
	"bacon", "baggage", "beef", "biology", "blood", "botany", "bread", "butter",
	"carbon", "cardboard", "cash", "chalk", "chaos", "chess", "crossroads", "countryside",
	"dancing", "deer", "dignity", "dirt", "dust",
	"economics", "education", "electricity", "engineering", "enjoyment", "envy", "equipment",
	"ethics", "evidence", "evolution",
	"fame", "fiction", "flour", "flu", "food", "fuel", "fun", "furniture",
	"gallows", "garbage", "garlic", "genetics", "gold", "golf", "gossip", "grammar", "gratitude",
	"grief", "guilt", "gymnastics",
	"happiness", "hardware", "harm", "hate", "hatred", "health", "heat", "help", "homework",
	"honesty", "honey", "hospitality", "housework", "humour", "hunger", "hydrogen",
	"ice", "importance", "inflation", "information", "innocence", "iron", "irony",
	"jam", "jewelry", "judo",
	"karate", "knowledge",
	"lack", "laughter", "lava", "leather", "leisure", "lightning", "linguine", "linguini",
	"linguistics", "literature", "litter", "livestock", "logic", "loneliness", "luck", "luggage",
	"macaroni", "machinery", "magic", "mail", "management", "mankind", "marble", "mathematics",
	"mayonnaise", "measles", "methane", "milk", "minus", "money", "mud", "music", "mumps",
	"nature", "news", "nitrogen", "nonsense", "nurture", "nutrition",
	"obedience", "obesity", "oxygen",
	"pasta", "patience", "physics", "poetry", "pollution", "poverty", "pride", "psychology",
	"publicity", "punctuation",
	"quartz",
	"racism", "relaxation", "reliability", "research", "respect", "revenge", "rice", "rubbish", "rum",
	"safety", "scenery", "seafood", "seaside", "series", "shame", "sheep", "shopping", "sleep",
	"smoke", "smoking", "snow", "soap", "software", "soil", "spaghetti", "species", "steam",
	"stuff", "stupidity", "sunshine", "symmetry",
	"tennis", "thirst", "thunder", "timber", "traffic", "transportation", "trust",
	"underwear", "unemployment", "unity",
	"validity", "veal", "vegetation", "vegetarianism", "vengeance", "violence", "vitality",
	"warmth", "wealth", "weather", "welfare", "wheat", "wildlife", "wisdom",
	"yoga",
	"zinc", "zoology",
];

/// A set of lower-cased words, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
	words: HashSet<Box<str>>,
}

impl WordList {
	pub fn uncountable() -> Self {
		UNCOUNTABLE.iter().copied().collect()
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let raw = std::fs::read_to_string(path).with_context(|| format!("reading from {path:?}"))?;
		Ok(raw.parse().unwrap_or_else(|never: Infallible| match never {}))
	}

	pub fn contains(&self, word: &str) -> bool {
		if word.bytes().any(|b| b.is_ascii_uppercase()) {
			self.words.contains(word.to_ascii_lowercase().as_str())
		} else {
			self.words.contains(word)
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.words.iter().map(|word| &**word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut list = Self::default();
		list.extend(iter);
		list
	}
}

impl<S: AsRef<str>> Extend<S> for WordList {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		self.words.extend(
			iter
				.into_iter()
				.map(|word| word.as_ref().trim().to_ascii_lowercase())
				.filter(|word| !word.is_empty())
				.map(Box::<str>::from),
		);
	}
}

/// One word per line; blank lines and `#` comments are skipped.
impl FromStr for WordList {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(
			s.lines()
				.map(|line| line.split_once('#').map_or(line, |(word, _comment)| word))
				.collect(),
		)
	}
}

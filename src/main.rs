#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::{IsTerminal as _, Write as _};

use anyhow::Context as _;
use inflection::{Inflector, MemoCache, Pipeline, WordList};

use crate::config::Config;

mod args;
mod config;

struct Job {
	inflector: Inflector<MemoCache>,
	pipeline: Pipeline,
	count: Option<f64>,
}

impl Job {
	fn run(&self, word: &str) -> anyhow::Result<String> {
		let inflect = || {
			let word = self.inflector.apply(word, &self.pipeline)?;
			match self.count {
				Some(count) => self.inflector.inflect(&word, count, None, None),
				None => Ok(word),
			}
		};
		inflect().with_context(|| format!("inflecting {word:?}"))
	}
}

fn main() -> anyhow::Result<()> {
	let args = args::load();

	let config = match &args.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};

	let mut inflector = Inflector::with_cache(MemoCache::new())
		.with_irregulars(config.irregular)
		.with_uncountable(config.uncountable.iter());
	if let Some(path) = &args.word_list {
		let words = WordList::load(path)?;
		inflector = inflector.with_uncountable(words.iter());
	}

	let job = Job {
		inflector,
		pipeline: args.pipeline.or(config.pipeline).unwrap_or_default(),
		count: args.count,
	};

	let mut stdout = std::io::stdout().lock();

	if !args.words.is_empty() {
		for word in &args.words {
			writeln!(stdout, "{}", job.run(word)?)?;
		}
		return Ok(());
	}

	let stdin = std::io::stdin();
	let interactive = stdin.is_terminal();
	if interactive {
		eprint!("> ");
	}
	for line in stdin.lines() {
		let line = line.context("reading from stdin")?;
		let word = line.trim();
		if !word.is_empty() {
			writeln!(stdout, "{}", job.run(word)?)?;
			stdout.flush()?;
		}
		if interactive {
			eprint!("> ");
		}
	}

	Ok(())
}

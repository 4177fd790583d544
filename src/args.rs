use std::path::PathBuf;

use argh::FromArgs;
use inflection::Pipeline;

/// Inflect English words and identifiers.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// path to a JSON config with irregular forms, uncountable words and a default pipeline
	#[argh(option, short = 'c')]
	pub config: Option<PathBuf>,
	/// path to a list of extra uncountable words, one per line
	#[argh(option, short = 'W')]
	pub word_list: Option<PathBuf>,
	/// comma-separated transforms to run, e.g. `underscore,pluralize`; overrides the config
	#[argh(option, short = 'p')]
	pub pipeline: Option<Pipeline>,
	/// inflect each result for this many items after the pipeline runs
	#[argh(option, short = 'n')]
	pub count: Option<f64>,
	/// words to transform; read from stdin, one per line, when none are given
	#[argh(positional)]
	pub words: Vec<String>,
}

pub fn load() -> Args {
	argh::from_env()
}

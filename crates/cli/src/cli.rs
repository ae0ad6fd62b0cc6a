use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "brew")]
#[command(about = "Inspect layer registrations, network descriptions and datasets")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// List the registered layer types
	Layers {
		#[arg(long, short, value_enum, default_value_t = PrecisionArg::Float)]
		precision: PrecisionArg,
	},
	/// Construct every layer of a network description
	Net {
		/// Network description (TOML)
		#[arg(value_name = "PATH")]
		path: PathBuf,

		#[arg(long, short, value_enum, default_value_t = PrecisionArg::Float)]
		precision: PrecisionArg,
	},
	/// Create or inspect a dataset
	Dataset {
		#[command(subcommand)]
		action: DatasetAction,
	},
}

#[derive(Subcommand, Debug)]
pub enum DatasetAction {
	/// Create an empty dataset
	Create {
		#[arg(value_name = "PATH")]
		path: PathBuf,

		/// Storage backend (leveldb, lmdb)
		#[arg(long, short, default_value = "leveldb")]
		backend: String,
	},
	/// Print the records of a dataset
	Dump {
		#[arg(value_name = "PATH")]
		path: PathBuf,

		/// Storage backend (leveldb, lmdb)
		#[arg(long, short, default_value = "leveldb")]
		backend: String,

		/// Stop after this many records
		#[arg(long, short)]
		limit: Option<usize>,
	},
}

/// Registry to operate on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionArg {
	Float,
	Double,
}

#[cfg(test)]
mod tests;

//! `brew` binary.

mod cli;
mod commands;

use std::io;

use clap::Parser;
use cli::{Cli, Command, DatasetAction};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let mut out = io::stdout().lock();
	match cli.command {
		Command::Layers { precision } => commands::list_layers(precision, &mut out),
		Command::Net { path, precision } => commands::build_net(&path, precision, &mut out),
		Command::Dataset { action } => match action {
			DatasetAction::Create { path, backend } => commands::create_dataset(&path, &backend),
			DatasetAction::Dump { path, backend, limit } => commands::dump_dataset(&path, &backend, limit, &mut out),
		},
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("brew_layers=debug,brew_dataset=debug,brew_factory=trace,debug")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

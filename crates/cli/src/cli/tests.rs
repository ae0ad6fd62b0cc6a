use clap::CommandFactory;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn command_definition_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn precision_defaults_to_float() {
	let cli = Cli::try_parse_from(["brew", "layers"]).unwrap();
	let Command::Layers { precision } = cli.command else {
		panic!("expected layers command");
	};
	assert_eq!(precision, PrecisionArg::Float);
	assert!(!cli.verbose);
}

#[test]
fn net_takes_path_and_precision() {
	let cli = Cli::try_parse_from(["brew", "net", "lenet.toml", "--precision", "double", "-v"]).unwrap();
	assert!(cli.verbose);
	let Command::Net { path, precision } = cli.command else {
		panic!("expected net command");
	};
	assert_eq!(path, PathBuf::from("lenet.toml"));
	assert_eq!(precision, PrecisionArg::Double);
}

#[test]
fn dataset_dump_options() {
	let cli = Cli::try_parse_from(["brew", "dataset", "dump", "train_db", "--backend", "lmdb", "--limit", "3"]).unwrap();
	let Command::Dataset {
		action: DatasetAction::Dump { path, backend, limit },
	} = cli.command
	else {
		panic!("expected dataset dump");
	};
	assert_eq!(path, PathBuf::from("train_db"));
	assert_eq!(backend, "lmdb");
	assert_eq!(limit, Some(3));
}

#[test]
fn unknown_precision_is_rejected() {
	assert!(Cli::try_parse_from(["brew", "layers", "--precision", "half"]).is_err());
}

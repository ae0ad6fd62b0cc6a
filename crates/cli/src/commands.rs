//! Subcommand implementations. Output goes to the given writer; logs go to stderr.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use brew_dataset::{Mode, create_dataset_named};
use brew_layers::{Layer, LayerPrecision, create_net, registered_layer_types};
use brew_proto::{Datum, NetParameter};
use tracing::info;

use crate::cli::PrecisionArg;

/// Prints one line per registered layer type: wire number and alias.
pub fn list_layers(precision: PrecisionArg, out: &mut impl Write) -> anyhow::Result<()> {
	let kinds = match precision {
		PrecisionArg::Float => registered_layer_types::<f32>(),
		PrecisionArg::Double => registered_layer_types::<f64>(),
	};
	for kind in kinds {
		writeln!(out, "{:>2} {kind}", kind.wire())?;
	}
	Ok(())
}

/// Loads a network description and constructs each of its layers.
pub fn build_net(path: &Path, precision: PrecisionArg, out: &mut impl Write) -> anyhow::Result<()> {
	let net = NetParameter::load(path)?;
	match precision {
		PrecisionArg::Float => describe::<f32>(&net, out),
		PrecisionArg::Double => describe::<f64>(&net, out),
	}
}

fn describe<P: LayerPrecision>(net: &NetParameter, out: &mut impl Write) -> anyhow::Result<()> {
	let layers = create_net::<P>(net).with_context(|| format!("failed to build net {}", net.name))?;
	for layer in &layers {
		write_layer(&**layer, out)?;
	}
	info!(net = %net.name, layers = layers.len(), precision = P::NAME, "net constructed");
	Ok(())
}

fn write_layer<P: LayerPrecision>(layer: &dyn Layer<P>, out: &mut impl Write) -> std::io::Result<()> {
	writeln!(
		out,
		"{}\t{}\t{}\t{}",
		layer.name(),
		layer.layer_type(),
		layer.type_name(),
		layer.engine()
	)
}

/// Creates an empty dataset at `path`. Fails if one already exists.
pub fn create_dataset(path: &Path, backend: &str) -> anyhow::Result<()> {
	let Some(mut dataset) = create_dataset_named::<String, Datum>(backend)? else {
		bail!("dataset backend {backend} is not available in this build");
	};
	dataset.open(path, Mode::New)?;
	dataset.commit()?;
	dataset.close();
	info!(path = %path.display(), backend, "dataset created");
	Ok(())
}

/// Prints `key`, label and shape of each record, in key order.
pub fn dump_dataset(path: &Path, backend: &str, limit: Option<usize>, out: &mut impl Write) -> anyhow::Result<()> {
	let Some(mut dataset) = create_dataset_named::<String, Datum>(backend)? else {
		bail!("dataset backend {backend} is not available in this build");
	};
	dataset.open(path, Mode::Read)?;
	for key in dataset.keys()?.into_iter().take(limit.unwrap_or(usize::MAX)) {
		let datum = dataset.get(&key)?;
		writeln!(
			out,
			"{key}\tlabel={}\t{}x{}x{}",
			datum.label, datum.channels, datum.height, datum.width
		)?;
	}
	dataset.close();
	Ok(())
}

//! Input layers.

use std::path::Path;

use brew_dataset::{DatumDataset, Mode, create_dataset};
use brew_proto::Datum;
use tracing::{debug, warn};

use crate::error::Result;
use crate::global::LayerPrecision;

define_layer!(
	/// Reads [`Datum`] records from a database.
	pub struct DataLayer
);
define_layer!(
	/// Emits constant or filled blobs without reading anything.
	pub struct DummyDataLayer
);
define_layer!(pub struct ImageDataLayer);
define_layer!(
	/// Serves blobs handed to it by the caller.
	pub struct MemoryDataLayer
);
define_layer!(pub struct WindowDataLayer);

impl<P: LayerPrecision> DataLayer<P> {
	/// Opens the configured source read-only.
	///
	/// Returns `Ok(None)` when the configured backend is not part of this build.
	pub fn open_dataset(&self) -> Result<Option<DatumDataset>> {
		let data = &self.param.data_param;
		let Some(mut dataset) = create_dataset::<String, Datum>(data.backend)? else {
			warn!(layer = %self.param.name, backend = %data.backend, "dataset backend unavailable");
			return Ok(None);
		};
		dataset.open(Path::new(&data.source), Mode::Read)?;
		debug!(layer = %self.param.name, source = %data.source, "opened data source");
		Ok(Some(dataset))
	}
}

register_layer_class!(Data, DataLayer);
register_layer_class!(DummyData, DummyDataLayer);
register_layer_class!(ImageData, ImageDataLayer);
register_layer_class!(MemoryData, MemoryDataLayer);
register_layer_class!(WindowData, WindowDataLayer);

//! Shared helpers for unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use brew_proto::LayerParameter;

use crate::global::LayerPrecision;
use crate::layer::LayerResult;

define_layer!(
	/// Stand-in for a layer whose construction is observable.
	pub struct ProbeLayer
);
define_layer!(pub struct OtherProbeLayer);
define_layer!(
	/// Stand-in for a cuDNN implementation in builds without one.
	pub struct AcceleratedProbeLayer, engine: brew_proto::Engine::Cudnn
);

/// Creator that always fails, for exercising error propagation.
pub fn failing_creator<P: LayerPrecision>(param: &LayerParameter) -> LayerResult<P> {
	Err(crate::LayerError::UnknownEngine {
		name: param.name.clone(),
		engine: brew_proto::Engine::Cudnn,
	})
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Runs `f` with a thread-local subscriber and returns what it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
	let buf = SharedBuf::default();
	let writer = buf.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.without_time()
		.with_max_level(tracing::Level::TRACE)
		.finish();
	let out = tracing::subscriber::with_default(subscriber, f);
	let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
	(out, logs)
}

//! Layer registry for brew.
//!
//! Every layer kind registers a creator with the process-wide registry of
//! each precision at link time, through [`register_layer_class!`] or
//! [`register_layer_creator!`]. The registries bootstrap themselves from
//! those submissions on first use, so adding a layer never touches a
//! central list.
//!
//! ```ignore
//! use brew_layers::{get_layer, proto::{LayerParameter, LayerType}};
//!
//! let param = LayerParameter::new("pool1", LayerType::Pooling).with_top("pool1");
//! let layer = get_layer::<f32>(&param);
//! assert_eq!(layer.name(), "pool1");
//! ```

#[macro_use]
mod macros;

pub mod builtins;
#[cfg(feature = "cudnn")]
pub mod cudnn;
pub mod engine;
pub mod error;
pub mod global;
pub mod layer;
pub mod net;
pub mod registrar;
pub mod registry;

#[cfg(test)]
mod test_support;

pub use brew_factory::{Precision, RegistryError};
pub use brew_proto as proto;
pub use engine::{CudnnRestriction, EngineFamily, Selection, resolve_engine};
pub use error::{LayerError, Result};
pub use global::{LayerPrecision, add_creator, create_layer, get_layer, registered_layer_types};
#[doc(hidden)]
pub use inventory;
pub use layer::{Layer, LayerClass, LayerCreator, LayerResult, construct};
pub use net::create_net;
pub use registrar::LayerRegistrar;
pub use registry::LayerRegistry;

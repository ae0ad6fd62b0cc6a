//! Configuration messages for the brew factories.
//!
//! These are the read-only records the layer and dataset factories consume.
//! Nothing in this crate constructs components; it only describes them:
//!
//! - [`LayerParameter`]: one layer instance (discriminator + parameter blocks)
//! - [`NetParameter`]: an ordered list of layers, loadable from TOML
//! - [`DataParameter`] / [`Db`]: dataset backend selection
//! - [`Datum`]: the structured record stored by data layers
//!
//! Every enum keeps its wire number and its exact, case-sensitive string
//! alias, so configuration written either way resolves to the same kind.

pub mod data;
pub mod error;
pub mod layer;
pub mod net;

pub use data::{DataParameter, Datum, Db};
pub use error::{ConfigError, Result, UnknownDiscriminant};
pub use layer::{
	ConvolutionParameter, Engine, LayerParameter, LayerType, PoolMethod, PoolingParameter, ReluParameter, SigmoidParameter,
	SoftmaxParameter, TanhParameter,
};
pub use net::NetParameter;

//! Keyed constructor registries.
//!
//! A [`Registry`] maps a discriminator to a constructor function and
//! nothing else: it owns no instances. A [`GlobalRegistry`] wraps one in
//! process-wide state that is built on first access by running a bootstrap
//! function exactly once, and is never torn down.
//!
//! Registries are partitioned by a compile-time [`Precision`] tag; each
//! tag gets its own, independent table.
//!
//! Duplicate registration and lookups of unregistered keys are reported as
//! [`RegistryError`]. Whether they are fatal is the caller's decision.

pub mod error;
pub mod global;
pub mod precision;
pub mod registry;

pub use error::RegistryError;
pub use global::{Bootstrap, GlobalRegistry};
pub use precision::Precision;
pub use registry::Registry;

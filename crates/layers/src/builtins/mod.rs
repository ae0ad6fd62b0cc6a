//! Built-in layer kinds, grouped the way the layers compute.
//!
//! Each module defines its layer types and registers them with both
//! precisions. Families with a cuDNN implementation register a creator
//! that selects the engine; the rest register their type directly.

pub mod common;
pub mod data;
pub mod loss;
pub mod neuron;
pub mod vision;

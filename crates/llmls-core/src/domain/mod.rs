//! Domain types for the unified model catalog.

mod model;

pub use model::{LocalDetails, ModelPricing, ModelRecord, UNKNOWN_PROVIDER};

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod glob;
pub mod layout;

// Re-export commonly used types for convenience
pub use catalog::{merge, provider_tags, sort_by_created_desc};
pub use domain::{LocalDetails, ModelPricing, ModelRecord, UNKNOWN_PROVIDER};
pub use filter::{FieldFilters, filter_by_fields, unified_search};
pub use glob::glob_match;

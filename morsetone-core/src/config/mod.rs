//! Configuration types
//!
//! Capacities of the fixed protocol and the tunable pipeline parameters.
//! Every value has a compiled-in default; there is no runtime config source.

pub mod types;

pub use types::*;

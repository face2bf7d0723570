//! CLI command implementations.

mod site;

pub use site::*;

//! Router assembly.

pub mod catalog;
pub mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

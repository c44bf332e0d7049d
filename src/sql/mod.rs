//! SQL construction and value binding for the `Any` driver.

pub mod builder;
pub mod params;

pub use builder::{insert, select_all, select_by_id, select_summary, QueryBuf};
pub use params::bind_value;

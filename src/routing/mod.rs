//! Routing module
//!
//! Prefix-based dispatch from request path to response template.

mod table;

pub use table::RouteTable;

//! HTTP protocol layer module
//!
//! Response construction, decoupled from route selection.

pub mod response;

pub use response::build_json_response;

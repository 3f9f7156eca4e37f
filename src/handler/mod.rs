//! Request handler module
//!
//! Responsible for request dispatch. Every request is answered from the
//! pre-rendered templates held in `AppState`.

pub mod router;

// Re-export main entry point
pub use router::handle_request;

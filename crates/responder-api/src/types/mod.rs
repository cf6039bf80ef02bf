//! Request and response types for the API.

pub mod responses;

pub use responses::*;

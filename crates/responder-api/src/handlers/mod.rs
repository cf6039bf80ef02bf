//! API request handlers.

pub mod answers;
pub mod health;
pub mod questions;

pub use answers::*;
pub use health::*;
pub use questions::*;

//! Terminal output formatting
//!
//! Display utilities for command replies.

pub mod display;

pub use display::{format_reply, print_reply};

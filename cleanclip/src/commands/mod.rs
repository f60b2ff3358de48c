//! Command implementations for the cleanclip CLI.

pub mod patterns;
pub mod sanitize;

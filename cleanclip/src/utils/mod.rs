//! Platform helpers for the cleanclip CLI.

pub mod clipboard;

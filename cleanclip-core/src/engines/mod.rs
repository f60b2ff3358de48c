// cleanclip-core/src/engines/mod.rs
//! Concrete implementations of the `SanitizationEngine` trait.

pub mod regex_engine;

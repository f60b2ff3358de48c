// cleanclip/src/lib.rs
//! # CleanClip CLI Application
//!
//! This crate is the command-line front end of CleanClip: clipboard access, the pattern
//! editor workflow and terminal output. All sanitization logic lives in `cleanclip-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

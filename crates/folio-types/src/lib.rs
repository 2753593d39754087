//! Foundation types for the portfolio terminal.
//!
//! Shared by every crate in the workspace: the error enum, platform-agnostic
//! input gestures, 24-bit colors, and the TOML terminal configuration.

pub mod color;
pub mod config;
pub mod error;
pub mod input;

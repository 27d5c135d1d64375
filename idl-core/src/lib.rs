//! Core utilities for the idlpack declaration emitter.
//!
//! This crate provides file writing for generated output and the pure path
//! arithmetic used to relate generated files to each other.

mod file;
mod path;

// File operations
pub use file::{GeneratedFile, write_file};
// Path utilities
pub use path::{normalize_path, output_path, relative_module, strip_extension};

//! Shared code generation utilities for the idlpack declaration emitter.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific emitters (e.g., `idlpack-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`schema`] - Member traversal (field flattening)
//! - [`generation`] - Import bookkeeping and resolution
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

mod error;

pub mod builder;
pub mod generation;
pub mod language;
pub mod schema;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::{Error, Result};
pub use generation::{ImportCollector, LocalImport};
pub use language::{FileScope, LanguageCodegen, MappedType, TypeMapper};
pub use schema::{FlatField, flatten_fields, for_each_field};

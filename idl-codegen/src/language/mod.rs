//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language emitters
//! - [`TypeMapper`] - Trait for mapping field shapes to language types
//! - [`FileScope`] - The file a declaration is being emitted into
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{FileScope, GenerateResult, LanguageCodegen, MappedType, PreviewFile, TypeMapper};

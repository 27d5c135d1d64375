//! Package manifest loading.
//!
//! A manifest describes an already-resolved package: its files, their
//! members in declaration order, the underlying shapes of named types and
//! the foreign packages it refers to. Loading it yields the
//! [`Package`](idlpack_ir::Package) the emitter consumes, plus the
//! `[codegen]` settings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod codegen;
mod error;
mod lower;
mod manifest;
mod schema;

pub use codegen::CodegenConfig;
pub use error::{Error, Result, SourceContext};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use schema::{FileSchema, MemberSchema, PackageSchema, Schema};

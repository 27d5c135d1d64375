//! TypeScript declaration emitter for idlpack.
//!
//! Turns the members of a resolved package into `.ts` declaration files:
//! aliases and enums become type aliases, consts become exported `let`s,
//! structs become interfaces, and resources become classes with a
//! validating constructor plus an `<Name>Args` interface.
//!
//! # Usage
//!
//! ```ignore
//! use idlpack_codegen_typescript::{Generator, LanguageCodegen};
//! use idlpack_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::open("idl.toml")?;
//! let generator = Generator::from_manifest(&manifest);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("out"))?;
//! ```
//!
//! # Generated Output
//!
//! One file per source file, at the same relative path with a `.ts`
//! extension:
//!
//! - a two-line "generated file" banner
//! - `import * as <alias> from "<runtime>";` when the file declares a resource
//! - `import {Name} from "<relative module>";` for each member used from
//!   another file of the package
//! - the declarations, in source order

mod code_file;
mod declarations;
mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::{BANNER, CodeFile};
pub use declarations::{DeclarationEmitter, FileImports};
pub use generator::Generator;
pub use idlpack_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;

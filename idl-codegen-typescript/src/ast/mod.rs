//! TypeScript AST builders for declarations and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod consts;
mod imports;
mod interface;
mod types;

pub use class::{Class, Constructor};
pub use consts::Const;
pub use imports::Import;
pub use interface::{Interface, Property};
pub use types::{TypeAlias, Union};

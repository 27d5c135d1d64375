//! Resolved package model for the idlpack declaration emitter.
//!
//! This crate holds the types the emitter consumes: a [`Package`] made of
//! [`File`]s, each an ordered list of [`Member`]s, plus the resolved type
//! shapes those members refer to.
//!
//! # Architecture
//!
//! ```text
//! idl.toml (manifest) → idlpack-manifest (loading) → idlpack-ir (Package) → codegen
//! ```
//!
//! The model is assumed to be fully resolved: every member name is unique,
//! every named type can be looked up, and every struct-shaped member carries
//! exactly one [`PropertyOptions`] per leaf field.

mod member;
mod package;
mod types;

pub use member::{Alias, Const, Enum, Member, MemberKind, Position, Resource, Struct, TypeMember};
pub use package::{Dependency, File, Package};
pub use types::{BasicKind, Field, NamedRef, PropertyOptions, StructType, Type};

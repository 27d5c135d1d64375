//! Serialized manifest layout.

use idlpack_ir::{Dependency, Field, PropertyOptions, Type};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::CodegenConfig;

/// Root of an `idl.toml` (or `.json`) manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    pub package: PackageSchema,

    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Underlying shapes of named types not declared by any member.
    #[serde(default)]
    pub types: IndexMap<String, Type>,

    /// Foreign packages keyed by import path.
    #[serde(default)]
    pub dependencies: IndexMap<String, Dependency>,

    #[serde(default)]
    pub files: Vec<FileSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSchema {
    pub name: String,
    /// Import path; defaults to the package name.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSchema {
    /// Path relative to the package root.
    pub path: String,
    #[serde(default)]
    pub members: Vec<MemberSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberSchema {
    Alias {
        name: String,
        #[serde(default)]
        line: Option<u32>,
        target: Type,
    },
    Const {
        name: String,
        #[serde(default)]
        line: Option<u32>,
        #[serde(rename = "type")]
        ty: Type,
        /// Literal text, emitted verbatim.
        value: String,
    },
    Enum {
        name: String,
        #[serde(default)]
        line: Option<u32>,
        values: Vec<String>,
    },
    Struct {
        name: String,
        #[serde(default)]
        line: Option<u32>,
        #[serde(default)]
        fields: Vec<Field>,
        #[serde(default)]
        options: Vec<PropertyOptions>,
    },
    Resource {
        name: String,
        #[serde(default)]
        line: Option<u32>,
        #[serde(default)]
        fields: Vec<Field>,
        #[serde(default)]
        options: Vec<PropertyOptions>,
    },
}

impl MemberSchema {
    pub fn name(&self) -> &str {
        match self {
            MemberSchema::Alias { name, .. }
            | MemberSchema::Const { name, .. }
            | MemberSchema::Enum { name, .. }
            | MemberSchema::Struct { name, .. }
            | MemberSchema::Resource { name, .. } => name,
        }
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            MemberSchema::Alias { line, .. }
            | MemberSchema::Const { line, .. }
            | MemberSchema::Enum { line, .. }
            | MemberSchema::Struct { line, .. }
            | MemberSchema::Resource { line, .. } => *line,
        }
    }
}

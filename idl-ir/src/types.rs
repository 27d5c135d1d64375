//! Source type shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kinds of the source type system.
///
/// Only `Bool`, `String` and `Float64` have a target representation; the
/// remaining kinds exist so a resolved model can name them and the emitter
/// can reject them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicKind {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl BasicKind {
    /// Get the source spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::String => "string",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a named type.
///
/// `package` is the import path of the declaring package; `None` means the
/// package currently being generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl NamedRef {
    /// Reference a type declared in the current package.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
        }
    }

    /// Reference a type declared in another package.
    pub fn foreign(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
        }
    }
}

impl fmt::Display for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// The shape of a field (or alias/const) type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// A primitive.
    Basic(BasicKind),
    /// A reference to a declared type.
    Named(NamedRef),
    /// An associative map.
    Map { key: Box<Type>, elem: Box<Type> },
    /// A pointer; has no target counterpart.
    Pointer(Box<Type>),
    /// A homogeneous sequence.
    Slice(Box<Type>),
    /// A struct literal. Only valid as the underlying shape of a named type.
    Struct(StructType),
}

impl Type {
    pub fn basic(kind: BasicKind) -> Self {
        Type::Basic(kind)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(NamedRef::local(name))
    }

    pub fn map(key: Type, elem: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer(Box::new(elem))
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    /// Short name of the shape, used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Type::Basic(_) => "basic",
            Type::Named(_) => "named",
            Type::Map { .. } => "map",
            Type::Pointer(_) => "pointer",
            Type::Slice(_) => "slice",
            Type::Struct(_) => "struct",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(kind) => write!(f, "{}", kind),
            Type::Named(named) => write!(f, "{}", named),
            Type::Map { key, elem } => write!(f, "map[{}]{}", key, elem),
            Type::Pointer(elem) => write!(f, "*{}", elem),
            Type::Slice(elem) => write!(f, "[]{}", elem),
            Type::Struct(s) => write!(f, "struct{{{} fields}}", s.fields.len()),
        }
    }
}

/// A single field of a struct shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Anonymous (embedded) field whose own fields are inlined.
    #[serde(default)]
    pub embedded: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
        }
    }

    /// An anonymous field embedding the named type `name`.
    pub fn embedded(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            ty: Type::named(name.clone()),
            name,
            embedded: true,
        }
    }
}

/// An ordered set of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructType {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-field metadata attached by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyOptions {
    /// Property name in the target language.
    pub name: String,
    /// The property may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Output-only property, set by the system after construction.
    #[serde(default)]
    pub out: bool,
    /// Changing the property replaces the entity; emitted as readonly.
    #[serde(default)]
    pub replaces: bool,
}

impl PropertyOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn out(mut self) -> Self {
        self.out = true;
        self
    }

    pub fn replaces(mut self) -> Self {
        self.replaces = true;
        self
    }
}

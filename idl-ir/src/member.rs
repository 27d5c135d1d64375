//! Package members.

use std::fmt;

use crate::{PropertyOptions, StructType, Type};

/// Source position of a member declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Path of the declaring file, relative to the package root.
    pub file: String,
    pub line: u32,
}

impl Position {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A type alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub name: String,
    pub pos: Position,
    pub target: Type,
}

/// A typed constant. `value` is the literal text of the resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    pub name: String,
    pub pos: Position,
    pub ty: Type,
    pub value: String,
}

/// A closed set of string values.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub pos: Position,
    pub values: Vec<String>,
}

/// A plain data shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: String,
    pub pos: Position,
    pub ty: StructType,
    /// One entry per leaf field, in flattened order.
    pub options: Vec<PropertyOptions>,
}

/// A stateful entity whose construction arguments are validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: String,
    pub pos: Position,
    pub ty: StructType,
    /// One entry per leaf field, in flattened order.
    pub options: Vec<PropertyOptions>,
}

/// Members whose declaration is driven by a field set.
pub trait TypeMember {
    fn name(&self) -> &str;

    /// The direct fields, including embedded ones.
    fn struct_type(&self) -> &StructType;

    /// Options aligned with the flattened leaf fields.
    fn property_options(&self) -> &[PropertyOptions];
}

impl TypeMember for Struct {
    fn name(&self) -> &str {
        &self.name
    }

    fn struct_type(&self) -> &StructType {
        &self.ty
    }

    fn property_options(&self) -> &[PropertyOptions] {
        &self.options
    }
}

impl TypeMember for Resource {
    fn name(&self) -> &str {
        &self.name
    }

    fn struct_type(&self) -> &StructType {
        &self.ty
    }

    fn property_options(&self) -> &[PropertyOptions] {
        &self.options
    }
}

/// Discriminant of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Alias,
    Const,
    Enum,
    Struct,
    Resource,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Alias => "alias",
            MemberKind::Const => "const",
            MemberKind::Enum => "enum",
            MemberKind::Struct => "struct",
            MemberKind::Resource => "resource",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level declaration of a package.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Alias(Alias),
    Const(Const),
    Enum(Enum),
    Struct(Struct),
    Resource(Resource),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Alias(m) => &m.name,
            Member::Const(m) => &m.name,
            Member::Enum(m) => &m.name,
            Member::Struct(m) => &m.name,
            Member::Resource(m) => &m.name,
        }
    }

    pub fn pos(&self) -> &Position {
        match self {
            Member::Alias(m) => &m.pos,
            Member::Const(m) => &m.pos,
            Member::Enum(m) => &m.pos,
            Member::Struct(m) => &m.pos,
            Member::Resource(m) => &m.pos,
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Alias(_) => MemberKind::Alias,
            Member::Const(_) => MemberKind::Const,
            Member::Enum(_) => MemberKind::Enum,
            Member::Struct(_) => MemberKind::Struct,
            Member::Resource(_) => MemberKind::Resource,
        }
    }

    /// The field-driven view of this member, if it has one.
    pub fn as_type_member(&self) -> Option<&dyn TypeMember> {
        match self {
            Member::Struct(s) => Some(s),
            Member::Resource(r) => Some(r),
            _ => None,
        }
    }

    /// The type this member declares when referenced by name.
    ///
    /// Structs and resources declare their field set; aliases declare their
    /// target. Constants and enums have no struct-like underlying shape.
    pub fn underlying(&self) -> Option<Type> {
        match self {
            Member::Alias(a) => Some(a.target.clone()),
            Member::Struct(s) => Some(Type::Struct(s.ty.clone())),
            Member::Resource(r) => Some(Type::Struct(r.ty.clone())),
            Member::Const(_) | Member::Enum(_) => None,
        }
    }
}

//! TypeScript interface builder.

use idlpack_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a TypeScript interface or class.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Conditionally mark the property optional.
    pub fn optional_if(self, optional: bool) -> Self {
        if optional { self.optional() } else { self }
    }

    /// Conditionally mark the property readonly.
    pub fn readonly_if(self, readonly: bool) -> Self {
        if readonly { self.readonly() } else { self }
    }

    /// The declaration text, e.g. `readonly name?: string;`.
    pub fn declaration(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// Builder for TypeScript interfaces.
///
/// An interface without properties still renders as an open/close pair.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add properties from an iterator.
    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            self.properties
                .iter()
                .map(|p| CodeFragment::line(p.declaration()))
                .collect(),
            Some("}".to_string()),
        )]
    }
}

//! TypeScript class builder.

use idlpack_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Property;

/// A class constructor: parameters and body statements.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: Vec<(String, String)>,
    body: Vec<CodeFragment>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push((name.into(), ty.into()));
        self
    }

    /// Add a single-line statement.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a statement in place.
    pub fn push(&mut self, fragment: CodeFragment) {
        self.body.push(fragment);
    }

    fn header(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .collect::<Vec<_>>()
            .join(", ");
        format!("constructor({}) {{", params)
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.header(),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}

/// Builder for TypeScript classes.
///
/// Properties are declared `public`; a blank line separates them from the
/// constructor.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    extends: Option<String>,
    implements: Vec<String>,
    properties: Vec<Property>,
    constructor: Option<Constructor>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            properties: Vec::new(),
            constructor: None,
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    fn header(&self) -> String {
        let mut header = format!("export class {}", self.name);
        if let Some(base) = &self.extends {
            header.push_str(&format!(" extends {}", base));
        }
        if !self.implements.is_empty() {
            header.push_str(&format!(" implements {}", self.implements.join(", ")));
        }
        header.push_str(" {");
        header
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .properties
            .iter()
            .map(|p| CodeFragment::Line(format!("public {}", p.declaration())))
            .collect();

        if let Some(constructor) = &self.constructor {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(constructor.to_fragments());
        }

        vec![CodeFragment::block(self.header(), body, Some("}".to_string()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class() {
        let c = Class::new("Marker").build();
        assert_eq!(c, "export class Marker {\n}\n");
    }

    #[test]
    fn test_class_header() {
        let c = Class::new("Bucket")
            .extends("runtime.Resource")
            .implements("BucketArgs")
            .build();
        assert!(c.starts_with("export class Bucket extends runtime.Resource implements BucketArgs {\n"));
    }

    #[test]
    fn test_class_with_constructor() {
        let c = Class::new("Point")
            .properties([
                Property::new("x", "number").readonly(),
                Property::new("y", "number").optional(),
            ])
            .constructor(
                Constructor::new()
                    .param("args", "PointArgs")
                    .line("super();")
                    .line("this.x = args.x;"),
            )
            .build();

        assert_eq!(
            c,
            "export class Point {\n    public readonly x: number;\n    public y?: number;\n\n    constructor(args: PointArgs) {\n        super();\n        this.x = args.x;\n    }\n}\n"
        );
    }

    #[test]
    fn test_constructor_without_properties_has_no_blank() {
        let c = Class::new("Empty")
            .constructor(Constructor::new().line("super();"))
            .build();
        assert_eq!(
            c,
            "export class Empty {\n    constructor() {\n        super();\n    }\n}\n"
        );
    }
}

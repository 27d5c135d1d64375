//! TypeScript type alias and union builders.

use idlpack_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        ))]
    }
}

/// Builder for TypeScript union types.
///
/// Variants are laid out one per line under the declaration:
///
/// ```text
/// export type Color =
///     "Red" |
///     "Blue";
/// ```
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let Some(last) = self.variants.len().checked_sub(1) else {
            return vec![CodeFragment::Line(format!(
                "export type {} = never;",
                self.name
            ))];
        };

        let lines = self
            .variants
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let sep = if i == last { ";" } else { " |" };
                CodeFragment::Line(format!("{}{}", v, sep))
            })
            .collect();

        vec![
            CodeFragment::Line(format!("export type {} =", self.name)),
            CodeFragment::Indent(lines),
        ]
    }
}

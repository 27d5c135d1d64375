//! TypeScript variable declaration builder.

use idlpack_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for an exported, typed `let` declaration.
///
/// The value text is written as given.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "export let {}: {} = {};",
            self.name, self.ty, self.value
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_with_type() {
        let c = Const::new("DefaultRegion", "string", "\"us-east\"").build();
        assert_eq!(c, "export let DefaultRegion: string = \"us-east\";\n");
    }

    #[test]
    fn test_value_is_verbatim() {
        let c = Const::new("Limits", "number[]", "[1, 2,3]").build();
        assert_eq!(c, "export let Limits: number[] = [1, 2,3];\n");
    }
}

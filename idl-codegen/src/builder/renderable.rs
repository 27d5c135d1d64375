//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declaration builders produce fragments; a [`CodeBuilder`](super::CodeBuilder)
//! turns them into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "if (args.name === undefined) {",
            vec![CodeFragment::line("throw new Error(\"missing\");")],
            Some("}".to_string()),
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "if (args.name === undefined) {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}

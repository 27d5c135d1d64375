//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented lines of generated code.
///
/// Declaration builders hand it [`CodeFragment`]s through [`emit`](Self::emit);
/// the `push_*` methods write directly.
///
/// # Example
///
/// ```
/// use idlpack_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("export interface Point {")
///     .push_indent()
///     .push_line("x: number;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export interface Point {\n    x: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::default();
        builder
            .push_line("class Foo {")
            .push_indent()
            .push_line("public x: number;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "class Foo {\n    public x: number;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_blank_and_raw() {
        let mut builder = CodeBuilder::default();
        builder
            .push_line("let x = 1;")
            .push_blank()
            .push_raw("// raw")
            .push_blank();
        assert_eq!(builder.build(), "let x = 1;\n\n// raw\n");
    }

    #[test]
    fn test_custom_width() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder
            .push_line("{")
            .push_indent()
            .push_line("x: number;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "{\n  x: number;\n}\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "constructor() {".to_string(),
                    body: vec![CodeFragment::line("super();")],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::default();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "constructor() {\n    super();\n}\n");
    }

    #[test]
    fn test_emit_nested_indent() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("a"),
                    CodeFragment::Indent(vec![
                        CodeFragment::line("b"),
                        CodeFragment::Indent(vec![CodeFragment::line("c")]),
                    ]),
                    CodeFragment::Blank,
                ]
            }
        }

        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.emit(&Nested);
        assert_eq!(builder.build(), "a\n  b\n    c\n\n");
    }
}

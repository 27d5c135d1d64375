//! TypeScript import builder.

use idlpack_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
///
/// Named imports are written without inner padding (`import {A, B} from ...`),
/// the layout used throughout generated declaration files.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    from: String,
    namespace: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
            named: Vec::new(),
        }
    }

    /// Import the whole module under `alias` (`import * as alias`).
    pub fn namespace(mut self, alias: impl Into<String>) -> Self {
        self.namespace = Some(alias.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        match &self.namespace {
            Some(alias) => format!("import * as {} from \"{}\";", alias, self.from),
            None => format!(
                "import {{{}}} from \"{}\";",
                self.named.join(", "),
                self.from
            ),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

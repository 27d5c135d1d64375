//! CodeFile abstraction for assembling a generated declaration file.
//!
//! The file is laid out as banner, runtime import, local imports and body,
//! each non-empty header section followed by one blank line.

use idlpack_codegen::CodeBuilder;

use crate::ast::Import;

/// The warning placed at the top of every generated file.
pub const BANNER: [&str; 2] = [
    "// *** WARNING: this file was generated by the idlpack declaration emitter. ***",
    "// *** Do not edit by hand unless you are taking matters into your own hands! ***",
];

/// A structured representation of a generated TypeScript file.
///
/// # Example
///
/// ```
/// use idlpack_codegen_typescript::{CodeFile, ast::Import};
///
/// let code = CodeFile::new()
///     .runtime(Import::new("@idlpack/runtime").namespace("runtime"))
///     .body("export type Id = string;\n\n")
///     .render();
///
/// assert!(code.starts_with("// *** WARNING"));
/// assert!(code.contains("import * as runtime from \"@idlpack/runtime\";\n\nexport type Id"));
/// ```
#[derive(Debug, Clone)]
pub struct CodeFile {
    banner: Vec<String>,
    runtime: Option<Import>,
    imports: Vec<Import>,
    body: String,
}

impl Default for CodeFile {
    fn default() -> Self {
        Self {
            banner: BANNER.iter().map(|line| line.to_string()).collect(),
            runtime: None,
            imports: Vec::new(),
            body: String::new(),
        }
    }
}

impl CodeFile {
    /// Create a new CodeFile carrying the standard banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the banner lines.
    pub fn banner(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the runtime library import.
    pub fn runtime(mut self, import: Import) -> Self {
        self.runtime = Some(import);
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Set the already-rendered body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Render the whole file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::default();

        for line in &self.banner {
            builder.push_line(line);
        }
        if !self.banner.is_empty() {
            builder.push_blank();
        }

        if let Some(runtime) = &self.runtime {
            builder.emit(runtime).push_blank();
        }

        for import in &self.imports {
            builder.emit(import);
        }
        if !self.imports.is_empty() {
            builder.push_blank();
        }

        builder.push_raw(&self.body);
        builder.build()
    }
}

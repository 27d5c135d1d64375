//! TypeScript declaration generator.

use std::path::Path;

use eyre::{Result, WrapErr};
use idlpack_codegen::{
    Error, FileScope, Indent,
    generation::resolve_locals,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use idlpack_core::GeneratedFile;
use idlpack_ir::{File, Package};
use idlpack_manifest::{CodegenConfig, Manifest};
use tracing::{debug, info, warn};

use crate::{
    ast::Import,
    code_file::CodeFile,
    declarations::DeclarationEmitter,
    files::DeclarationTs,
};

/// Generates one `.ts` declaration file per source file of a package.
pub struct Generator<'a> {
    package: &'a Package,
    config: CodegenConfig,
    keep_going: bool,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        DeclarationTs::EXTENSION
    }

    fn preview(&self) -> idlpack_codegen::Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self {
            package,
            config: CodegenConfig::default(),
            keep_going: false,
        }
    }

    /// A generator for a loaded manifest, using its `[codegen]` settings.
    pub fn from_manifest(manifest: &'a Manifest) -> Self {
        Self::new(&manifest.package).with_config(manifest.codegen.clone())
    }

    pub fn with_config(mut self, config: CodegenConfig) -> Self {
        self.config = config;
        self
    }

    /// Continue with the remaining files when one cannot be written.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Render the declarations of one source file.
    ///
    /// The body is emitted first; the header is assembled afterwards from
    /// what the body referenced.
    pub fn render_file(&self, path: &str, file: &File) -> idlpack_codegen::Result<DeclarationTs> {
        debug!(file = path, members = file.len(), "rendering declarations");

        let scope = FileScope::new(self.package, path);
        let mut emitter = DeclarationEmitter::new(scope, &self.config.runtime_alias)
            .with_indent(Indent::Spaces(self.config.indent));
        let body = emitter.emit_body(file.members())?;
        let state = emitter.finish();

        if let Some((package, alias)) = state.imports.foreign().next() {
            return Err(Error::ForeignImport {
                alias: alias.to_string(),
                package: package.to_string(),
            });
        }

        let mut code = CodeFile::new();
        if state.had_resource {
            code = code.runtime(
                Import::new(&self.config.runtime_module).namespace(&self.config.runtime_alias),
            );
        }
        let locals = resolve_locals(&scope, &state.imports)?;
        code = code.imports(
            locals
                .into_iter()
                .map(|local| Import::new(local.module).named(local.name)),
        );

        Ok(DeclarationTs::new(path, code.body(body).render()))
    }

    /// Render every file of the package, in load order.
    pub fn render_all(&self) -> idlpack_codegen::Result<Vec<DeclarationTs>> {
        self.package
            .files
            .iter()
            .map(|(path, file)| self.render_file(path, file))
            .collect()
    }

    fn preview_files(&self) -> idlpack_codegen::Result<Vec<PreviewFile>> {
        Ok(self
            .render_all()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.render(),
            })
            .collect())
    }

    /// Render and write each file in turn.
    ///
    /// A rendering error aborts the run. A write error aborts it too, unless
    /// `keep_going` is set, in which case it is recorded and the next file is
    /// attempted.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for (path, file) in &self.package.files {
            let declaration = self
                .render_file(path, file)
                .wrap_err_with(|| format!("failed to generate declarations for '{}'", path))?;

            match declaration.write(output_dir) {
                Ok(written) => {
                    info!(path = %written.display(), "wrote declarations");
                    result.written.push(written);
                }
                Err(err) if self.keep_going => {
                    let target = declaration.path(output_dir);
                    let reason = format!("{:#}", err);
                    warn!(path = %target.display(), error = %reason, "skipping file");
                    result.failed.push((target, reason));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(result)
    }
}

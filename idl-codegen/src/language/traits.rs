//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use idlpack_ir::{BasicKind, NamedRef, Package, Type};

use crate::{Error, ImportCollector, Result};

/// Trait for language-specific declaration emitters.
///
/// Implement this trait to add support for emitting declarations in a new
/// language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files whose write failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// The file currently being emitted.
///
/// Passed explicitly to everything that needs to know where a declaration
/// will land. Lives no longer than the emission of that one file.
#[derive(Debug, Clone, Copy)]
pub struct FileScope<'a> {
    pub package: &'a Package,
    /// Relative path of the source file.
    pub file: &'a str,
}

impl<'a> FileScope<'a> {
    pub fn new(package: &'a Package, file: &'a str) -> Self {
        Self { package, file }
    }

    /// Whether `name` is declared in this file.
    pub fn declares(&self, name: &str) -> bool {
        self.package.home_file(name) == Some(self.file)
    }
}

/// Target type text together with the imports it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedType {
    pub text: String,
    pub imports: ImportCollector,
}

/// Trait for mapping field shapes to language-specific type text.
///
/// Implementors supply the spelling of each shape; the traversal, pointer
/// elision and import bookkeeping are shared.
pub trait TypeMapper {
    /// Spelling of a primitive, or `None` when the language has no
    /// counterpart.
    fn map_basic(&self, kind: BasicKind) -> Option<&'static str>;

    /// Spelling of an associative map from already-mapped parts.
    fn map_map(&self, key: &str, elem: &str) -> String;

    /// Spelling of a sequence from an already-mapped element.
    fn map_slice(&self, elem: &str) -> String;

    /// Spelling of a member of a foreign package.
    fn map_qualified(&self, alias: &str, name: &str) -> String {
        format!("{}.{}", alias, name)
    }

    /// Map a type, returning its text and the imports it needs.
    fn map_type(&self, ty: &Type, scope: &FileScope<'_>) -> Result<MappedType> {
        let mut imports = ImportCollector::new();
        let text = self.render_type(ty, scope, &mut imports)?;
        Ok(MappedType { text, imports })
    }

    /// Map a type, recording the imports it needs into `imports`.
    fn render_type(
        &self,
        ty: &Type,
        scope: &FileScope<'_>,
        imports: &mut ImportCollector,
    ) -> Result<String> {
        match ty {
            Type::Basic(kind) => self
                .map_basic(*kind)
                .map(str::to_string)
                .ok_or(Error::UnsupportedBasic { kind: *kind }),
            Type::Named(named) => self.render_named(named, scope, imports),
            Type::Map { key, elem } => {
                let key = self.render_type(key, scope, imports)?;
                let elem = self.render_type(elem, scope, imports)?;
                Ok(self.map_map(&key, &elem))
            }
            Type::Pointer(elem) => self.render_type(elem, scope, imports),
            Type::Slice(elem) => {
                let elem = self.render_type(elem, scope, imports)?;
                Ok(self.map_slice(&elem))
            }
            Type::Struct(_) => Err(Error::UnsupportedShape {
                shape: ty.shape_name(),
            }),
        }
    }

    /// Map a reference to a declared type.
    fn render_named(
        &self,
        named: &NamedRef,
        scope: &FileScope<'_>,
        imports: &mut ImportCollector,
    ) -> Result<String> {
        let package = scope.package;
        match &named.package {
            Some(path) if !package.is_local(named) => {
                let alias = imports.add_foreign(path, package.package_name(path));
                Ok(self.map_qualified(alias, &named.name))
            }
            _ => {
                match package.home_file(&named.name) {
                    None => {
                        return Err(Error::UnknownMember {
                            name: named.name.clone(),
                        });
                    }
                    Some(home) if home != scope.file => imports.add_local(&named.name),
                    Some(_) => {}
                }
                Ok(named.name.clone())
            }
        }
    }
}

//! Import bookkeeping and resolution.

use std::collections::BTreeSet;

use idlpack_core::relative_module;
use idlpack_ir::Package;
use indexmap::IndexMap;

use crate::{Error, FileScope, Result};

/// Tracks the references a file makes to declarations it does not contain.
///
/// Local references are member names of the current package and are kept
/// sorted, so import lines come out in a stable order. Foreign references map
/// a package path to the alias it is imported under; the first alias recorded
/// for a path is kept.
///
/// # Example
///
/// ```
/// use idlpack_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_local("Tag");
/// imports.add_local("Region");
/// imports.add_local("Tag");
///
/// let names: Vec<&str> = imports.locals().collect();
/// assert_eq!(names, vec!["Region", "Tag"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCollector {
    locals: BTreeSet<String>,
    foreign: IndexMap<String, String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference to a member declared in another file of the package.
    pub fn add_local(&mut self, name: &str) {
        if !self.locals.contains(name) {
            self.locals.insert(name.to_string());
        }
    }

    /// Record a reference to a foreign package, returning the alias in use
    /// for it.
    pub fn add_foreign(&mut self, package: &str, alias: &str) -> &str {
        self.foreign
            .entry(package.to_string())
            .or_insert_with(|| alias.to_string())
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.locals.extend(other.locals.iter().cloned());
        for (package, alias) in &other.foreign {
            self.add_foreign(package, alias);
        }
    }

    /// Check if a local member is referenced.
    pub fn has_local(&self, name: &str) -> bool {
        self.locals.contains(name)
    }

    /// The alias recorded for a foreign package.
    pub fn foreign_alias(&self, package: &str) -> Option<&str> {
        self.foreign.get(package).map(String::as_str)
    }

    /// Referenced local members, sorted by name.
    pub fn locals(&self) -> impl Iterator<Item = &str> {
        self.locals.iter().map(String::as_str)
    }

    /// Referenced foreign packages as `(path, alias)`, in first-seen order.
    pub fn foreign(&self) -> impl Iterator<Item = (&str, &str)> {
        self.foreign.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty() && self.foreign.is_empty()
    }
}

/// A resolved import of a local member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImport {
    /// The imported member.
    pub name: String,
    /// Module specifier relative to the importing file.
    pub module: String,
}

/// Resolve the module specifier for a member of `package`, as seen from
/// `from_file` (a path relative to the same root).
pub fn resolve_local(package: &Package, from_file: &str, name: &str) -> Result<LocalImport> {
    let home = package
        .home_file(name)
        .ok_or_else(|| Error::UnknownMember {
            name: name.to_string(),
        })?;
    let module = relative_module(from_file, home).ok_or_else(|| Error::RelativePath {
        from: from_file.to_string(),
        to: home.to_string(),
    })?;
    Ok(LocalImport {
        name: name.to_string(),
        module,
    })
}

/// Resolve every local reference recorded in `imports` for the file in
/// `scope`, sorted by member name.
pub fn resolve_locals(scope: &FileScope<'_>, imports: &ImportCollector) -> Result<Vec<LocalImport>> {
    imports
        .locals()
        .map(|name| resolve_local(scope.package, scope.file, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use idlpack_ir::{BasicKind, Enum, File, Member, Position, Struct, StructType, Type};

    use super::*;

    fn package() -> Package {
        let color = Member::Enum(Enum {
            name: "Color".to_string(),
            pos: Position::new("types/color.idl", 1),
            values: vec!["Red".to_string()],
        });
        let tag = Member::Struct(Struct {
            name: "Tag".to_string(),
            pos: Position::new("storage/tag.idl", 1),
            ty: StructType::new(vec![idlpack_ir::Field::new(
                "Key",
                Type::basic(BasicKind::String),
            )]),
            options: vec![idlpack_ir::PropertyOptions::new("key")],
        });
        Package::new("storage", "acme.dev/storage")
            .with_file(File::new("types/color.idl").with_member(color))
            .with_file(File::new("storage/tag.idl").with_member(tag))
    }

    #[test]
    fn test_add_local_deduplicates() {
        let mut imports = ImportCollector::new();
        imports.add_local("Tag");
        imports.add_local("Tag");

        assert!(imports.has_local("Tag"));
        assert_eq!(imports.locals().count(), 1);
    }

    #[test]
    fn test_first_foreign_alias_wins() {
        let mut imports = ImportCollector::new();
        assert_eq!(imports.add_foreign("acme.dev/core", "core"), "core");
        assert_eq!(imports.add_foreign("acme.dev/core", "other"), "core");
        assert_eq!(imports.foreign_alias("acme.dev/core"), Some("core"));
        assert_eq!(imports.foreign().count(), 1);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut refs = ImportCollector::new();
        refs.add_local("Tag");
        refs.add_foreign("acme.dev/core", "core");

        let mut file = ImportCollector::new();
        file.merge(&refs);
        let once = file.clone();
        file.merge(&refs);

        assert_eq!(file, once);
    }

    #[test]
    fn test_resolve_local() {
        let pkg = package();
        let import = resolve_local(&pkg, "storage/bucket.idl", "Color").unwrap();
        assert_eq!(import.name, "Color");
        assert_eq!(import.module, "../types/color");

        let import = resolve_local(&pkg, "storage/bucket.idl", "Tag").unwrap();
        assert_eq!(import.module, "./tag");
    }

    #[test]
    fn test_resolve_unknown_member() {
        let pkg = package();
        let err = resolve_local(&pkg, "storage/bucket.idl", "Missing").unwrap_err();
        assert!(matches!(err, Error::UnknownMember { name } if name == "Missing"));
    }

    #[test]
    fn test_resolve_outside_root() {
        let pkg = package();
        let err = resolve_local(&pkg, "../bucket.idl", "Tag").unwrap_err();
        assert!(matches!(err, Error::RelativePath { .. }));
    }

    #[test]
    fn test_resolve_locals_sorted() {
        let pkg = package();
        let mut imports = ImportCollector::new();
        imports.add_local("Tag");
        imports.add_local("Color");

        let scope = FileScope::new(&pkg, "index.idl");
        let resolved = resolve_locals(&scope, &imports).unwrap();
        assert_eq!(
            resolved,
            vec![
                LocalImport {
                    name: "Color".to_string(),
                    module: "./types/color".to_string(),
                },
                LocalImport {
                    name: "Tag".to_string(),
                    module: "./storage/tag".to_string(),
                },
            ]
        );
    }
}

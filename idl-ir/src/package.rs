//! Packages and files.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Member, NamedRef, Type};

/// A source file: its members in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    /// Path relative to the package root.
    pub path: String,
    pub members: IndexMap<String, Member>,
}

impl File {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            members: IndexMap::new(),
        }
    }

    /// Append a member, keeping declaration order.
    pub fn push(&mut self, member: Member) {
        self.members.insert(member.name().to_string(), member);
    }

    /// Builder-style [`File::push`].
    pub fn with_member(mut self, member: Member) -> Self {
        self.push(member);
        self
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A package this package refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Short name, used as the import alias.
    pub name: String,
    /// Underlying shapes of the dependency's named types.
    #[serde(default)]
    pub types: IndexMap<String, Type>,
}

/// A compilation unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
    pub name: String,
    /// Import path identifying the package.
    pub path: String,
    /// Files keyed by relative path, in load order.
    pub files: IndexMap<String, File>,
    /// Member name to the relative path of its declaring file.
    pub member_files: HashMap<String, String>,
    /// Underlying shapes of this package's named types.
    pub types: IndexMap<String, Type>,
    /// Foreign packages keyed by import path.
    pub dependencies: IndexMap<String, Dependency>,
}

impl Package {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add a file, registering its members' home file and underlying types.
    ///
    /// Explicit entries already in `types` are not overwritten.
    pub fn insert_file(&mut self, file: File) {
        for member in file.members() {
            self.member_files
                .insert(member.name().to_string(), file.path.clone());
            if let Some(underlying) = member.underlying() {
                self.types
                    .entry(member.name().to_string())
                    .or_insert(underlying);
            }
        }
        self.files.insert(file.path.clone(), file);
    }

    /// Builder-style [`Package::insert_file`].
    pub fn with_file(mut self, file: File) -> Self {
        self.insert_file(file);
        self
    }

    /// Register a foreign package.
    pub fn with_dependency(mut self, path: impl Into<String>, dependency: Dependency) -> Self {
        self.dependencies.insert(path.into(), dependency);
        self
    }

    /// The relative path of the file declaring `member`.
    pub fn home_file(&self, member: &str) -> Option<&str> {
        self.member_files.get(member).map(String::as_str)
    }

    /// Whether `named` refers to this package.
    pub fn is_local(&self, named: &NamedRef) -> bool {
        match &named.package {
            None => true,
            Some(path) => *path == self.path,
        }
    }

    /// The underlying shape of a named type, local or foreign.
    pub fn underlying(&self, named: &NamedRef) -> Option<&Type> {
        if self.is_local(named) {
            return self.types.get(&named.name);
        }
        named
            .package
            .as_ref()
            .and_then(|path| self.dependencies.get(path))
            .and_then(|dep| dep.types.get(&named.name))
    }

    /// The short name of a foreign package.
    ///
    /// Falls back to the last segment of the import path when the package is
    /// not listed in `dependencies`.
    pub fn package_name<'a>(&'a self, path: &'a str) -> &'a str {
        match self.dependencies.get(path) {
            Some(dep) if !dep.name.is_empty() => &dep.name,
            _ => path.rsplit('/').next().unwrap_or(path),
        }
    }

    /// Total number of members across all files.
    pub fn member_count(&self) -> usize {
        self.files.values().map(File::len).sum()
    }
}

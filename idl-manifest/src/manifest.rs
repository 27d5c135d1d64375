use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use idlpack_ir::Package;

use crate::{
    CodegenConfig, Error, Result,
    error::SourceContext,
    lower::lower,
    schema::Schema,
};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "idl.toml";

/// A loaded package manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Where the manifest was read from, if it came from disk.
    pub path: Option<PathBuf>,
    pub package: Package,
    pub codegen: CodegenConfig,
}

impl Manifest {
    /// Open and parse a manifest file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut manifest = Self::from_str_with_filename(&content, &path.display().to_string())?;
        manifest.path = Some(path.to_path_buf());
        Ok(manifest)
    }

    /// Parse a manifest from a string with a custom filename for error
    /// reporting. The filename's extension selects the format.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let schema: Schema = if is_json(filename) {
            serde_json::from_str(content).map_err(|e| ctx.json_error(e))?
        } else {
            toml::from_str(content).map_err(|e| ctx.toml_error(e))?
        };

        let codegen = schema.codegen.clone();
        let package = lower(schema, &ctx)?;
        Ok(Self {
            path: None,
            package,
            codegen,
        })
    }

    /// The manifest's directory, against which relative paths resolve.
    pub fn root(&self) -> &Path {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE)
    }
}

fn is_json(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

//! Generated `.ts` declaration file.

use std::path::{Path, PathBuf};

use idlpack_core::{GeneratedFile, output_path};

/// The declarations generated for one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationTs {
    source: String,
    content: String,
}

impl DeclarationTs {
    pub const EXTENSION: &'static str = "ts";

    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }

    /// Relative path of the source file this was generated from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Path relative to the output root.
    pub fn relative_path(&self) -> PathBuf {
        output_path(&self.source, Self::EXTENSION)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for DeclarationTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_extension_is_replaced() {
        let file = DeclarationTs::new("storage/bucket.idl", "");
        assert_eq!(file.relative_path(), PathBuf::from("storage/bucket.ts"));
        assert_eq!(
            file.path(Path::new("out")),
            PathBuf::from("out/storage/bucket.ts")
        );
    }

    #[test]
    fn test_write_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("types.ts");
        fs::write(&target, "stale content that is longer than the new one").unwrap();

        let written = DeclarationTs::new("types.idl", "export type Id = string;\n\n")
            .write(temp.path())
            .unwrap();

        assert_eq!(written, target);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "export type Id = string;\n\n"
        );
    }
}

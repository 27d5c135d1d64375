use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories and truncating
/// whatever was there before.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("greeting.ts")
        }

        fn render(&self) -> String {
            "export let greeting: string = \"hi\";\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_error_names_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("out.ts"), "x").unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let path = Greeting.write(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("nested").join("greeting.ts"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export let greeting: string = \"hi\";\n"
        );
    }
}

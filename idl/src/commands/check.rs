use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlpack_codegen_typescript::{Generator, LanguageCodegen};
use idlpack_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to idl.toml (defaults to ./idl.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        // Emission errors only surface while rendering.
        let generator = Generator::from_manifest(&manifest);
        let files = generator.preview().unwrap_or_exit();

        let package = &manifest.package;
        println!("✓ {} is valid\n", self.config.display());
        println!("  {} ({})", package.name, package.path);

        let members = package.member_count();
        println!(
            "  {} member{} in {} file{}",
            members,
            if members == 1 { "" } else { "s" },
            package.files.len(),
            if package.files.len() == 1 { "" } else { "s" }
        );
        println!("  {} declarations:", generator.language());
        for file in &files {
            println!("    {}", file.path);
        }

        Ok(())
    }
}

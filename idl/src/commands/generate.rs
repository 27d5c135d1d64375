use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use idlpack_codegen_typescript::{Generator, LanguageCodegen};
use idlpack_manifest::{MANIFEST_FILE, Manifest};
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to idl.toml (defaults to ./idl.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep writing the remaining files when one cannot be written
    #[arg(long)]
    pub keep_going: bool,

    /// Override the runtime library module specifier
    #[arg(long)]
    pub runtime_module: Option<String>,

    /// Override the namespace the runtime library is imported as
    #[arg(long)]
    pub runtime_alias: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        let mut config = manifest.codegen.clone();
        if let Some(module) = &self.runtime_module {
            config = config.with_runtime_module(module);
        }
        if let Some(alias) = &self.runtime_alias {
            config = config.with_runtime_alias(alias);
        }
        if let Some(problem) = config.problem() {
            bail!("invalid codegen settings: {}", problem);
        }
        debug!(
            runtime_module = %config.runtime_module,
            runtime_alias = %config.runtime_alias,
            indent = config.indent,
            "codegen settings"
        );

        let generator = Generator::new(&manifest.package)
            .with_config(config)
            .keep_going(self.keep_going);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &manifest)
        }
    }

    fn run_generation(&self, generator: &Generator, manifest: &Manifest) -> Result<()> {
        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate declarations")?;

        let package = &manifest.package;
        println!("{} ({})", package.name, package.path);
        println!();

        println!("Generated ({}):", result.written.len());
        for path in &result.written {
            println!("  + {}", path.display());
        }

        if !result.is_success() {
            println!();
            println!("Failed ({}):", result.failed.len());
            for (path, reason) in &result.failed {
                println!("  ! {}: {}", path.display(), reason);
            }
            bail!("{} file(s) could not be written", result.failed.len());
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview().unwrap_or_exit();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!(
            "{} .{} files would be generated",
            files.len(),
            generator.file_extension()
        );

        Ok(())
    }
}

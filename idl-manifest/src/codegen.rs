use serde::Deserialize;

/// Generator settings from the `[codegen]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Module providing the resource base class.
    pub runtime_module: String,
    /// Namespace the runtime module is imported under.
    pub runtime_alias: String,
    /// Spaces per indentation level.
    pub indent: u8,
}

impl CodegenConfig {
    pub const DEFAULT_RUNTIME_MODULE: &'static str = "@idlpack/runtime";
    pub const DEFAULT_RUNTIME_ALIAS: &'static str = "runtime";
    pub const DEFAULT_INDENT: u8 = 4;

    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    pub fn with_runtime_alias(mut self, alias: impl Into<String>) -> Self {
        self.runtime_alias = alias.into();
        self
    }

    /// Why the settings cannot be used, if they cannot.
    pub fn problem(&self) -> Option<String> {
        if self.runtime_module.is_empty() {
            return Some("codegen.runtime_module must not be empty".to_string());
        }
        if !is_identifier(&self.runtime_alias) {
            return Some(format!(
                "codegen.runtime_alias '{}' is not a valid identifier",
                self.runtime_alias
            ));
        }
        if self.indent == 0 || self.indent > 8 {
            return Some(format!(
                "codegen.indent must be between 1 and 8, got {}",
                self.indent
            ));
        }
        None
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_module: Self::DEFAULT_RUNTIME_MODULE.to_string(),
            runtime_alias: Self::DEFAULT_RUNTIME_ALIAS.to_string(),
            indent: Self::DEFAULT_INDENT,
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

//! TypeScript type mapper implementation.

use idlpack_codegen::TypeMapper;
use idlpack_ir::BasicKind;

/// TypeScript type mapper implementation.
///
/// Only the primitives with an exact TypeScript counterpart are accepted;
/// integer kinds have none and are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_basic(&self, kind: BasicKind) -> Option<&'static str> {
        match kind {
            BasicKind::Bool => Some("boolean"),
            BasicKind::String => Some("string"),
            BasicKind::Float64 => Some("number"),
            _ => None,
        }
    }

    fn map_map(&self, key: &str, elem: &str) -> String {
        format!("{{[key: {}]: {}}}", key, elem)
    }

    fn map_slice(&self, elem: &str) -> String {
        format!("{}[]", elem)
    }
}

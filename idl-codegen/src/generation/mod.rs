//! Output management: import tracking and resolution.

mod imports;

pub use imports::{ImportCollector, LocalImport, resolve_local, resolve_locals};

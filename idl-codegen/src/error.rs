//! Emission errors.
//!
//! Every variant is a breach of the contract between the loader and the
//! emitter: the input model was supposed to make it impossible. None of them
//! is recoverable, and a generation run stops at the first one.

use idlpack_ir::BasicKind;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unrecognized basic type '{kind}'")]
    #[diagnostic(
        code(idlpack::unsupported_basic),
        help("only bool, string and float64 have a target representation")
    )]
    UnsupportedBasic { kind: BasicKind },

    #[error("unrecognized {shape} type in a type position")]
    #[diagnostic(code(idlpack::unsupported_shape))]
    UnsupportedShape { shape: &'static str },

    #[error("enum '{name}' has no values")]
    #[diagnostic(code(idlpack::empty_enum))]
    EmptyEnum { name: String },

    #[error("embedded field '{field}' of '{member}' does not name a struct")]
    #[diagnostic(code(idlpack::embedded_not_struct))]
    EmbeddedNotStruct { member: String, field: String },

    #[error("'{member}' has {options} property options, which do not line up with its fields")]
    #[diagnostic(code(idlpack::options_misaligned))]
    OptionsMisaligned { member: String, options: usize },

    #[error("'{name}' is not declared in any file of the package")]
    #[diagnostic(code(idlpack::unknown_member))]
    UnknownMember { name: String },

    #[error("cannot compute an import of '{to}' from '{from}'")]
    #[diagnostic(
        code(idlpack::relative_path),
        help("both files must live under the same output root")
    )]
    RelativePath { from: String, to: String },

    #[error("foreign imports not yet supported: import={alias} pkg={package}")]
    #[diagnostic(code(idlpack::foreign_import))]
    ForeignImport { alias: String, package: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::UnsupportedBasic {
            kind: BasicKind::Int64,
        };
        assert_eq!(err.to_string(), "unrecognized basic type 'int64'");

        let err = Error::ForeignImport {
            alias: "core".to_string(),
            package: "acme.dev/core".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "foreign imports not yet supported: import=core pkg=acme.dev/core"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let err = Error::EmptyEnum {
            name: "Color".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("idlpack::empty_enum"));
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0).then(|| {
            SourceSpan::new(
                SourceOffset::from_location(self.src, source.line(), source.column()),
                0,
            )
        });
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` if it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: needle.and_then(|n| self.find(n, 0)),
            message: message.into(),
        })
    }

    pub fn duplicate_member(&self, name: &str, first_file: &str, second_file: &str) -> Box<Error> {
        let first_span = self.find_quoted(name, 0);
        let second_span = first_span.and_then(|s| self.find_quoted(name, s.offset() + s.len()));
        Box::new(Error::DuplicateMember {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.to_string(),
            first_file: first_file.to_string(),
            second_file: second_file.to_string(),
        })
    }

    pub fn duplicate_file(&self, path: &str) -> Box<Error> {
        let first = self.find_quoted(path, 0);
        let span = first.and_then(|s| self.find_quoted(path, s.offset() + s.len()));
        Box::new(Error::DuplicateFile {
            src: self.named_source(),
            span,
            path: path.to_string(),
        })
    }

    /// Locate `"needle"` at or after `from`, spanning the text inside the
    /// quotes.
    fn find_quoted(&self, needle: &str, from: usize) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", needle);
        let pos = self.src.get(from..)?.find(&quoted)?;
        Some(SourceSpan::from((from + pos + 1, needle.len())))
    }

    fn find(&self, needle: &str, from: usize) -> Option<SourceSpan> {
        self.find_quoted(needle, from).or_else(|| {
            let pos = self.src.get(from..)?.find(needle)?;
            Some(SourceSpan::from((from + pos, needle.len())))
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(idlpack::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(idlpack::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("member '{name}' is declared in both '{first_file}' and '{second_file}'")]
    #[diagnostic(
        code(idlpack::duplicate_member),
        help("member names must be unique across the whole package")
    )]
    DuplicateMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
        first_file: String,
        second_file: String,
    },

    #[error("file '{path}' is listed more than once")]
    #[diagnostic(code(idlpack::duplicate_file))]
    DuplicateFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("listed again here")]
        span: Option<SourceSpan>,
        path: String,
    },

    #[error("{message}")]
    #[diagnostic(code(idlpack::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the source regions it points at.

// the derive refers to this crate by name
#[cfg(test)]
extern crate self as sym_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while lexing, parsing, evaluating, or transforming
/// an expression.
///
/// This trait is usually derived with `sym_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the trait object as [`Any`], so the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message of this error, without any source context.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised on trees that were not parsed from text (for example, the result of a
/// derivative) carry no spans.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that points at no source region.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Shifts every span right by `offset`, for an error raised on a slice of a larger input.
    pub fn offset_spans(mut self, offset: usize) -> Self {
        for span in &mut self.spans {
            span.start += offset;
            span.end += offset;
        }
        self
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Prints the report of this error to stderr, highlighting the given source.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use sym_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unexpected token",
        labels = ["this one", ""],
        help = "remove it",
    )]
    struct Unexpected;

    #[derive(Debug, ErrorKind)]
    #[error(message = format!("unknown variable `{}`", name))]
    struct Unknown {
        name: String,
    }

    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_contains_message_and_label() {
        let err = Error::new(vec![2..3], Unexpected);
        let out = render(&err, "1 ) 2");
        assert!(out.contains("unexpected token"));
        assert!(out.contains("this one"));
        assert!(out.contains("remove it"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::unspanned(Unexpected);
        let out = render(&err, "");
        assert!(out.contains("unexpected token"));
    }

    #[test]
    fn downcast() {
        let err = Error::unspanned(Unknown { name: "y".to_string() });
        assert!(err.is::<Unknown>());
        assert!(!err.is::<Unexpected>());
        assert_eq!(err.downcast_ref::<Unknown>().map(|k| k.name.as_str()), Some("y"));
        assert_eq!(err.to_string(), "unknown variable `y`");
    }

    #[test]
    fn offset() {
        let err = Error::new(vec![0..1, 4..6], Unexpected).offset_spans(3);
        assert_eq!(err.spans, vec![3..4, 7..9]);
    }
}

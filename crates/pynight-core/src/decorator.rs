//! Function wrapping ("decorators")
//!
//! [`log_paragraphs`] takes a string transform and hands back a replacement
//! that wraps its first argument in `<p>` markup before forwarding it. The
//! original function is untouched; the wrapper adds behaviour around it.
//!
//! Tracing from the wrapper is unconditional. It does not consult the demo's
//! debug flag, and it is emitted under [`DECORATOR_TARGET`], which
//! [`logging::filter`](crate::logging::filter) always enables at `info` on top
//! of whatever `RUST_LOG` asks for.

use crate::function::UnaryFunction;
use std::cell::Cell;

/// Tracing target for the wrapper's definition and call traces
pub const DECORATOR_TARGET: &str = "pynight::decorator";

/// Wrap `text` in an HTML paragraph
#[inline]
#[must_use]
pub fn paragraph(text: &str) -> String {
    format!("<p>{text}</p>")
}

/// Append the demo's exclamation
#[must_use]
pub fn whoa(text: &str) -> String {
    format!("{text}. Whoaaaaa cool.")
}

/// Uppercase everything
#[must_use]
pub fn shout(text: &str) -> String {
    text.to_uppercase()
}

/// A string transform wrapped by [`log_paragraphs`]
#[derive(Debug)]
pub struct Decorated<F> {
    name: &'static str,
    inner: F,
    calls: Cell<usize>,
}

impl<F> Decorated<F>
where
    F: Fn(&str) -> String,
{
    /// Invoke the wrapper
    ///
    /// Only the first argument is used; the rest are accepted and ignored.
    /// An empty argument list behaves like a single empty string.
    pub fn call(&self, args: &[&str]) -> String {
        let first = args.first().copied().unwrap_or_default();
        self.calls.set(self.calls.get() + 1);
        tracing::info!(target: DECORATOR_TARGET, function = self.name, input = first, "calling decorated function");
        (self.inner)(&paragraph(first))
    }

    /// Name the wrapper was registered under
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of invocations so far
    #[inline]
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Unwrap, returning the original function
    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<'a, 'b, F> UnaryFunction<&'a [&'b str]> for Decorated<F>
where
    F: Fn(&str) -> String,
{
    type Output = String;

    fn call(&self, input: &'a [&'b str]) -> String {
        Decorated::call(self, input)
    }
}

/// Decorate `function` so its first argument is paragraph-wrapped
///
/// Logs once before and once after building the wrapper, then once per call.
pub fn log_paragraphs<F>(name: &'static str, function: F) -> Decorated<F>
where
    F: Fn(&str) -> String,
{
    tracing::info!(target: DECORATOR_TARGET, function = name, "decorating function");
    let decorated = Decorated {
        name,
        inner: function,
        calls: Cell::new(0),
    };
    tracing::info!(target: DECORATOR_TARGET, function = name, "decorated function ready");
    decorated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pynight_test_utils::LogCapture;
    use tracing::Level;

    fn recording(capture: &LogCapture) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .finish()
    }

    #[test]
    fn paragraph_wraps() {
        assert_eq!(paragraph("hi"), "<p>hi</p>");
    }

    #[test]
    fn whoa_end_to_end() {
        let decorated = log_paragraphs("whoa", whoa);
        assert_eq!(decorated.call(&["X"]), "<p>X</p>. Whoaaaaa cool.");
    }

    #[test]
    fn demo_sentence() {
        let decorated = log_paragraphs("whoa", whoa);
        assert_eq!(
            decorated.call(&["Look at this string."]),
            "<p>Look at this string.</p>. Whoaaaaa cool."
        );
    }

    #[test]
    fn extra_arguments_ignored() {
        let decorated = log_paragraphs("shout", shout);
        assert_eq!(decorated.call(&["a", "b", "c"]), "<P>A</P>");
    }

    #[test]
    fn empty_arguments() {
        let decorated = log_paragraphs("identity", |s: &str| s.to_string());
        assert_eq!(decorated.call(&[]), "<p></p>");
    }

    #[test]
    fn counts_calls() {
        let decorated = log_paragraphs("whoa", whoa);
        assert_eq!(decorated.calls(), 0);
        decorated.call(&["one"]);
        decorated.call(&["two"]);
        assert_eq!(decorated.calls(), 2);
        assert_eq!(decorated.name(), "whoa");
    }

    #[test]
    fn original_function_unchanged() {
        let decorated = log_paragraphs("whoa", whoa);
        let original = decorated.into_inner();
        assert_eq!(original("X"), "X. Whoaaaaa cool.");
    }

    #[test]
    fn usable_as_unary_function() {
        let decorated = log_paragraphs("shout", shout);
        let args: &[&str] = &["quiet"];
        assert_eq!(UnaryFunction::call(&decorated, args), "<P>QUIET</P>");
    }

    #[test]
    fn traces_twice_on_definition_and_once_per_call() {
        let capture = LogCapture::new();

        tracing::subscriber::with_default(recording(&capture), || {
            let decorated = log_paragraphs("whoa", whoa);
            assert_eq!(capture.count("decorating function"), 1);
            assert_eq!(capture.count("decorated function ready"), 1);
            assert_eq!(capture.count("calling decorated function"), 0);

            decorated.call(&["one"]);
            decorated.call(&["two", "ignored"]);
            decorated.call(&[]);
        });

        assert_eq!(capture.count("calling decorated function"), 3);
        assert_eq!(capture.count("decorating function"), 1);
        assert_eq!(capture.count("decorated function ready"), 1);
        assert_eq!(capture.count(DECORATOR_TARGET), 5);
    }

    #[test]
    fn definition_traces_precede_call_traces() {
        let capture = LogCapture::new();

        tracing::subscriber::with_default(recording(&capture), || {
            log_paragraphs("shout", shout).call(&["hey"]);
        });

        let log = capture.contents();
        let ready = log.find("decorated function ready").unwrap();
        let called = log.find("calling decorated function").unwrap();
        assert!(log.find("decorating function").unwrap() < ready);
        assert!(ready < called);
        assert!(log.contains("input=\"hey\""));
    }
}

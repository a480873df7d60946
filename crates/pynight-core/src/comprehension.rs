//! Comprehensions: building sequences and mappings from iterators
//!
//! Each function here is a single iterator chain: a source, an optional
//! filter, a transform, and a `collect`.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::ops::Range;

/// `item` repeated `n` times; negative `n` gives an empty vector
pub fn duplicate<T: Clone>(item: &T, n: i64) -> Vec<T> {
    (0..n).map(|_| item.clone()).collect()
}

/// Named stand-ins for the legacy variant's optional and variadic parameters
///
/// None of these change what [`duplicate_with`] returns; they only control
/// what it prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateOptions {
    /// Printed first, when present
    pub prompt: Option<String>,
    /// Printed after `prompt`, when present
    pub second_prompt: Option<String>,
    /// Extra positional values, echoed one per line when `verbose`
    pub extra_args: Vec<String>,
    /// Extra named values, echoed as `key=value` when `verbose`
    pub extra_kwargs: BTreeMap<String, String>,
    /// Echo the extras
    pub verbose: bool,
}

impl DuplicateOptions {
    /// No prompts, no extras
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With first prompt
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// With second prompt
    #[must_use]
    pub fn with_second_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.second_prompt = Some(prompt.into());
        self
    }

    /// Append an extra positional value
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Add an extra named value
    #[must_use]
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_kwargs.insert(key.into(), value.into());
        self
    }

    /// Echo extras
    #[inline]
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// [`duplicate`] with prompts and extras printed to `out`
///
/// # Errors
/// Only if writing to `out` fails.
pub fn duplicate_with<T, W>(item: &T, n: i64, options: &DuplicateOptions, out: &mut W) -> io::Result<Vec<T>>
where
    T: Clone,
    W: Write,
{
    for prompt in [&options.prompt, &options.second_prompt].into_iter().flatten() {
        writeln!(out, "{prompt}")?;
    }
    if options.verbose {
        for arg in &options.extra_args {
            writeln!(out, "{arg}")?;
        }
        for (key, value) in &options.extra_kwargs {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(duplicate(item, n))
}

/// Squares of every value in `range`
pub fn squares(range: Range<i64>) -> Vec<i64> {
    range.map(|n| n * n).collect()
}

/// Squares of the even values in `range`
pub fn even_squares(range: Range<i64>) -> Vec<i64> {
    range.filter(|n| n % 2 == 0).map(|n| n * n).collect()
}

/// `n -> n²` for every value in `range`
pub fn square_table(range: Range<i64>) -> BTreeMap<i64, i64> {
    range.map(|n| (n, n * n)).collect()
}

/// Each word mapped to its length in characters
pub fn lengths<'a, I>(words: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(|w| (w, w.chars().count())).collect()
}

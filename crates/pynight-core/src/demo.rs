//! The demonstration routine
//!
//! [`run`] walks through each section in teaching order and prints what it
//! finds to `out`. How much of it runs depends on [`Stage`].

use crate::comprehension::{duplicate, duplicate_with, even_squares, square_table, DuplicateOptions};
use crate::config::{DemoConfig, Stage};
use crate::decorator::{log_paragraphs, whoa};
use crate::error::DemoResult;
use crate::function::{caller, compose, plus_one, square, UnaryFunction};
use crate::mapping::{DefaultingMap, MappingLike};
use crate::scoped::read_file;
use crate::sequence::{SequenceLike, SequenceWrapper};
use std::io::Write;

/// Name of the context the code is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Started as a program
    Direct,
    /// Linked into someone else's program
    Library,
}

impl ExecutionContext {
    /// `__main__` when run directly, the crate name otherwise
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExecutionContext::Direct => "__main__",
            ExecutionContext::Library => env!("CARGO_CRATE_NAME"),
        }
    }
}

/// Run the demo only when started directly, then print the context name
///
/// # Errors
/// Whatever [`run`] returns.
pub fn entry_point<W: Write>(context: ExecutionContext, config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    if context == ExecutionContext::Direct {
        run(config, out)?;
    }
    writeln!(out, "{}", context.name())?;
    Ok(())
}

/// Run every section up to `config.stage`
///
/// # Errors
/// Write failures, and read failures from the scoped-read section, which are
/// passed through untouched.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    if config.debug {
        writeln!(out, "Debugged")?;
    }
    tracing::debug!(stage = %config.stage, "starting demo");

    first_class_functions(out)?;
    if config.stage >= Stage::Decorators {
        decorators(config, out)?;
        comprehensions(config, out)?;
    }
    if config.stage >= Stage::Full {
        if let Some(path) = &config.input_file {
            writeln!(out, "{}", read_file(path)?)?;
        }
        containers(out)?;
    } else if let Some(path) = &config.input_file {
        tracing::debug!(path = %path.display(), stage = %config.stage, "input file skipped below full stage");
    }
    Ok(())
}

fn first_class_functions<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "{}", caller(&square, 5))?;

    let square_of_plus_one = compose(square, plus_one);
    writeln!(out, "{}", square_of_plus_one.call(1))?;

    let plus_one_of_square = compose(plus_one, square);
    writeln!(out, "{}", plus_one_of_square.call(1))?;
    Ok(())
}

fn decorators<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    let cool = log_paragraphs("whoa", whoa);
    writeln!(out, "{}", cool.call(&[config.decorator_input.as_str()]))?;
    Ok(())
}

fn comprehensions<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    let item = config.duplicate_item.as_str();
    writeln!(out, "{:?}", duplicate(&item, config.duplicate_count))?;

    let options = DuplicateOptions::new().with_prompt(format!("How many {item}s? Two."));
    let pair = duplicate_with(&item, 2, &options, out)?;
    writeln!(out, "{pair:?}")?;

    writeln!(out, "{:?}", even_squares(0..10))?;
    writeln!(out, "{:?}", square_table(1..4))?;
    Ok(())
}

fn containers<W: Write>(out: &mut W) -> DemoResult<()> {
    let mut seq = SequenceWrapper::new(vec![1, 2, 3]);
    writeln!(out, "{}", seq.len())?;
    writeln!(out, "{}", seq.get(1)?)?;
    seq.set(0, 9)?;
    writeln!(out, "{seq}")?;

    let more = SequenceWrapper::new(vec![4, 5]);
    writeln!(out, "{:?}", &seq + &more)?;

    let mut map = DefaultingMap::new("DEFAULT".to_string());
    writeln!(out, "{}", map.lookup("b"))?;
    map.insert("a".to_string(), "5".to_string());
    writeln!(out, "{}", map.lookup("a"))?;
    writeln!(out, "{}", map.get_or("c", None))?;
    Ok(())
}

//! pynight: the demo from an evening intro-programming session
//!
//! Small, self-contained illustrations of introductory language features.
//!
//! # Core Concepts
//!
//! - [`compose`] and [`caller`]: functions as values
//! - [`log_paragraphs`]: wrapping a function to add behaviour around it
//! - [`read_file`] / [`ScopedResource`]: a handle released on every exit path
//! - [`duplicate`] and friends: iterator comprehensions
//! - [`SequenceWrapper`]: `[]` and `+` overloading
//! - [`DefaultingMap`]: a mapping that answers a default for missing keys
//!
//! # Example
//!
//! ```rust
//! use pynight_core::{compose, plus_one, square, UnaryFunction};
//!
//! let square_of_plus_one = compose(square, plus_one);
//! assert_eq!(square_of_plus_one.call(1), 4);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod comprehension;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod function;
pub mod logging;
pub mod mapping;
pub mod scoped;
pub mod sequence;

// Re-exports
pub use comprehension::{duplicate, duplicate_with, DuplicateOptions};
pub use config::{DemoConfig, Stage};
pub use decorator::{log_paragraphs, paragraph, Decorated};
pub use demo::{entry_point, run, ExecutionContext};
pub use error::{DemoError, DemoResult};
pub use function::{caller, compose, compose_all, plus_one, square, Composed, UnaryFunction};
pub use mapping::{DefaultingMap, MappingLike};
pub use scoped::{read_file, ScopedResource};
pub use sequence::{SequenceLike, SequenceWrapper};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

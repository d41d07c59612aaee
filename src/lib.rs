//! # ufuncgen: ufunc header generator
//!
//! Translates a small line-oriented DSL describing elementwise math
//! operations ("ufuncs") into C++ function objects for a numpy-like header
//! library.
//!
//! ## DSL
//!
//! ```text
//! # comment                  ignored
//! Math                       section banner in the declarations block
//! add(x1, x2)                opens an operation, arity taken from the parameters
//! cpp[x1 + x2]               emits the `_add` function object
//! eq[1 / x]                  binds the operation directly to an expression instead
//! Add arguments element-wise.  description trailing the declaration
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! line → Classifier → ParserContext → Emitter → output
//! ```
//!
//! - [`classifier`] maps each line to one [`LineKind`], using a fixed precedence.
//! - [`parser`] carries the open operation and the declaration buffer across lines.
//! - [`emitter`] renders C++ text; it never decides where the text goes.
//! - [`generator`] owns the writer: type definitions are written as they are
//!   produced, the declarations block once the input is exhausted.
//!
//! The output is a single pass artifact:
//!
//! ```text
//! preamble, type definitions (input order), declarations block (input order), namespace close
//! ```

pub mod ast;
pub mod classifier;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod parser;

// Re-exports
pub use ast::{Arity, Fragment};
pub use classifier::{classify, LineKind};
pub use config::GeneratorConfig;
pub use error::*;
pub use generator::{generate_file, generate_str, GenerationReport, Generator};

//! Output rendering
//!
//! Name conversion and spec-file text generation for the declaration list
//! produced by the converter.

mod name;
mod spec;

pub use name::{NameConverter, DEFAULT_PYTHON_VERSION};
pub use spec::SpecRenderer;

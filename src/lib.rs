//! argsof - Read the declared parameters of a JavaScript callable from its source text
//!
//! ```
//! use argsof::{Parameter, arguments_of};
//!
//! assert_eq!(
//!     arguments_of("(a, ...rest) => rest"),
//!     vec![Parameter::plain("a"), Parameter::rest("rest")]
//! );
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod file_utils;
pub mod output;
pub mod param;
pub mod shape;
pub mod string_utils;

pub use config::ShapeConfig;
pub use error::ReadError;
pub use extractor::{ArgumentsOf, Signature, SourceText, create};
pub use output::{OutputConfig, ParameterFormatter, print_json};
pub use param::Parameter;
pub use shape::Shape;

/// Extractor recognising every shape.
pub static ARGUMENTS_OF: ArgumentsOf = ArgumentsOf::new(ShapeConfig::all());

/// Extract parameters with [`ARGUMENTS_OF`].
pub fn arguments_of<C: SourceText + ?Sized>(callable: &C) -> Vec<Parameter> {
    ARGUMENTS_OF.extract(callable)
}

//! Parameter list extraction from callable source text
//!
//! [`ArgumentsOf`] holds a fixed [`ShapeConfig`] and nothing else, so one
//! instance can be shared freely between threads. Extraction never fails:
//! text that no enabled shape recognises produces an empty list.

use std::borrow::Cow;

use log::debug;
use serde::Serialize;

use crate::config::ShapeConfig;
use crate::param::{Parameter, parse_parameter_list};
use crate::shape::Shape;
use crate::string_utils::collapse_line_breaks;

/// Anything whose declaration text can be inspected.
///
/// Implemented for string types; implement it for your own types to hand
/// them to [`ArgumentsOf::extract`] directly.
pub trait SourceText {
    /// The full declaration, body included.
    fn source_text(&self) -> Cow<'_, str>;
}

impl SourceText for str {
    fn source_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SourceText for String {
    fn source_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl SourceText for Cow<'_, str> {
    fn source_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: SourceText + ?Sized> SourceText for &T {
    fn source_text(&self) -> Cow<'_, str> {
        (**self).source_text()
    }
}

/// Which shape matched and the parameters read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// `None` when no enabled shape recognised the text
    pub shape: Option<Shape>,
    pub parameters: Vec<Parameter>,
}

/// A parameter extractor bound to one shape configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentsOf {
    config: ShapeConfig,
}

impl ArgumentsOf {
    pub const fn new(config: ShapeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ShapeConfig {
        self.config
    }

    /// Extract the declared parameters of `callable`, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsof::{ArgumentsOf, Parameter, ShapeConfig};
    ///
    /// let extractor = ArgumentsOf::new(ShapeConfig::all());
    /// assert_eq!(
    ///     extractor.extract("function sum(a = 1, ...rest) { return a; }"),
    ///     vec![Parameter::defaulted("a"), Parameter::rest("rest")]
    /// );
    /// assert!(extractor.extract("not a callable").is_empty());
    /// ```
    pub fn extract<C: SourceText + ?Sized>(&self, callable: &C) -> Vec<Parameter> {
        self.inspect(callable).parameters
    }

    /// Report which enabled shape recognises `callable`, if any.
    pub fn matched_shape<C: SourceText + ?Sized>(&self, callable: &C) -> Option<Shape> {
        let source = callable.source_text();
        let line = collapse_line_breaks(&source);
        self.capture(&line).map(|(shape, _)| shape)
    }

    /// Extract parameters together with the shape that produced them.
    pub fn inspect<C: SourceText + ?Sized>(&self, callable: &C) -> Signature {
        let source = callable.source_text();
        let line = collapse_line_breaks(&source);

        match self.capture(&line) {
            Some((shape, raw)) => {
                debug!("matched {} shape, raw parameters {:?}", shape, raw);
                Signature {
                    shape: Some(shape),
                    parameters: parse_parameter_list(raw),
                }
            }
            None => {
                debug!("no enabled shape matched {:?}", self.config);
                Signature::default()
            }
        }
    }

    /// First enabled shape, in priority order, whose pattern captures.
    fn capture<'t>(&self, line: &'t str) -> Option<(Shape, &'t str)> {
        let line = line.trim_start();
        self.config
            .enabled_shapes()
            .find_map(|shape| shape.capture(line).map(|raw| (shape, raw)))
    }
}

impl Default for ArgumentsOf {
    fn default() -> Self {
        Self::new(ShapeConfig::all())
    }
}

/// Build an extractor. `None` enables every shape.
pub fn create(config: Option<ShapeConfig>) -> ArgumentsOf {
    ArgumentsOf::new(config.unwrap_or_else(ShapeConfig::all))
}

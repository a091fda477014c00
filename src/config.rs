//! Shape selection for an extractor.

use crate::shape::Shape;

/// Which callable shapes an extractor recognises.
///
/// Unset shapes are disabled: `ShapeConfig::default()` recognises nothing,
/// while [`ShapeConfig::all`] is what [`create`](crate::create) falls back to
/// when no configuration is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeConfig {
    /// Recognise arrow functions
    pub arrow: bool,
    /// Recognise class constructors
    pub class: bool,
    /// Recognise `function` declarations and expressions
    pub regular: bool,
}

impl ShapeConfig {
    /// Create a new config with every shape enabled.
    pub const fn all() -> Self {
        Self {
            arrow: true,
            class: true,
            regular: true,
        }
    }

    /// Create a new config with only `shape` enabled.
    pub fn only(shape: Shape) -> Self {
        Self::default().with(shape)
    }

    /// Return a copy with `shape` enabled as well.
    pub fn with(mut self, shape: Shape) -> Self {
        match shape {
            Shape::Class => self.class = true,
            Shape::Arrow => self.arrow = true,
            Shape::Regular => self.regular = true,
        }
        self
    }

    pub fn is_enabled(&self, shape: Shape) -> bool {
        match shape {
            Shape::Class => self.class,
            Shape::Arrow => self.arrow,
            Shape::Regular => self.regular,
        }
    }

    /// Enabled shapes, in matching priority order.
    pub fn enabled_shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        Shape::PRIORITY
            .into_iter()
            .filter(|shape| self.is_enabled(*shape))
    }

    /// Check if any shape is enabled.
    pub fn any_enabled(&self) -> bool {
        self.arrow || self.class || self.regular
    }
}

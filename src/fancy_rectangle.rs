//! Deferred base initialization.
//!
//! A `FancyRectangle` owns its `BaseShape` part through an explicit
//! [`BaseState`]. Constructing without a color leaves the base
//! uninitialized; the first `calculate_area()` call fills it in with
//! [`FALLBACK_COLOR`]. Once initialized the base never changes.

use crate::error::AttributeError;

pub const DEFAULT_BASE_COLOR: &str = "transparent";
pub const FALLBACK_COLOR: &str = "blue";

pub trait AreaCalculator {
    fn calculate_area(&mut self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseShape {
    color: String,
}

impl BaseShape {
    pub fn new(color: impl Into<String>) -> Self {
        let color = color.into();
        tracing::info!(color = %color, "BaseShape initialized");
        Self { color }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Default for BaseShape {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_COLOR)
    }
}

impl AreaCalculator for BaseShape {
    fn calculate_area(&mut self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseState {
    Uninitialized,
    Initialized(BaseShape),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FancyRectangle {
    pub width: f64,
    pub height: f64,
    base: BaseState,
}

impl FancyRectangle {
    /// Leaves the base part uninitialized.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            base: BaseState::Uninitialized,
        }
    }

    pub fn with_color(width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            base: BaseState::Initialized(BaseShape::new(color)),
        }
    }

    pub fn state(&self) -> &BaseState {
        &self.base
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.base, BaseState::Initialized(_))
    }

    pub fn color(&self) -> Result<&str, AttributeError> {
        match &self.base {
            BaseState::Initialized(base) => Ok(base.color()),
            BaseState::Uninitialized => Err(AttributeError::Missing {
                owner: "FancyRectangle",
                attribute: "color",
            }),
        }
    }

    pub fn ensure_initialized(&mut self) -> &BaseShape {
        if let BaseState::Uninitialized = self.base {
            let base = BaseShape::new(FALLBACK_COLOR);
            tracing::info!(
                color = FALLBACK_COLOR,
                "BaseShape initialized late from FancyRectangle::calculate_area"
            );
            self.base = BaseState::Initialized(base);
        }

        match &self.base {
            BaseState::Initialized(base) => base,
            BaseState::Uninitialized => unreachable!("base state was just initialized"),
        }
    }
}

impl AreaCalculator for FancyRectangle {
    fn calculate_area(&mut self) -> f64 {
        self.ensure_initialized();
        let area = self.width * self.height;
        tracing::debug!(width = self.width, height = self.height, area, "FancyRectangle area");
        area
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins between the plot area and the enclosing drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn validate(self) -> StoryResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StoryError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 40.0, 40.0, 20.0)
    }
}

/// Plot rectangle in surface pixel coordinates.
///
/// All chart geometry is authored inside this rectangle; the margins carry
/// axis labels and captions that hang off its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> StoryResult<Self> {
        if !viewport.is_valid() {
            return Err(StoryError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(StoryError::InvalidData(
                "margins leave no plot area".to_owned(),
            ));
        }

        Ok(Self {
            width,
            height,
            origin_x: margins.left,
            origin_y: margins.top,
        })
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }
}

/// One point in plot pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPx {
    pub x: f64,
    pub y: f64,
}

impl PointPx {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

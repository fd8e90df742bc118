use crate::core::PointPx;
use crate::error::{StoryError, StoryResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Channel-wise linear blend toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    pub fn validate(self) -> StoryResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StoryError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// Dash on/off lengths in pixels; `None` draws solid.
    pub dash: Option<(f64, f64)>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    pub fn validate(self) -> StoryResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(StoryError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StoryError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some((on, off)) = self.dash {
            if !on.is_finite() || !off.is_finite() || on <= 0.0 || off < 0.0 {
                return Err(StoryError::InvalidData(
                    "line dash lengths must be finite and positive".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Draw command for one axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            stroke: None,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> StoryResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(StoryError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(StoryError::InvalidData(
                "rect extent must be >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(StoryError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(StoryError::InvalidData(
                    "rect stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        self.fill.validate()
    }
}

/// Draw command for one filled circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> StoryResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(StoryError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(StoryError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(StoryError::InvalidData(
                    "circle stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        self.fill.validate()
    }
}

/// Draw command for a connected point path in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<PointPx>,
    pub stroke_width: f64,
    pub color: Color,
    /// When set, the path is closed and filled with this color.
    pub fill: Option<Color>,
    /// On/off dash lengths in px; `None` draws a solid stroke.
    pub dash: Option<(f64, f64)>,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<PointPx>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
            fill: None,
            dash: None,
        }
    }

    #[must_use]
    pub fn filled(points: Vec<PointPx>, stroke_width: f64, color: Color, fill: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
            fill: Some(fill),
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    pub fn validate(&self) -> StoryResult<()> {
        if self.points.len() < 2 {
            return Err(StoryError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(StoryError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StoryError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some((on, off)) = self.dash {
            if !on.is_finite() || !off.is_finite() || on <= 0.0 || off < 0.0 {
                return Err(StoryError::InvalidData(
                    "polyline dash lengths must be finite and positive".to_owned(),
                ));
            }
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> StoryResult<()> {
        if self.text.is_empty() {
            return Err(StoryError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(StoryError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(StoryError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

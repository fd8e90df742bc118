use crate::core::PointPx;
use crate::render::{Color, TextHAlign};

/// Dense handle for one scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub(crate) fn raw(self) -> u32 {
        self.0
    }
}

/// Closed set of authored visual groups.
///
/// Every element belongs to exactly one class; step handlers select by
/// class (plus optional tag) instead of holding element handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    MainTitle,
    SubTitle,
    ScrollPrompt,
    TreemapPanel,
    CpiLine,
    CategoryLine,
    CategoryLineLabel,
    LegendTitle,
    LegendSubtitle,
    HighlightRule,
    HighlightRuleLabel,
    AxisTop,
    AxisBottom,
    AxisLeft,
    ScatterDot,
    SupportedDot,
    ConnectorLine,
    DiagonalRule,
    DiagonalRuleLabel,
    ScatterCaption,
    ShapeLegendEntry,
    ColorLegendEntry,
    ScatterAxisLabel,
    UnsafeBall,
    SafeBall,
    BallCaption,
    EmbedPanel,
    TreemapCell,
    FundingBar,
    CostBar,
    BarLabel,
    BarUnitLabel,
    ClosingTitle,
}

/// Marker shape for per-program scatter symbols and the scroll prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    Circle,
    Square,
    Triangle,
    TriangleDown,
}

/// Animatable property key, validated against the element's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Opacity,
    StrokeWidth,
    X,
    Y,
    X2,
    Y2,
    Width,
    Height,
    Radius,
    DrawnFraction,
    SymbolSize,
    FillColor,
    StrokeColor,
    Points,
}

impl Channel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::StrokeWidth => "stroke-width",
            Self::X => "x",
            Self::Y => "y",
            Self::X2 => "x2",
            Self::Y2 => "y2",
            Self::Width => "width",
            Self::Height => "height",
            Self::Radius => "radius",
            Self::DrawnFraction => "drawn-fraction",
            Self::SymbolSize => "symbol-size",
            Self::FillColor => "fill-color",
            Self::StrokeColor => "stroke-color",
            Self::Points => "points",
        }
    }
}

/// Pixel-space shape carried by an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Connected path; `drawn_fraction` in [0, 1] controls draw-in by
    /// cumulative length.
    Polyline {
        points: Vec<PointPx>,
        drawn_fraction: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Marker centered at (cx, cy); `size` is the side/diameter in px.
    Symbol {
        shape: SymbolShape,
        cx: f64,
        cy: f64,
        size: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
        h_align: TextHAlign,
    },
}

/// One retained visual element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) id: ElementId,
    class: ElementClass,
    tag: Option<String>,
    datum_index: Option<usize>,
    pub geometry: Geometry,
    pub opacity: f64,
    pub fill: Color,
    pub stroke: Color,
    /// Zero width means the element is not stroked.
    pub stroke_width: f64,
    /// On/off stroke dash lengths for lines and polylines; `None` is solid.
    pub dash: Option<(f64, f64)>,
}

impl Element {
    /// Elements start invisible; steps fade them in.
    #[must_use]
    pub fn new(class: ElementClass, geometry: Geometry) -> Self {
        Self {
            id: ElementId(0),
            class,
            tag: None,
            datum_index: None,
            geometry,
            opacity: 0.0,
            fill: Color::rgb(0.0, 0.0, 0.0),
            stroke: Color::rgb(0.0, 0.0, 0.0),
            stroke_width: 0.0,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_datum_index(mut self, index: usize) -> Self {
        self.datum_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn class(&self) -> ElementClass {
        self.class
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn datum_index(&self) -> Option<usize> {
        self.datum_index
    }

    pub(crate) fn scalar_channel(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Opacity => Some(self.opacity),
            Channel::StrokeWidth => Some(self.stroke_width),
            Channel::X => match &self.geometry {
                Geometry::Rect { x, .. } => Some(*x),
                Geometry::Circle { cx, .. } => Some(*cx),
                Geometry::Line { x1, .. } => Some(*x1),
                Geometry::Symbol { cx, .. } => Some(*cx),
                Geometry::Text { x, .. } => Some(*x),
                Geometry::Polyline { .. } => None,
            },
            Channel::Y => match &self.geometry {
                Geometry::Rect { y, .. } => Some(*y),
                Geometry::Circle { cy, .. } => Some(*cy),
                Geometry::Line { y1, .. } => Some(*y1),
                Geometry::Symbol { cy, .. } => Some(*cy),
                Geometry::Text { y, .. } => Some(*y),
                Geometry::Polyline { .. } => None,
            },
            Channel::X2 => match &self.geometry {
                Geometry::Line { x2, .. } => Some(*x2),
                _ => None,
            },
            Channel::Y2 => match &self.geometry {
                Geometry::Line { y2, .. } => Some(*y2),
                _ => None,
            },
            Channel::Width => match &self.geometry {
                Geometry::Rect { width, .. } => Some(*width),
                _ => None,
            },
            Channel::Height => match &self.geometry {
                Geometry::Rect { height, .. } => Some(*height),
                _ => None,
            },
            Channel::Radius => match &self.geometry {
                Geometry::Circle { radius, .. } => Some(*radius),
                _ => None,
            },
            Channel::DrawnFraction => match &self.geometry {
                Geometry::Polyline { drawn_fraction, .. } => Some(*drawn_fraction),
                _ => None,
            },
            Channel::SymbolSize => match &self.geometry {
                Geometry::Symbol { size, .. } => Some(*size),
                _ => None,
            },
            Channel::FillColor | Channel::StrokeColor | Channel::Points => None,
        }
    }

    pub(crate) fn scalar_channel_mut(&mut self, channel: Channel) -> Option<&mut f64> {
        match channel {
            Channel::Opacity => Some(&mut self.opacity),
            Channel::StrokeWidth => Some(&mut self.stroke_width),
            Channel::X => match &mut self.geometry {
                Geometry::Rect { x, .. } => Some(x),
                Geometry::Circle { cx, .. } => Some(cx),
                Geometry::Line { x1, .. } => Some(x1),
                Geometry::Symbol { cx, .. } => Some(cx),
                Geometry::Text { x, .. } => Some(x),
                Geometry::Polyline { .. } => None,
            },
            Channel::Y => match &mut self.geometry {
                Geometry::Rect { y, .. } => Some(y),
                Geometry::Circle { cy, .. } => Some(cy),
                Geometry::Line { y1, .. } => Some(y1),
                Geometry::Symbol { cy, .. } => Some(cy),
                Geometry::Text { y, .. } => Some(y),
                Geometry::Polyline { .. } => None,
            },
            Channel::X2 => match &mut self.geometry {
                Geometry::Line { x2, .. } => Some(x2),
                _ => None,
            },
            Channel::Y2 => match &mut self.geometry {
                Geometry::Line { y2, .. } => Some(y2),
                _ => None,
            },
            Channel::Width => match &mut self.geometry {
                Geometry::Rect { width, .. } => Some(width),
                _ => None,
            },
            Channel::Height => match &mut self.geometry {
                Geometry::Rect { height, .. } => Some(height),
                _ => None,
            },
            Channel::Radius => match &mut self.geometry {
                Geometry::Circle { radius, .. } => Some(radius),
                _ => None,
            },
            Channel::DrawnFraction => match &mut self.geometry {
                Geometry::Polyline { drawn_fraction, .. } => Some(drawn_fraction),
                _ => None,
            },
            Channel::SymbolSize => match &mut self.geometry {
                Geometry::Symbol { size, .. } => Some(size),
                _ => None,
            },
            Channel::FillColor | Channel::StrokeColor | Channel::Points => None,
        }
    }
}

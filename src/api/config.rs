use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{StoryError, StoryResult};
use crate::story::StepStyle;
use crate::treemap::ZOOM_DURATION_S;

/// Public story bootstrap configuration.
///
/// Serializable so host applications can persist presentation tuning
/// without inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_fade_s")]
    pub fade_s: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_line_opacity")]
    pub line_opacity: f64,
    #[serde(default = "default_bar_opacity")]
    pub bar_opacity: f64,
    #[serde(default = "default_scatter_opacity")]
    pub scatter_opacity: f64,
    #[serde(default = "default_unsafe_count")]
    pub unsafe_count: u32,
    #[serde(default = "default_safe_count")]
    pub safe_count: u32,
    #[serde(default = "default_ball_radius_pad")]
    pub ball_radius_pad: f64,
    /// Institution singled out with a highlight fill in the bar chart.
    /// `None` draws every bar in the shared funding color.
    #[serde(default = "default_highlight_institution")]
    pub highlight_institution: Option<String>,
    #[serde(default = "default_treemap_zoom_s")]
    pub treemap_zoom_s: f64,
}

impl StoryConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            fade_s: default_fade_s(),
            font_size: default_font_size(),
            line_opacity: default_line_opacity(),
            bar_opacity: default_bar_opacity(),
            scatter_opacity: default_scatter_opacity(),
            unsafe_count: default_unsafe_count(),
            safe_count: default_safe_count(),
            ball_radius_pad: default_ball_radius_pad(),
            highlight_institution: default_highlight_institution(),
            treemap_zoom_s: default_treemap_zoom_s(),
        }
    }

    /// Sets the margins around the plot area.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the shared fade duration in seconds.
    #[must_use]
    pub fn with_fade(mut self, seconds: f64) -> Self {
        self.fade_s = seconds;
        self
    }

    /// Sets the institution drawn with the highlight fill.
    #[must_use]
    pub fn with_highlight_institution(mut self, institution: impl Into<String>) -> Self {
        self.highlight_institution = Some(institution.into());
        self
    }

    /// Sets the survey counts behind the two feeling-safe circles.
    #[must_use]
    pub fn with_survey_counts(mut self, unsafe_count: u32, safe_count: u32) -> Self {
        self.unsafe_count = unsafe_count;
        self.safe_count = safe_count;
        self
    }

    /// Sets the treemap zoom animation length in seconds.
    #[must_use]
    pub fn with_treemap_zoom(mut self, seconds: f64) -> Self {
        self.treemap_zoom_s = seconds;
        self
    }

    pub fn validate(&self) -> StoryResult<()> {
        if !self.viewport.is_valid() {
            return Err(StoryError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        for (field, value) in [
            ("fade_s", self.fade_s),
            ("font_size", self.font_size),
            ("ball_radius_pad", self.ball_radius_pad),
            ("treemap_zoom_s", self.treemap_zoom_s),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StoryError::InvalidData(format!(
                    "config field `{field}` must be finite and >= 0"
                )));
            }
        }
        for (field, value) in [
            ("line_opacity", self.line_opacity),
            ("bar_opacity", self.bar_opacity),
            ("scatter_opacity", self.scatter_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StoryError::InvalidData(format!(
                    "config field `{field}` must be in [0, 1]"
                )));
            }
        }
        if self.unsafe_count == 0 && self.safe_count == 0 {
            return Err(StoryError::InvalidData(
                "survey counts must not both be zero".to_owned(),
            ));
        }
        Ok(())
    }

    /// The plot rectangle implied by the viewport and margins.
    pub fn plot_area(&self) -> StoryResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    /// Distills the step-facing styling view.
    pub fn step_style(&self) -> StoryResult<StepStyle> {
        self.validate()?;
        let mut style = StepStyle::new(self.plot_area()?);
        style.margins = self.margins;
        style.fade_s = self.fade_s;
        style.font_size = self.font_size;
        style.line_opacity = self.line_opacity;
        style.bar_opacity = self.bar_opacity;
        style.scatter_opacity = self.scatter_opacity;
        style.unsafe_count = self.unsafe_count;
        style.safe_count = self.safe_count;
        style.ball_radius_pad = self.ball_radius_pad;
        style.highlight_institution = self.highlight_institution.clone();
        Ok(style)
    }

    pub fn to_json_pretty(&self) -> StoryResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StoryError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn from_json_str(input: &str) -> StoryResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| StoryError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        // 600 x 450 of plot inside the default margins.
        Self::new(Viewport::new(660, 510))
    }
}

fn default_fade_s() -> f64 {
    0.5
}

fn default_font_size() -> f64 {
    12.0
}

fn default_line_opacity() -> f64 {
    1.0
}

fn default_bar_opacity() -> f64 {
    0.5
}

fn default_scatter_opacity() -> f64 {
    0.5
}

fn default_unsafe_count() -> u32 {
    78
}

fn default_safe_count() -> u32 {
    10
}

fn default_ball_radius_pad() -> f64 {
    50.0
}

fn default_highlight_institution() -> Option<String> {
    Some("University of British Columbia".to_owned())
}

fn default_treemap_zoom_s() -> f64 {
    ZOOM_DURATION_S
}

#[cfg(test)]
mod tests {
    use super::StoryConfig;
    use crate::core::Viewport;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = StoryConfig::default();
        let json = config.to_json_pretty().expect("serialize");
        let parsed = StoryConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed = StoryConfig::from_json_str(r#"{"viewport":{"width":600,"height":450}}"#)
            .expect("parse minimal config");
        assert!((parsed.fade_s - 0.5).abs() <= 1e-12);
        assert_eq!(parsed.unsafe_count, 78);
        assert_eq!(
            parsed.highlight_institution.as_deref(),
            Some("University of British Columbia")
        );
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let config = StoryConfig::new(Viewport::new(0, 450));
        assert!(config.validate().is_err());
        assert!(config.step_style().is_err());
    }

    #[test]
    fn step_style_mirrors_the_overrides() {
        let style = StoryConfig::default()
            .with_fade(0.25)
            .with_highlight_institution("University of British Columbia")
            .step_style()
            .expect("style");
        assert!((style.fade_s - 0.25).abs() <= 1e-12);
        assert_eq!(
            style.highlight_institution.as_deref(),
            Some("University of British Columbia")
        );
        assert!((style.plot.width - 600.0).abs() <= 1e-12);
        assert!((style.plot.height - 450.0).abs() <= 1e-12);
    }
}

use crate::anim::{TransitionScheduler, TransitionSpec};
use crate::core::{BandScale, LinearScale, Margins, MonthScale, PlotArea};
use crate::data::DatasetBundle;
use crate::error::StoryResult;
use crate::scene::Scene;
use crate::treemap::ZoomTreemap;

/// Styling knobs shared by every step handler.
///
/// Distances are plot-area pixels, durations seconds, opacities in
/// [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct StepStyle {
    pub plot: PlotArea,
    pub margins: Margins,
    pub fade_s: f64,
    pub font_size: f64,
    pub line_opacity: f64,
    pub bar_opacity: f64,
    pub scatter_opacity: f64,
    pub unsafe_count: u32,
    pub safe_count: u32,
    pub ball_radius_pad: f64,
    pub highlight_institution: Option<String>,
}

impl StepStyle {
    #[must_use]
    pub fn new(plot: PlotArea) -> Self {
        Self {
            plot,
            margins: Margins::default(),
            fade_s: 0.5,
            font_size: 12.0,
            line_opacity: 1.0,
            bar_opacity: 0.5,
            scatter_opacity: 0.5,
            unsafe_count: 78,
            safe_count: 10,
            ball_radius_pad: 50.0,
            highlight_institution: None,
        }
    }

    /// Slightly quicker fade used when dimming context elements.
    #[must_use]
    pub fn dim_s(&self) -> f64 {
        (self.fade_s - 0.1).max(0.0)
    }

    /// Longer run used when a line morphs between projections.
    #[must_use]
    pub fn morph_s(&self) -> f64 {
        self.fade_s + 0.5
    }
}

/// Every scale the charts project through, mutated by steps the same
/// way the scene is.
///
/// Only the bar band scale changes domain after setup (the reorder
/// step); the rest are fixed projections kept together for lending.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub month_multi: MonthScale,
    pub month_recent: MonthScale,
    pub y_cpi_index: LinearScale,
    pub y_cpi_change: LinearScale,
    pub y_cpi_span: LinearScale,
    pub x_scatter: LinearScale,
    pub y_scatter: LinearScale,
    pub x_bar: LinearScale,
    pub y_bar: BandScale,
}

/// Everything a step may touch, lent for the duration of one call.
pub struct StageContext<'a> {
    pub scene: &'a mut Scene,
    pub scheduler: &'a mut TransitionScheduler,
    pub scales: &'a mut ChartScales,
    pub data: &'a DatasetBundle,
    pub style: &'a StepStyle,
    pub treemap: &'a mut ZoomTreemap,
}

impl StageContext<'_> {
    /// Starts a transition against the staged scene.
    pub fn begin(&mut self, spec: TransitionSpec) -> StoryResult<()> {
        self.scheduler.begin(self.scene, spec)
    }
}

/// One authored story step.
///
/// `enter` runs once per activation (also when replayed by catch-up);
/// `update` runs on every in-step scroll movement and defaults to
/// doing nothing.
pub trait StepHandler {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()>;

    #[allow(unused_variables)]
    fn update(&self, ctx: &mut StageContext<'_>, progress: f64) -> StoryResult<()> {
        Ok(())
    }
}

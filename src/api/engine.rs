//! The retained engine host shells drive.
//!
//! One engine owns the scene, the scales, the storyboard and the zoom
//! treemap; the host feeds it scroll positions and frame deltas and
//! hands the resulting frames to a backend.

use tracing::{debug, info};

use crate::anim::TransitionScheduler;
use crate::data::DatasetBundle;
use crate::error::{StoryError, StoryResult};
use crate::render::{RenderFrame, Renderer};
use crate::scene::{Channel, ElementClass, Scene};
use crate::story::{
    ChartScales, ScrollTracker, StageContext, StepEvent, StepStyle, Storyboard,
};
use crate::treemap::ZoomTreemap;

use super::config::StoryConfig;
use super::frame_builder::build_frame;
use super::setup::{build_scales, build_scene};
use super::steps;

/// Scroll-driven story over the cost-of-living datasets.
pub struct StoryEngine<R> {
    config: StoryConfig,
    data: DatasetBundle,
    style: StepStyle,
    scales: ChartScales,
    scene: Scene,
    scheduler: TransitionScheduler,
    treemap: ZoomTreemap,
    storyboard: Storyboard,
    tracker: ScrollTracker,
    renderer: R,
}

impl<R: Renderer> StoryEngine<R> {
    pub fn new(config: StoryConfig, data: DatasetBundle, renderer: R) -> StoryResult<Self> {
        let style = config.step_style()?;
        let scales = build_scales(&data, style.plot)?;
        let scene = build_scene(&data, &scales, &style)?;
        let treemap =
            ZoomTreemap::with_default_expenses()?.with_zoom_duration(config.treemap_zoom_s);

        let storyboard = Storyboard::builder()
            .step("title", steps::ShowTitle)
            .step("treemap", steps::ShowTreemap)
            .step("treemap-zoom", steps::FocusTreemap)
            .step("cpi-index", steps::ShowCpiIndex)
            .step("cpi-change", steps::ShowCpiChange)
            .step("category-lines", steps::ShowCategoryLines)
            .step("highlight-housing", steps::HighlightHousing)
            .step("highlight-food-transport", steps::HighlightFoodTransport)
            .step("scatter", steps::ShowScatter)
            .step("scatter-shortfall", steps::HighlightShortfall)
            .step("scatter-support", steps::ShowSupportShift)
            .step("safety-balls", steps::ShowSafetyBalls)
            .step("stipend-embed", steps::ShowEmbed)
            .step("funding-bars", steps::ShowFundingBars)
            .step("cost-bars", steps::ShowCostBars)
            .step("reorder-bars", steps::ReorderBars)
            .step("closing", steps::ShowClosing)
            .build()?;

        // One viewport height per step until the host measures its
        // real section extents.
        let tracker =
            ScrollTracker::uniform(storyboard.len(), f64::from(config.viewport.height))?;

        info!(
            steps = storyboard.len(),
            elements = scene.len(),
            "story engine ready"
        );
        Ok(Self {
            config,
            data,
            style,
            scales,
            scene,
            scheduler: TransitionScheduler::new(),
            treemap,
            storyboard,
            tracker,
            renderer,
        })
    }

    /// Replaces the default uniform scroll extents, e.g. with measured
    /// section heights.
    pub fn set_scroll_extents(&mut self, extents: &[(f64, f64)]) -> StoryResult<()> {
        let tracker = ScrollTracker::from_extents(extents)?;
        if tracker.len() != self.storyboard.len() {
            return Err(StoryError::InvalidData(format!(
                "scroll extents cover {} steps, story has {}",
                tracker.len(),
                self.storyboard.len()
            )));
        }
        self.tracker = tracker;
        Ok(())
    }

    /// Folds an absolute scroll offset into step activations and
    /// in-step progress.
    pub fn observe_scroll(&mut self, offset: f64) -> StoryResult<()> {
        let events = self.tracker.observe(offset)?;
        for event in events {
            match event {
                StepEvent::Active(index) => {
                    debug!(step = index, name = self.storyboard.step_name(index), "step active");
                    self.step_active(index)?;
                }
                StepEvent::Progress { index, fraction } => self.step_progress(index, fraction)?,
            }
        }
        Ok(())
    }

    /// Activates one step directly, replaying skipped neighbours so the
    /// stage is consistent no matter how far the jump was.
    pub fn step_active(&mut self, index: usize) -> StoryResult<()> {
        let mut ctx = StageContext {
            scene: &mut self.scene,
            scheduler: &mut self.scheduler,
            scales: &mut self.scales,
            data: &self.data,
            style: &self.style,
            treemap: &mut self.treemap,
        };
        self.storyboard.activate(index, &mut ctx)
    }

    /// Feeds in-step scroll progress to the active step.
    pub fn step_progress(&mut self, index: usize, fraction: f64) -> StoryResult<()> {
        let mut ctx = StageContext {
            scene: &mut self.scene,
            scheduler: &mut self.scheduler,
            scales: &mut self.scales,
            data: &self.data,
            style: &self.style,
            treemap: &mut self.treemap,
        };
        self.storyboard.update(index, fraction, &mut ctx)
    }

    /// Steps every running transition, including the treemap zoom.
    /// Returns whether anything is still moving.
    pub fn advance(&mut self, delta_seconds: f64) -> StoryResult<bool> {
        let scene_busy = self.scheduler.advance(delta_seconds, &mut self.scene)?;
        let zoom_busy = self.treemap.advance(delta_seconds)?;
        Ok(scene_busy || zoom_busy)
    }

    /// Materializes the current scene into backend primitives.
    pub fn frame(&self) -> StoryResult<RenderFrame> {
        build_frame(
            self.config.viewport,
            self.style.plot,
            &self.scene,
            &self.treemap,
        )
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> StoryResult<()> {
        let frame = self.frame()?;
        self.renderer.render(&frame)
    }

    /// Forwards a pointer click on a treemap cell.
    pub fn treemap_click(&mut self, node: usize) -> StoryResult<()> {
        self.treemap.click(node)
    }

    /// Opacity of the host-drawn embed region, for fading the embedded
    /// widget in sync with the story.
    #[must_use]
    pub fn embed_opacity(&self) -> f64 {
        self.scene
            .select_one(ElementClass::EmbedPanel)
            .and_then(|id| self.scene.scalar(id, Channel::Opacity).ok())
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &DatasetBundle {
        &self.data
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.storyboard.len()
    }

    #[must_use]
    pub fn step_name(&self, index: usize) -> Option<&str> {
        self.storyboard.step_name(index)
    }

    #[must_use]
    pub fn active_step(&self) -> Option<usize> {
        self.storyboard.last_activated()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle() || self.treemap.is_animating()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The derived chart scales, e.g. for host-side hit testing.
    #[must_use]
    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    #[must_use]
    pub fn treemap(&self) -> &ZoomTreemap {
        &self.treemap
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + crate::render::CairoContextRenderer> StoryEngine<R> {
    /// Builds the current frame and draws it on an external Cairo
    /// context, e.g. inside a GTK `DrawingArea` draw callback.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> StoryResult<()> {
        let frame = self.frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}

#[cfg(test)]
mod tests {
    use super::super::steps::fixtures::{FUNDING, MULTI, PROGRAMS, RECENT};
    use super::StoryConfig;
    use super::StoryEngine;
    use crate::data::DatasetBundle;
    use crate::render::NullRenderer;

    fn engine() -> StoryEngine<NullRenderer> {
        let data = DatasetBundle::from_csv_strs(MULTI, RECENT, FUNDING, PROGRAMS).expect("bundle");
        StoryEngine::new(StoryConfig::default(), data, NullRenderer::default()).expect("engine")
    }

    #[test]
    fn seventeen_steps_in_story_order() {
        let engine = engine();
        assert_eq!(engine.step_count(), 17);
        assert_eq!(engine.step_name(0), Some("title"));
        assert_eq!(engine.step_name(8), Some("scatter"));
        assert_eq!(engine.step_name(16), Some("closing"));
    }

    #[test]
    fn scrolling_the_whole_story_lands_on_the_closing_step() {
        let mut engine = engine();
        let step_height = 510.0;
        for index in 0..engine.step_count() {
            engine
                .observe_scroll(index as f64 * step_height + 1.0)
                .expect("observe");
            engine.advance(5.0).expect("advance");
        }
        assert_eq!(engine.active_step(), Some(16));
        engine.render().expect("render");
        assert!(engine.renderer().last_primitive_count() > 0);
    }

    #[test]
    fn jumping_in_replays_the_skipped_steps() {
        let mut engine = engine();
        // Straight to the category lines without visiting 0..=4.
        engine.observe_scroll(5.0 * 510.0 + 1.0).expect("observe");
        engine.advance(5.0).expect("advance");
        assert_eq!(engine.active_step(), Some(5));
        assert_eq!(engine.step_name(5), Some("category-lines"));
    }

    #[test]
    fn embed_opacity_tracks_the_embed_step() {
        let mut engine = engine();
        assert!(engine.embed_opacity() <= 1e-9);
        engine.observe_scroll(12.0 * 510.0 + 1.0).expect("observe");
        engine.advance(5.0).expect("advance");
        assert!((engine.embed_opacity() - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn mismatched_scroll_extents_are_rejected() {
        let mut engine = engine();
        let err = engine
            .set_scroll_extents(&[(0.0, 100.0), (100.0, 100.0)])
            .expect_err("two extents for seventeen steps");
        assert!(err.to_string().contains("17"));
    }
}

//! Treemap reveal and drill-in steps.

use crate::anim::TransitionSpec;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, hide_axis};

/// Cell the story drills into.
const FOCUS_CELL: &str = "basic expenses";

/// Swaps the titles for the full expense treemap.
pub(crate) struct ShowTreemap;

impl StepHandler for ShowTreemap {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::MainTitle, 0.0, fade)?;
        fade_class(ctx, ElementClass::SubTitle, 0.0, fade)?;
        fade_class(ctx, ElementClass::ScrollPrompt, 0.0, fade)?;
        if let Some(prompt) = ctx.scene.select_one(ElementClass::ScrollPrompt) {
            // The bounce loops forever; stop it once the prompt is gone.
            ctx.scheduler.cancel(prompt, Channel::Y);
        }
        fade_class(ctx, ElementClass::TreemapPanel, 1.0, fade)?;
        ctx.treemap.reset()?;
        Ok(())
    }
}

/// Drills into the basic-expenses cell and clears the CPI stage behind
/// it.
pub(crate) struct FocusTreemap;

impl StepHandler for FocusTreemap {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::TreemapPanel, 1.0, fade)?;
        if let Some(node) = ctx.treemap.layout().find(FOCUS_CELL) {
            // A second click on the focused cell would zoom back out.
            if ctx.treemap.focus() != node {
                ctx.treemap.click(node)?;
            }
        }

        hide_axis(ctx, ElementClass::AxisBottom)?;
        hide_axis(ctx, ElementClass::AxisLeft)?;
        fade_class(ctx, ElementClass::LegendTitle, 0.0, fade)?;
        fade_class(ctx, ElementClass::LegendSubtitle, 0.0, fade)?;
        if let Some(line) = ctx.scene.select_one(ElementClass::CpiLine) {
            ctx.begin(
                TransitionSpec::scalar(line, Channel::DrawnFraction, 0.0).with_duration(fade),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::Stage;
    use super::{FOCUS_CELL, FocusTreemap, ShowTreemap};
    use crate::scene::{Channel, ElementClass};
    use crate::story::StepHandler;
    use crate::treemap::TreemapLayout;

    #[test]
    fn focus_step_zooms_into_basic_expenses() {
        let mut stage = Stage::new();
        FocusTreemap.enter(&mut stage.ctx()).expect("enter");

        let focus = stage.treemap.focus();
        assert_ne!(focus, TreemapLayout::ROOT);
        let node = stage.treemap.layout().node(focus).expect("node");
        assert_eq!(node.name(), FOCUS_CELL);

        // Re-entering must not bounce the zoom back out.
        FocusTreemap.enter(&mut stage.ctx()).expect("re-enter");
        assert_eq!(stage.treemap.focus(), focus);
    }

    #[test]
    fn show_treemap_resets_the_zoom_and_reveals_the_panel() {
        let mut stage = Stage::new();
        FocusTreemap.enter(&mut stage.ctx()).expect("zoom in");
        ShowTreemap.enter(&mut stage.ctx()).expect("enter");
        stage.settle();

        assert_eq!(stage.treemap.focus(), TreemapLayout::ROOT);
        let panel = stage
            .scene
            .select_one(ElementClass::TreemapPanel)
            .expect("panel");
        let opacity = stage.scene.scalar(panel, Channel::Opacity).expect("opacity");
        assert!((opacity - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn focus_step_undraws_the_index_line() {
        let mut stage = Stage::new();
        let line = stage.scene.select_one(ElementClass::CpiLine).expect("line");
        stage
            .scene
            .set_scalar(line, Channel::DrawnFraction, 1.0)
            .expect("draw line");

        FocusTreemap.enter(&mut stage.ctx()).expect("enter");
        stage.settle();
        assert!(
            stage
                .scene
                .scalar(line, Channel::DrawnFraction)
                .expect("drawn")
                <= 1e-9
        );
    }
}

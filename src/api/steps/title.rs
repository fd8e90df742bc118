//! Opening and closing steps.

use crate::anim::{LoopMode, TransitionSpec};
use crate::api::setup::prompt_rest_y;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, hide_axis};

/// How far below its rest position the scroll prompt dips.
const PROMPT_BOUNCE_PX: f64 = 30.0;

/// Opening titles with the bouncing scroll prompt.
pub(crate) struct ShowTitle;

impl StepHandler for ShowTitle {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::MainTitle, 1.0, fade)?;
        fade_class(ctx, ElementClass::SubTitle, 1.0, fade)?;
        fade_class(ctx, ElementClass::TreemapPanel, 0.0, fade)?;

        if let Some(prompt) = ctx.scene.select_one(ElementClass::ScrollPrompt) {
            // Re-entering mid-bounce would otherwise restart the loop
            // from wherever the prompt happens to be.
            let rest = prompt_rest_y(ctx.style.plot);
            ctx.scene.set_scalar(prompt, Channel::Y, rest)?;
            ctx.begin(TransitionSpec::scalar(prompt, Channel::Opacity, 1.0).with_duration(fade))?;
            ctx.begin(
                TransitionSpec::scalar(prompt, Channel::Y, rest + PROMPT_BOUNCE_PX)
                    .with_duration(fade)
                    .with_delay(fade)
                    .with_loop_mode(LoopMode::PingPong),
            )?;
        }
        Ok(())
    }
}

/// Thanks the reader and clears the bar chart off the stage.
pub(crate) struct ShowClosing;

impl StepHandler for ShowClosing {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        hide_axis(ctx, ElementClass::AxisTop)?;
        fade_class(ctx, ElementClass::BarUnitLabel, 0.0, fade)?;
        for class in [ElementClass::FundingBar, ElementClass::CostBar] {
            for id in ctx.scene.select(class) {
                ctx.begin(TransitionSpec::scalar(id, Channel::Width, 0.0).with_duration(fade))?;
            }
        }
        fade_class(ctx, ElementClass::BarLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::ClosingTitle, 1.0, fade)?;
        Ok(())
    }
}

//! Hands the stage to the host-drawn stipend breakdown.

use crate::anim::TransitionSpec;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, hide_axis};

/// Clears both neighbouring charts and brightens the embed region so
/// the host knows to draw into it.
pub(crate) struct ShowEmbed;

impl StepHandler for ShowEmbed {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::BallCaption, 0.0, fade)?;
        for class in [ElementClass::UnsafeBall, ElementClass::SafeBall] {
            for id in ctx.scene.select(class) {
                ctx.begin(TransitionSpec::scalar(id, Channel::Radius, 0.0).with_duration(fade))?;
            }
        }
        hide_axis(ctx, ElementClass::AxisTop)?;
        for class in [ElementClass::FundingBar, ElementClass::CostBar] {
            for id in ctx.scene.select(class) {
                ctx.begin(TransitionSpec::scalar(id, Channel::Width, 0.0).with_duration(fade))?;
            }
        }
        fade_class(ctx, ElementClass::BarLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::BarUnitLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::EmbedPanel, 1.0, fade)?;
        Ok(())
    }
}

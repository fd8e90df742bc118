//! Safety poll step, sized by scroll progress instead of time alone.

use crate::anim::TransitionSpec;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass};
use crate::story::{StageContext, StepHandler, StepStyle};

use super::{fade_class, hide_axis};

/// Seconds the scatter remnants take to clear.
const CLEAR_S: f64 = 0.1;

/// Collapses the scatter into two proportioned circles whose radii
/// track how far the reader has scrolled through the step.
pub(crate) struct ShowSafetyBalls;

impl StepHandler for ShowSafetyBalls {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let center_x = ctx.style.plot.center_x();
        let center_y = ctx.style.plot.center_y();
        let spread = ball_spread(ctx.style);

        hide_axis(ctx, ElementClass::AxisBottom)?;
        hide_axis(ctx, ElementClass::AxisLeft)?;

        for id in ctx.scene.select(ElementClass::ConnectorLine) {
            let Some(index) = ctx.scene.get(id)?.datum_index() else {
                continue;
            };
            let Some(record) = ctx.data.programs.records().get(index) else {
                continue;
            };
            let y = ctx.scales.y_scatter.position(record.basic_income);
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, y).with_duration(CLEAR_S))?;
        }

        // Supported dots sink into the unsafe ball, the rest into the
        // safe one, then wink out once they arrive.
        for (class, x) in [
            (ElementClass::SupportedDot, center_x),
            (ElementClass::ScatterDot, center_x + spread),
        ] {
            for id in ctx.scene.select(class) {
                ctx.begin(TransitionSpec::scalar(id, Channel::X, x).with_duration(fade))?;
                ctx.begin(TransitionSpec::scalar(id, Channel::Y, center_y).with_duration(fade))?;
                ctx.begin(
                    TransitionSpec::scalar(id, Channel::Opacity, 0.0)
                        .with_delay(fade)
                        .with_duration(0.0),
                )?;
            }
        }

        fade_class(ctx, ElementClass::DiagonalRule, 0.0, CLEAR_S)?;
        fade_class(ctx, ElementClass::DiagonalRuleLabel, 0.0, CLEAR_S)?;
        fade_class(ctx, ElementClass::ShapeLegendEntry, 0.0, fade)?;
        fade_class(ctx, ElementClass::ColorLegendEntry, 0.0, fade)?;
        fade_class(ctx, ElementClass::ScatterAxisLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::EmbedPanel, 0.0, fade)?;
        Ok(())
    }

    fn update(&self, ctx: &mut StageContext<'_>, progress: f64) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        // Fully grown halfway through so the figure holds on screen.
        let reveal = (progress * 2.0).min(1.0);
        let unsafe_radius =
            (f64::from(ctx.style.unsafe_count) + ctx.style.ball_radius_pad) * reveal;
        let safe_radius = (f64::from(ctx.style.safe_count) + ctx.style.ball_radius_pad) * reveal;

        for id in ctx.scene.select(ElementClass::UnsafeBall) {
            ctx.begin(
                TransitionSpec::scalar(id, Channel::Radius, unsafe_radius).with_duration(fade),
            )?;
        }
        for id in ctx.scene.select(ElementClass::SafeBall) {
            ctx.begin(TransitionSpec::scalar(id, Channel::Radius, safe_radius).with_duration(fade))?;
        }
        fade_class(ctx, ElementClass::BallCaption, reveal, fade)?;
        Ok(())
    }
}

/// Distance between the two ball centers.
fn ball_spread(style: &StepStyle) -> f64 {
    f64::from(style.unsafe_count) + f64::from(style.safe_count) + style.ball_radius_pad * 2.0
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::Stage;
    use super::{ShowSafetyBalls, ball_spread};
    use crate::scene::{Channel, ElementClass};
    use crate::story::StepHandler;

    #[test]
    fn update_grows_both_balls_with_progress() {
        let mut stage = Stage::new();
        ShowSafetyBalls
            .update(&mut stage.ctx(), 0.25)
            .expect("update");
        stage.settle();

        let unsafe_ball = stage
            .scene
            .select_one(ElementClass::UnsafeBall)
            .expect("unsafe ball");
        let safe_ball = stage
            .scene
            .select_one(ElementClass::SafeBall)
            .expect("safe ball");
        // progress 0.25 -> half grown
        let radius = stage
            .scene
            .scalar(unsafe_ball, Channel::Radius)
            .expect("radius");
        assert!((radius - 64.0).abs() <= 1e-9);
        let radius = stage
            .scene
            .scalar(safe_ball, Channel::Radius)
            .expect("radius");
        assert!((radius - 30.0).abs() <= 1e-9);

        for id in stage.scene.select(ElementClass::BallCaption) {
            let opacity = stage.scene.scalar(id, Channel::Opacity).expect("opacity");
            assert!((opacity - 0.5).abs() <= 1e-9);
        }
    }

    #[test]
    fn reveal_caps_at_half_scroll() {
        let mut stage = Stage::new();
        ShowSafetyBalls
            .update(&mut stage.ctx(), 1.0)
            .expect("update");
        stage.settle();

        let unsafe_ball = stage
            .scene
            .select_one(ElementClass::UnsafeBall)
            .expect("unsafe ball");
        let radius = stage
            .scene
            .scalar(unsafe_ball, Channel::Radius)
            .expect("radius");
        assert!((radius - 128.0).abs() <= 1e-9);
    }

    #[test]
    fn enter_parks_the_dots_on_the_ball_centers() {
        let mut stage = Stage::new();
        ShowSafetyBalls.enter(&mut stage.ctx()).expect("enter");
        stage.settle();

        let center_x = stage.style.plot.center_x();
        let center_y = stage.style.plot.center_y();
        let spread = ball_spread(&stage.style);
        for id in stage.scene.select(ElementClass::ScatterDot) {
            let x = stage.scene.scalar(id, Channel::X).expect("x");
            let y = stage.scene.scalar(id, Channel::Y).expect("y");
            assert!((x - (center_x + spread)).abs() <= 1e-9);
            assert!((y - center_y).abs() <= 1e-9);
            assert!(stage.scene.scalar(id, Channel::Opacity).expect("opacity") <= 1e-9);
        }
        for id in stage.scene.select(ElementClass::SupportedDot) {
            let x = stage.scene.scalar(id, Channel::X).expect("x");
            assert!((x - center_x).abs() <= 1e-9);
        }
    }
}

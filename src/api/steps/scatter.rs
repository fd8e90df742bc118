//! Expense-against-income scatter steps.

use crate::anim::TransitionSpec;
use crate::api::setup::{BLACK, GREY, RED, status_color};
use crate::charts::dot_position;
use crate::core::Easing;
use crate::data::{FinancialStatus, ProgramRecord};
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass, ElementId};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, hide_axis, show_only_axis};

/// Resting opacity of the y=x rule and its label.
const DIAGONAL_OPACITY: f64 = 0.8;
/// How much a called-out dot rises above the crowd.
const HIGHLIGHT_LIFT: f64 = 0.2;
/// Beats before the connectors and the supported dots move in.
const CONNECTOR_DELAY_S: f64 = 0.2;
const SUPPORTED_DELAY_S: f64 = 0.4;

/// One dot per program at its basic expense and income.
pub(crate) struct ShowScatter;

impl StepHandler for ShowScatter {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let scatter_opacity = ctx.style.scatter_opacity;
        let width = ctx.style.plot.width;

        hide_axis(ctx, ElementClass::AxisTop)?;
        fade_class(ctx, ElementClass::CategoryLine, 0.0, fade)?;
        fade_class(ctx, ElementClass::CategoryLineLabel, 0.0, fade)?;
        if let Some(line) = ctx.scene.select_one(ElementClass::CpiLine) {
            ctx.begin(
                TransitionSpec::scalar(line, Channel::DrawnFraction, 0.0)
                    .with_duration(fade)
                    .with_easing(Easing::Linear),
            )?;
        }
        for id in ctx.scene.select(ElementClass::HighlightRule) {
            ctx.begin(TransitionSpec::scalar(id, Channel::X2, width).with_duration(fade))?;
        }
        fade_class(ctx, ElementClass::HighlightRuleLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::ScatterCaption, 0.0, fade)?;

        show_only_axis(ctx, ElementClass::AxisBottom, "expense")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "income")?;
        fade_class(ctx, ElementClass::ScatterAxisLabel, 1.0, fade)?;
        fade_class(ctx, ElementClass::DiagonalRule, DIAGONAL_OPACITY, fade)?;
        fade_class(ctx, ElementClass::DiagonalRuleLabel, DIAGONAL_OPACITY, fade)?;
        fade_class(ctx, ElementClass::ShapeLegendEntry, 1.0, fade)?;

        place_dots_at_basic(ctx, Some(scatter_opacity))?;
        Ok(())
    }
}

/// Calls out the programs whose stipend never covers the basics.
pub(crate) struct HighlightShortfall;

impl StepHandler for HighlightShortfall {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let lifted = (ctx.style.scatter_opacity + HIGHLIGHT_LIFT).min(1.0);

        for id in ctx.scene.select(ElementClass::ConnectorLine) {
            let Some(record) = program_record(ctx, id)? else {
                continue;
            };
            let y = ctx.scales.y_scatter.position(record.basic_income);
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, y).with_duration(fade))?;
        }
        fade_class(ctx, ElementClass::SupportedDot, 0.0, fade)?;
        place_dots_at_basic(ctx, None)?;
        fade_class(ctx, ElementClass::ColorLegendEntry, 0.0, fade)?;
        fade_class(ctx, ElementClass::ScatterCaption, 1.0, fade)?;

        for tag in [
            FinancialStatus::StillNotEnough.label(),
            FinancialStatus::EnoughAfterSupport.label(),
        ] {
            for id in ctx.scene.select_tagged(ElementClass::ScatterDot, tag) {
                ctx.begin(
                    TransitionSpec::scalar(id, Channel::Opacity, lifted).with_duration(fade),
                )?;
                ctx.begin(
                    TransitionSpec::color(id, Channel::StrokeColor, BLACK).with_duration(fade),
                )?;
                ctx.begin(TransitionSpec::color(id, Channel::FillColor, RED).with_duration(fade))?;
            }
        }
        Ok(())
    }
}

/// Raises every short program to its supported income, leaving a
/// connector behind and a hollow ring where it started.
pub(crate) struct ShowSupportShift;

impl StepHandler for ShowSupportShift {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let scatter_opacity = ctx.style.scatter_opacity;

        fade_class(ctx, ElementClass::ScatterCaption, 0.0, fade)?;
        fade_class(ctx, ElementClass::BallCaption, 0.0, fade)?;
        for class in [ElementClass::UnsafeBall, ElementClass::SafeBall] {
            for id in ctx.scene.select(class) {
                ctx.begin(TransitionSpec::scalar(id, Channel::Radius, 0.0).with_duration(fade))?;
            }
        }
        show_only_axis(ctx, ElementClass::AxisBottom, "expense")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "income")?;
        fade_class(ctx, ElementClass::DiagonalRule, DIAGONAL_OPACITY, fade)?;
        fade_class(ctx, ElementClass::DiagonalRuleLabel, DIAGONAL_OPACITY, fade)?;
        fade_class(ctx, ElementClass::ShapeLegendEntry, 1.0, fade)?;
        fade_class(ctx, ElementClass::ScatterAxisLabel, 1.0, fade)?;

        for id in ctx.scene.select(ElementClass::ScatterDot) {
            let Some(record) = program_record(ctx, id)? else {
                continue;
            };
            let ring = status_color(record.status);
            let target = dot_position(
                &ctx.scales.x_scatter,
                &ctx.scales.y_scatter,
                record.basic_expenses,
                record.basic_income,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::X, target.x).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, target.y).with_duration(fade))?;
            ctx.begin(TransitionSpec::color(id, Channel::StrokeColor, ring).with_duration(fade))?;
            ctx.begin(
                TransitionSpec::color(id, Channel::FillColor, ring.with_alpha(0.0))
                    .with_duration(fade),
            )?;
            ctx.begin(
                TransitionSpec::scalar(id, Channel::Opacity, scatter_opacity).with_duration(fade),
            )?;
        }
        for id in ctx.scene.select(ElementClass::ConnectorLine) {
            let Some(record) = program_record(ctx, id)? else {
                continue;
            };
            let y = ctx.scales.y_scatter.position(record.supported_income);
            ctx.begin(
                TransitionSpec::scalar(id, Channel::Y, y)
                    .with_duration(fade)
                    .with_delay(CONNECTOR_DELAY_S),
            )?;
        }
        for id in ctx.scene.select(ElementClass::SupportedDot) {
            let Some(record) = program_record(ctx, id)? else {
                continue;
            };
            let target = dot_position(
                &ctx.scales.x_scatter,
                &ctx.scales.y_scatter,
                record.basic_expenses,
                record.supported_income,
            );
            ctx.begin(
                TransitionSpec::scalar(id, Channel::X, target.x)
                    .with_duration(fade)
                    .with_delay(SUPPORTED_DELAY_S),
            )?;
            ctx.begin(
                TransitionSpec::scalar(id, Channel::Y, target.y)
                    .with_duration(fade)
                    .with_delay(SUPPORTED_DELAY_S),
            )?;
            ctx.begin(
                TransitionSpec::scalar(id, Channel::Opacity, scatter_opacity)
                    .with_duration(fade)
                    .with_delay(SUPPORTED_DELAY_S),
            )?;
        }
        fade_class(ctx, ElementClass::ColorLegendEntry, 1.0, fade)?;
        Ok(())
    }
}

fn program_record<'a>(
    ctx: &StageContext<'a>,
    id: ElementId,
) -> StoryResult<Option<&'a ProgramRecord>> {
    let index = ctx.scene.get(id)?.datum_index();
    Ok(index.and_then(|index| ctx.data.programs.records().get(index)))
}

/// Moves every dot to its basic position in the plain grey-on-black
/// look. `opacity` is left alone when `None`.
fn place_dots_at_basic(ctx: &mut StageContext<'_>, opacity: Option<f64>) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    for id in ctx.scene.select(ElementClass::ScatterDot) {
        let Some(record) = program_record(ctx, id)? else {
            continue;
        };
        let target = dot_position(
            &ctx.scales.x_scatter,
            &ctx.scales.y_scatter,
            record.basic_expenses,
            record.basic_income,
        );
        ctx.begin(TransitionSpec::scalar(id, Channel::X, target.x).with_duration(fade))?;
        ctx.begin(TransitionSpec::scalar(id, Channel::Y, target.y).with_duration(fade))?;
        ctx.begin(TransitionSpec::color(id, Channel::StrokeColor, BLACK).with_duration(fade))?;
        ctx.begin(TransitionSpec::color(id, Channel::FillColor, GREY).with_duration(fade))?;
        if let Some(opacity) = opacity {
            ctx.begin(TransitionSpec::scalar(id, Channel::Opacity, opacity).with_duration(fade))?;
        }
    }
    Ok(())
}

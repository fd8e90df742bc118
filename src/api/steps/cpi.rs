//! Steps walking through the CPI line chart, from the long all-items
//! index to the per-category highlights.

use crate::anim::TransitionSpec;
use crate::api::setup::{cpi_change_points, cpi_index_points, cpi_recent_points};
use crate::core::{Easing, PointPx};
use crate::data::CpiCategory;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, fade_id, fade_tagged, show_only_axis};

const LEGEND_CPI_TITLE: &str = "Consumer Price Index (CPI)";
const LEGEND_CPI_SUBTITLE: &str = "An indicator of inflation. Base period is 2002";
const LEGEND_CHANGE_TITLE: &str = "12-month % change";
const LEGEND_CHANGE_SUBTITLE: &str = "Compared to last year";
/// Dash the index line takes once it shares the stage with the
/// category lines.
const CPI_DASH: (f64, f64) = (10.0, 5.0);
/// Opacity context lines drop to while a category is highlighted.
const DIM_OPACITY: f64 = 0.2;

/// First look at the all-items index.
pub(crate) struct ShowCpiIndex;

impl StepHandler for ShowCpiIndex {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::TreemapPanel, 0.0, fade)?;
        set_legend(ctx, LEGEND_CPI_TITLE, LEGEND_CPI_SUBTITLE)?;
        show_only_axis(ctx, ElementClass::AxisBottom, "months-multi")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "cpi-index")?;
        let points = cpi_index_points(ctx.data, ctx.scales);
        retarget_index_line(ctx, points, None, fade, Easing::Linear)?;
        Ok(())
    }
}

/// Same months, re-expressed as year-over-year change.
pub(crate) struct ShowCpiChange;

impl StepHandler for ShowCpiChange {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::CategoryLine, 0.0, fade)?;
        fade_class(ctx, ElementClass::CategoryLineLabel, 0.0, fade)?;
        set_legend(ctx, LEGEND_CHANGE_TITLE, LEGEND_CHANGE_SUBTITLE)?;
        show_only_axis(ctx, ElementClass::AxisBottom, "months-multi")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "cpi-change")?;
        let points = cpi_change_points(ctx.data, ctx.scales);
        retarget_index_line(ctx, points, None, fade, Easing::Linear)?;
        Ok(())
    }
}

/// Narrows to the recent window and fades in every category line.
pub(crate) struct ShowCategoryLines;

impl StepHandler for ShowCategoryLines {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let morph = ctx.style.morph_s();
        let line_opacity = ctx.style.line_opacity;
        let width = ctx.style.plot.width;

        for id in ctx.scene.select(ElementClass::HighlightRule) {
            ctx.begin(TransitionSpec::scalar(id, Channel::X2, width).with_duration(fade))?;
        }
        fade_class(ctx, ElementClass::HighlightRuleLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::LegendTitle, 1.0, fade)?;
        fade_class(ctx, ElementClass::LegendSubtitle, 1.0, fade)?;
        show_only_axis(ctx, ElementClass::AxisBottom, "months-recent")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "cpi-span")?;

        let points = cpi_recent_points(ctx.data, ctx.scales);
        retarget_index_line(ctx, points, Some(CPI_DASH), morph, Easing::QuadInOut)?;
        fade_class(ctx, ElementClass::CategoryLine, line_opacity, morph)?;
        fade_class(ctx, ElementClass::CategoryLineLabel, 1.0, morph)?;
        Ok(())
    }
}

/// Dims the pack and pulls shelter forward.
pub(crate) struct HighlightHousing;

impl StepHandler for HighlightHousing {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let dim = ctx.style.dim_s();
        fade_class(ctx, ElementClass::LegendTitle, 0.0, dim)?;
        fade_class(ctx, ElementClass::LegendSubtitle, 0.0, dim)?;
        fade_class(ctx, ElementClass::CategoryLine, DIM_OPACITY, dim)?;
        fade_class(ctx, ElementClass::CategoryLineLabel, DIM_OPACITY, dim)?;
        dim_index_line(ctx)?;
        highlight_off(ctx, CpiCategory::Food)?;
        highlight_off(ctx, CpiCategory::Transportation)?;
        highlight_on(ctx, CpiCategory::Shelter)?;
        Ok(())
    }
}

/// Swaps the highlight to food and transportation together.
pub(crate) struct HighlightFoodTransport;

impl StepHandler for HighlightFoodTransport {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        let dim = ctx.style.dim_s();
        highlight_off(ctx, CpiCategory::Shelter)?;

        // Clears the scatter when arriving from below.
        fade_class(ctx, ElementClass::ScatterDot, 0.0, fade)?;
        fade_class(ctx, ElementClass::DiagonalRule, 0.0, fade)?;
        fade_class(ctx, ElementClass::DiagonalRuleLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::ScatterAxisLabel, 0.0, fade)?;
        fade_class(ctx, ElementClass::ShapeLegendEntry, 0.0, fade)?;

        show_only_axis(ctx, ElementClass::AxisBottom, "months-recent")?;
        show_only_axis(ctx, ElementClass::AxisLeft, "cpi-span")?;
        fade_class(ctx, ElementClass::CategoryLine, DIM_OPACITY, dim)?;
        fade_class(ctx, ElementClass::CategoryLineLabel, DIM_OPACITY, dim)?;
        dim_index_line(ctx)?;
        highlight_on(ctx, CpiCategory::Food)?;
        highlight_on(ctx, CpiCategory::Transportation)?;
        Ok(())
    }
}

fn set_legend(ctx: &mut StageContext<'_>, title: &str, subtitle: &str) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    if let Some(id) = ctx.scene.select_one(ElementClass::LegendTitle) {
        ctx.scene.set_text(id, title)?;
        fade_id(ctx, id, 1.0, fade)?;
    }
    if let Some(id) = ctx.scene.select_one(ElementClass::LegendSubtitle) {
        ctx.scene.set_text(id, subtitle)?;
        fade_id(ctx, id, 1.0, fade)?;
    }
    Ok(())
}

/// Moves the index line onto a new projection while drawing it fully
/// in. The dash swap is instant; interpolating dash lengths reads as
/// flicker.
fn retarget_index_line(
    ctx: &mut StageContext<'_>,
    points: Vec<PointPx>,
    dash: Option<(f64, f64)>,
    duration: f64,
    easing: Easing,
) -> StoryResult<()> {
    let Some(line) = ctx.scene.select_one(ElementClass::CpiLine) else {
        return Ok(());
    };
    let line_opacity = ctx.style.line_opacity;
    ctx.scene.get_mut(line)?.dash = dash;
    ctx.begin(
        TransitionSpec::polyline(line, points)
            .with_duration(duration)
            .with_easing(easing),
    )?;
    ctx.begin(
        TransitionSpec::scalar(line, Channel::DrawnFraction, 1.0)
            .with_duration(duration)
            .with_easing(easing),
    )?;
    ctx.begin(
        TransitionSpec::scalar(line, Channel::Opacity, line_opacity)
            .with_duration(duration)
            .with_easing(easing),
    )?;
    Ok(())
}

/// Drops the index line into the background, restoring the drawn state
/// the scatter steps unwind.
fn dim_index_line(ctx: &mut StageContext<'_>) -> StoryResult<()> {
    let dim = ctx.style.dim_s();
    let Some(line) = ctx.scene.select_one(ElementClass::CpiLine) else {
        return Ok(());
    };
    ctx.scene.get_mut(line)?.dash = Some(CPI_DASH);
    ctx.begin(TransitionSpec::scalar(line, Channel::Opacity, DIM_OPACITY).with_duration(dim))?;
    ctx.begin(TransitionSpec::scalar(line, Channel::DrawnFraction, 1.0).with_duration(dim))?;
    Ok(())
}

/// Lifts one category line, shows its label instantly and sweeps its
/// rule across the chart.
fn highlight_on(ctx: &mut StageContext<'_>, category: CpiCategory) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    let dim = ctx.style.dim_s();
    let line_opacity = ctx.style.line_opacity;
    let tag = category.label();

    fade_tagged(ctx, ElementClass::CategoryLine, tag, line_opacity, dim)?;
    for id in ctx.scene.select_tagged(ElementClass::CategoryLineLabel, tag) {
        ctx.begin(TransitionSpec::scalar(id, Channel::Opacity, 1.0).with_duration(0.0))?;
    }
    for id in ctx.scene.select_tagged(ElementClass::HighlightRule, tag) {
        ctx.begin(TransitionSpec::scalar(id, Channel::X2, 0.0).with_duration(fade))?;
    }
    fade_tagged(ctx, ElementClass::HighlightRuleLabel, tag, 1.0, fade)?;
    Ok(())
}

fn highlight_off(ctx: &mut StageContext<'_>, category: CpiCategory) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    let dim = ctx.style.dim_s();
    let width = ctx.style.plot.width;
    let tag = category.label();

    fade_tagged(ctx, ElementClass::CategoryLine, tag, DIM_OPACITY, dim)?;
    fade_tagged(ctx, ElementClass::CategoryLineLabel, tag, DIM_OPACITY, dim)?;
    for id in ctx.scene.select_tagged(ElementClass::HighlightRule, tag) {
        ctx.begin(TransitionSpec::scalar(id, Channel::X2, width).with_duration(fade))?;
    }
    fade_tagged(ctx, ElementClass::HighlightRuleLabel, tag, 0.0, fade)?;
    Ok(())
}

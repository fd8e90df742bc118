//! Funding bar steps, ending with the reorder by money left over.

use crate::anim::TransitionSpec;
use crate::charts::{cost_bar, funding_bar};
use crate::data::FundingRecord;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass, ElementId};
use crate::story::{StageContext, StepHandler};

use super::{fade_class, show_only_axis};

/// Funding per institution, growing rightward from zero.
pub(crate) struct ShowFundingBars;

impl StepHandler for ShowFundingBars {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        show_only_axis(ctx, ElementClass::AxisTop, "funding")?;
        fade_class(ctx, ElementClass::EmbedPanel, 0.0, fade)?;
        fade_class(ctx, ElementClass::BarUnitLabel, 1.0, fade)?;

        // Cost bars wait collapsed at each funding tip.
        for id in ctx.scene.select(ElementClass::CostBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let x = ctx.scales.x_bar.position(record.funding);
            ctx.begin(TransitionSpec::scalar(id, Channel::X, x).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, 0.0).with_duration(fade))?;
        }
        for id in ctx.scene.select(ElementClass::FundingBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let bar = funding_bar(
                &ctx.scales.y_bar,
                &ctx.scales.x_bar,
                &record.university,
                record.funding,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, bar.width).with_duration(fade))?;
        }
        fade_class(ctx, ElementClass::BarLabel, 1.0, fade)?;
        Ok(())
    }
}

/// Overlays each bar with its cost of living, anchored at the funding
/// tip so the overhang shows the shortfall.
pub(crate) struct ShowCostBars;

impl StepHandler for ShowCostBars {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        // The reorder step may have shuffled the bands.
        let order: Vec<String> = ctx.data.funding.universities().map(str::to_owned).collect();
        ctx.scales.y_bar.set_domain(order)?;

        for id in ctx.scene.select(ElementClass::FundingBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let bar = funding_bar(
                &ctx.scales.y_bar,
                &ctx.scales.x_bar,
                &record.university,
                record.funding,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, bar.width).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, bar.y).with_duration(fade))?;
        }
        for id in ctx.scene.select(ElementClass::BarLabel) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let y = label_y(ctx, &record.university);
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, y).with_duration(fade))?;
        }
        for id in ctx.scene.select(ElementClass::CostBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let bar = cost_bar(
                &ctx.scales.y_bar,
                &ctx.scales.x_bar,
                &record.university,
                record.funding,
                record.cost_of_living,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::X, bar.x).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, bar.y).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, bar.width).with_duration(fade))?;
        }
        Ok(())
    }
}

/// Re-sorts the bands by what is left after living costs, worst first.
pub(crate) struct ReorderBars;

impl StepHandler for ReorderBars {
    fn enter(&self, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let fade = ctx.style.fade_s;
        fade_class(ctx, ElementClass::BarUnitLabel, 1.0, fade)?;
        show_only_axis(ctx, ElementClass::AxisTop, "funding")?;
        fade_class(ctx, ElementClass::ClosingTitle, 0.0, fade)?;

        let order: Vec<String> = ctx
            .data
            .funding
            .sorted_by_remaining()
            .into_iter()
            .map(|record| record.university)
            .collect();
        ctx.scales.y_bar.set_domain(order)?;

        for id in ctx.scene.select(ElementClass::FundingBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let bar = funding_bar(
                &ctx.scales.y_bar,
                &ctx.scales.x_bar,
                &record.university,
                record.funding,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, bar.width).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, bar.y).with_duration(fade))?;
        }
        // The cost bar keeps its x; only funding and cost set it, and
        // neither changes with the band order.
        for id in ctx.scene.select(ElementClass::CostBar) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let bar = cost_bar(
                &ctx.scales.y_bar,
                &ctx.scales.x_bar,
                &record.university,
                record.funding,
                record.cost_of_living,
            );
            ctx.begin(TransitionSpec::scalar(id, Channel::Width, bar.width).with_duration(fade))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, bar.y).with_duration(fade))?;
        }
        for id in ctx.scene.select(ElementClass::BarLabel) {
            let Some(record) = funding_record(ctx, id)? else {
                continue;
            };
            let y = label_y(ctx, &record.university);
            ctx.begin(TransitionSpec::scalar(id, Channel::Opacity, 1.0).with_duration(0.0))?;
            ctx.begin(TransitionSpec::scalar(id, Channel::Y, y).with_duration(fade))?;
        }
        Ok(())
    }
}

/// Labels hang just above the lower band edge, matching how setup
/// places them.
fn label_y(ctx: &StageContext<'_>, university: &str) -> f64 {
    ctx.scales.y_bar.position(university) + ctx.scales.y_bar.bandwidth() / 1.2
}

fn funding_record<'a>(
    ctx: &StageContext<'a>,
    id: ElementId,
) -> StoryResult<Option<&'a FundingRecord>> {
    let index = ctx.scene.get(id)?.datum_index();
    Ok(index.and_then(|index| ctx.data.funding.records().get(index)))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::Stage;
    use super::{ReorderBars, ShowCostBars, ShowFundingBars};
    use crate::scene::{Channel, ElementClass};
    use crate::story::StepHandler;

    fn bar_scalar(stage: &Stage, class: ElementClass, university: &str, channel: Channel) -> f64 {
        let id = stage.scene.select_tagged(class, university)[0];
        stage.scene.scalar(id, channel).expect("scalar")
    }

    #[test]
    fn funding_bars_grow_to_their_funding() {
        let mut stage = Stage::new();
        ShowFundingBars.enter(&mut stage.ctx()).expect("enter");
        stage.settle();

        for record in stage.data.funding.records() {
            let expected = stage.scales.x_bar.position(record.funding);
            let width = bar_scalar(
                &stage,
                ElementClass::FundingBar,
                &record.university,
                Channel::Width,
            );
            assert!((width - expected).abs() <= 1e-9);
            let cost_width = bar_scalar(
                &stage,
                ElementClass::CostBar,
                &record.university,
                Channel::Width,
            );
            assert!(cost_width <= 1e-9);
        }
    }

    #[test]
    fn cost_bars_anchor_right_at_the_funding_tip() {
        let mut stage = Stage::new();
        ShowCostBars.enter(&mut stage.ctx()).expect("enter");
        stage.settle();

        for record in stage.data.funding.records() {
            let left = stage
                .scales
                .x_bar
                .position(record.funding - record.cost_of_living);
            let right = stage.scales.x_bar.position(record.funding);
            let x = bar_scalar(&stage, ElementClass::CostBar, &record.university, Channel::X);
            let width = bar_scalar(
                &stage,
                ElementClass::CostBar,
                &record.university,
                Channel::Width,
            );
            assert!((x - left.min(right)).abs() <= 1e-9);
            assert!((width - (right - left).abs()).abs() <= 1e-9);
        }
    }

    #[test]
    fn reorder_ranks_the_deepest_shortfall_first() {
        let mut stage = Stage::new();
        ShowCostBars.enter(&mut stage.ctx()).expect("cost bars");
        stage.settle();
        // Dataset order puts Alberta on top.
        let alberta = bar_scalar(&stage, ElementClass::FundingBar, "Alberta", Channel::Y);
        let ubc = bar_scalar(
            &stage,
            ElementClass::FundingBar,
            "University of British Columbia",
            Channel::Y,
        );
        assert!(alberta < ubc);

        ReorderBars.enter(&mut stage.ctx()).expect("reorder");
        stage.settle();
        let alberta = bar_scalar(&stage, ElementClass::FundingBar, "Alberta", Channel::Y);
        let ubc = bar_scalar(
            &stage,
            ElementClass::FundingBar,
            "University of British Columbia",
            Channel::Y,
        );
        let mcgill = bar_scalar(&stage, ElementClass::FundingBar, "McGill", Channel::Y);
        assert!(ubc < mcgill);
        assert!(mcgill < alberta);

        // Labels ride along with their bars, keeping their inset.
        let label = bar_scalar(
            &stage,
            ElementClass::BarLabel,
            "University of British Columbia",
            Channel::Y,
        );
        let inset = stage.scales.y_bar.bandwidth() / 1.2;
        assert!((label - (ubc + inset)).abs() <= 1e-9);
    }
}

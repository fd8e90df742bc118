//! The authored steps of the cost-of-living story.
//!
//! Setup builds the whole cast; handlers only move opacity, geometry
//! and color between authored states. Each enter also restores what the
//! neighbouring steps change, so arriving from either scroll direction
//! lands on the same stage.

mod balls;
mod bars;
mod cpi;
mod embed;
mod scatter;
mod title;
mod treemap_panel;

pub(crate) use balls::ShowSafetyBalls;
pub(crate) use bars::{ReorderBars, ShowCostBars, ShowFundingBars};
pub(crate) use cpi::{
    HighlightFoodTransport, HighlightHousing, ShowCategoryLines, ShowCpiChange, ShowCpiIndex,
};
pub(crate) use embed::ShowEmbed;
pub(crate) use scatter::{HighlightShortfall, ShowScatter, ShowSupportShift};
pub(crate) use title::{ShowClosing, ShowTitle};
pub(crate) use treemap_panel::{FocusTreemap, ShowTreemap};

use crate::anim::TransitionSpec;
use crate::error::StoryResult;
use crate::scene::{Channel, ElementClass, ElementId};
use crate::story::StageContext;

/// Fades one element over `duration` seconds.
fn fade_id(
    ctx: &mut StageContext<'_>,
    id: ElementId,
    opacity: f64,
    duration: f64,
) -> StoryResult<()> {
    ctx.begin(TransitionSpec::scalar(id, Channel::Opacity, opacity).with_duration(duration))
}

/// Fades every element of `class`.
fn fade_class(
    ctx: &mut StageContext<'_>,
    class: ElementClass,
    opacity: f64,
    duration: f64,
) -> StoryResult<()> {
    for id in ctx.scene.select(class) {
        fade_id(ctx, id, opacity, duration)?;
    }
    Ok(())
}

/// Fades the elements of `class` carrying `tag`.
fn fade_tagged(
    ctx: &mut StageContext<'_>,
    class: ElementClass,
    tag: &str,
    opacity: f64,
    duration: f64,
) -> StoryResult<()> {
    for id in ctx.scene.select_tagged(class, tag) {
        fade_id(ctx, id, opacity, duration)?;
    }
    Ok(())
}

/// Shows the `tag` variant of an axis family and hides its siblings.
fn show_only_axis(ctx: &mut StageContext<'_>, class: ElementClass, tag: &str) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    for id in ctx.scene.select(class) {
        let shown = ctx.scene.get(id)?.tag() == Some(tag);
        fade_id(ctx, id, if shown { 1.0 } else { 0.0 }, fade)?;
    }
    Ok(())
}

/// Hides an entire axis family.
fn hide_axis(ctx: &mut StageContext<'_>, class: ElementClass) -> StoryResult<()> {
    let fade = ctx.style.fade_s;
    fade_class(ctx, class, 0.0, fade)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::anim::TransitionScheduler;
    use crate::api::setup::{build_scales, build_scene};
    use crate::core::{Margins, PlotArea, Viewport};
    use crate::data::DatasetBundle;
    use crate::scene::Scene;
    use crate::story::{ChartScales, StageContext, StepStyle};
    use crate::treemap::ZoomTreemap;

    pub(crate) const MULTI: &str = "\
Time,allItems,YearGroup,MonthCPI
95-Jan,87.6,1995,0.021
95-Feb,88.1,1995,0.019
22-Mar,148.9,2022,0.067
";

    pub(crate) const RECENT: &str = "\
Time,allItems,MonthCPI,FoodMonthCPI,ShelterMonthCPI,HouseholdMonthCPI,ClothingMonthCPI,TransportationMonthCPI,HealthMonthCPI,RecreationMonthCPI
22-Jan,145.3,0.051,0.065,0.062,0.01,0.002,0.081,0.02,0.03
22-Feb,146.8,0.057,0.073,0.066,0.012,0.004,0.086,0.021,0.033
22-Mar,148.9,0.067,0.088,0.071,0.015,0.009,0.119,0.022,0.041
";

    // Deliberately not in remaining order so the reorder step moves
    // something.
    pub(crate) const FUNDING: &str = "\
University,Yearly_funding_kCAD,Yearly_col_kCAD,Yearly_left_kCAD
Alberta,25.0,24.5,0.5
University of British Columbia,22.0,28.4,-6.4
McGill,19.0,23.0,-4.0
";

    pub(crate) const PROGRAMS: &str = "\
Program,Basic_Expenses,Basic_Income,Supported_Income
PhD,2000,1800,2200
MSc,2100,1700,1900
PhD,1900,2000,2400
";

    /// Owns everything a handler borrows through [`StageContext`].
    pub(crate) struct Stage {
        pub scene: Scene,
        pub scheduler: TransitionScheduler,
        pub scales: ChartScales,
        pub data: DatasetBundle,
        pub style: StepStyle,
        pub treemap: ZoomTreemap,
    }

    impl Stage {
        pub(crate) fn new() -> Self {
            let data =
                DatasetBundle::from_csv_strs(MULTI, RECENT, FUNDING, PROGRAMS).expect("bundle");
            let plot =
                PlotArea::from_viewport(Viewport::new(660, 510), Margins::default()).expect("plot");
            let scales = build_scales(&data, plot).expect("scales");
            let style = StepStyle::new(plot);
            let scene = build_scene(&data, &scales, &style).expect("scene");
            Self {
                scene,
                scheduler: TransitionScheduler::new(),
                scales,
                data,
                style,
                treemap: ZoomTreemap::with_default_expenses().expect("treemap"),
            }
        }

        pub(crate) fn ctx(&mut self) -> StageContext<'_> {
            StageContext {
                scene: &mut self.scene,
                scheduler: &mut self.scheduler,
                scales: &mut self.scales,
                data: &self.data,
                style: &self.style,
                treemap: &mut self.treemap,
            }
        }

        /// Runs well past every delay and duration a step schedules.
        /// Looping transitions stay in flight, so this is bounded, not
        /// drained.
        pub(crate) fn settle(&mut self) {
            for _ in 0..64 {
                if !self
                    .scheduler
                    .advance(0.1, &mut self.scene)
                    .expect("advance")
                {
                    break;
                }
            }
        }
    }
}

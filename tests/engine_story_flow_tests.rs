use scrolly_rs::api::{StoryConfig, StoryEngine};
use scrolly_rs::data::DatasetBundle;
use scrolly_rs::render::NullRenderer;
use scrolly_rs::scene::{Channel, ElementClass};

const MULTI: &str = "\
Time,allItems,YearGroup,MonthCPI
95-Jan,87.6,1995,0.021
95-Feb,88.1,1995,0.019
22-Mar,148.9,2022,0.067
";

const RECENT: &str = "\
Time,allItems,MonthCPI,FoodMonthCPI,ShelterMonthCPI,HouseholdMonthCPI,ClothingMonthCPI,TransportationMonthCPI,HealthMonthCPI,RecreationMonthCPI
22-Jan,145.3,0.051,0.065,0.062,0.01,0.002,0.081,0.02,0.03
22-Feb,146.8,0.057,0.073,0.066,0.012,0.004,0.086,0.021,0.033
22-Mar,148.9,0.067,0.088,0.071,0.015,0.009,0.119,0.022,0.041
";

const FUNDING: &str = "\
University,Yearly_funding_kCAD,Yearly_col_kCAD,Yearly_left_kCAD
University of British Columbia,22.0,28.4,-6.4
McGill,19.0,23.0,-4.0
Alberta,25.0,24.5,0.5
";

const PROGRAMS: &str = "\
Program,Basic_Expenses,Basic_Income,Supported_Income
PhD,2000,1800,2200
MSc,2100,1700,1900
PhD,1900,2000,2400
";

fn build_engine() -> StoryEngine<NullRenderer> {
    let data = DatasetBundle::from_csv_strs(MULTI, RECENT, FUNDING, PROGRAMS).expect("bundle");
    StoryEngine::new(StoryConfig::default(), data, NullRenderer::default()).expect("engine init")
}

/// Scroll offset of the middle of step `index` under the default
/// uniform tracker (one 510 px viewport height per step).
fn mid_step(index: usize) -> f64 {
    index as f64 * 510.0 + 255.0
}

fn settle(engine: &mut StoryEngine<NullRenderer>) {
    for _ in 0..64 {
        if !engine.advance(0.1).expect("advance") {
            return;
        }
    }
}

#[test]
fn the_story_has_seventeen_named_steps() {
    let engine = build_engine();
    let names: Vec<&str> = (0..engine.step_count())
        .map(|index| engine.step_name(index).expect("step name"))
        .collect();
    assert_eq!(
        names,
        vec![
            "title",
            "treemap",
            "treemap-zoom",
            "cpi-index",
            "cpi-change",
            "category-lines",
            "highlight-housing",
            "highlight-food-transport",
            "scatter",
            "scatter-shortfall",
            "scatter-support",
            "safety-balls",
            "stipend-embed",
            "funding-bars",
            "cost-bars",
            "reorder-bars",
            "closing",
        ]
    );
}

#[test]
fn jumping_ahead_replays_every_skipped_step() {
    let mut engine = build_engine();

    // Straight to the scatter step without visiting anything before it.
    engine.observe_scroll(mid_step(8)).expect("observe");
    assert_eq!(engine.active_step(), Some(8));
    settle(&mut engine);

    // The catch-up ran the axis swaps of the steps in between, so the
    // scatter axes are up and the title is gone.
    let scene = engine.scene();
    let title = scene.select_one(ElementClass::MainTitle).expect("title");
    assert!(scene.scalar(title, Channel::Opacity).expect("opacity") <= 1e-9);
    let dots = scene.select(ElementClass::ScatterDot);
    assert!(!dots.is_empty());
    for id in dots {
        let opacity = scene.scalar(id, Channel::Opacity).expect("opacity");
        assert!((opacity - 0.5).abs() <= 1e-9);
    }
}

#[test]
fn scrolling_back_restores_the_earlier_stage() {
    let mut engine = build_engine();

    engine.observe_scroll(mid_step(4)).expect("observe");
    settle(&mut engine);

    // Back to the title: the reverse replay runs the earlier enters
    // again, so the legend is cleared and the title fades back in.
    engine.observe_scroll(mid_step(0)).expect("observe");
    assert_eq!(engine.active_step(), Some(0));
    settle(&mut engine);

    let scene = engine.scene();
    let title = scene.select_one(ElementClass::MainTitle).expect("title");
    assert!((scene.scalar(title, Channel::Opacity).expect("opacity") - 1.0).abs() <= 1e-9);
    let legend = scene
        .select_one(ElementClass::LegendTitle)
        .expect("legend title");
    assert!(scene.scalar(legend, Channel::Opacity).expect("opacity") <= 1e-9);
}

#[test]
fn the_whole_story_renders_at_every_step() {
    let mut engine = build_engine();
    for index in 0..engine.step_count() {
        engine.observe_scroll(mid_step(index)).expect("observe");
        settle(&mut engine);
        engine.render().expect("render");
        assert!(
            engine.renderer().last_primitive_count() > 0,
            "step {index} rendered nothing"
        );
    }
    assert_eq!(engine.active_step(), Some(16));
}

#[test]
fn embed_opacity_peaks_on_the_embed_step() {
    let mut engine = build_engine();

    engine.observe_scroll(mid_step(11)).expect("observe");
    settle(&mut engine);
    assert!(engine.embed_opacity() <= 1e-9);

    engine.observe_scroll(mid_step(12)).expect("observe");
    settle(&mut engine);
    assert!((engine.embed_opacity() - 1.0).abs() <= 1e-9);

    engine.observe_scroll(mid_step(13)).expect("observe");
    settle(&mut engine);
    assert!(engine.embed_opacity() <= 1e-9);
}

#[test]
fn custom_scroll_extents_replace_the_uniform_ones() {
    let mut engine = build_engine();

    // Host-measured sections: a tall opener, then uneven heights.
    let mut extents = Vec::new();
    let mut top = 120.0;
    for index in 0..engine.step_count() {
        let height = 300.0 + index as f64 * 25.0;
        extents.push((top, height));
        top += height;
    }
    engine.set_scroll_extents(&extents).expect("set extents");

    engine.observe_scroll(0.0).expect("observe");
    assert_eq!(engine.active_step(), Some(0));

    engine.observe_scroll(extents[3].0 + 1.0).expect("observe");
    assert_eq!(engine.active_step(), Some(3));
}

#[test]
fn mismatched_scroll_extents_are_rejected() {
    let mut engine = build_engine();
    let err = engine
        .set_scroll_extents(&[(0.0, 500.0), (500.0, 500.0)])
        .expect_err("two extents cannot cover seventeen steps");
    assert!(err.to_string().contains("17"));
}

#[test]
fn update_progress_drives_the_safety_balls() {
    let mut engine = build_engine();

    engine.observe_scroll(mid_step(11)).expect("observe");
    settle(&mut engine);

    let scene = engine.scene();
    let unsafe_ball = scene
        .select_one(ElementClass::UnsafeBall)
        .expect("unsafe ball");
    let radius = scene.scalar(unsafe_ball, Channel::Radius).expect("radius");
    // Mid-step scroll is past the half-way growth point, so the ball
    // has its full survey radius: 78 respondents + 50 padding.
    assert!((radius - 128.0).abs() <= 1e-9);
}

use scrolly_rs::api::{StoryConfig, StoryEngine};
use scrolly_rs::data::DatasetBundle;
use scrolly_rs::render::NullRenderer;

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
fn the_title_frame_carries_titles_prompt_and_parked_shapes() {
    let mut engine = build_engine();
    engine.observe_scroll(mid_step(0)).expect("observe");
    settle(&mut engine);

    let frame = engine.frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.texts.len(), 2, "main title and subtitle");
    assert_eq!(frame.polylines.len(), 1, "the scroll prompt triangle");
    // Collapsed rules and connectors, zero-width bars and zero-radius
    // balls are already live; only their geometry keeps them unseen.
    assert_eq!(frame.lines.len(), 6, "three rules plus three connectors");
    assert_eq!(frame.rects.len(), 6, "funding and cost bars per university");
    assert_eq!(frame.circles.len(), 2, "both survey balls");
}

#[test]
fn treemap_cells_tile_the_side_panel() {
    let mut engine = build_engine();
    engine.observe_scroll(mid_step(1)).expect("observe");
    settle(&mut engine);

    let frame = engine.frame().expect("frame");
    frame.validate().expect("valid frame");

    // 3 branches + 14 leaves visible under the root focus, plus the six
    // parked zero-width bars.
    assert_eq!(frame.rects.len(), 23);
    assert_eq!(frame.polylines.len(), 0, "the prompt is gone");

    let cells: Vec<_> = frame
        .rects
        .iter()
        .filter(|rect| rect.width > 0.0)
        .collect();
    assert_eq!(cells.len(), 17);
    let min_x = cells.iter().map(|rect| rect.x).fold(f64::MAX, f64::min);
    let max_x = cells
        .iter()
        .map(|rect| rect.x + rect.width)
        .fold(f64::MIN, f64::max);
    let min_y = cells.iter().map(|rect| rect.y).fold(f64::MAX, f64::min);
    let max_y = cells
        .iter()
        .map(|rect| rect.y + rect.height)
        .fold(f64::MIN, f64::max);
    assert!((max_x - min_x - 450.0).abs() <= 1e-9, "cells span the panel");
    assert!((max_y - min_y - 450.0).abs() <= 1e-9);

    // Only the leaves wide enough for a readable label get one.
    assert!(frame.texts.iter().any(|text| text.text == "food"));
    assert!(frame.texts.iter().any(|text| text.text == "housing"));
}

#[test]
fn the_scatter_frame_splits_markers_by_program_shape() {
    let mut engine = build_engine();
    engine.observe_scroll(mid_step(8)).expect("observe");
    settle(&mut engine);

    let frame = engine.frame().expect("frame");
    frame.validate().expect("valid frame");

    // Two PhD records and the PhD legend marker draw as circles, on top
    // of the two parked survey balls.
    assert_eq!(frame.circles.len(), 5);
    // The MSc record and its legend marker draw as square paths.
    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.rects.len(), 6, "bars stay parked at zero width");
    assert!(
        frame.lines.len() >= 9,
        "rules, connectors, the diagonal and two live axes"
    );
    assert!(
        frame.texts.len() >= 7,
        "axis labels, legend entries, the y=x label and tick labels"
    );
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let mut engine = build_engine();
    engine.observe_scroll(mid_step(0)).expect("observe");
    settle(&mut engine);

    let frame = engine.frame().expect("frame");
    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.last_line_count, frame.lines.len());
    assert_eq!(renderer.last_rect_count, frame.rects.len());
    assert_eq!(renderer.last_circle_count, frame.circles.len());
    assert_eq!(renderer.last_polyline_count, frame.polylines.len());
    assert_eq!(renderer.last_text_count, frame.texts.len());
    assert_eq!(renderer.last_primitive_count(), 17);
}

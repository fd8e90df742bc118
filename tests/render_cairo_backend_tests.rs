#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use scrolly_rs::api::{StoryConfig, StoryEngine};
use scrolly_rs::data::DatasetBundle;
use scrolly_rs::render::CairoRenderer;
use scrolly_rs::StoryError;

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

fn build_engine(renderer: CairoRenderer) -> StoryEngine<CairoRenderer> {
    let data = DatasetBundle::from_csv_strs(MULTI, RECENT, FUNDING, PROGRAMS).expect("bundle");
    StoryEngine::new(StoryConfig::default(), data, renderer).expect("engine init")
}

fn settle(engine: &mut StoryEngine<CairoRenderer>) {
    for _ in 0..64 {
        if !engine.advance(0.1).expect("advance") {
            return;
        }
    }
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 510).expect_err("invalid width must fail");
    assert!(matches!(err, StoryError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_the_settled_title_frame() {
    let renderer = CairoRenderer::new(660, 510).expect("renderer");
    let mut engine = build_engine(renderer);

    engine.observe_scroll(255.0).expect("observe");
    settle(&mut engine);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.backend_name(), "cairo+pango+pangocairo");
    let stats = renderer.last_stats();
    assert_eq!(stats.texts_drawn, 2, "title and subtitle");
    assert_eq!(stats.polylines_drawn, 1, "the scroll prompt");
    assert_eq!(stats.lines_drawn, 6);
    assert_eq!(stats.rects_drawn, 6);
    assert_eq!(stats.circles_drawn, 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(660, 510).expect("renderer");
    let mut engine = build_engine(renderer);
    engine.observe_scroll(255.0).expect("observe");
    settle(&mut engine);

    let surface = ImageSurface::create(Format::ARgb32, 660, 510).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(engine.renderer().last_stats().texts_drawn, 2);
}

use scrolly_rs::core::PointPx;
use scrolly_rs::render::{Color, TextHAlign};
use scrolly_rs::scene::{Channel, Element, ElementClass, Geometry, Scene, SymbolShape};

fn label(text: &str) -> Element {
    Element::new(
        ElementClass::LegendTitle,
        Geometry::Text {
            text: text.to_owned(),
            x: 4.0,
            y: 10.0,
            font_size: 12.0,
            h_align: TextHAlign::Left,
        },
    )
}

#[test]
fn rule_endpoints_animate_through_x2_y2() {
    let mut scene = Scene::new();
    let rule = scene.insert(Element::new(
        ElementClass::HighlightRule,
        Geometry::Line {
            x1: 600.0,
            y1: 120.0,
            x2: 600.0,
            y2: 120.0,
        },
    ));

    scene.set_scalar(rule, Channel::X2, 0.0).expect("x2");
    scene.set_scalar(rule, Channel::Y2, 130.0).expect("y2");
    assert!(scene.scalar(rule, Channel::X2).expect("x2").abs() <= 1e-9);
    assert!((scene.scalar(rule, Channel::Y2).expect("y2") - 130.0).abs() <= 1e-9);

    // Width belongs to rects; lines reject it.
    let err = scene.set_scalar(rule, Channel::Width, 5.0).expect_err("no width");
    assert!(err.to_string().contains("width"));
}

#[test]
fn drawn_fraction_lives_on_polylines_only() {
    let mut scene = Scene::new();
    let line = scene.insert(Element::new(
        ElementClass::CpiLine,
        Geometry::Polyline {
            points: vec![PointPx::new(0.0, 0.0), PointPx::new(100.0, 10.0)],
            drawn_fraction: 0.0,
        },
    ));
    let panel = scene.insert(Element::new(
        ElementClass::EmbedPanel,
        Geometry::Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        },
    ));

    scene
        .set_scalar(line, Channel::DrawnFraction, 0.75)
        .expect("drawn fraction");
    assert!((scene.scalar(line, Channel::DrawnFraction).expect("read") - 0.75).abs() <= 1e-9);
    assert!(scene.set_scalar(panel, Channel::DrawnFraction, 0.5).is_err());
}

#[test]
fn symbol_markers_expose_their_size() {
    let mut scene = Scene::new();
    let marker = scene.insert(Element::new(
        ElementClass::ShapeLegendEntry,
        Geometry::Symbol {
            shape: SymbolShape::Triangle,
            cx: 10.0,
            cy: 10.0,
            size: 8.0,
        },
    ));

    scene
        .set_scalar(marker, Channel::SymbolSize, 12.0)
        .expect("symbol size");
    assert!((scene.scalar(marker, Channel::SymbolSize).expect("read") - 12.0).abs() <= 1e-9);
    assert!(scene.scalar(marker, Channel::Radius).is_err());
}

#[test]
fn set_text_repurposes_a_label() {
    let mut scene = Scene::new();
    let legend = scene.insert(label("Consumer Price Index (CPI)"));

    scene
        .set_text(legend, "12-month % change")
        .expect("set text");
    match &scene.get(legend).expect("element").geometry {
        Geometry::Text { text, .. } => assert_eq!(text, "12-month % change"),
        other => panic!("unexpected geometry {other:?}"),
    }

    let ball = scene.insert(Element::new(
        ElementClass::SafeBall,
        Geometry::Circle {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
        },
    ));
    assert!(scene.set_text(ball, "nope").is_err());
}

#[test]
fn points_access_is_polyline_shaped() {
    let mut scene = Scene::new();
    let line = scene.insert(Element::new(
        ElementClass::CategoryLine,
        Geometry::Polyline {
            points: vec![PointPx::new(0.0, 0.0), PointPx::new(5.0, 5.0)],
            drawn_fraction: 1.0,
        },
    ));
    let text = scene.insert(label("food"));

    scene
        .set_points(line, vec![PointPx::new(0.0, 1.0), PointPx::new(5.0, 6.0)])
        .expect("set points");
    assert!((scene.points(line).expect("points")[1].y - 6.0).abs() <= 1e-9);
    assert!(scene.points(text).is_err());
}

#[test]
fn opacity_and_stroke_width_are_universal() {
    let mut scene = Scene::new();
    let ids = [
        scene.insert(label("anything")),
        scene.insert(Element::new(
            ElementClass::ScatterDot,
            Geometry::Circle {
                cx: 0.0,
                cy: 0.0,
                radius: 3.0,
            },
        )),
        scene.insert(
            Element::new(
                ElementClass::FundingBar,
                Geometry::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 4.0,
                },
            )
            .with_stroke(Color::rgb(0.0, 0.0, 0.0), 1.0),
        ),
    ];

    for id in ids {
        scene.set_scalar(id, Channel::Opacity, 0.4).expect("opacity");
        scene
            .set_scalar(id, Channel::StrokeWidth, 2.0)
            .expect("stroke width");
        assert!((scene.scalar(id, Channel::Opacity).expect("read") - 0.4).abs() <= 1e-9);
    }
}

use scrolly_rs::treemap::{TreemapLayout, ZoomTreemap};

fn widget() -> ZoomTreemap {
    ZoomTreemap::with_default_expenses().expect("widget")
}

fn settle(widget: &mut ZoomTreemap) {
    widget.advance(2.0).expect("advance");
    assert!(!widget.is_animating());
}

#[test]
fn clicking_a_leaf_takes_focus_directly() {
    let mut widget = widget();
    let food = widget.layout().find("food").expect("food");

    widget.click(food).expect("click");
    assert_eq!(widget.focus(), food);
    settle(&mut widget);

    let cells = widget.cells().expect("cells");
    assert!(cells[food].x.abs() <= 1e-9 && cells[food].y.abs() <= 1e-9);
    assert!((cells[food].width - 100.0).abs() <= 1e-9);
    assert!((cells[food].height - 100.0).abs() <= 1e-9);

    // Branches at or above the focus depth disappear; sibling leaves
    // stay visible but land outside the normalized square.
    let basic = widget.layout().find("basic expenses").expect("basic");
    assert!(!cells[basic].visible);
    let housing = widget.layout().find("housing").expect("housing");
    assert!(cells[housing].visible);
    assert!(cells[housing].y >= 100.0 - 1e-9);
}

#[test]
fn a_second_click_descends_the_hierarchy() {
    let mut widget = widget();
    let basic = widget.layout().find("basic expenses").expect("basic");
    let food = widget.layout().find("food").expect("food");

    widget.click(basic).expect("zoom to basic");
    settle(&mut widget);
    widget.click(food).expect("zoom to food");
    assert_eq!(widget.focus(), food);
    settle(&mut widget);

    let cells = widget.cells().expect("cells");
    assert!(cells[food].x.abs() <= 1e-9 && cells[food].y.abs() <= 1e-9);
    assert!((cells[food].width - 100.0).abs() <= 1e-9);
    assert!((cells[food].height - 100.0).abs() <= 1e-9);
}

#[test]
fn mid_flight_cells_interpolate_with_cubic_out() {
    let mut widget = ZoomTreemap::with_default_expenses()
        .expect("widget")
        .with_zoom_duration(1.0);
    let basic = widget.layout().find("basic expenses").expect("basic");
    let start_width = 800.0 / 14.0;

    widget.click(basic).expect("click");
    assert!(widget.advance(0.5).expect("advance"));

    let eased = 0.875;
    let cells = widget.cells().expect("cells");
    let cell = &cells[basic];
    assert!(cell.x.abs() <= 1e-9 && cell.y.abs() <= 1e-9);
    assert!((cell.width - (start_width + (100.0 - start_width) * eased)).abs() <= 1e-9);
    assert!((cell.height - (75.0 + 25.0 * eased)).abs() <= 1e-9);

    settle(&mut widget);
    let cells = widget.cells().expect("cells");
    assert!((cells[basic].width - 100.0).abs() <= 1e-9);
    assert!((cells[basic].height - 100.0).abs() <= 1e-9);
}

#[test]
fn a_click_mid_flight_retargets_from_the_current_frame() {
    let mut widget = ZoomTreemap::with_default_expenses()
        .expect("widget")
        .with_zoom_duration(1.0);
    let basic = widget.layout().find("basic expenses").expect("basic");

    widget.click(basic).expect("zoom in");
    assert!(widget.advance(0.25).expect("advance"));

    // Clicking the focused cell mid-flight turns the zoom around.
    widget.click(basic).expect("zoom back out");
    assert_eq!(widget.focus(), TreemapLayout::ROOT);
    settle(&mut widget);

    let cells = widget.cells().expect("cells");
    let node = widget.layout().node(basic).expect("node");
    assert!((cells[basic].x - node.x0()).abs() <= 1e-9);
    assert!((cells[basic].y - node.y0()).abs() <= 1e-9);
    assert!((cells[basic].width - (node.x1() - node.x0())).abs() <= 1e-9);
    assert!((cells[basic].height - (node.y1() - node.y0())).abs() <= 1e-9);
}

#[test]
fn unknown_nodes_are_rejected() {
    let mut widget = widget();
    let err = widget.click(999).expect_err("bogus node");
    assert!(err.to_string().contains("no node"));
    assert_eq!(widget.focus(), TreemapLayout::ROOT);
    assert!(!widget.is_animating());
}

#[test]
fn snapshots_keep_level_order_names() {
    let widget = widget();
    let cells = widget.cells().expect("cells");

    assert_eq!(cells.len(), 18);
    assert_eq!(cells[0].name, "all expenses");
    assert_eq!(cells[0].depth, 0);
    let branch_names: Vec<&str> = cells[1..4].iter().map(|cell| cell.name.as_str()).collect();
    assert_eq!(
        branch_names,
        ["basic expenses", "quality expenses", "other expenses"]
    );
    assert!(cells[4..].iter().all(|cell| cell.depth == 2));

    let food = widget.layout().find("food").expect("food");
    let fill = widget.layout().node(food).expect("node").fill();
    assert_eq!(cells[food].fill, fill);
}

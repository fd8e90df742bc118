//! Builds the scales and the retained scene for the cost-of-living
//! story. Every element any step will ever touch is created here,
//! invisible unless noted; steps only animate what already exists.

use chrono::NaiveDate;
use tracing::debug;

use crate::charts::{
    Tick, cost_bar, diagonal_rule, dot_position, funding_bar, linear_axis_ticks, month_axis_ticks,
    padded_extent, project_series,
};
use crate::core::scale::extent;
use crate::core::{BandScale, LinearScale, MonthScale, PlotArea, PointPx};
use crate::data::{CpiCategory, DatasetBundle, FinancialStatus};
use crate::error::StoryResult;
use crate::render::{Color, TextHAlign};
use crate::scene::{Element, ElementClass, Geometry, Scene, SymbolShape};
use crate::story::{ChartScales, StepStyle};

pub(crate) const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub(crate) const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub(crate) const GREY: Color = Color::rgb(0.5, 0.5, 0.5);
pub(crate) const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub(crate) const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
pub(crate) const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
pub(crate) const STEEL_BLUE: Color = Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
pub(crate) const ORANGE_RED: Color = Color::rgb(1.0, 69.0 / 255.0, 0.0);
pub(crate) const GOLD: Color = Color::rgb(1.0, 215.0 / 255.0, 0.0);
pub(crate) const ASH_GREY: Color = Color::rgb(178.0 / 255.0, 190.0 / 255.0, 181.0 / 255.0);

/// Wheel colors for the seven expense categories, in palette order.
pub(crate) const CATEGORY_PALETTE: [Color; 7] = [
    Color::rgb(31.0 / 255.0, 119.0 / 255.0, 180.0 / 255.0),
    Color::rgb(1.0, 127.0 / 255.0, 14.0 / 255.0),
    Color::rgb(44.0 / 255.0, 160.0 / 255.0, 44.0 / 255.0),
    Color::rgb(214.0 / 255.0, 39.0 / 255.0, 40.0 / 255.0),
    Color::rgb(148.0 / 255.0, 103.0 / 255.0, 189.0 / 255.0),
    Color::rgb(140.0 / 255.0, 86.0 / 255.0, 75.0 / 255.0),
    Color::rgb(227.0 / 255.0, 119.0 / 255.0, 194.0 / 255.0),
];

/// Categories that get their own highlight rule and percentage label.
pub(crate) const HIGHLIGHT_CATEGORIES: [CpiCategory; 3] = [
    CpiCategory::Shelter,
    CpiCategory::Food,
    CpiCategory::Transportation,
];

/// Side of the square panel the treemap widget projects into.
const TREEMAP_PANEL_SIDE: f64 = 450.0;
/// Fixed span for the per-category change axis.
const RECENT_CHANGE_SPAN: (f64, f64) = (-0.05, 0.17);
/// Monthly CAD added on both ends of the scatter domains.
const SCATTER_DOMAIN_PAD: f64 = 200.0;
const BAR_PADDING_INNER: f64 = 0.1;
const DOT_SIZE: f64 = 10.0;
const LEGEND_SYMBOL_SIZE: f64 = 8.0;
const AXIS_TICK_LEN: f64 = 6.0;
const AXIS_FONT_SIZE: f64 = 10.0;

#[must_use]
pub(crate) fn category_color(category: CpiCategory) -> Color {
    CATEGORY_PALETTE[category.palette_index()]
}

#[must_use]
pub(crate) fn status_color(status: FinancialStatus) -> Color {
    match status {
        FinancialStatus::AlwaysEnough => GREEN,
        FinancialStatus::EnoughAfterSupport => BLUE,
        FinancialStatus::StillNotEnough => RED,
    }
}

/// Marker shape for the program at `index` in first-seen order.
#[must_use]
pub(crate) fn program_marker(index: usize) -> SymbolShape {
    match index % 3 {
        0 => SymbolShape::Circle,
        1 => SymbolShape::Square,
        _ => SymbolShape::Triangle,
    }
}

/// Resting height of the scroll prompt, where its bounce starts.
#[must_use]
pub(crate) fn prompt_rest_y(plot: PlotArea) -> f64 {
    plot.height - 27.5
}

/// Projects every scale domain from the loaded datasets onto the plot.
pub(crate) fn build_scales(data: &DatasetBundle, plot: PlotArea) -> StoryResult<ChartScales> {
    let width = plot.width;
    let height = plot.height;

    let month_multi = MonthScale::new(data.multi_year.month_span()?, (0.0, width))?;
    let month_recent = MonthScale::new(data.recent.month_span()?, (0.0, width))?;

    let y_cpi_index = LinearScale::new(data.multi_year.all_items_extent()?, (height, 0.0))?;
    let y_cpi_change = LinearScale::new(
        extent(data.multi_year.records().iter().map(|r| r.month_cpi))?,
        (height, 0.0),
    )?;
    let y_cpi_span = LinearScale::new(RECENT_CHANGE_SPAN, (height, 0.0))?;

    let x_scatter = LinearScale::new(
        padded_extent(
            data.programs.records().iter().map(|r| r.basic_expenses),
            SCATTER_DOMAIN_PAD,
        )?,
        (0.0, width),
    )?;
    let y_scatter = LinearScale::new(
        padded_extent(
            data.programs.records().iter().map(|r| r.supported_income),
            SCATTER_DOMAIN_PAD,
        )?,
        (height, 0.0),
    )?;

    let x_bar = LinearScale::new((0.0, data.funding.max_funding()?), (0.0, width))?;
    let y_bar = BandScale::new(
        data.funding.universities().map(str::to_owned),
        (0.0, height),
        BAR_PADDING_INNER,
    )?;

    Ok(ChartScales {
        month_multi,
        month_recent,
        y_cpi_index,
        y_cpi_change,
        y_cpi_span,
        x_scatter,
        y_scatter,
        x_bar,
        y_bar,
    })
}

/// The multi-year all-items index line in its home projection.
#[must_use]
pub(crate) fn cpi_index_points(data: &DatasetBundle, scales: &ChartScales) -> Vec<PointPx> {
    let values: Vec<(NaiveDate, f64)> = data
        .multi_year
        .records()
        .iter()
        .map(|record| (record.month, record.all_items))
        .collect();
    project_series(&values, &scales.month_multi, &scales.y_cpi_index)
}

/// The same line retargeted to the 12-month change column.
#[must_use]
pub(crate) fn cpi_change_points(data: &DatasetBundle, scales: &ChartScales) -> Vec<PointPx> {
    let values: Vec<(NaiveDate, f64)> = data
        .multi_year
        .records()
        .iter()
        .map(|record| (record.month, record.month_cpi))
        .collect();
    project_series(&values, &scales.month_multi, &scales.y_cpi_change)
}

/// The change column pushed through the recent-window scales. Most of
/// the path lands far left of the plot and is clipped at draw time; the
/// point count must stay equal to the other two projections so the
/// line can morph between them.
#[must_use]
pub(crate) fn cpi_recent_points(data: &DatasetBundle, scales: &ChartScales) -> Vec<PointPx> {
    let values: Vec<(NaiveDate, f64)> = data
        .multi_year
        .records()
        .iter()
        .map(|record| (record.month, record.month_cpi))
        .collect();
    project_series(&values, &scales.month_recent, &scales.y_cpi_span)
}

/// Assembles the full retained scene in paint order.
pub(crate) fn build_scene(
    data: &DatasetBundle,
    scales: &ChartScales,
    style: &StepStyle,
) -> StoryResult<Scene> {
    let mut scene = Scene::new();
    add_titles(&mut scene, style);
    add_treemap_panel(&mut scene, style);
    add_cpi_chart(&mut scene, data, scales, style);
    add_highlight_rules(&mut scene, data, scales, style)?;
    add_axes(&mut scene, scales, style);
    add_scatter(&mut scene, data, scales, style);
    add_balls(&mut scene, style);
    add_embed_panel(&mut scene, style);
    add_bars(&mut scene, data, scales, style);
    add_closing(&mut scene, style);

    debug!(elements = scene.len(), "story scene assembled");
    Ok(scene)
}

fn label(
    class: ElementClass,
    text: impl Into<String>,
    x: f64,
    y: f64,
    font_size: f64,
    fill: Color,
    h_align: TextHAlign,
) -> Element {
    Element::new(
        class,
        Geometry::Text {
            text: text.into(),
            x,
            y,
            font_size,
            h_align,
        },
    )
    .with_fill(fill)
}

fn axis_line(class: ElementClass, tag: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
    Element::new(class, Geometry::Line { x1, y1, x2, y2 })
        .with_tag(tag)
        .with_stroke(BLACK, 1.0)
}

fn add_titles(scene: &mut Scene, style: &StepStyle) {
    let width = style.plot.width;
    let height = style.plot.height;

    scene.insert(label(
        ElementClass::MainTitle,
        "UBC CS CoL",
        width / 5.0,
        height / 5.0,
        50.0,
        BLACK,
        TextHAlign::Left,
    ));
    scene.insert(label(
        ElementClass::SubTitle,
        "Scroll down to learn more!",
        width / 3.0,
        height / 2.0 + height / 5.0,
        40.0,
        BLACK,
        TextHAlign::Left,
    ));
    // Bounces between its rest position and 30px below while the title
    // step is active.
    scene.insert(
        Element::new(
            ElementClass::ScrollPrompt,
            Geometry::Symbol {
                shape: SymbolShape::TriangleDown,
                cx: 80.0,
                cy: prompt_rest_y(style.plot),
                size: 60.0,
            },
        )
        .with_fill(GREY)
        .with_stroke(GREY, 1.0),
    );
}

fn add_treemap_panel(scene: &mut Scene, style: &StepStyle) {
    let side = TREEMAP_PANEL_SIDE
        .min(style.plot.width)
        .min(style.plot.height);
    scene.insert(
        Element::new(
            ElementClass::TreemapPanel,
            Geometry::Rect {
                x: (style.plot.width - side) / 2.0,
                y: (style.plot.height - side) / 2.0,
                width: side,
                height: side,
            },
        )
        .with_fill(WHITE),
    );
}

fn add_cpi_chart(scene: &mut Scene, data: &DatasetBundle, scales: &ChartScales, style: &StepStyle) {
    scene.insert(
        Element::new(
            ElementClass::CpiLine,
            Geometry::Polyline {
                points: cpi_index_points(data, scales),
                drawn_fraction: 0.0,
            },
        )
        .with_stroke(STEEL_BLUE, 2.0)
        .with_opacity(style.line_opacity),
    );

    // Category lines sit at their final recent-window projection from
    // the start; the reveal is a fade.
    for series in data.recent.category_series() {
        let color = category_color(series.category);
        let tag = series.category.label();
        scene.insert(
            Element::new(
                ElementClass::CategoryLine,
                Geometry::Polyline {
                    points: project_series(&series.values, &scales.month_recent, &scales.y_cpi_span),
                    drawn_fraction: 1.0,
                },
            )
            .with_tag(tag)
            .with_stroke(color, 2.0),
        );
        if let Some((month, value)) = series.values.last().copied() {
            scene.insert(
                label(
                    ElementClass::CategoryLineLabel,
                    tag,
                    scales.month_recent.position(month) - 40.0,
                    scales.y_cpi_span.position(value) + 10.0,
                    style.font_size,
                    color,
                    TextHAlign::Left,
                )
                .with_tag(tag),
            );
        }
    }

    // Legend texts are assigned by the steps that repurpose them.
    scene.insert(label(
        ElementClass::LegendTitle,
        "",
        20.0,
        80.0,
        40.0,
        GREY,
        TextHAlign::Left,
    ));
    scene.insert(label(
        ElementClass::LegendSubtitle,
        "",
        25.0,
        110.0,
        20.0,
        ASH_GREY,
        TextHAlign::Left,
    ));
}

fn add_highlight_rules(
    scene: &mut Scene,
    data: &DatasetBundle,
    scales: &ChartScales,
    style: &StepStyle,
) -> StoryResult<()> {
    let width = style.plot.width;
    for category in HIGHLIGHT_CATEGORIES {
        let latest = data.recent.latest(category)?;
        let y = scales.y_cpi_span.position(latest);
        let tag = category.label();
        // Hidden by both endpoints resting at the right edge; showing
        // sweeps x2 across to the axis.
        scene.insert(
            Element::new(
                ElementClass::HighlightRule,
                Geometry::Line {
                    x1: width,
                    y1: y,
                    x2: width,
                    y2: y,
                },
            )
            .with_tag(tag)
            .with_stroke(GREY, 1.0)
            .with_dash(3.0, 2.0)
            .with_opacity(0.8),
        );
        scene.insert(
            label(
                ElementClass::HighlightRuleLabel,
                format!("{}: {:.2}%", tag, latest * 100.0),
                10.0,
                y - 5.0,
                style.font_size,
                BLACK,
                TextHAlign::Left,
            )
            .with_tag(tag),
        );
    }
    Ok(())
}

fn add_axes(scene: &mut Scene, scales: &ChartScales, style: &StepStyle) {
    let width = style.plot.width;
    let height = style.plot.height;

    for (tag, ticks) in [
        ("months-multi", month_axis_ticks(&scales.month_multi)),
        ("months-recent", month_axis_ticks(&scales.month_recent)),
        ("expense", linear_axis_ticks(&scales.x_scatter)),
    ] {
        add_bottom_axis(scene, tag, ticks, width, height);
    }
    for (tag, ticks) in [
        ("cpi-index", linear_axis_ticks(&scales.y_cpi_index)),
        ("cpi-change", linear_axis_ticks(&scales.y_cpi_change)),
        ("cpi-span", linear_axis_ticks(&scales.y_cpi_span)),
        ("income", linear_axis_ticks(&scales.y_scatter)),
    ] {
        add_left_axis(scene, tag, ticks, height);
    }
    add_top_axis(scene, "funding", linear_axis_ticks(&scales.x_bar), width);
}

fn add_bottom_axis(scene: &mut Scene, tag: &str, ticks: Vec<Tick>, width: f64, height: f64) {
    scene.insert(axis_line(
        ElementClass::AxisBottom,
        tag,
        0.0,
        height,
        width,
        height,
    ));
    for tick in ticks {
        scene.insert(axis_line(
            ElementClass::AxisBottom,
            tag,
            tick.position,
            height,
            tick.position,
            height + AXIS_TICK_LEN,
        ));
        scene.insert(
            label(
                ElementClass::AxisBottom,
                tick.label,
                tick.position,
                height + AXIS_TICK_LEN + 2.0,
                AXIS_FONT_SIZE,
                BLACK,
                TextHAlign::Center,
            )
            .with_tag(tag),
        );
    }
}

fn add_left_axis(scene: &mut Scene, tag: &str, ticks: Vec<Tick>, height: f64) {
    scene.insert(axis_line(ElementClass::AxisLeft, tag, 0.0, 0.0, 0.0, height));
    for tick in ticks {
        scene.insert(axis_line(
            ElementClass::AxisLeft,
            tag,
            -AXIS_TICK_LEN,
            tick.position,
            0.0,
            tick.position,
        ));
        scene.insert(
            label(
                ElementClass::AxisLeft,
                tick.label,
                -(AXIS_TICK_LEN + 3.0),
                tick.position - AXIS_FONT_SIZE / 2.0,
                AXIS_FONT_SIZE,
                BLACK,
                TextHAlign::Right,
            )
            .with_tag(tag),
        );
    }
}

fn add_top_axis(scene: &mut Scene, tag: &str, ticks: Vec<Tick>, width: f64) {
    scene.insert(axis_line(ElementClass::AxisTop, tag, 0.0, 0.0, width, 0.0));
    for tick in ticks {
        scene.insert(axis_line(
            ElementClass::AxisTop,
            tag,
            tick.position,
            0.0,
            tick.position,
            -AXIS_TICK_LEN,
        ));
        scene.insert(
            label(
                ElementClass::AxisTop,
                tick.label,
                tick.position,
                -(AXIS_TICK_LEN + 2.0 + AXIS_FONT_SIZE),
                AXIS_FONT_SIZE,
                BLACK,
                TextHAlign::Center,
            )
            .with_tag(tag),
        );
    }
}

fn add_scatter(scene: &mut Scene, data: &DatasetBundle, scales: &ChartScales, style: &StepStyle) {
    let width = style.plot.width;
    let height = style.plot.height;

    // Axis captions hang in the margins below and above the plot.
    scene.insert(label(
        ElementClass::ScatterAxisLabel,
        "Expense (Monthly)",
        width + style.margins.right,
        height + style.margins.bottom - 5.0,
        11.0,
        BLACK,
        TextHAlign::Right,
    ));
    scene.insert(label(
        ElementClass::ScatterAxisLabel,
        "Income (Monthly)",
        70.0,
        -10.0,
        11.0,
        BLACK,
        TextHAlign::Right,
    ));

    // Caption anchors are authored in data space.
    scene.insert(
        label(
            ElementClass::ScatterCaption,
            format!("{:.1}%", data.programs.still_short_percentage()),
            scales.x_scatter.position(3500.0),
            scales.y_scatter.position(8000.0),
            40.0,
            RED,
            TextHAlign::Left,
        )
        .with_tag("share"),
    );
    scene.insert(
        label(
            ElementClass::ScatterCaption,
            "cannot offset the basic expense",
            scales.x_scatter.position(3000.0),
            scales.y_scatter.position(7400.0),
            20.0,
            BLACK,
            TextHAlign::Left,
        )
        .with_tag("note"),
    );

    let (start, end) = diagonal_rule(&scales.x_scatter, &scales.y_scatter);
    scene.insert(
        Element::new(
            ElementClass::DiagonalRule,
            Geometry::Line {
                x1: start.x,
                y1: start.y,
                x2: end.x,
                y2: end.y,
            },
        )
        .with_stroke(GREY, 1.0)
        .with_dash(3.0, 2.0),
    );
    scene.insert(label(
        ElementClass::DiagonalRuleLabel,
        "y=x",
        end.x,
        end.y,
        style.font_size,
        BLACK,
        TextHAlign::Left,
    ));

    let programs = data.programs.programs();
    for (index, record) in data.programs.records().iter().enumerate() {
        let shape = programs
            .iter()
            .position(|candidate| candidate == &record.program)
            .map_or(SymbolShape::Circle, program_marker);
        let basic = dot_position(
            &scales.x_scatter,
            &scales.y_scatter,
            record.basic_expenses,
            record.basic_income,
        );
        let supported = dot_position(
            &scales.x_scatter,
            &scales.y_scatter,
            record.basic_expenses,
            record.supported_income,
        );

        scene.insert(
            Element::new(
                ElementClass::ScatterDot,
                Geometry::Symbol {
                    shape,
                    cx: basic.x,
                    cy: basic.y,
                    size: DOT_SIZE,
                },
            )
            .with_tag(record.status.label())
            .with_datum_index(index)
            .with_fill(GREY)
            .with_stroke(BLACK, 1.0),
        );
        scene.insert(
            Element::new(
                ElementClass::SupportedDot,
                Geometry::Symbol {
                    shape,
                    cx: supported.x,
                    cy: supported.y,
                    size: DOT_SIZE,
                },
            )
            .with_tag(record.status.label())
            .with_datum_index(index)
            .with_fill(status_color(record.status))
            .with_stroke(BLACK, 1.0),
        );
        // Invisible while collapsed to a point; only y1 ever moves.
        scene.insert(
            Element::new(
                ElementClass::ConnectorLine,
                Geometry::Line {
                    x1: basic.x,
                    y1: basic.y,
                    x2: basic.x,
                    y2: basic.y,
                },
            )
            .with_datum_index(index)
            .with_stroke(GREY, 1.0)
            .with_dash(2.0, 2.0)
            .with_opacity(0.8),
        );
    }

    for (index, program) in programs.iter().enumerate() {
        let y = 10.0 + index as f64 * 15.0;
        scene.insert(label(
            ElementClass::ShapeLegendEntry,
            program.clone(),
            25.0,
            y,
            13.0,
            BLACK,
            TextHAlign::Left,
        ));
        scene.insert(
            Element::new(
                ElementClass::ShapeLegendEntry,
                Geometry::Symbol {
                    shape: program_marker(index),
                    cx: 15.0,
                    cy: y - 5.0,
                    size: LEGEND_SYMBOL_SIZE,
                },
            )
            .with_fill(GREY),
        );
    }

    for (index, status) in FinancialStatus::ALL.into_iter().enumerate() {
        let y = 55.0 + index as f64 * 15.0;
        scene.insert(
            label(
                ElementClass::ColorLegendEntry,
                status.label(),
                25.0,
                y,
                13.0,
                BLACK,
                TextHAlign::Left,
            )
            .with_tag(status.label()),
        );
        // The swatch keeps its translucency in the fill so the whole
        // legend toggles with one opacity value.
        scene.insert(
            Element::new(
                ElementClass::ColorLegendEntry,
                Geometry::Circle {
                    cx: 15.0,
                    cy: y - 5.0,
                    radius: 4.0,
                },
            )
            .with_tag(status.label())
            .with_fill(status_color(status).with_alpha(style.scatter_opacity)),
        );
    }
}

fn add_balls(scene: &mut Scene, style: &StepStyle) {
    let cx = style.plot.center_x();
    let cy = style.plot.center_y();
    let spread =
        f64::from(style.unsafe_count) + f64::from(style.safe_count) + style.ball_radius_pad * 2.0;

    scene.insert(
        Element::new(
            ElementClass::UnsafeBall,
            Geometry::Circle {
                cx,
                cy,
                radius: 0.0,
            },
        )
        .with_fill(RED)
        .with_opacity(0.7),
    );
    scene.insert(
        Element::new(
            ElementClass::SafeBall,
            Geometry::Circle {
                cx: cx + spread,
                cy,
                radius: 0.0,
            },
        )
        .with_fill(STEEL_BLUE)
        .with_opacity(0.7),
    );

    let total = f64::from(style.unsafe_count) + f64::from(style.safe_count);
    let share = f64::from(style.unsafe_count) * 100.0 / total;
    scene.insert(label(
        ElementClass::BallCaption,
        format!("{share:.1}%"),
        cx,
        cy,
        40.0,
        WHITE,
        TextHAlign::Center,
    ));
    scene.insert(label(
        ElementClass::BallCaption,
        "feel unsafe",
        cx,
        cy + 25.0,
        15.0,
        WHITE,
        TextHAlign::Center,
    ));
    scene.insert(label(
        ElementClass::BallCaption,
        "in current stipend amount",
        cx,
        cy + 45.0,
        15.0,
        WHITE,
        TextHAlign::Center,
    ));
}

fn add_embed_panel(scene: &mut Scene, style: &StepStyle) {
    // Placeholder region for the host-managed lollipop embed; only its
    // opacity matters.
    scene.insert(
        Element::new(
            ElementClass::EmbedPanel,
            Geometry::Rect {
                x: 0.0,
                y: 0.0,
                width: style.plot.width,
                height: style.plot.height,
            },
        )
        .with_tag("lollipop")
        .with_fill(WHITE),
    );
}

fn add_bars(scene: &mut Scene, data: &DatasetBundle, scales: &ChartScales, style: &StepStyle) {
    let width = style.plot.width;

    scene.insert(label(
        ElementClass::BarUnitLabel,
        "kCAD",
        width - 10.0,
        20.0,
        10.0,
        BLACK,
        TextHAlign::Left,
    ));

    for (index, record) in data.funding.records().iter().enumerate() {
        let band = funding_bar(&scales.y_bar, &scales.x_bar, &record.university, 0.0);
        let highlighted =
            style.highlight_institution.as_deref() == Some(record.university.as_str());
        scene.insert(
            Element::new(
                ElementClass::FundingBar,
                Geometry::Rect {
                    x: 0.0,
                    y: band.y,
                    width: 0.0,
                    height: band.height,
                },
            )
            .with_tag(record.university.clone())
            .with_datum_index(index)
            .with_fill(if highlighted { GOLD } else { STEEL_BLUE })
            .with_opacity(style.bar_opacity),
        );

        let anchor = cost_bar(
            &scales.y_bar,
            &scales.x_bar,
            &record.university,
            record.funding,
            0.0,
        );
        scene.insert(
            Element::new(
                ElementClass::CostBar,
                Geometry::Rect {
                    x: anchor.x,
                    y: anchor.y,
                    width: 0.0,
                    height: anchor.height,
                },
            )
            .with_tag(record.university.clone())
            .with_datum_index(index)
            .with_fill(ORANGE_RED)
            .with_opacity(style.bar_opacity),
        );

        scene.insert(
            label(
                ElementClass::BarLabel,
                record.university.clone(),
                15.0,
                band.y + band.height / 1.2,
                style.font_size,
                BLACK,
                TextHAlign::Left,
            )
            .with_tag(record.university.clone())
            .with_datum_index(index),
        );
    }
}

fn add_closing(scene: &mut Scene, style: &StepStyle) {
    scene.insert(label(
        ElementClass::ClosingTitle,
        "Thanks for scrolling!",
        style.plot.width / 3.0,
        style.plot.center_y(),
        40.0,
        BLACK,
        TextHAlign::Left,
    ));
}

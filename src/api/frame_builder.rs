//! Flattens the retained scene and the treemap widget into one
//! deterministic draw list per presentation pass.

use crate::charts::{clip_to_rect, prefix_by_fraction, symbol_outline};
use crate::core::{PlotArea, PointPx, Viewport};
use crate::error::StoryResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};
use crate::scene::{Element, ElementClass, Geometry, Scene, SymbolShape};
use crate::treemap::{NORM_EXTENT, TreemapNode, ZoomTreemap};

use super::setup::BLACK;

/// Smallest on-screen cell that still carries its name label.
const CELL_LABEL_MIN_WIDTH: f64 = 60.0;
const CELL_LABEL_MIN_HEIGHT: f64 = 18.0;
const CELL_LABEL_FONT_SIZE: f64 = 10.0;
const CELL_LABEL_INSET_X: f64 = 4.0;
const CELL_LABEL_INSET_Y: f64 = 4.0;

/// Walks the scene in insertion order and emits primitives for every
/// element with positive opacity. Treemap cells are projected into the
/// panel rectangle on the way through.
pub(crate) fn build_frame(
    viewport: Viewport,
    plot: PlotArea,
    scene: &Scene,
    treemap: &ZoomTreemap,
) -> StoryResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    for element in scene.iter() {
        if element.opacity <= 0.0 {
            continue;
        }
        emit_element(&mut frame, plot, element, treemap)?;
    }
    Ok(frame)
}

fn fade(color: Color, opacity: f64) -> Color {
    color.with_alpha(color.alpha * opacity.clamp(0.0, 1.0))
}

fn emit_element(
    frame: &mut RenderFrame,
    plot: PlotArea,
    element: &Element,
    treemap: &ZoomTreemap,
) -> StoryResult<()> {
    let ox = plot.origin_x;
    let oy = plot.origin_y;
    let opacity = element.opacity;

    match &element.geometry {
        Geometry::Line { x1, y1, x2, y2 } => {
            if element.stroke_width <= 0.0 {
                return Ok(());
            }
            let mut line = LinePrimitive::new(
                ox + x1,
                oy + y1,
                ox + x2,
                oy + y2,
                element.stroke_width,
                fade(element.stroke, opacity),
            );
            if let Some((on, off)) = element.dash {
                line = line.with_dash(on, off);
            }
            frame.lines.push(line);
        }
        Geometry::Rect {
            x,
            y,
            width,
            height,
        } => match element.class() {
            // Host regions: the treemap panel lends its rectangle and
            // opacity to the widget cells, the embed panel is drawn by
            // the embedder.
            ElementClass::TreemapPanel => {
                emit_treemap_cells(frame, plot, (*x, *y, *width, *height), opacity, treemap)?;
            }
            ElementClass::EmbedPanel => {}
            _ => {
                let mut rect =
                    RectPrimitive::new(ox + x, oy + y, *width, *height, fade(element.fill, opacity));
                if element.stroke_width > 0.0 {
                    rect = rect.with_stroke(fade(element.stroke, opacity), element.stroke_width);
                }
                frame.rects.push(rect);
            }
        },
        Geometry::Circle { cx, cy, radius } => {
            let mut circle =
                CirclePrimitive::new(ox + cx, oy + cy, *radius, fade(element.fill, opacity));
            if element.stroke_width > 0.0 {
                circle = circle.with_stroke(fade(element.stroke, opacity), element.stroke_width);
            }
            frame.circles.push(circle);
        }
        Geometry::Symbol {
            shape,
            cx,
            cy,
            size,
        } => match shape {
            SymbolShape::Circle => {
                let mut circle =
                    CirclePrimitive::new(ox + cx, oy + cy, size / 2.0, fade(element.fill, opacity));
                if element.stroke_width > 0.0 {
                    circle = circle.with_stroke(fade(element.stroke, opacity), element.stroke_width);
                }
                frame.circles.push(circle);
            }
            _ => {
                let outline = symbol_outline(*shape, ox + cx, oy + cy, *size);
                // Unstroked markers trace a hairline in their own fill
                // so the closed path always has a valid stroke.
                let (stroke_width, stroke_color) = if element.stroke_width > 0.0 {
                    (element.stroke_width, fade(element.stroke, opacity))
                } else {
                    (1.0, fade(element.fill, opacity))
                };
                frame.polylines.push(PolylinePrimitive::filled(
                    outline,
                    stroke_width,
                    stroke_color,
                    fade(element.fill, opacity),
                ));
            }
        },
        Geometry::Polyline {
            points,
            drawn_fraction,
        } => {
            if element.stroke_width <= 0.0 {
                return Ok(());
            }
            let visible = prefix_by_fraction(points, *drawn_fraction);
            // The index line keeps all its points through every
            // projection, so retargeted states hang far off the plot
            // and must be trimmed to the visible rectangle.
            let runs: Vec<Vec<PointPx>> = if element.class() == ElementClass::CpiLine {
                clip_to_rect(&visible, plot.width, plot.height)
            } else {
                vec![visible.into_iter().filter(|point| point.is_finite()).collect()]
            };
            for run in runs {
                if run.len() < 2 {
                    continue;
                }
                let shifted = run
                    .into_iter()
                    .map(|point| PointPx::new(ox + point.x, oy + point.y))
                    .collect();
                let mut polyline = PolylinePrimitive::new(
                    shifted,
                    element.stroke_width,
                    fade(element.stroke, opacity),
                );
                if let Some((on, off)) = element.dash {
                    polyline = polyline.with_dash(on, off);
                }
                frame.polylines.push(polyline);
            }
        }
        Geometry::Text {
            text,
            x,
            y,
            font_size,
            h_align,
        } => {
            if text.is_empty() {
                return Ok(());
            }
            frame.texts.push(TextPrimitive::new(
                text.clone(),
                ox + x,
                oy + y,
                *font_size,
                fade(element.fill, opacity),
                *h_align,
            ));
        }
    }
    Ok(())
}

/// Projects the widget's normalized cells into the panel rectangle,
/// clipping zoomed-out cells at the panel edge the way an overflowing
/// drawing surface would.
fn emit_treemap_cells(
    frame: &mut RenderFrame,
    plot: PlotArea,
    panel: (f64, f64, f64, f64),
    panel_opacity: f64,
    treemap: &ZoomTreemap,
) -> StoryResult<()> {
    let (panel_x, panel_y, panel_width, panel_height) = panel;
    let ox = plot.origin_x + panel_x;
    let oy = plot.origin_y + panel_y;
    let sx = panel_width / NORM_EXTENT;
    let sy = panel_height / NORM_EXTENT;

    for cell in treemap.cells()? {
        if !cell.visible {
            continue;
        }
        let x0 = (cell.x * sx).max(0.0);
        let y0 = (cell.y * sy).max(0.0);
        let x1 = ((cell.x + cell.width) * sx).min(panel_width);
        let y1 = ((cell.y + cell.height) * sy).min(panel_height);
        if x1 <= x0 || y1 <= y0 {
            continue;
        }
        frame.rects.push(RectPrimitive::new(
            ox + x0,
            oy + y0,
            x1 - x0,
            y1 - y0,
            fade(cell.fill, panel_opacity),
        ));

        let is_leaf = treemap
            .layout()
            .node(cell.node)
            .is_some_and(TreemapNode::is_leaf);
        if is_leaf && x1 - x0 >= CELL_LABEL_MIN_WIDTH && y1 - y0 >= CELL_LABEL_MIN_HEIGHT {
            frame.texts.push(TextPrimitive::new(
                cell.name.clone(),
                ox + x0 + CELL_LABEL_INSET_X,
                oy + y0 + CELL_LABEL_INSET_Y,
                CELL_LABEL_FONT_SIZE,
                fade(BLACK, panel_opacity),
                TextHAlign::Left,
            ));
        }
    }
    Ok(())
}

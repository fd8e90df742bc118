use tracing::debug;

use crate::anim::{TransitionScheduler, TransitionSpec};
use crate::core::Easing;
use crate::error::{StoryError, StoryResult};
use crate::render::Color;
use crate::scene::{Channel, Element, ElementClass, ElementId, Geometry, Scene};

use super::{NORM_EXTENT, TreemapLayout, default_expenses};

/// Length of one focus-change animation.
pub const ZOOM_DURATION_S: f64 = 0.8;

/// Animated read of one widget cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSnapshot {
    pub node: usize,
    pub name: String,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub visible: bool,
}

/// Self-contained drill-down widget over a precomputed treemap.
///
/// Owns its scene and scheduler, so zooming never interacts with the
/// scroll-driven story animations. Coordinates stay in the normalized
/// layout square; embedders map them into screen space.
#[derive(Debug)]
pub struct ZoomTreemap {
    layout: TreemapLayout,
    scene: Scene,
    scheduler: TransitionScheduler,
    cells: Vec<ElementId>,
    focus: usize,
    zoom_duration_s: f64,
}

impl ZoomTreemap {
    pub fn new(layout: TreemapLayout) -> StoryResult<Self> {
        let mut scene = Scene::new();
        let mut cells = Vec::with_capacity(layout.len());
        for (index, node) in layout.nodes().iter().enumerate() {
            let visible = node.is_leaf() || node.depth() > 0;
            let element = Element::new(
                ElementClass::TreemapCell,
                Geometry::Rect {
                    x: node.x0(),
                    y: node.y0(),
                    width: node.x1() - node.x0(),
                    height: node.y1() - node.y0(),
                },
            )
            .with_tag(node.name())
            .with_datum_index(index)
            .with_fill(node.fill())
            .with_opacity(if visible { 1.0 } else { 0.0 });
            cells.push(scene.insert(element));
        }

        Ok(Self {
            layout,
            scene,
            scheduler: TransitionScheduler::new(),
            cells,
            focus: TreemapLayout::ROOT,
            zoom_duration_s: ZOOM_DURATION_S,
        })
    }

    pub fn with_default_expenses() -> StoryResult<Self> {
        Self::new(TreemapLayout::build(&default_expenses())?)
    }

    #[must_use]
    pub fn with_zoom_duration(mut self, seconds: f64) -> Self {
        self.zoom_duration_s = seconds;
        self
    }

    #[must_use]
    pub fn layout(&self) -> &TreemapLayout {
        &self.layout
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Click on the cell of `node`: the focused cell hands focus back
    /// to its parent (a no-op at the root), any other cell takes it.
    pub fn click(&mut self, node: usize) -> StoryResult<()> {
        let clicked = self
            .layout
            .node(node)
            .ok_or_else(|| StoryError::InvalidData(format!("treemap has no node {node}")))?;
        let target = if node == self.focus {
            match clicked.parent() {
                Some(parent) => parent,
                None => return Ok(()),
            }
        } else {
            node
        };
        self.apply_focus(target)
    }

    /// Zooms back out to the whole hierarchy, wherever focus sits.
    pub fn reset(&mut self) -> StoryResult<()> {
        if self.focus == TreemapLayout::ROOT {
            return Ok(());
        }
        self.apply_focus(TreemapLayout::ROOT)
    }

    /// Drives in-flight zoom animations; returns whether any remain.
    pub fn advance(&mut self, delta_seconds: f64) -> StoryResult<bool> {
        self.scheduler.advance(delta_seconds, &mut self.scene)
    }

    /// Current animated cell rectangles, in layout order.
    pub fn cells(&self) -> StoryResult<Vec<CellSnapshot>> {
        let mut snapshots = Vec::with_capacity(self.cells.len());
        for (index, &id) in self.cells.iter().enumerate() {
            let element = self.scene.get(id)?;
            let (x, y, width, height) = match &element.geometry {
                Geometry::Rect {
                    x,
                    y,
                    width,
                    height,
                } => (*x, *y, *width, *height),
                _ => {
                    return Err(StoryError::ChannelMismatch {
                        element: id.raw(),
                        channel: Channel::Width.name(),
                    });
                }
            };
            let node = self
                .layout
                .node(index)
                .ok_or_else(|| StoryError::InvalidData(format!("treemap has no node {index}")))?;
            snapshots.push(CellSnapshot {
                node: index,
                name: node.name().to_owned(),
                depth: node.depth(),
                x,
                y,
                width,
                height,
                fill: element.fill,
                visible: element.opacity > 0.0,
            });
        }
        Ok(snapshots)
    }

    fn apply_focus(&mut self, target: usize) -> StoryResult<()> {
        let focus_node = self
            .layout
            .node(target)
            .ok_or_else(|| StoryError::InvalidData(format!("treemap has no node {target}")))?;
        let span_x = focus_node.x1() - focus_node.x0();
        let span_y = focus_node.y1() - focus_node.y0();
        if span_x <= 0.0 || span_y <= 0.0 {
            return Err(StoryError::InvalidData(format!(
                "treemap node `{}` has no area to zoom into",
                focus_node.name()
            )));
        }
        debug!(
            from = self.focus,
            to = target,
            name = focus_node.name(),
            "treemap focus change"
        );

        let scale_x = NORM_EXTENT / span_x;
        let scale_y = NORM_EXTENT / span_y;
        let origin_x = focus_node.x0();
        let origin_y = focus_node.y0();
        let focus_depth = focus_node.depth();
        self.focus = target;

        let targets: Vec<(ElementId, f64, f64, f64, f64, bool)> = self
            .layout
            .nodes()
            .iter()
            .zip(&self.cells)
            .map(|(node, &id)| {
                let x = (node.x0() - origin_x) * scale_x;
                let y = (node.y0() - origin_y) * scale_y;
                let width = (node.x1() - node.x0()) * scale_x;
                let height = (node.y1() - node.y0()) * scale_y;
                let visible = node.is_leaf() || node.depth() > focus_depth;
                (id, x, y, width, height, visible)
            })
            .collect();

        for (id, x, y, width, height, visible) in targets {
            for (channel, to) in [
                (Channel::X, x),
                (Channel::Y, y),
                (Channel::Width, width),
                (Channel::Height, height),
            ] {
                self.scheduler.begin(
                    &mut self.scene,
                    TransitionSpec::scalar(id, channel, to)
                        .with_duration(self.zoom_duration_s)
                        .with_easing(Easing::CubicOut),
                )?;
            }
            // Visibility flips immediately; only geometry animates.
            self.scene
                .set_scalar(id, Channel::Opacity, if visible { 1.0 } else { 0.0 })?;
        }
        Ok(())
    }
}

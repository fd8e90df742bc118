use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::error::{StoryError, StoryResult};
use crate::render::Color;

use super::ExpenseItem;

/// Side length of the normalized layout square.
pub const NORM_EXTENT: f64 = 100.0;

/// Aspect-ratio target for squarified rows, the golden ratio.
const SQUARIFY_RATIO: f64 = 1.618_033_988_749_895;

/// Dark qualitative fills cycled over shallow ancestry keys.
pub const CELL_PALETTE: [Color; 8] = [
    Color::rgb(27.0 / 255.0, 158.0 / 255.0, 119.0 / 255.0),
    Color::rgb(217.0 / 255.0, 95.0 / 255.0, 2.0 / 255.0),
    Color::rgb(117.0 / 255.0, 112.0 / 255.0, 179.0 / 255.0),
    Color::rgb(231.0 / 255.0, 41.0 / 255.0, 138.0 / 255.0),
    Color::rgb(102.0 / 255.0, 166.0 / 255.0, 30.0 / 255.0),
    Color::rgb(230.0 / 255.0, 171.0 / 255.0, 2.0 / 255.0),
    Color::rgb(166.0 / 255.0, 118.0 / 255.0, 29.0 / 255.0),
    Color::rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0),
];

/// One laid-out hierarchy node with its rectangle in the normalized
/// square.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapNode {
    name: String,
    depth: usize,
    parent: Option<usize>,
    children: Vec<usize>,
    weight: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    palette_index: usize,
}

impl TreemapNode {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Weighted leaf count under (and including) this node.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    #[must_use]
    pub fn fill(&self) -> Color {
        CELL_PALETTE[self.palette_index]
    }
}

/// Squarified treemap over an expense hierarchy, computed once.
///
/// Nodes are stored in level order with the root first, so parents
/// always precede their children and the index doubles as a stable
/// cell identity for the zoom widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapLayout {
    nodes: Vec<TreemapNode>,
}

impl TreemapLayout {
    pub const ROOT: usize = 0;

    pub fn build(root: &ExpenseItem) -> StoryResult<Self> {
        let mut nodes: Vec<TreemapNode> = Vec::new();
        let mut queue: VecDeque<(&ExpenseItem, usize, Option<usize>)> = VecDeque::new();
        queue.push_back((root, 0, None));
        while let Some((item, depth, parent)) = queue.pop_front() {
            let index = nodes.len();
            if let Some(parent_index) = parent {
                nodes[parent_index].children.push(index);
            }
            nodes.push(TreemapNode {
                name: item.name().to_owned(),
                depth,
                parent,
                children: Vec::new(),
                weight: item.own_weight(),
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
                palette_index: 0,
            });
            for child in item.children() {
                queue.push_back((child, depth + 1, Some(index)));
            }
        }

        // Children sit after their parents, so one reverse pass sums
        // leaf weights bottom-up.
        for index in (0..nodes.len()).rev() {
            let sum: f64 = nodes[index]
                .children
                .clone()
                .into_iter()
                .map(|child| nodes[child].weight)
                .sum();
            nodes[index].weight += sum;
        }
        if nodes[Self::ROOT].weight <= 0.0 {
            return Err(StoryError::InvalidData(
                "expense hierarchy has no weighted leaves".to_owned(),
            ));
        }

        nodes[Self::ROOT].x1 = NORM_EXTENT;
        nodes[Self::ROOT].y1 = NORM_EXTENT;
        for index in 0..nodes.len() {
            if !nodes[index].children.is_empty() {
                squarify_children(&mut nodes, index);
            }
        }
        assign_palette(&mut nodes);

        Ok(Self { nodes })
    }

    #[must_use]
    pub fn nodes(&self) -> &[TreemapNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&TreemapNode> {
        self.nodes.get(index)
    }

    /// First node carrying `name`, in level order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }
}

/// Lays out the children of one internal node by greedy row batching:
/// a row keeps absorbing children while its worst cell aspect ratio
/// does not regress, then occupies a strip of the remaining rectangle.
fn squarify_children(nodes: &mut [TreemapNode], parent: usize) {
    let children = nodes[parent].children.clone();
    let mut x0 = nodes[parent].x0;
    let mut y0 = nodes[parent].y0;
    let x1 = nodes[parent].x1;
    let y1 = nodes[parent].y1;
    let mut value = nodes[parent].weight;
    let count = children.len();
    let mut row_start = 0;

    while row_start < count {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Seed the row with the next weighted child; zero-weight
        // children ride along as degenerate cells.
        let mut row_end = row_start;
        let mut sum;
        loop {
            sum = nodes[children[row_end]].weight;
            row_end += 1;
            if sum != 0.0 || row_end >= count {
                break;
            }
        }

        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (value * SQUARIFY_RATIO);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while row_end < count {
            let child_value = nodes[children[row_end]].weight;
            sum += child_value;
            min_value = min_value.min(child_value);
            max_value = max_value.max(child_value);
            beta = sum * sum * alpha;
            let new_ratio = (max_value / beta).max(beta / min_value);
            if new_ratio > min_ratio {
                sum -= child_value;
                break;
            }
            min_ratio = new_ratio;
            row_end += 1;
        }

        let row = &children[row_start..row_end];
        if dx < dy {
            let strip_y1 = if value > 0.0 { y0 + dy * sum / value } else { y1 };
            lay_row_horizontal(nodes, row, sum, x0, y0, x1, strip_y1);
            y0 = strip_y1;
        } else {
            let strip_x1 = if value > 0.0 { x0 + dx * sum / value } else { x1 };
            lay_row_vertical(nodes, row, sum, x0, y0, strip_x1, y1);
            x0 = strip_x1;
        }
        value -= sum;
        row_start = row_end;
    }
}

/// Row cells side by side along x, spanning the strip's full height.
fn lay_row_horizontal(
    nodes: &mut [TreemapNode],
    row: &[usize],
    row_value: f64,
    mut x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) {
    let k = if row_value > 0.0 {
        (x1 - x0) / row_value
    } else {
        0.0
    };
    for &child in row {
        let node = &mut nodes[child];
        node.y0 = y0;
        node.y1 = y1;
        node.x0 = x0;
        x0 += node.weight * k;
        node.x1 = x0;
    }
}

/// Row cells stacked along y, spanning the strip's full width.
fn lay_row_vertical(
    nodes: &mut [TreemapNode],
    row: &[usize],
    row_value: f64,
    x0: f64,
    mut y0: f64,
    x1: f64,
    y1: f64,
) {
    let k = if row_value > 0.0 {
        (y1 - y0) / row_value
    } else {
        0.0
    };
    for &child in row {
        let node = &mut nodes[child];
        node.x0 = x0;
        node.x1 = x1;
        node.y0 = y0;
        y0 += node.weight * k;
        node.y1 = y0;
    }
}

/// Keys every node by its ancestor at depth two or above and hands out
/// palette slots in first-seen order.
fn assign_palette(nodes: &mut [TreemapNode]) {
    let mut seen: IndexMap<usize, usize> = IndexMap::new();
    for index in 0..nodes.len() {
        let mut key = index;
        while nodes[key].depth > 2 {
            match nodes[key].parent {
                Some(parent) => key = parent,
                None => break,
            }
        }
        let next_slot = seen.len();
        let slot = *seen.entry(key).or_insert(next_slot);
        nodes[index].palette_index = slot % CELL_PALETTE.len();
    }
}

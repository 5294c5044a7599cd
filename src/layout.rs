//! Tree-shaped grid placement for the 24 day boxes.

use crate::model::DAY_COUNT;
use crate::rng::Rng;

/// Boxes per row, top to bottom. The last row is the trunk.
pub const ROWS: [usize; 7] = [1, 2, 3, 4, 5, 6, 3];

const MAX_BOX_SIZE: f64 = 90.0;
const SPACING_RATIO: f64 = 0.18;
const GROUND_RATIO: f64 = 0.28;
const MIN_TOP_OFFSET: f64 = 40.0;
/// Narrow screens pull the top star a little closer to the box.
const TOP_STAR_NARROW_OFFSET: f64 = -4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Phone-sized layout for the top star (strictly below 600px).
    pub fn is_narrow(&self) -> bool {
        self.width < 600.0
    }

    /// Phone-sized layout for the reindeer herds (600px counts as mobile).
    pub fn is_mobile(&self) -> bool {
        self.width <= 600.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub day: u8,
    pub row: usize,
    pub col: usize,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl Placement {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.size / 2.0, self.top + self.size / 2.0)
    }
}

/// Bottom-centre anchor for the star ornament above the first row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarAnchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub size: f64,
    pub spacing: f64,
    /// Row-major order, matching [`ROWS`].
    pub boxes: Vec<Placement>,
    pub top_star: StarAnchor,
}

pub fn box_size(viewport: Viewport) -> f64 {
    let by_width = (viewport.width / 6.0).floor();
    let by_height = (viewport.height / 12.0).floor();
    MAX_BOX_SIZE.min(by_width).min(by_height).max(0.0)
}

pub fn layout(viewport: Viewport, rng: &mut Rng) -> Layout {
    let mut days: Vec<u8> = (1..=DAY_COUNT).collect();
    rng.shuffle(&mut days);

    let size = box_size(viewport);
    let spacing = (size * SPACING_RATIO).floor();
    let tree_h = ROWS.len() as f64 * (size + spacing) - spacing;
    let ground_h = viewport.height * GROUND_RATIO;
    let top_offset = MIN_TOP_OFFSET.max((viewport.height - ground_h - tree_h) / 2.0);

    let mut boxes = Vec::with_capacity(days.len());
    let mut next = days.into_iter();
    for (row, &count) in ROWS.iter().enumerate() {
        let row_w = count as f64 * size + (count as f64 - 1.0) * spacing;
        let start_x = (viewport.width - row_w) / 2.0;
        let top = top_offset + row as f64 * (size + spacing);
        for col in 0..count {
            let Some(day) = next.next() else { break };
            boxes.push(Placement {
                day,
                row,
                col,
                left: start_x + col as f64 * (size + spacing),
                top,
                size,
            });
        }
    }

    let first = boxes[0];
    let star_offset = if viewport.is_narrow() {
        TOP_STAR_NARROW_OFFSET
    } else {
        0.0
    };
    let top_star = StarAnchor {
        x: first.left + first.size / 2.0,
        y: first.top + star_offset,
    };

    Layout {
        size,
        spacing,
        boxes,
        top_star,
    }
}

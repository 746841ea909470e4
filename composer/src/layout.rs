//! Geometry of the rendered sentence strip.
//!
//! The strip is a wrapping row of fixed-size slots inside a container. Hosts
//! either report the rectangles they actually rendered ([`SlotLayout::new`])
//! or let [`SlotLayout::flow`] compute them. Hit-testing works on these
//! rectangles alone, so drop resolution never needs a rendering environment.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{SLOT_GAP_PX, SLOT_HEIGHT_PX, SLOT_WIDTH_PX};

/// A point in CSS pixels, relative to the same origin as the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Edges on the left/top are inside, right/bottom are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.width && pt.y >= self.y && pt.y < self.y + self.height
    }
}

/// Slot dimensions for [`SlotLayout::flow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMetrics {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self { width: SLOT_WIDTH_PX, height: SLOT_HEIGHT_PX, gap: SLOT_GAP_PX }
    }
}

/// The strip container and one rectangle per sentence tile, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLayout {
    container: Rect,
    slots: Vec<Rect>,
}

impl SlotLayout {
    /// A layout from rectangles the host measured.
    #[must_use]
    pub fn new(container: Rect, slots: Vec<Rect>) -> Self {
        Self { container, slots }
    }

    /// Lay `count` slots out left to right, wrapping onto new rows when the
    /// container width is exhausted. The gap is applied around every slot,
    /// including the container padding. The container grows vertically to fit.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn flow(container: Rect, count: usize, metrics: SlotMetrics) -> Self {
        let stride_x = metrics.width + metrics.gap;
        let stride_y = metrics.height + metrics.gap;
        let per_row = if stride_x > 0.0 {
            (((container.width - metrics.gap) / stride_x).floor().max(1.0)) as usize
        } else {
            1
        };

        let slots: Vec<Rect> = (0..count)
            .map(|i| {
                let col = (i % per_row) as f64;
                let row = (i / per_row) as f64;
                Rect::new(
                    container.x + metrics.gap + col * stride_x,
                    container.y + metrics.gap + row * stride_y,
                    metrics.width,
                    metrics.height,
                )
            })
            .collect();

        let rows = count.div_ceil(per_row) as f64;
        let needed = metrics.gap + rows * stride_y;
        let container = Rect { height: container.height.max(needed), ..container };
        Self { container, slots }
    }

    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    #[must_use]
    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }

    /// Center of the slot at `index`, if laid out.
    #[must_use]
    pub fn slot_center(&self, index: usize) -> Option<Point> {
        self.slots
            .get(index)
            .map(|r| Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0))
    }
}

use alloc::{string::{String, ToString}, vec::Vec};

use crate::render::{Dimension, Rect, Surface};

type Point = (Dimension, Dimension);

/// One call made on a [RecordingSurface].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum DrawCall {
    Text { text: String, x: Dimension, y: Dimension, font_size: Dimension },
    Line { from: Point, to: Point, thickness: Dimension },
    Curve { from: Point, control: Point, to: Point, thickness: Dimension },
    RoundRect { rect: Rect, radius: Dimension },
    Circle { centre: Point, radius: Dimension },
}

/// A surface which draws nothing, and instead remembers everything it was asked to draw.
#[derive(Default, Clone, Debug)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text runs drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_text(&mut self, text: &str, x: Dimension, y: Dimension, font_size: Dimension) {
        self.calls.push(DrawCall::Text { text: text.to_string(), x, y, font_size });
    }

    fn line(&mut self, from: Point, to: Point, thickness: Dimension) {
        self.calls.push(DrawCall::Line { from, to, thickness });
    }

    fn curve(&mut self, from: Point, control: Point, to: Point, thickness: Dimension) {
        self.calls.push(DrawCall::Curve { from, control, to, thickness });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: Dimension) {
        self.calls.push(DrawCall::RoundRect { rect, radius });
    }

    fn fill_circle(&mut self, centre: Point, radius: Dimension) {
        self.calls.push(DrawCall::Circle { centre, radius });
    }
}

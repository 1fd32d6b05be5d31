//! Rendering-backend boundary: draw primitives and a recording backend.
//!
//! The layout composer is written purely against the [`Canvas`] trait, so
//! pages can be rendered by any backend that supports these primitives. The
//! [`RecordingCanvas`] reifies a page as an ordered list of positioned
//! [`DrawOp`]s, which is both the document model and what layout tests
//! inspect.

use serde::Serialize;

use super::palette::Color;
use super::text::estimated_width;

/// Font style selector; the backend maps these onto its font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// An externally rendered raster image (PNG bytes plus pixel size).
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ChartImage {
    /// Height-to-width aspect ratio.
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Draw-primitive sink the layout composer writes to.
///
/// Coordinates are in points with the origin at the top-left corner; text
/// `y` is the baseline.
pub trait Canvas {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);
    fn stroke_round_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
    );
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Color);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
    fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        style: FontStyle,
        size: f64,
        color: Color,
        align: TextAlign,
    );
    fn image(&mut self, image: &ChartImage, x: f64, y: f64, w: f64, h: f64);

    /// Estimated rendered width of `content` at `size`.
    fn text_width(&self, content: &str, style: FontStyle, size: f64) -> f64 {
        estimated_width(content, size, matches!(style, FontStyle::Bold))
    }
}

/// One recorded draw operation.
#[derive(Debug, Clone, Serialize)]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    RoundRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
    },
    StrokeRoundRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: FontStyle,
        size: f64,
        color: Color,
        align: TextAlign,
    },
    Image {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

impl DrawOp {
    /// Lowest page coordinate this operation reaches (its bottom edge).
    pub fn bottom(&self) -> f64 {
        match self {
            DrawOp::Rect { y, h, .. } => y + h,
            DrawOp::RoundRect { y, h, .. } => y + h,
            DrawOp::StrokeRoundRect { y, h, .. } => y + h,
            DrawOp::Circle { cy, r, .. } => cy + r,
            DrawOp::Line { y1, y2, .. } => y1.max(*y2),
            // Baseline; descenders are covered by the line-height margin.
            DrawOp::Text { y, .. } => *y,
            DrawOp::Image { y, h, .. } => y + h,
        }
    }
}

/// Backend that records draw operations instead of painting.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bottom-most extent across all recorded operations.
    pub fn max_bottom(&self) -> f64 {
        self.ops.iter().map(DrawOp::bottom).fold(0.0, f64::max)
    }

    /// All recorded text contents, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
    }

    fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        self.ops.push(DrawOp::RoundRect {
            x,
            y,
            w,
            h,
            radius,
            color,
        });
    }

    fn stroke_round_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
    ) {
        self.ops.push(DrawOp::StrokeRoundRect {
            x,
            y,
            w,
            h,
            radius,
            stroke_width,
            color,
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        self.ops.push(DrawOp::Circle { cx, cy, r, color });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        style: FontStyle,
        size: f64,
        color: Color,
        align: TextAlign,
    ) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            content: content.to_string(),
            style,
            size,
            color,
            align,
        });
    }

    fn image(&mut self, _image: &ChartImage, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::Image { x, y, w, h });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::palette::MIDNIGHT;

    #[test]
    fn test_recording_preserves_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, MIDNIGHT);
        canvas.text(
            5.0,
            20.0,
            "hello",
            FontStyle::Regular,
            10.0,
            MIDNIGHT,
            TextAlign::Left,
        );
        assert_eq!(canvas.ops.len(), 2);
        assert!(matches!(canvas.ops[0], DrawOp::Rect { .. }));
        assert!(matches!(canvas.ops[1], DrawOp::Text { .. }));
    }

    #[test]
    fn test_max_bottom_tracks_lowest_edge() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(0.0, 0.0, 10.0, 30.0, MIDNIGHT);
        canvas.fill_circle(5.0, 50.0, 8.0, MIDNIGHT);
        assert_eq!(canvas.max_bottom(), 58.0);
    }
}

//! SVG rendering backend.
//!
//! Implements [`Canvas`] by emitting an SVG page, then rasterizes it to a
//! fixed-size PNG through usvg/resvg. Embedded raster images are inlined as
//! base64 data URIs.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::errors::RenderError;

use super::canvas::{Canvas, ChartImage, FontStyle, TextAlign};
use super::palette::Color;

const FONT_FAMILY: &str = "Helvetica, Arial, DejaVu Sans, sans-serif";

/// Canvas implementation that accumulates SVG elements.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    /// New page with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.fill_rect(0.0, 0.0, width, height, super::palette::WHITE);
        canvas
    }

    /// Assemble the complete SVG document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' \
             width='{w:.2}' height='{h:.2}' viewBox='0 0 {w:.2} {h:.2}'>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    /// Rasterize the page to PNG at the given scale factor.
    pub fn rasterize(&self, scale: f64) -> Result<Vec<u8>, RenderError> {
        let px_w = (self.width * scale).round() as u32;
        let px_h = (self.height * scale).round() as u32;
        svg_to_png(&self.finish(), px_w, px_h, scale as f32)
    }

    fn fill_attrs(color: Color) -> String {
        if (color.a - 1.0).abs() < f32::EPSILON {
            format!("fill='{}'", color.hex())
        } else {
            format!("fill='{}' fill-opacity='{:.3}'", color.hex(), color.a)
        }
    }

    fn font_attrs(style: FontStyle) -> &'static str {
        match style {
            FontStyle::Regular => "",
            FontStyle::Bold => " font-weight='bold'",
            FontStyle::Oblique => " font-style='italic'",
        }
    }

    fn anchor(align: TextAlign) -> &'static str {
        match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        }
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' {}/>",
            Self::fill_attrs(color)
        );
    }

    fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' rx='{radius:.2}' {}/>",
            Self::fill_attrs(color)
        );
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
        let _ = writeln!(
            self.body,
            "  <rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' rx='{radius:.2}' \
             fill='none' stroke='{}' stroke-width='{stroke_width:.2}'/>",
            color.hex()
        );
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx='{cx:.2}' cy='{cy:.2}' r='{r:.2}' {}/>",
            Self::fill_attrs(color)
        );
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{}' \
             stroke-width='{width:.2}'/>",
            color.hex()
        );
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
        let _ = writeln!(
            self.body,
            "  <text x='{x:.2}' y='{y:.2}' font-family='{FONT_FAMILY}' font-size='{size:.2}'{} \
             text-anchor='{}' {}>{}</text>",
            Self::font_attrs(style),
            Self::anchor(align),
            Self::fill_attrs(color),
            escape_text(content)
        );
    }

    fn image(&mut self, image: &ChartImage, x: f64, y: f64, w: f64, h: f64) {
        let _ = writeln!(
            self.body,
            "  <image x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' \
             preserveAspectRatio='xMidYMid meet' href='data:image/png;base64,{}'/>",
            BASE64.encode(&image.png)
        );
    }
}

/// Escape text content for SVG/XML.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Rasterize an SVG document to an RGBA PNG of the given pixel size.
pub fn svg_to_png(svg: &str, width: u32, height: u32, scale: f32) -> Result<Vec<u8>, RenderError> {
    use png::{BitDepth, ColorType, Encoder};
    use tiny_skia::{Pixmap, Transform};
    use usvg::{Options, Tree};

    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_data(svg.as_bytes(), &options).map_err(|err| RenderError::SvgParse {
        message: format!("{err:?}"),
    })?;

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAlloc {
        width,
        height,
    })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, width, height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.write_header()?.write_image_data(pixmap.data())?;
    }
    Ok(out)
}

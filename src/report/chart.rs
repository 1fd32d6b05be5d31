//! Dimension bar-chart rendering.
//!
//! Produces the horizontal "Flavour DNA" bar chart as an opaque PNG asset
//! that the layout composer embeds on page 1.

use std::fmt::Write as _;

use crate::errors::RenderError;
use crate::scoring::{Dimension, DimensionScores, DIMENSION_MAX};

use super::canvas::ChartImage;
use super::palette::{dimension_color, CLOUD, MIDNIGHT, MID_GREY};
use super::svg::svg_to_png;

/// Chart surface size in points.
const CHART_W: f64 = 620.0;
const CHART_H: f64 = 280.0;
/// Rasterization scale for the embedded asset.
const CHART_SCALE: f64 = 2.0;

/// X-axis headroom beyond the maximum score, leaving room for value labels.
const AXIS_MAX: f64 = DIMENSION_MAX as f64 + 2.0;

/// Render the six dimension scores as a horizontal bar chart.
///
/// One bar per dimension in canonical order, colored from the fixed palette,
/// with a "n/10" annotation beside each bar.
pub fn render_dimension_chart(scores: &DimensionScores) -> Result<ChartImage, RenderError> {
    let left = 110.0;
    let right = 30.0;
    let top = 46.0;
    let bottom = 36.0;
    let plot_w = CHART_W - left - right;
    let plot_h = CHART_H - top - bottom;
    let row_h = plot_h / Dimension::ALL.len() as f64;
    let bar_h = row_h * 0.62;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{CHART_W}' height='{CHART_H}' \
         viewBox='0 0 {CHART_W} {CHART_H}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect x='0' y='0' width='{CHART_W}' height='{CHART_H}' fill='{}'/>",
        CLOUD.hex()
    );

    // Title
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='28' font-family='Helvetica, Arial, sans-serif' font-size='16' \
         font-weight='bold' text-anchor='middle' fill='{}'>Your Flavour DNA Profile</text>",
        CHART_W / 2.0,
        MIDNIGHT.hex()
    );

    // Dashed gridlines every 2 score units.
    let mut grid = 2.0;
    while grid <= DIMENSION_MAX as f64 {
        let gx = left + plot_w * grid / AXIS_MAX;
        let _ = writeln!(
            svg,
            "  <line x1='{gx:.2}' y1='{top:.2}' x2='{gx:.2}' y2='{:.2}' stroke='#EEEEEE' \
             stroke-width='0.8' stroke-dasharray='4 3'/>",
            top + plot_h
        );
        grid += 2.0;
    }

    for (row, (dimension, value)) in scores.iter().enumerate() {
        let y = top + row as f64 * row_h;
        let bar_y = y + (row_h - bar_h) / 2.0;
        let bar_w = plot_w * f64::from(value) / AXIS_MAX;
        let color = dimension_color(dimension);

        // Dimension label, right-aligned against the plot area.
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-family='Helvetica, Arial, sans-serif' \
             font-size='13' text-anchor='end' fill='{}'>{}</text>",
            left - 10.0,
            bar_y + bar_h / 2.0 + 4.5,
            MIDNIGHT.hex(),
            dimension.label()
        );

        let _ = writeln!(
            svg,
            "  <rect x='{left:.2}' y='{bar_y:.2}' width='{bar_w:.2}' height='{bar_h:.2}' \
             rx='3' fill='{}' stroke='white' stroke-width='1.5'/>",
            color.hex()
        );

        // Value annotation just past the bar end.
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-family='Helvetica, Arial, sans-serif' \
             font-size='12' font-weight='bold' fill='{}'>{}/10</text>",
            left + bar_w + 8.0,
            bar_y + bar_h / 2.0 + 4.0,
            MIDNIGHT.hex(),
            value
        );
    }

    // Axis caption.
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='{:.2}' font-family='Helvetica, Arial, sans-serif' font-size='11' \
         text-anchor='middle' fill='{}'>Score (out of 10)</text>",
        left + plot_w / 2.0,
        CHART_H - 12.0,
        MID_GREY.hex()
    );
    let _ = writeln!(svg, "</svg>");

    let px_w = (CHART_W * CHART_SCALE) as u32;
    let px_h = (CHART_H * CHART_SCALE) as u32;
    let png = svg_to_png(&svg, px_w, px_h, CHART_SCALE as f32)?;
    Ok(ChartImage {
        png,
        width: px_w,
        height: px_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_renders_png_with_expected_size() {
        let scores = DimensionScores {
            sweet: 2,
            salty: 0,
            sour: 5,
            umami: 10,
            crunchy: 7,
            adventurous: 4,
        };
        let chart = render_dimension_chart(&scores).unwrap();
        assert_eq!(chart.width, 1240);
        assert_eq!(chart.height, 560);
        assert_eq!(&chart.png[..4], &[0x89, b'P', b'N', b'G']);
        assert!((chart.aspect() - 280.0 / 620.0).abs() < 1e-6);
    }

    #[test]
    fn test_chart_is_deterministic_for_same_scores() {
        let scores = DimensionScores::default();
        let a = render_dimension_chart(&scores).unwrap();
        let b = render_dimension_chart(&scores).unwrap();
        assert_eq!(a.png, b.png);
    }
}

//! Two-page report layout composer.
//!
//! Pages are composed against the [`Canvas`] trait with an explicit vertical
//! cursor: every block consumes space and returns the cursor immediately
//! below itself, so blocks stack without overlap. There is no page-break
//! detection; block sizes and counts are fixed by design so the two pages
//! never overflow under the defined content.

use crate::scoring::fun_fact_for;
use crate::survey::fields;
use crate::{FlavourProfile, SubstitutionSet, SurveyResponse, PROJECT_NAME, VERSION};

use super::canvas::{Canvas, ChartImage, FontStyle, TextAlign};
use super::palette::{
    band_color, dimension_color, Color, BANNER_STRIPES, BLACK, LIGHT_GREY, MIDNIGHT, MID_GREY,
    SWAP_CARD_CYCLE, WHITE,
};
use super::text::{strip_non_ascii, truncate_chars, wrap_to_width, LINE_HEIGHT_FACTOR};

/// A4 page size in points.
pub const PAGE_W: f64 = 595.28;
pub const PAGE_H: f64 = 841.89;

/// Horizontal page margin.
const MARGIN: f64 = 36.0;
/// Usable content width.
const CONTENT_W: f64 = PAGE_W - 2.0 * MARGIN;

/// Banner heights: page 1 carries a title plus two subtitle lines.
const BANNER_H_PAGE1: f64 = 110.0;
const BANNER_H_PAGE2: f64 = 62.0;

/// Footer bar height.
const FOOTER_H: f64 = 28.0;

/// Identity card height on page 1.
const CARD_H: f64 = 110.0;
/// Chart image box height on page 1.
const CHART_BOX_H: f64 = 175.0;
/// Neophobia meter track height and minimum visible fill.
const METER_H: f64 = 14.0;
const METER_MIN_FILL: f64 = 18.0;
/// Suggestion card height on page 2.
const SWAP_CARD_H: f64 = 36.0;
/// Glance table row height and value character budget.
const GLANCE_ROW_H: f64 = 20.0;
const GLANCE_VALUE_CHARS: usize = 68;

/// Everything the composer needs for one respondent's report.
pub struct ReportContext<'a> {
    pub response: &'a SurveyResponse,
    pub profile: &'a FlavourProfile,
    pub substitutions: &'a SubstitutionSet,
    pub chart: &'a ChartImage,
}

/// Compose the avatar & flavour DNA page.
pub fn compose_page_one(canvas: &mut dyn Canvas, ctx: &ReportContext<'_>) {
    let accent = dimension_color(ctx.profile.dominant);

    let mut y = banner(
        canvas,
        BANNER_H_PAGE1,
        &[
            ("We Are What We Eat", FontStyle::Bold, 20.0, 42.0),
            (
                "Isaac's Food Science Project - Singapore 2026",
                FontStyle::Regular,
                11.0,
                62.0,
            ),
            (
                "Your Personalised Food Avatar Report",
                FontStyle::Oblique,
                9.0,
                80.0,
            ),
        ],
    );

    y = identity_card(canvas, y + 14.0, ctx, accent);
    y += 20.0;
    y = chart_section(canvas, y, ctx.chart, accent);
    y += 14.0;
    let _ = neophobia_meter(canvas, y, ctx.profile);

    footer(canvas, 1);
}

/// Compose the personalised insights & substitutions page.
pub fn compose_page_two(canvas: &mut dyn Canvas, ctx: &ReportContext<'_>) {
    let accent = dimension_color(ctx.profile.dominant);

    let mut y = banner(
        canvas,
        BANNER_H_PAGE2,
        &[
            ("Your Personalised Food Insights", FontStyle::Bold, 16.0, 30.0),
            (
                "We Are What We Eat - Isaac's Food Science Project - Singapore 2026",
                FontStyle::Regular,
                9.0,
                48.0,
            ),
        ],
    );
    y += 22.0;

    // Healthy swaps
    y = section_header(canvas, "Healthy Swaps Made For You", y, accent);
    y += 6.0;
    let flavour = ctx
        .response
        .answer(fields::FLAVOUR)
        .unwrap_or("great flavour");
    let texture = ctx
        .response
        .answer(fields::TEXTURE)
        .unwrap_or("your favourite texture");
    let intro = format!(
        "Because you love {} flavours and {} textures, here are 3 healthier alternatives \
         that still feel familiar and delicious!",
        flavour.to_lowercase(),
        texture.to_lowercase()
    );
    y = wrapped_text(canvas, &intro, MARGIN, y, CONTENT_W, 9.0, MID_GREY, false);
    y += 8.0;
    y = swap_cards(canvas, y, ctx.substitutions);
    y += 10.0;

    // Why it works
    y = section_header(canvas, "Why This Works - Isaac's Research", y, accent);
    y += 6.0;
    let why_text = "Isaac's project studies how children can eat healthier by swapping foods \
                    that share the same texture, flavour, or look. This is called 'substitution \
                    via similarity'. Your swap suggestions above were chosen because they match \
                    your personal Flavour DNA - so they should feel just as satisfying as your \
                    current favourites!";
    y = wrapped_text(canvas, why_text, MARGIN, y, CONTENT_W, 9.5, MIDNIGHT, false);
    y += 14.0;

    // Answers at a glance
    y = section_header(canvas, "Your Answers at a Glance", y, accent);
    y += 8.0;
    y = glance_table(canvas, y, ctx.response);
    y += 12.0;

    // Fun fact
    y = section_header(canvas, "Did You Know?", y, accent);
    y += 8.0;
    let fact = fun_fact_for(ctx.profile.dominant);
    let _ = wrapped_text(canvas, fact, MARGIN, y, CONTENT_W, 9.5, MIDNIGHT, true);

    footer(canvas, 2);
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Multi-color banner strip with overlay and centered text lines.
/// Returns the cursor just below the banner.
fn banner(
    canvas: &mut dyn Canvas,
    height: f64,
    lines: &[(&str, FontStyle, f64, f64)],
) -> f64 {
    let strip_w = PAGE_W / BANNER_STRIPES.len() as f64;
    for (i, color) in BANNER_STRIPES.iter().enumerate() {
        // +1 overlap hides hairline seams between strips.
        canvas.fill_rect(i as f64 * strip_w, 0.0, strip_w + 1.0, height, *color);
    }
    canvas.fill_rect(0.0, 0.0, PAGE_W, height, BLACK.with_alpha(0.28));

    for (content, style, size, baseline) in lines {
        canvas.text(
            PAGE_W / 2.0,
            *baseline,
            &strip_non_ascii(content),
            *style,
            *size,
            WHITE,
            TextAlign::Center,
        );
    }
    height
}

/// Avatar identity card. `y` is the card top; returns the card bottom.
fn identity_card(
    canvas: &mut dyn Canvas,
    y: f64,
    ctx: &ReportContext<'_>,
    accent: Color,
) -> f64 {
    let avatar = ctx.profile.avatar;

    // Drop shadow, card body, accent bar.
    canvas.fill_round_rect(
        MARGIN + 3.0,
        y + 3.0,
        CONTENT_W,
        CARD_H,
        12.0,
        BLACK.with_alpha(0.08),
    );
    canvas.fill_round_rect(MARGIN, y, CONTENT_W, CARD_H, 12.0, WHITE);
    canvas.fill_round_rect(MARGIN, y, 8.0, CARD_H, 4.0, accent);

    // Circular badge with uppercase label.
    let badge_cx = MARGIN + 46.0;
    let badge_cy = y + CARD_H / 2.0;
    canvas.fill_circle(badge_cx, badge_cy, 30.0, accent);
    canvas.text(
        badge_cx,
        badge_cy + 2.5,
        avatar.badge,
        FontStyle::Bold,
        7.0,
        WHITE,
        TextAlign::Center,
    );

    let text_x = MARGIN + 80.0;
    canvas.text(
        text_x,
        y + 32.0,
        &strip_non_ascii(avatar.plain_name),
        FontStyle::Bold,
        17.0,
        MIDNIGHT,
        TextAlign::Left,
    );
    canvas.text(
        text_x,
        y + 50.0,
        "YOUR FOOD AVATAR",
        FontStyle::Bold,
        9.0,
        accent,
        TextAlign::Left,
    );
    let desc_w = MARGIN + CONTENT_W - text_x - 12.0;
    let _ = wrapped_text(
        canvas,
        avatar.description,
        text_x,
        y + 58.0,
        desc_w,
        10.0,
        MID_GREY,
        false,
    );

    // Optional respondent metadata badge.
    let level = ctx.response.answer(fields::LEVEL);
    let who = ctx.response.answer(fields::WHO);
    let badge_text = match (level, who) {
        (Some(level), Some(who)) => Some(format!("{level}  -  {who}")),
        (Some(level), None) => Some(level.to_string()),
        (None, Some(who)) => Some(who.to_string()),
        (None, None) => None,
    };
    if let Some(badge_text) = badge_text {
        let badge_text = strip_non_ascii(&badge_text);
        let badge_w = canvas.text_width(&badge_text, FontStyle::Regular, 8.0) + 16.0;
        canvas.fill_round_rect(text_x, y + 79.0, badge_w, 16.0, 4.0, LIGHT_GREY);
        canvas.text(
            text_x + 8.0,
            y + 90.0,
            &badge_text,
            FontStyle::Regular,
            8.0,
            MID_GREY,
            TextAlign::Left,
        );
    }

    y + CARD_H
}

/// Labeled chart region: heading, accent underline, embedded chart image
/// scaled to the content width while preserving aspect ratio.
fn chart_section(canvas: &mut dyn Canvas, y: f64, chart: &ChartImage, accent: Color) -> f64 {
    canvas.text(
        MARGIN,
        y + 11.0,
        "Flavour DNA Chart",
        FontStyle::Bold,
        11.0,
        MIDNIGHT,
        TextAlign::Left,
    );
    canvas.line(MARGIN, y + 15.0, MARGIN + 120.0, y + 15.0, 2.0, accent);

    let box_y = y + 24.0;
    // Fit inside CONTENT_W x CHART_BOX_H, centered horizontally.
    let mut draw_w = CONTENT_W;
    let mut draw_h = draw_w * chart.aspect();
    if draw_h > CHART_BOX_H {
        draw_h = CHART_BOX_H;
        draw_w = draw_h / chart.aspect();
    }
    let draw_x = MARGIN + (CONTENT_W - draw_w) / 2.0;
    canvas.image(chart, draw_x, box_y, draw_w, draw_h);

    box_y + CHART_BOX_H
}

/// Horizontal adventurousness meter with band-colored fill and endpoint
/// captions. Returns the cursor below the captions.
fn neophobia_meter(canvas: &mut dyn Canvas, y: f64, profile: &FlavourProfile) -> f64 {
    canvas.text(
        MARGIN,
        y + 10.0,
        "Food Adventurousness Score",
        FontStyle::Bold,
        10.0,
        MIDNIGHT,
        TextAlign::Left,
    );

    let track_w = CONTENT_W - 120.0;
    let track_y = y + 16.0;
    canvas.fill_round_rect(MARGIN, track_y, track_w, METER_H, 6.0, LIGHT_GREY);

    // Proportional fill, floored so a zero score stays visible.
    let fill_w = (f64::from(profile.neophobia_index) / 8.0 * track_w).max(METER_MIN_FILL);
    canvas.fill_round_rect(
        MARGIN,
        track_y,
        fill_w,
        METER_H,
        6.0,
        band_color(profile.neophobia_band),
    );

    canvas.text(
        MARGIN + track_w + 10.0,
        track_y + 11.0,
        &format!(
            "{}/8  {}",
            profile.neophobia_index,
            profile.neophobia_band.meter_label()
        ),
        FontStyle::Bold,
        9.0,
        MIDNIGHT,
        TextAlign::Left,
    );

    let caption_y = track_y + METER_H + 10.0;
    canvas.text(
        MARGIN,
        caption_y,
        "Cautious",
        FontStyle::Regular,
        7.0,
        MID_GREY,
        TextAlign::Left,
    );
    canvas.text(
        MARGIN + track_w,
        caption_y,
        "Adventurous",
        FontStyle::Regular,
        7.0,
        MID_GREY,
        TextAlign::Right,
    );

    caption_y
}

/// Bold section title with a thin accent underline sized to the rendered
/// text width. Returns the cursor below the underline.
fn section_header(canvas: &mut dyn Canvas, title: &str, y: f64, accent: Color) -> f64 {
    let title = strip_non_ascii(title);
    canvas.text(
        MARGIN,
        y + 11.0,
        &title,
        FontStyle::Bold,
        11.0,
        MIDNIGHT,
        TextAlign::Left,
    );
    let title_w = canvas.text_width(&title, FontStyle::Bold, 11.0);
    canvas.line(MARGIN, y + 16.0, MARGIN + title_w + 4.0, y + 16.0, 2.0, accent);
    y + 20.0
}

/// Reflowed text block. Returns the cursor below the last line.
fn wrapped_text(
    canvas: &mut dyn Canvas,
    text: &str,
    x: f64,
    y: f64,
    max_w: f64,
    size: f64,
    color: Color,
    italic: bool,
) -> f64 {
    let style = if italic {
        FontStyle::Oblique
    } else {
        FontStyle::Regular
    };
    let lines = wrap_to_width(&strip_non_ascii(text), max_w, size);
    let line_h = size * LINE_HEIGHT_FACTOR;
    let mut baseline = y + size;
    for line in &lines {
        canvas.text(x, baseline, line, style, size, color, TextAlign::Left);
        baseline += line_h;
    }
    y + lines.len() as f64 * line_h
}

/// Up to three numbered suggestion cards. Returns the cursor below the last
/// card.
fn swap_cards(canvas: &mut dyn Canvas, y: f64, substitutions: &SubstitutionSet) -> f64 {
    let mut y = y;
    for (i, suggestion) in substitutions.items().iter().take(3).enumerate() {
        let color = SWAP_CARD_CYCLE[i % SWAP_CARD_CYCLE.len()];

        canvas.fill_round_rect(MARGIN, y, CONTENT_W, SWAP_CARD_H, 8.0, WHITE);
        canvas.stroke_round_rect(MARGIN, y, CONTENT_W, SWAP_CARD_H, 8.0, 1.2, color);

        let cy = y + SWAP_CARD_H / 2.0;
        canvas.fill_circle(MARGIN + 20.0, cy, 11.0, color);
        canvas.text(
            MARGIN + 20.0,
            cy + 3.5,
            &(i + 1).to_string(),
            FontStyle::Bold,
            10.0,
            WHITE,
            TextAlign::Center,
        );

        canvas.text(
            MARGIN + 38.0,
            cy + 3.5,
            &strip_non_ascii(suggestion),
            FontStyle::Regular,
            10.0,
            MIDNIGHT,
            TextAlign::Left,
        );

        y += SWAP_CARD_H + 6.0;
    }
    y
}

/// Fixed answers-at-a-glance table with alternating row striping.
fn glance_table(canvas: &mut dyn Canvas, y: f64, response: &SurveyResponse) -> f64 {
    let joined_healthy = {
        let items = response.answer_list(fields::HEALTHY_MEANING);
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let rows: [(&str, String); 6] = [
        (
            "Favourite texture",
            display_value(response.answer(fields::TEXTURE)),
        ),
        (
            "Favourite flavour",
            display_value(response.answer(fields::FLAVOUR)),
        ),
        (
            "Favourite snack",
            display_value(response.answer(fields::SNACK)),
        ),
        (
            "Tried new food recently",
            display_value(response.answer(fields::TRIED_NEW)),
        ),
        (
            "Open to healthy swaps",
            display_value(response.answer(fields::SUBSTITUTE_WILLINGNESS)),
        ),
        ("What 'healthy' means", joined_healthy),
    ];

    let label_col_w = 175.0;
    let mut y = y;
    for (i, (label, value)) in rows.iter().enumerate() {
        if i % 2 == 0 {
            canvas.fill_rect(MARGIN, y, CONTENT_W, GLANCE_ROW_H, LIGHT_GREY);
        }
        canvas.text(
            MARGIN + 6.0,
            y + 13.0,
            label,
            FontStyle::Regular,
            8.5,
            MID_GREY,
            TextAlign::Left,
        );
        let value = truncate_chars(&strip_non_ascii(value), GLANCE_VALUE_CHARS);
        canvas.text(
            MARGIN + label_col_w,
            y + 13.0,
            &value,
            FontStyle::Bold,
            8.5,
            MIDNIGHT,
            TextAlign::Left,
        );
        y += GLANCE_ROW_H;
    }
    y
}

fn display_value(answer: Option<&str>) -> String {
    answer.unwrap_or("-").to_string()
}

/// Fixed-height bottom bar with project/version text and page label.
fn footer(canvas: &mut dyn Canvas, page_number: u8) {
    canvas.fill_rect(0.0, PAGE_H - FOOTER_H, PAGE_W, FOOTER_H, MIDNIGHT);
    canvas.text(
        18.0,
        PAGE_H - 10.0,
        &format!("{PROJECT_NAME} v{VERSION} - P3-P6 Longitudinal Study - Singapore 2026"),
        FontStyle::Regular,
        7.5,
        WHITE,
        TextAlign::Left,
    );
    canvas.text(
        PAGE_W - 18.0,
        PAGE_H - 10.0,
        &format!("Page {page_number} of 2"),
        FontStyle::Regular,
        7.5,
        WHITE,
        TextAlign::Right,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::canvas::{DrawOp, RecordingCanvas};
    use crate::scoring::select_substitutions;
    use crate::survey::test_support::{response_with, sample_response};

    fn chart_stub() -> ChartImage {
        ChartImage {
            png: vec![0x89, b'P', b'N', b'G'],
            width: 1240,
            height: 560,
        }
    }

    fn compose_both(response: &SurveyResponse) -> (RecordingCanvas, RecordingCanvas) {
        let profile = FlavourProfile::from_response(response);
        let substitutions = select_substitutions(
            profile.dominant,
            response.answer(fields::TEXTURE),
        );
        let chart = chart_stub();
        let ctx = ReportContext {
            response,
            profile: &profile,
            substitutions: &substitutions,
            chart: &chart,
        };
        let mut page1 = RecordingCanvas::new();
        compose_page_one(&mut page1, &ctx);
        let mut page2 = RecordingCanvas::new();
        compose_page_two(&mut page2, &ctx);
        (page1, page2)
    }

    #[test]
    fn test_blocks_stay_within_page_bounds() {
        let (page1, page2) = compose_both(&sample_response());
        assert!(page1.max_bottom() <= PAGE_H);
        assert!(page2.max_bottom() <= PAGE_H);
    }

    #[test]
    fn test_pages_carry_footers() {
        let (page1, page2) = compose_both(&sample_response());
        assert!(page1.texts().contains(&"Page 1 of 2"));
        assert!(page2.texts().contains(&"Page 2 of 2"));
    }

    #[test]
    fn test_identity_card_labels() {
        let (page1, _) = compose_both(&sample_response());
        let texts = page1.texts();
        assert!(texts.contains(&"YOUR FOOD AVATAR"));
        assert!(texts.contains(&"Cautious"));
        assert!(texts.contains(&"Adventurous"));
    }

    #[test]
    fn test_all_rendered_text_is_ascii() {
        let (page1, page2) = compose_both(&sample_response());
        for text in page1.texts().iter().chain(page2.texts().iter()) {
            assert!(text.is_ascii(), "non-ASCII rendered text: {text:?}");
        }
    }

    #[test]
    fn test_empty_response_composes_with_minimum_meter_fill() {
        let response = response_with(&[]);
        let (page1, _) = compose_both(&response);
        // Zero neophobia index still draws a visible fill.
        let has_min_fill = page1.ops.iter().any(|op| {
            matches!(op, DrawOp::RoundRect { w, h, .. }
                if (*w - METER_MIN_FILL).abs() < 1e-9 && (*h - METER_H).abs() < 1e-9)
        });
        assert!(has_min_fill);
    }

    #[test]
    fn test_page_two_draws_three_numbered_cards() {
        let (_, page2) = compose_both(&sample_response());
        let numbers: Vec<&str> = page2
            .texts()
            .into_iter()
            .filter(|t| ["1", "2", "3"].contains(t))
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_chart_image_preserves_aspect_ratio() {
        let (page1, _) = compose_both(&sample_response());
        let image = page1
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Image { w, h, .. } => Some((*w, *h)),
                _ => None,
            })
            .expect("page 1 embeds a chart image");
        let (w, h) = image;
        assert!((h / w - 560.0 / 1240.0).abs() < 1e-6);
        assert!(h <= CHART_BOX_H + 1e-9);
    }
}

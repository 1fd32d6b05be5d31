//! Report generation: chart rendering, page composition, and the batch
//! runner that writes one two-page document per respondent.

pub mod canvas;
pub mod chart;
pub mod layout;
pub mod palette;
pub mod svg;
pub mod text;

use std::path::{Path, PathBuf};

use crate::errors::RenderError;
use crate::scoring::{select_substitutions, FlavourProfile};
use crate::survey::{fields, SurveyResponse};

pub use canvas::{Canvas, ChartImage, DrawOp, FontStyle, RecordingCanvas, TextAlign};
pub use chart::render_dimension_chart;
pub use layout::{compose_page_one, compose_page_two, ReportContext, PAGE_H, PAGE_W};
pub use svg::SvgCanvas;

/// Rasterization scale for output pages (A4 points to pixels).
const PAGE_SCALE: f64 = 2.0;

/// A fully rendered two-page report for one respondent.
pub struct RenderedReport {
    /// Output file stem: `<level>_<id8>`.
    pub file_stem: String,
    /// PNG bytes for the two pages, in order.
    pub pages: [Vec<u8>; 2],
}

impl RenderedReport {
    /// Write both pages under `dir`, returning the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
        let mut paths = Vec::with_capacity(self.pages.len());
        for (i, page) in self.pages.iter().enumerate() {
            let path = dir.join(format!("{}_page{}.png", self.file_stem, i + 1));
            std::fs::write(&path, page)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

/// Score a respondent and render their two-page report.
pub fn generate_report(response: &SurveyResponse) -> Result<RenderedReport, RenderError> {
    let profile = FlavourProfile::from_response(response);
    let substitutions =
        select_substitutions(profile.dominant, response.answer(fields::TEXTURE));
    let chart = render_dimension_chart(&profile.scores)?;

    let ctx = ReportContext {
        response,
        profile: &profile,
        substitutions: &substitutions,
        chart: &chart,
    };

    let mut page1 = SvgCanvas::new(PAGE_W, PAGE_H);
    compose_page_one(&mut page1, &ctx);
    let mut page2 = SvgCanvas::new(PAGE_W, PAGE_H);
    compose_page_two(&mut page2, &ctx);

    let level = response.level().unwrap_or("XX");
    Ok(RenderedReport {
        file_stem: format!("{}_{}", level, response.short_id()),
        pages: [page1.rasterize(PAGE_SCALE)?, page2.rasterize(PAGE_SCALE)?],
    })
}

/// Outcome counts for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

/// Generate and write a report for every respondent.
///
/// Failures are isolated per respondent: a fault while scoring, composing,
/// or writing one report is logged with that respondent's id and the batch
/// continues. An empty batch is a notice, not an error.
pub fn run_batch(responses: &[SurveyResponse], out_dir: &Path) -> Result<BatchOutcome, RenderError> {
    if responses.is_empty() {
        tracing::warn!("no responses to report on (check your filters)");
        return Ok(BatchOutcome::default());
    }

    std::fs::create_dir_all(out_dir)?;

    let mut outcome = BatchOutcome::default();
    let total = responses.len();
    for (i, response) in responses.iter().enumerate() {
        match generate_report(response).and_then(|report| {
            report.write_to(out_dir).map(|_| report.file_stem)
        }) {
            Ok(stem) => {
                outcome.succeeded += 1;
                tracing::info!("[{}/{}] wrote {}_page*.png", i + 1, total, stem);
            }
            Err(err) => {
                outcome.failed += 1;
                tracing::error!("[{}/{}] report failed for {}: {}", i + 1, total, response.id, err);
            }
        }
    }
    Ok(outcome)
}

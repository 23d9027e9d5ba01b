//! Report rendering: the textual breakdown and the optional plot artifacts.
//!
//! Renderers consume a finished [`CostReport`]; the core pipeline never
//! prints or draws on its own, so headless runs plug in [`NullRenderer`].

use crate::cost::{CostReport, Recommendation};
use crate::error::Result;
use crate::histogram::IntensityHistogram;
use crate::image::io::save_grayscale_u8;
use crate::image::GrayImageU8;
use std::fmt::Write as _;
use std::path::PathBuf;

const SECTION_RULE: &str = "----------------------------";

/// Output seam for analysis results.
pub trait ReportRenderer {
    fn render(&self, image: &GrayImageU8, report: &CostReport) -> Result<()>;
}

/// Formats the five-section textual report.
///
/// Numeric fields are right-aligned with three decimals; monetary lines carry
/// a `€` suffix.
pub fn format_report(report: &CostReport) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "# Image Information:\n");
    let _ = writeln!(out, "Image shape     ({}, {})", report.width, report.height);
    let _ = writeln!(out, "Number of pixel {}", stats.count);

    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "# Histogram Information:\n");
    let _ = writeln!(out, "Counts             {:12.3}", stats.count as f64);
    let _ = writeln!(out, "Mean               {:12.3}", stats.mean);
    let _ = writeln!(out, "Standard Deviation {:12.3}", stats.std);
    let _ = writeln!(out, "Mean Error         {:12.3}", stats.mean_error);
    let _ = writeln!(out, "Min                {:12.3}", f64::from(stats.min));
    let _ = writeln!(out, "Max                {:12.3}", f64::from(stats.max));

    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "# Print Information:\n");
    let _ = writeln!(out, "Page Coverage    {:12.3}%", report.coverage_pct);

    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "# Cost Information:\n");
    let _ = writeln!(out, "Paper per page   {:12.3} €", report.paper_cost);
    let _ = writeln!(out, "Ink per page     {:12.3} €", report.ink_cost);
    let _ = writeln!(out, "Cost of printing {:12.3} €", report.total_cost);
    let _ = writeln!(out, "Copy shop price  {:12.3} €", report.copyshop_cost);

    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "# Recommendation:\n");
    match report.recommendation {
        Recommendation::PrintAtHome => {
            let _ = writeln!(out, "It's cheaper to print at home!");
        }
        Recommendation::GoToCopyShop => {
            let _ = writeln!(out, "It's cheaper to go to the copy shop!");
        }
    }
    let _ = writeln!(
        out,
        "You would save ({:.3} - {:.3})€ = {:.3}€",
        report.total_cost.max(report.copyshop_cost),
        report.total_cost.min(report.copyshop_cost),
        report.savings
    );

    out
}

/// Prints the textual report to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, _image: &GrayImageU8, report: &CostReport) -> Result<()> {
        print!("{}", format_report(report));
        Ok(())
    }
}

/// Renderer that drops the report. Used by headless callers and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl ReportRenderer for NullRenderer {
    fn render(&self, _image: &GrayImageU8, _report: &CostReport) -> Result<()> {
        Ok(())
    }
}

/// Writes two PNGs into `out_dir`: the analyzed raster and a 256-bucket
/// intensity histogram with a dashed vertical marker at the mean.
#[derive(Clone, Debug)]
pub struct PlotRenderer {
    pub out_dir: PathBuf,
}

const CHART_WIDTH: usize = 512; // two columns per intensity bucket
const CHART_HEIGHT: usize = 300;
const BAR_SHADE: u8 = 96;
const DASH_LEN: usize = 4;

impl PlotRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        PlotRenderer {
            out_dir: out_dir.into(),
        }
    }

    fn histogram_chart(image: &GrayImageU8, mean: f64) -> GrayImageU8 {
        let hist = IntensityHistogram::from_view(&image.as_view());
        let peak = hist.peak().max(1);
        let mut pixels = vec![255u8; CHART_WIDTH * CHART_HEIGHT];

        for (bucket, &count) in hist.bins().iter().enumerate() {
            let bar_h = ((count as f64 / peak as f64) * CHART_HEIGHT as f64).round() as usize;
            let bar_h = bar_h.min(CHART_HEIGHT);
            for dx in 0..2 {
                let x = bucket * 2 + dx;
                for y in CHART_HEIGHT - bar_h..CHART_HEIGHT {
                    pixels[y * CHART_WIDTH + x] = BAR_SHADE;
                }
            }
        }

        // Dashed marker at the mean intensity.
        let max_x = (CHART_WIDTH - 1) as f64;
        let mean_x = ((mean / 255.0) * max_x).round().clamp(0.0, max_x) as usize;
        for y in 0..CHART_HEIGHT {
            if (y / DASH_LEN) % 2 == 0 {
                pixels[y * CHART_WIDTH + mean_x] = 0;
            }
        }

        GrayImageU8::new(CHART_WIDTH, CHART_HEIGHT, pixels)
    }
}

impl ReportRenderer for PlotRenderer {
    fn render(&self, image: &GrayImageU8, report: &CostReport) -> Result<()> {
        save_grayscale_u8(image, &self.out_dir.join("image.png"))?;
        let chart = Self::histogram_chart(image, report.stats.mean);
        save_grayscale_u8(&chart, &self.out_dir.join("histogram.png"))
    }
}

//! Print-cost analysis for grayscale images.
//!
//! Loads a raster image, computes intensity statistics, estimates the ink
//! coverage of a printed page from the mean gray level, and prices a home
//! print against a flat copy-shop rate.

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod cost;
pub mod error;
pub mod histogram;
pub mod image;
pub mod report;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::CostAnalyzer;
pub use crate::cost::{CostParams, CostReport, Recommendation};
pub use crate::error::{AnalysisError, Result};

// Renderers consuming a finished report.
pub use crate::report::{NullRenderer, PlotRenderer, ReportRenderer, TextRenderer};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use print_cost::prelude::*;
///
/// # fn main() -> print_cost::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![255u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let analyzer = CostAnalyzer::new(CostParams {
///     toner_cost: 15.0,
///     toner_page_yield: 1000,
///     ..Default::default()
/// });
///
/// let report = analyzer.analyze_image(img)?;
/// println!("coverage={:.3}% total={:.3}€", report.coverage_pct, report.total_cost);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{CostAnalyzer, CostParams, CostReport, Recommendation};
}

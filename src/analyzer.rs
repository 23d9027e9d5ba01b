//! Analysis entry points: decode, measure, price.

use crate::cost::{build_report, CostParams, CostReport};
use crate::error::Result;
use crate::image::{FileDecoder, ImageDecoder, ImageU8};
use crate::stats;
use log::debug;
use std::path::Path;

/// One-shot analyzer tying the decoder, the statistics pass, and the cost
/// model together. Each call is independent and idempotent for unchanged
/// inputs; nothing is retained between calls.
pub struct CostAnalyzer<D = FileDecoder> {
    params: CostParams,
    decoder: D,
}

impl CostAnalyzer<FileDecoder> {
    pub fn new(params: CostParams) -> Self {
        Self::with_decoder(params, FileDecoder)
    }
}

impl<D: ImageDecoder> CostAnalyzer<D> {
    /// Builds an analyzer with an injected decoder.
    pub fn with_decoder(params: CostParams, decoder: D) -> Self {
        CostAnalyzer { params, decoder }
    }

    /// Loads `path`, normalizes it to 8-bit grayscale, and prices the print.
    pub fn analyze(&self, path: &Path) -> Result<CostReport> {
        let image = self.decoder.decode(path)?;
        debug!(
            "CostAnalyzer::analyze decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.analyze_image(image.as_view())
    }

    /// Prices an already-decoded grayscale view.
    pub fn analyze_image(&self, image: ImageU8<'_>) -> Result<CostReport> {
        let statistics = stats::compute(&image)?;
        debug!(
            "CostAnalyzer::analyze_image count={} mean={:.3} std={:.3}",
            statistics.count, statistics.mean, statistics.std
        );
        build_report(image.w, image.h, statistics, &self.params)
    }
}

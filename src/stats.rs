//! Descriptive statistics over grayscale pixel intensities.

use crate::error::{AnalysisError, Result};
use crate::image::ImageU8;
use serde::Serialize;

/// Summary statistics of a flattened intensity pool.
///
/// `std` is the population standard deviation; `mean_error` is the standard
/// error of the mean, `std / sqrt(count)`. Computed once per analysis call.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ImageStatistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub mean_error: f64,
    pub min: u8,
    pub max: u8,
}

/// Computes statistics over every sample of the view.
///
/// All samples are pooled positionally regardless of how the caller arranged
/// channels; the expected input is single-channel grayscale.
pub fn compute(image: &ImageU8<'_>) -> Result<ImageStatistics> {
    let count = image.pixel_count();
    if count == 0 {
        return Err(AnalysisError::configuration(
            "cannot compute statistics of an empty image",
        ));
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for y in 0..image.h {
        for &px in image.row(y) {
            let v = f64::from(px);
            sum += v;
            sum_sq += v * v;
            min = min.min(px);
            max = max.max(px);
        }
    }

    let n = count as f64;
    let mean = sum / n;
    // Population variance; guard tiny negative drift from the two-pass-free form.
    let variance = (sum_sq / n - mean * mean).max(0.0);
    let std = variance.sqrt();
    let mean_error = std / n.sqrt();

    Ok(ImageStatistics {
        count,
        mean,
        std,
        mean_error,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(w: usize, h: usize, data: &[u8]) -> ImageU8<'_> {
        ImageU8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn uniform_image_has_zero_spread() {
        let data = vec![200u8; 12];
        let stats = compute(&view(4, 3, &data)).expect("stats");
        assert_eq!(stats.count, 12);
        assert!((stats.mean - 200.0).abs() < 1e-12);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.mean_error, 0.0);
        assert_eq!(stats.min, 200);
        assert_eq!(stats.max, 200);
    }

    #[test]
    fn two_level_image_matches_population_formulas() {
        // Half zeros, half 255: mean 127.5, population std 127.5.
        let mut data = vec![0u8; 8];
        data.extend(vec![255u8; 8]);
        let stats = compute(&view(4, 4, &data)).expect("stats");
        assert!((stats.mean - 127.5).abs() < 1e-9);
        assert!((stats.std - 127.5).abs() < 1e-9);
        assert!((stats.mean_error - 127.5 / 4.0).abs() < 1e-9);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 255);
    }

    #[test]
    fn mean_is_bracketed_by_min_and_max() {
        let data: Vec<u8> = (0..=255).collect();
        let stats = compute(&view(16, 16, &data)).expect("stats");
        assert!(stats.std >= 0.0);
        assert!(f64::from(stats.min) <= stats.mean);
        assert!(stats.mean <= f64::from(stats.max));
    }

    #[test]
    fn empty_image_is_rejected() {
        let data: Vec<u8> = Vec::new();
        let err = compute(&view(0, 0, &data)).unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }
}

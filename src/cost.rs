//! Cost parameters and the per-page cost model.
//!
//! The model scales a toner cartridge's rated page yield, which assumes a
//! nominal 5% ink coverage per page, by the coverage estimated from the mean
//! gray level of the analyzed image, then adds the amortized paper cost.

use crate::error::{AnalysisError, Result};
use crate::stats::ImageStatistics;
use serde::{Deserialize, Serialize};

/// Rated page yields assume this ink coverage per page.
const NOMINAL_COVERAGE_PCT: f64 = 5.0;

/// Caller-supplied cost configuration. Everything defaults to zero, matching
/// an "analysis only" call that skips the cost breakdown.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CostParams {
    /// Cartridge price.
    pub toner_cost: f64,
    /// Pages the cartridge is rated for at nominal coverage.
    pub toner_page_yield: u32,
    /// Price of a paper stack.
    pub paper_stack_cost: f64,
    /// Sheets in the stack.
    pub paper_stack_sheets: u32,
    /// Flat price of a single print at the copy shop.
    pub copyshop_cost: f64,
}

impl CostParams {
    /// Rejects parameter sets whose arithmetic is undefined.
    ///
    /// A zero denominator is only an error when the paired cost is non-zero;
    /// all-zero defaults stay valid and price the component at zero.
    pub fn validate(&self) -> Result<()> {
        if self.toner_cost < 0.0 || self.paper_stack_cost < 0.0 || self.copyshop_cost < 0.0 {
            return Err(AnalysisError::configuration(
                "cost parameters must be non-negative",
            ));
        }
        if self.toner_cost > 0.0 && self.toner_page_yield == 0 {
            return Err(AnalysisError::configuration(
                "toner_page_yield must be positive when toner_cost is set",
            ));
        }
        if self.paper_stack_cost > 0.0 && self.paper_stack_sheets == 0 {
            return Err(AnalysisError::configuration(
                "paper_stack_sheets must be positive when paper_stack_cost is set",
            ));
        }
        Ok(())
    }

    fn paper_cost_per_page(&self) -> f64 {
        if self.paper_stack_sheets == 0 {
            0.0
        } else {
            self.paper_stack_cost / f64::from(self.paper_stack_sheets)
        }
    }

    fn ink_cost_per_page(&self, coverage_pct: f64) -> f64 {
        if self.toner_page_yield == 0 {
            0.0
        } else {
            let per_page = self.toner_cost / f64::from(self.toner_page_yield);
            per_page * (coverage_pct / NOMINAL_COVERAGE_PCT)
        }
    }
}

/// Estimated fraction of the page covered by ink, from the mean gray level.
///
/// Darker pages draw more ink: 0% at an all-white mean of 255, 100% at an
/// all-black mean of 0.
pub fn coverage_pct(mean_intensity: f64) -> f64 {
    (1.0 - mean_intensity / 255.0) * 100.0
}

/// Which option is cheaper for this print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    PrintAtHome,
    GoToCopyShop,
}

/// Derived cost figures for one analyzed image. Produced once per call and
/// handed to renderers; never retained.
#[derive(Clone, Debug, Serialize)]
pub struct CostReport {
    pub width: usize,
    pub height: usize,
    pub stats: ImageStatistics,
    pub coverage_pct: f64,
    pub paper_cost: f64,
    pub ink_cost: f64,
    pub total_cost: f64,
    pub copyshop_cost: f64,
    pub recommendation: Recommendation,
    pub savings: f64,
}

/// Combines statistics with the cost parameters into a full report.
pub fn build_report(
    width: usize,
    height: usize,
    stats: ImageStatistics,
    params: &CostParams,
) -> Result<CostReport> {
    params.validate()?;

    let coverage = coverage_pct(stats.mean);
    let paper_cost = params.paper_cost_per_page();
    let ink_cost = params.ink_cost_per_page(coverage);
    let total_cost = paper_cost + ink_cost;

    let recommendation = if total_cost <= params.copyshop_cost {
        Recommendation::PrintAtHome
    } else {
        Recommendation::GoToCopyShop
    };
    let savings = (total_cost - params.copyshop_cost).abs();

    Ok(CostReport {
        width,
        height,
        stats,
        coverage_pct: coverage,
        paper_cost,
        ink_cost,
        total_cost,
        copyshop_cost: params.copyshop_cost,
        recommendation,
        savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_mean(mean: f64) -> ImageStatistics {
        ImageStatistics {
            count: 100,
            mean,
            std: 0.0,
            mean_error: 0.0,
            min: 0,
            max: 255,
        }
    }

    fn example_params() -> CostParams {
        CostParams {
            toner_cost: 15.0,
            toner_page_yield: 1000,
            paper_stack_cost: 5.0,
            paper_stack_sheets: 500,
            copyshop_cost: 0.035,
        }
    }

    #[test]
    fn white_page_draws_no_ink() {
        let report = build_report(10, 10, stats_with_mean(255.0), &example_params()).unwrap();
        assert!(report.coverage_pct.abs() < 1e-12);
        assert!(report.ink_cost.abs() < 1e-12);
        assert!((report.total_cost - 0.01).abs() < 1e-9);
    }

    #[test]
    fn black_page_draws_twenty_times_nominal() {
        let report = build_report(10, 10, stats_with_mean(0.0), &example_params()).unwrap();
        assert!((report.coverage_pct - 100.0).abs() < 1e-12);
        let expected_ink = 15.0 / 1000.0 * 20.0;
        assert!((report.ink_cost - expected_ink).abs() < 1e-9);
    }

    #[test]
    fn worked_example_matches_reference_figures() {
        let report = build_report(567, 567, stats_with_mean(114.758), &example_params()).unwrap();
        assert!((report.coverage_pct - 54.997).abs() < 1e-3);
        assert!((report.paper_cost - 0.010).abs() < 1e-4);
        assert!((report.ink_cost - 0.165).abs() < 1e-3);
        assert!((report.total_cost - 0.175).abs() < 1e-3);
        assert_eq!(report.recommendation, Recommendation::GoToCopyShop);
        assert!((report.savings - 0.140).abs() < 1e-3);
    }

    #[test]
    fn cost_is_monotone_in_coverage() {
        let params = example_params();
        let mut last_total = -1.0;
        for mean in (0..=255).rev() {
            let report = build_report(1, 1, stats_with_mean(f64::from(mean)), &params).unwrap();
            assert!(
                report.total_cost >= last_total,
                "total dropped at mean={mean}: {} < {last_total}",
                report.total_cost
            );
            last_total = report.total_cost;
        }
    }

    #[test]
    fn zero_yield_with_priced_toner_is_rejected() {
        let params = CostParams {
            toner_cost: 15.0,
            toner_page_yield: 0,
            ..CostParams::default()
        };
        let err = build_report(1, 1, stats_with_mean(128.0), &params).unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }

    #[test]
    fn zero_sheets_with_priced_paper_is_rejected() {
        let params = CostParams {
            paper_stack_cost: 5.0,
            paper_stack_sheets: 0,
            ..CostParams::default()
        };
        assert!(build_report(1, 1, stats_with_mean(128.0), &params).is_err());
    }

    #[test]
    fn all_defaults_price_the_page_at_zero() {
        let report = build_report(1, 1, stats_with_mean(128.0), &CostParams::default()).unwrap();
        assert_eq!(report.total_cost, 0.0);
        assert!(report.total_cost.is_finite());
        assert_eq!(report.recommendation, Recommendation::PrintAtHome);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let params = CostParams {
            toner_cost: -1.0,
            ..CostParams::default()
        };
        assert!(params.validate().is_err());
    }
}

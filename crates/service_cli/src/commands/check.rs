//! Check command: cross-check the engine at the configured points.
//!
//! Every engine operation is compared against `num-dual`, every
//! elementary function against its closed-form derivative, and every
//! catalogue function against its hand-derived derivative.

use clap::ValueEnum;
use dual_core::verification::{
    verify_against_num_dual, verify_closed_form, OpVerification, VerificationConfig,
    VerificationReport,
};
use dual_core::Dual;
use tracing::{info, warn};

use crate::catalog::CatalogFunction;
use crate::{CliError, Result};

/// Compares every catalogue function against its closed form at `x`.
pub fn verify_catalog(x: f64, config: &VerificationConfig) -> VerificationReport {
    let results = CatalogFunction::value_variants()
        .iter()
        .map(|f| {
            let (value, derivative) = f.closed_form(x);
            OpVerification::new(
                f.formula(),
                f.apply(Dual::variable(x)),
                Dual::new(value, derivative),
                config.tolerance,
            )
        })
        .collect();
    VerificationReport { x, results }
}

/// Runs all verification suites at every point.
pub fn verify(points: &[f64], tolerance: f64) -> Vec<(&'static str, VerificationReport)> {
    let config = VerificationConfig::new().with_tolerance(tolerance);
    points
        .iter()
        .flat_map(|&x| {
            [
                ("num-dual", verify_against_num_dual(x, &config)),
                ("closed-form", verify_closed_form(x, &config)),
                ("catalogue", verify_catalog(x, &config)),
            ]
        })
        .collect()
}

/// Runs the check command.
///
/// Fails with [`CliError::Verification`] if any check fails.
pub fn run(points: &[f64], tolerance: f64) -> Result<()> {
    info!(
        "Checking engine at {} point(s), tolerance {:e}",
        points.len(),
        tolerance
    );

    let reports = verify(points, tolerance);
    let mut total = 0;
    let mut failed = 0;

    for (suite, report) in &reports {
        total += report.results.len();
        failed += report.failed_count();

        let status = if report.all_passed() { "ok" } else { "FAILED" };
        println!(
            "[{:<11}] x = {:<10} {:>2}/{:<2} {}",
            suite,
            report.x,
            report.results.len() - report.failed_count(),
            report.results.len(),
            status
        );

        for r in report.failures() {
            warn!(suite = *suite, x = report.x, op = %r.name, "mismatch");
            println!(
                "    {:<14} engine {}  reference {}",
                r.name, r.engine, r.reference
            );
        }
    }

    if failed == 0 {
        println!("All {} checks passed", total);
        Ok(())
    } else {
        Err(CliError::Verification { failed, total })
    }
}

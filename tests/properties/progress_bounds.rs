//! Property: 0 <= percent always; if total_files > 0 and processed <=
//! total, percent <= 100.

use libvaultd::application::ProgressEstimator;

#[test]
fn percent_stays_within_bounds_while_processed_does_not_exceed_total() {
    let estimator = ProgressEstimator::new(0, 0);
    let est = estimator.estimate();
    assert!(est.percent >= 0.0);

    let estimator = ProgressEstimator::new(200, 2_000_000);
    for step in 1..=20u64 {
        let processed = step * 10;
        assert!(processed <= 200);
        estimator.update(processed, step * 100_000);
        let est = estimator.estimate();
        assert!(est.percent >= 0.0);
        assert!(est.percent <= 100.0, "percent must not exceed 100 while processed <= total");
    }

    estimator.update(200, 2_000_000);
    let est = estimator.estimate();
    assert_eq!(est.percent, 100.0);
    assert_eq!(est.eta_secs, 0.0, "eta is zero once complete");
}

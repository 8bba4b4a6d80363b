//! Monte Carlo checks of the law of large numbers.
//!
//! These assert statistical trends over many seeds, never the behaviour of a
//! single seed. Bands are loose: with 300 replications the relative standard
//! error of a sample standard deviation is about 4%.

use sampler_study::{ConvergenceStudy, DispersionStudy};

const REPLICATIONS: usize = 300;

#[test]
fn test_spread_tracks_theoretical_standard_error() {
    let points = DispersionStudy::new(vec![10, 100, 1_000, 10_000], REPLICATIONS, 2024)
        .run()
        .unwrap();

    for p in &points {
        let ratio = p.std_error_ratio();
        assert!(
            (0.75..1.25).contains(&ratio),
            "N={}: std dev {:.5} vs theoretical {:.5} (ratio {:.3})",
            p.sample_count,
            p.std_dev,
            p.theoretical_std_error,
            ratio
        );
    }
}

#[test]
fn test_spread_shrinks_as_inverse_sqrt_n() {
    let points = DispersionStudy::new(vec![10, 1_000], REPLICATIONS, 77)
        .run()
        .unwrap();

    // sqrt(1000 / 10) = 10
    let shrink = points[0].std_dev / points[1].std_dev;
    assert!(
        (7.0..14.0).contains(&shrink),
        "std dev shrank by {:.2}x, expected about 10x",
        shrink
    );
}

#[test]
fn test_spread_decreases_monotonically() {
    let points = DispersionStudy::new(vec![10, 100, 1_000, 10_000], REPLICATIONS, 5)
        .run()
        .unwrap();

    for pair in points.windows(2) {
        assert!(
            pair[1].std_dev < pair[0].std_dev,
            "std dev did not shrink from N={} to N={}",
            pair[0].sample_count,
            pair[1].sample_count
        );
    }
}

#[test]
fn test_mean_of_means_is_unbiased() {
    let points = DispersionStudy::new(vec![10, 1_000], REPLICATIONS, 31)
        .run()
        .unwrap();

    for p in &points {
        // Six standard errors of the mean of means.
        let tolerance = 6.0 * p.theoretical_std_error / (REPLICATIONS as f64).sqrt();
        assert!(
            (p.mean_of_means - 3.5).abs() < tolerance,
            "N={}: mean of means {:.4} outside 3.5 ± {:.4}",
            p.sample_count,
            p.mean_of_means,
            tolerance
        );
    }
}

#[test]
fn test_average_error_shrinks_across_seeds() {
    // Average |mean − 3.5| over many single-seed convergence studies.
    let seeds = 0..100_i64;
    let mut small = 0.0;
    let mut large = 0.0;
    for seed in seeds.clone() {
        let points = ConvergenceStudy::new(vec![10, 10_000], seed).run().unwrap();
        small += points[0].abs_mean_error;
        large += points[1].abs_mean_error;
    }
    let n = seeds.count() as f64;
    assert!(
        large / n < small / n / 10.0,
        "average error {:.4} at N=10_000 vs {:.4} at N=10",
        large / n,
        small / n
    );
}

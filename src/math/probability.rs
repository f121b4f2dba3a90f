//! Gaussian densities for statistical color matching
//!
//! Corner clusters are modelled as independent per-channel Gaussians. Densities
//! are unnormalized: the `1 / (sigma * sqrt(2 pi))` factor is dropped and each
//! density is taken relative to its Gaussian's peak, so that scores stay within
//! `(0, 1]` regardless of how tight a cluster is, which lets a single
//! acceptance floor serve both flat and dithered artwork.

/// Log of the unnormalized Gaussian density at `x`
///
/// Equal to the log of the density at `x` divided by the density at `mean`.
pub fn relative_log_density(x: f64, mean: f64, sigma: f64) -> f64 {
    let z = (x - mean) / sigma;
    -0.5 * z * z
}

/// Symmetric log overlap of two one-dimensional Gaussians
///
/// Sum of each Gaussian's relative log density evaluated at the other's mean.
/// Equal means score 0 (an overlap of 1).
pub fn symmetric_log_overlap(mean_a: f64, sigma_a: f64, mean_b: f64, sigma_b: f64) -> f64 {
    relative_log_density(mean_b, mean_a, sigma_a) + relative_log_density(mean_a, mean_b, sigma_b)
}

/// Combine a measured standard deviation with a noise floor
///
/// Perfectly uniform samples have zero spread; the floor keeps the Gaussian
/// denominator away from zero.
pub fn softened_sigma(std_dev: f64, floor: f64) -> f64 {
    std_dev.hypot(floor).max(f64::MIN_POSITIVE)
}

/// Population mean and standard deviation of a sample
///
/// Divides by `N`, not `N - 1`. An empty sample yields `(0.0, 0.0)`.
pub fn population_moments(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut sum_squares = 0.0;
    for value in values {
        count += 1;
        sum += value;
        sum_squares = value.mul_add(value, sum_squares);
    }

    if count == 0 {
        return (0.0, 0.0);
    }

    let n = count as f64;
    let mean = sum / n;
    let variance = mean.mul_add(-mean, sum_squares / n).max(0.0);
    (mean, variance.sqrt())
}

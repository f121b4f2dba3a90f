//! Tests for Gaussian overlap scoring and sample moments

#[cfg(test)]
mod tests {
    use autowang::math::probability::{
        population_moments, relative_log_density, softened_sigma, symmetric_log_overlap,
    };

    // Tests density at the mean is the peak
    // Verified by dropping the relative normalisation
    #[test]
    fn test_relative_log_density_peak_is_zero() {
        assert!(relative_log_density(12.0, 12.0, 3.0).abs() < f64::EPSILON);
    }

    // Tests one standard deviation away scores -0.5
    // Verified by squaring sigma twice
    #[test]
    fn test_relative_log_density_one_sigma() {
        let score = relative_log_density(13.0, 10.0, 3.0);
        assert!((score + 0.5).abs() < 1e-12, "got {score}");
    }

    // Tests overlap is symmetric in its arguments
    // Verified by evaluating only one direction
    #[test]
    fn test_symmetric_log_overlap_symmetry() {
        let ab = symmetric_log_overlap(10.0, 2.0, 20.0, 5.0);
        let ba = symmetric_log_overlap(20.0, 5.0, 10.0, 2.0);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab < 0.0);
    }

    // Tests identical Gaussians overlap fully
    // Verified by adding a constant offset
    #[test]
    fn test_symmetric_log_overlap_identical() {
        assert!(symmetric_log_overlap(50.0, 3.0, 50.0, 3.0).abs() < f64::EPSILON);
    }

    // Tests floor combines in quadrature
    // Verified by using max instead of hypot
    #[test]
    fn test_softened_sigma_hypot() {
        assert!((softened_sigma(4.0, 3.0) - 5.0).abs() < 1e-12);
        assert!((softened_sigma(0.0, 3.0) - 3.0).abs() < 1e-12);
    }

    // Tests zero spread with zero floor stays positive
    // Verified by removing the lower clamp
    #[test]
    fn test_softened_sigma_never_zero() {
        assert!(softened_sigma(0.0, 0.0) > 0.0);
    }

    // Tests population (not sample) standard deviation
    // Verified by dividing by N - 1
    #[test]
    fn test_population_moments() {
        let (mean, std_dev) = population_moments([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std_dev - 2.0).abs() < 1e-12);
    }

    // Tests empty input is all zeros
    // Verified by returning NaN from the division
    #[test]
    fn test_population_moments_empty() {
        let (mean, std_dev) = population_moments(std::iter::empty::<f64>());
        assert!(mean.abs() < f64::EPSILON);
        assert!(std_dev.abs() < f64::EPSILON);
    }

    // Tests constant input has zero spread
    // Verified by removing the negative variance clamp
    #[test]
    fn test_population_moments_constant() {
        let (mean, std_dev) = population_moments([140.0; 16]);
        assert!((mean - 140.0).abs() < 1e-9);
        assert!(std_dev.abs() < 1e-6);
    }
}

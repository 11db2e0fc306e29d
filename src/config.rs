//! ACO configuration.
//!
//! [`AcoConfig`] holds the parameters shared read-only by the transition
//! policy and the pheromone updater. It is validated once at engine
//! construction and immutable afterward.

use crate::error::AcoError;

/// Configuration for the Ant Colony Optimization engine.
///
/// # Defaults
///
/// ```
/// use aco_engine::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.alpha, 1.0);
/// assert_eq!(config.pe, 0.25);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use aco_engine::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_alpha(2.0)
///     .with_pe(0.1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Scaling factor applied to both terms of the transition force.
    ///
    /// The force for an edge is `weight * alpha + (1 / length) * alpha`.
    /// Note that `alpha` multiplies both the pheromone term and the
    /// inverse-length term; it is not an exponent.
    pub alpha: f64,

    /// Reserved. Declared for surface compatibility but never read by
    /// the transition policy.
    pub beta: f64,

    /// Pheromone evaporation rate in `[0, 1]`.
    ///
    /// Each update multiplies every edge weight by `1 - pe`.
    pub pe: f64,

    /// Reserved. Declared for surface compatibility but never read.
    pub min_road: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            pe: 0.25,
            min_road: 0.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the transition force scaling factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the reserved `beta` parameter.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_pe(mut self, pe: f64) -> Self {
        self.pe = pe;
        self
    }

    /// Sets the reserved `min_road` parameter.
    pub fn with_min_road(mut self, min_road: f64) -> Self {
        self.min_road = min_road;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Every field must hold a finite value (NaN and infinities are the
    /// runtime values the type system cannot exclude), and `pe` must lie
    /// in `[0, 1]`. The reserved fields are validated like the active
    /// ones so that a later revision can start reading them without a
    /// surface change.
    pub fn validate(&self) -> Result<(), AcoError> {
        for (field, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("pe", self.pe),
            ("min_road", self.min_road),
        ] {
            if !value.is_finite() {
                return Err(AcoError::ConfigTypeMismatch { field, value });
            }
        }
        if self.pe < 0.0 || self.pe > 1.0 {
            return Err(AcoError::ConfigTypeMismatch {
                field: "pe",
                value: self.pe,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 1.0).abs() < 1e-10);
        assert!((config.pe - 0.25).abs() < 1e-10);
        assert!((config.min_road - 0.0).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_nan_alpha() {
        let config = AcoConfig::default().with_alpha(f64::NAN);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AcoError::ConfigTypeMismatch { field: "alpha", .. }
        ));
    }

    #[test]
    fn test_validate_infinite_reserved_field() {
        // Reserved fields are still range-checked.
        let config = AcoConfig::default().with_min_road(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_pe_out_of_range() {
        let config = AcoConfig::default().with_pe(1.5);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AcoError::ConfigTypeMismatch { field: "pe", .. }));

        let config = AcoConfig::default().with_pe(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = AcoConfig::default()
            .with_alpha(2.0)
            .with_beta(5.0)
            .with_pe(0.5)
            .with_min_road(1.0)
            .with_seed(7);
        assert_eq!(config.alpha, 2.0);
        assert_eq!(config.beta, 5.0);
        assert_eq!(config.pe, 0.5);
        assert_eq!(config.min_road, 1.0);
        assert_eq!(config.seed, Some(7));
    }
}

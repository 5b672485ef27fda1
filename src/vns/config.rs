//! Variable Neighborhood Search configuration.

/// Configuration parameters for the VNS controller.
///
/// # Examples
///
/// ```
/// use u_setcover::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_max_plateau(500)
///     .with_seed(42);
/// assert_eq!(config.max_plateau, 500);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Maximum number of consecutive non-improving iterations before the
    /// search stops. This is the sole termination mechanism.
    pub max_plateau: usize,
    /// Number of random sets the shake step adds.
    pub shake_strength: usize,
    /// Random seed (None for default seed).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            max_plateau: 200,
            shake_strength: 1,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the plateau bound.
    pub fn with_max_plateau(mut self, n: usize) -> Self {
        self.max_plateau = n;
        self
    }

    /// Sets the number of sets added per shake.
    pub fn with_shake_strength(mut self, k: usize) -> Self {
        self.shake_strength = k;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

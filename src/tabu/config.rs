//! Tabu search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constructive::Construction;

/// Configuration parameters for tabu search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_time_limit(Duration::from_secs(5))
///     .with_tabu_size(7)
///     .with_max_no_improve(50)
///     .with_intensification(false);
/// assert_eq!(config.tabu_size, 7);
/// assert_eq!(config.max_no_improve, 50);
/// assert!(!config.intensification);
/// assert!(config.diversification);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Wall-clock budget, checked once per iteration.
    pub time_limit: Duration,
    /// Adds 2-opt moves to the neighborhood.
    pub intensification: bool,
    /// Restarts from the singleton solution when no admissible neighbor
    /// exists, instead of stopping.
    pub diversification: bool,
    /// Capacity of the tabu list.
    pub tabu_size: usize,
    /// Consecutive non-improving iterations before stopping.
    pub max_no_improve: usize,
    /// Generator of the starting solution.
    pub seed: Construction,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(1800),
            intensification: true,
            diversification: true,
            tabu_size: 5,
            max_no_improve: 1,
            seed: Construction::Trivial,
        }
    }
}

impl TabuConfig {
    /// Default configuration with the flags of the given variant.
    pub fn preset(variant: TabuVariant) -> Self {
        let (intensification, diversification) = variant.flags();
        Self {
            intensification,
            diversification,
            ..Self::default()
        }
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Enables or disables 2-opt moves.
    pub fn with_intensification(mut self, enabled: bool) -> Self {
        self.intensification = enabled;
        self
    }

    /// Enables or disables restart-on-stuck.
    pub fn with_diversification(mut self, enabled: bool) -> Self {
        self.diversification = enabled;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the non-improvement budget.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the starting solution generator.
    pub fn with_seed(mut self, seed: Construction) -> Self {
        self.seed = seed;
        self
    }
}

/// The four intensification/diversification combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabuVariant {
    /// Swap and relocate only, stop when stuck.
    Simple,
    /// Adds 2-opt.
    Intensification,
    /// Restarts when stuck.
    Diversification,
    /// 2-opt and restarts.
    Complete,
}

impl TabuVariant {
    /// Every variant, in reporting order.
    pub const ALL: [TabuVariant; 4] = [
        TabuVariant::Simple,
        TabuVariant::Intensification,
        TabuVariant::Diversification,
        TabuVariant::Complete,
    ];

    /// `(intensification, diversification)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            TabuVariant::Simple => (false, false),
            TabuVariant::Intensification => (true, false),
            TabuVariant::Diversification => (false, true),
            TabuVariant::Complete => (true, true),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            TabuVariant::Simple => "TabuSearch_Simple",
            TabuVariant::Intensification => "TabuSearch_Intensification",
            TabuVariant::Diversification => "TabuSearch_Diversification",
            TabuVariant::Complete => "TabuSearch_Complete",
        }
    }
}

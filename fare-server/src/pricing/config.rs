//! Pricing configuration.

use chrono::NaiveDate;

use crate::domain::TimeOfDay;

/// Fixed parameters sent with every national-rail fare lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailEvaluation {
    /// Time of travel.
    pub time: TimeOfDay,

    /// Date of travel.
    pub date: NaiveDate,

    /// Whether to apply a railcard discount.
    pub railcard: bool,
}

impl Default for RailEvaluation {
    fn default() -> Self {
        Self {
            time: TimeOfDay::hm(16, 0),
            // 2025-03-04 is a valid calendar date
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap_or_default(),
            railcard: true,
        }
    }
}

/// Configuration parameters for fare pricing.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Maximum number of fare lookups in flight at once.
    pub batch_size: usize,

    /// Parameters for national-rail lookups.
    pub rail: RailEvaluation,
}

impl PricingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(batch_size: usize, rail: RailEvaluation) -> Self {
        Self { batch_size, rail }
    }

    /// Set maximum concurrent lookups.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Lookups per batch, never zero.
    pub(crate) fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            batch_size: 8,
            rail: RailEvaluation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PricingConfig::default();

        assert_eq!(config.batch_size, 8);
        assert_eq!(config.rail.time.hhmm(), 1600);
        assert_eq!(config.rail.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert!(config.rail.railcard);
    }

    #[test]
    fn custom_config() {
        let rail = RailEvaluation {
            time: TimeOfDay::hm(8, 15),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            railcard: false,
        };
        let config = PricingConfig::new(2, rail.clone());

        assert_eq!(config.batch_size, 2);
        assert_eq!(config.rail, rail);
    }

    #[test]
    fn zero_batch_size_still_makes_progress() {
        let config = PricingConfig::default().with_batch_size(0);
        assert_eq!(config.effective_batch_size(), 1);
    }
}

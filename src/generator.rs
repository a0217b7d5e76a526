//! Seeded random instances for differential testing.
//!
//! Defaults keep instances small enough for the exhaustive solver: at most
//! 20 positions, so at most 19 big gaps.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GroupingError, Result};
use crate::instance::Instance;

/// Ranges every generated instance is drawn from, all inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub len: RangeInclusive<usize>,
    pub budget: RangeInclusive<i64>,
    pub threshold: RangeInclusive<i64>,
    pub value: RangeInclusive<i64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            len: 1..=20,
            budget: 0..=10,
            threshold: 1..=10,
            value: 1..=50,
        }
    }
}

impl GeneratorConfig {
    /// Reject empty ranges and ranges that would produce invalid instances.
    pub fn validate(&self) -> Result<()> {
        if self.len.is_empty() {
            return Err(GroupingError::invalid("empty length range"));
        }
        if self.value.is_empty() {
            return Err(GroupingError::invalid("empty value range"));
        }
        if self.budget.is_empty() || *self.budget.start() < 0 {
            return Err(GroupingError::invalid(format!(
                "budget range must be non-empty and non-negative, got {:?}",
                self.budget
            )));
        }
        if self.threshold.is_empty() || *self.threshold.start() < 1 {
            return Err(GroupingError::invalid(format!(
                "threshold range must be non-empty and positive, got {:?}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Deterministic source of [`Instance`]s.
pub struct InstanceGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl InstanceGenerator {
    /// # Errors
    /// [`GroupingError::InvalidArgument`] if `config` fails validation.
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw the next instance. Positions come out unsorted; sorting is the
    /// instance's job.
    pub fn next_instance(&mut self) -> Instance {
        let n = self.rng.gen_range(self.config.len.clone());
        let budget = self.rng.gen_range(self.config.budget.clone());
        let threshold = self.rng.gen_range(self.config.threshold.clone());
        let positions: Vec<i64> = (0..n)
            .map(|_| self.rng.gen_range(self.config.value.clone()))
            .collect();
        match Instance::new(positions, budget, threshold) {
            Ok(instance) => instance,
            Err(e) => unreachable!("validated generator produced a bad instance: {e}"),
        }
    }
}

impl Iterator for InstanceGenerator {
    type Item = Instance;

    fn next(&mut self) -> Option<Instance> {
        Some(self.next_instance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_default_ranges() {
        let generator = InstanceGenerator::new(GeneratorConfig::default(), 7).unwrap();
        for inst in generator.take(500) {
            assert!((1..=20).contains(&inst.len()));
            assert!(inst.budget() <= 10);
            assert!((1..=10).contains(&inst.threshold().get()));
            assert!(inst.positions().iter().all(|v| (1..=50).contains(v)));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = InstanceGenerator::new(GeneratorConfig::default(), 99)
            .unwrap()
            .take(20)
            .collect();
        let b: Vec<_> = InstanceGenerator::new(GeneratorConfig::default(), 99)
            .unwrap()
            .take(20)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_ranges() {
        let bad = GeneratorConfig {
            threshold: 0..=3,
            ..GeneratorConfig::default()
        };
        assert!(InstanceGenerator::new(bad, 0).is_err());

        let bad = GeneratorConfig {
            budget: -2..=3,
            ..GeneratorConfig::default()
        };
        assert!(bad.validate().is_err());

        #[allow(clippy::reversed_empty_ranges)]
        let bad = GeneratorConfig {
            len: 5..=1,
            ..GeneratorConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}

use crate::error::Result;
use crate::Instance;

/// Incremental construction of an [`Instance`].
///
/// Budget defaults to 0 and threshold to 1; validation happens in
/// [`InstanceBuilder::build`].
pub struct InstanceBuilder {
    positions: Vec<i64>,
    budget: i64,
    threshold: i64,
}

impl InstanceBuilder {
    pub fn new(positions: impl Into<Vec<i64>>) -> Self {
        Self {
            positions: positions.into(),
            budget: 0,
            threshold: 1,
        }
    }
    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }
    pub fn threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }
    pub fn push(mut self, position: i64) -> Self {
        self.positions.push(position);
        self
    }
    pub fn build(self) -> Result<Instance> {
        Instance::new(self.positions, self.budget, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceBuilder;

    #[test]
    fn defaults() {
        let inst = InstanceBuilder::new(vec![3, 1]).build().unwrap();
        assert_eq!(inst.budget(), 0);
        assert_eq!(inst.threshold().get(), 1);
        assert_eq!(inst.positions(), &[1, 3]);
    }

    #[test]
    fn validation_is_deferred_to_build() {
        let builder = InstanceBuilder::new(Vec::new()).threshold(0).push(4);
        assert!(builder.build().is_err());
    }
}

use crate::strategy::AllocationStrategy;
use std::collections::HashMap;

/// Name-keyed collection of allocation strategies.
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn AllocationStrategy>>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { strategies: HashMap::new() }
    }

    /// Registers a strategy under its own name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, strategy: Box<dyn AllocationStrategy>) {
        self.strategies.insert(strategy.name().to_string(), strategy);
    }

    /// Looks up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&dyn AllocationStrategy> {
        self.strategies.get(name).map(|s| s.as_ref())
    }

    /// The names of all registered strategies, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Tunables for a settlement planner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Symmetric world bound. Every committed tile satisfies
    /// `-map_limit <= x, z <= map_limit`.
    #[serde(default = "default_map_limit")]
    pub map_limit: i32,
    /// Number of spiral iterations the block search may walk before it
    /// reports that no space was found. This is a safety cap, not a derived
    /// value.
    #[serde(default = "default_spiral_iteration_limit")]
    pub spiral_iteration_limit: u32,
}

fn default_map_limit() -> i32 {
    MAP_LIMIT
}

fn default_spiral_iteration_limit() -> u32 {
    SPIRAL_ITERATION_LIMIT
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            map_limit: default_map_limit(),
            spiral_iteration_limit: default_spiral_iteration_limit(),
        }
    }
}

impl PlannerConfig {
    pub fn map_limit(mut self, map_limit: i32) -> Self {
        self.map_limit = map_limit;
        self
    }

    pub fn spiral_iteration_limit(mut self, limit: u32) -> Self {
        self.spiral_iteration_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{ "map_limit": 30 }"#).unwrap();
        assert_eq!(config.map_limit, 30);
        assert_eq!(config.spiral_iteration_limit, SPIRAL_ITERATION_LIMIT);

        let config: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }
}

//! Physics tuning
//!
//! Defaults are the constants in `crate::consts`; the switches only
//! matter for callers that opt into the alternative behaviors.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How repulsion sees the other balls within one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UpdateOrder {
    /// Each ball sees positions already updated earlier in the same tick
    #[default]
    Sequential,
    /// Each ball sees positions captured before the tick started
    Snapshot,
}

impl UpdateOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOrder::Sequential => "Sequential",
            UpdateOrder::Snapshot => "Snapshot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Some(UpdateOrder::Sequential),
            "snapshot" | "snap" => Some(UpdateOrder::Snapshot),
            _ => None,
        }
    }
}

/// What to do when two centers (or a center and its target) coincide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DegeneratePolicy {
    /// Zero-distance forces are skipped; coincident collisions separate along +x
    #[default]
    Guard,
    /// Divide by zero anyway and let NaN/Infinity flow into the state
    Propagate,
}

impl DegeneratePolicy {
    pub fn is_guarded(&self) -> bool {
        matches!(self, DegeneratePolicy::Guard)
    }
}

/// Physics tuning for a `FloatingSpace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Constant per-axis pull toward the target
    pub target_nudge: f64,
    /// Radius change per tick
    pub radius_step: f64,
    pub gravity_coulomb: f64,
    pub gravity_min_force: f64,
    pub repulsion_coulomb: f64,
    pub repulsion_max_force: f64,
    pub update_order: UpdateOrder,
    pub degenerate: DegeneratePolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            target_nudge: TARGET_NUDGE,
            radius_step: RADIUS_STEP,
            gravity_coulomb: GRAVITY_COULOMB,
            gravity_min_force: GRAVITY_MIN_FORCE,
            repulsion_coulomb: REPULSION_COULOMB,
            repulsion_max_force: REPULSION_MAX_FORCE,
            update_order: UpdateOrder::default(),
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the given JSON, falling back to defaults when absent or invalid
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded physics config ({:?} order)", config.update_order);
                config
            }
            Some(Err(e)) => {
                log::warn!("Invalid physics config, using defaults: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default physics config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = PhysicsConfig::default();
        assert_eq!(config.target_nudge, 0.005);
        assert_eq!(config.radius_step, 0.5);
        assert_eq!(config.gravity_coulomb, 0.00001);
        assert_eq!(config.gravity_min_force, 0.01);
        assert_eq!(config.repulsion_coulomb, 2.0);
        assert_eq!(config.repulsion_max_force, 1.0);
        assert_eq!(config.update_order, UpdateOrder::Sequential);
        assert_eq!(config.degenerate, DegeneratePolicy::Guard);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "update_order": "Snapshot" }"#).unwrap();
        assert_eq!(config.update_order, UpdateOrder::Snapshot);
        assert_eq!(config.repulsion_coulomb, REPULSION_COULOMB);
    }

    #[test]
    fn test_load_or_default_recovers_from_garbage() {
        let config = PhysicsConfig::load_or_default(Some("{ not json"));
        assert_eq!(config, PhysicsConfig::default());
        assert_eq!(PhysicsConfig::load_or_default(None), PhysicsConfig::default());
    }

    #[test]
    fn test_json_preserves_switches() {
        let config = PhysicsConfig {
            degenerate: DegeneratePolicy::Propagate,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PhysicsConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_update_order_from_str() {
        assert_eq!(UpdateOrder::from_str("SNAP"), Some(UpdateOrder::Snapshot));
        assert_eq!(UpdateOrder::from_str("sequential"), Some(UpdateOrder::Sequential));
        assert_eq!(UpdateOrder::from_str("random"), None);
        assert_eq!(UpdateOrder::Snapshot.as_str(), "Snapshot");
    }
}

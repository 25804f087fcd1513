//! Run state of a scene object

use serde::{Serialize, Deserialize};

/// Execution state of an object as seen by the host scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Object is executing normally
    #[default]
    Running,
    /// Object is visible but not executing
    Frozen,
    /// Object is neither executing nor drawn
    Sleeping,
    /// Object was killed and will be removed
    Killed,
    /// Object finished and awaits cleanup
    Dead,
}

impl RunState {
    /// Whether the object takes part in collision checks
    pub const fn is_collidable(self) -> bool {
        matches!(self, Self::Running | Self::Frozen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_running_and_frozen_collide() {
        assert!(RunState::Running.is_collidable());
        assert!(RunState::Frozen.is_collidable());
        assert!(!RunState::Sleeping.is_collidable());
        assert!(!RunState::Killed.is_collidable());
        assert!(!RunState::Dead.is_collidable());
    }
}

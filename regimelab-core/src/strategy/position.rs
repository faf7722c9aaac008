//! Target position sizing and exposure bookkeeping.

/// Position state with symmetric bounds at `max_position`.
///
/// Only `update` mutates the position, and only with the *filled* portion of
/// a delta; signal and risk components never touch it directly.
#[derive(Debug, Clone)]
pub struct PositionManager {
    position: f64,
    max_position: f64,
}

impl PositionManager {
    pub fn new(max_position: f64) -> Self {
        assert!(max_position > 0.0, "max_position must be > 0");
        Self {
            position: 0.0,
            max_position,
        }
    }

    /// Target position from direction and confidence, clamped to
    /// `[-max_position, +max_position]`.
    pub fn target_position(&self, direction: i32, strength: f64) -> f64 {
        (direction as f64 * strength * self.max_position)
            .clamp(-self.max_position, self.max_position)
    }

    /// Change required to reach `target` from the current position.
    pub fn delta(&self, target: f64) -> f64 {
        target - self.position
    }

    /// Apply the executed portion of a delta. Callers pass
    /// `delta * fill_ratio`, not the requested delta.
    pub fn update(&mut self, filled_delta: f64) {
        self.position += filled_delta;
    }

    /// Current absolute exposure.
    pub fn exposure(&self) -> f64 {
        self.position.abs()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn max_position(&self) -> f64 {
        self.max_position
    }
}

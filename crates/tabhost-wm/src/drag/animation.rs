//! Per-entry animation state.
//!
//! Each animated value is either at rest or moving toward a target. One
//! driver loop advances every moving value by a fixed step per display tick,
//! clamping and halting exactly at arrival. There is no scheduler per entry;
//! stopping is always a state transition, never a cancellation.

/// A single animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anim {
    pub from: f64,
    pub to: f64,
    pub value: f64,
    pub moving: bool,
}

impl Anim {
    /// An entry at rest at `value`.
    pub fn at(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            value,
            moving: false,
        }
    }

    /// Point the entry at a new target. Restarts from the current value; a
    /// target equal to the current value leaves the entry at rest.
    pub fn retarget(&mut self, to: f64) {
        self.from = self.value;
        self.to = to;
        self.moving = self.value != to;
    }

    /// Advance one tick by `speed` px toward the target. Returns whether the
    /// value changed this tick.
    pub fn step(&mut self, speed: f64) -> bool {
        if !self.moving {
            return false;
        }
        let dir = if self.to < self.from { -1.0 } else { 1.0 };
        self.value += speed * dir;
        if (dir > 0.0 && self.value >= self.to) || (dir < 0.0 && self.value <= self.to) {
            self.value = self.to;
            self.moving = false;
        }
        true
    }
}

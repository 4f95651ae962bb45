use glam::Vec2;

/// Raw pointer position written by input events and sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    current: Vec2,
    last: Vec2,
}

/// Pointer position and per-tick velocity handed to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    /// Pixels moved since the previous tick.
    pub velocity: Vec2,
}

impl PointerState {
    /// Pointer resting at `position` with no pending motion.
    pub fn at(position: Vec2) -> Self {
        Self {
            current: position,
            last: position,
        }
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.current = position;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.current
    }

    /// Velocity is `current - last`; `last` catches up afterwards.
    pub fn sample(&mut self) -> PointerSample {
        let velocity = self.current - self.last;
        self.last = self.current;
        PointerSample {
            position: self.current,
            velocity,
        }
    }

    /// Drop pending motion without producing a sample.
    #[inline]
    pub fn resync(&mut self) {
        self.last = self.current;
    }
}

/// Unit direction and magnitude of `v`; the direction of a zero vector is zero.
#[inline]
pub fn direction_and_speed(v: Vec2) -> (Vec2, f32) {
    let speed = v.length();
    if speed > 0.0 && speed.is_finite() {
        (v / speed, speed)
    } else {
        (Vec2::ZERO, 0.0)
    }
}

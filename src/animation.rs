use glam::Quat;

use crate::product::Product;
use crate::scene::SceneGraph;

/// Hinge angle of a fully open door, about 110 degrees
pub const DOOR_OPEN_ANGLE: f32 = 1.92;
/// Fraction of the remaining angle covered each frame
pub const DOOR_SMOOTHING: f32 = 0.12;
pub const IDLE_PHASE_STEP: f64 = 0.01;
pub const IDLE_AMPLITUDE: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn target_angle(self) -> f32 {
        match self {
            Self::Closed => 0.0,
            Self::Open => DOOR_OPEN_ANGLE,
        }
    }
}

/// Continuous quantities advanced once per displayed frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    door: DoorState,
    door_angle: f32,
    /// f64 so the phase keeps advancing over long sessions
    idle_phase: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn door(&self) -> DoorState {
        self.door
    }

    pub fn set_door(&mut self, door: DoorState) {
        self.door = door;
    }

    /// Flips the door target, the angle follows over the next frames
    pub fn toggle_door(&mut self) -> DoorState {
        self.door = self.door.toggled();
        self.door
    }

    pub fn door_target(&self) -> f32 {
        self.door.target_angle()
    }

    pub fn door_angle(&self) -> f32 {
        self.door_angle
    }

    pub fn idle_phase(&self) -> f64 {
        self.idle_phase
    }

    pub fn idle_offset(&self) -> f32 {
        (f64::from(IDLE_AMPLITUDE) * self.idle_phase.sin()) as f32
    }

    /// Advances the smoothed state by one frame without touching the scene
    pub fn advance(&mut self) {
        self.door_angle += (self.door_target() - self.door_angle) * DOOR_SMOOTHING;
        self.idle_phase += IDLE_PHASE_STEP;
    }

    /// Advances one frame and writes hinge rotation and idle bob to the product
    pub fn step(&mut self, scene: &mut SceneGraph, product: &Product) {
        self.advance();
        scene.node_mut(product.door_pivot).rotation = Quat::from_rotation_y(self.door_angle);
        scene.node_mut(product.root).translation.y = self.idle_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_door_flips_target() {
        let mut state = AnimationState::new();
        assert_eq!(state.door_target(), 0.0);
        assert_eq!(state.toggle_door(), DoorState::Open);
        assert_eq!(state.door_target(), DOOR_OPEN_ANGLE);
        assert_eq!(state.toggle_door(), DoorState::Closed);
        assert_eq!(state.door_target(), 0.0);
    }

    #[test]
    fn test_closed_door_stays_put() {
        let mut state = AnimationState::new();
        for _ in 0..100 {
            state.advance();
        }
        assert_eq!(state.door_angle(), 0.0);
    }

    #[test]
    fn test_first_step_covers_smoothing_fraction() {
        let mut state = AnimationState::new();
        state.toggle_door();
        state.advance();
        assert!((state.door_angle() - DOOR_OPEN_ANGLE * DOOR_SMOOTHING).abs() < 1e-6);
    }

    #[test]
    fn test_idle_phase_monotonic() {
        let mut state = AnimationState::new();
        let mut last = state.idle_phase();
        for _ in 0..1000 {
            state.advance();
            assert!(state.idle_phase() > last);
            last = state.idle_phase();
        }
    }

    #[test]
    fn test_idle_phase_keeps_advancing_after_days() {
        // about 4.4 days of frames at 60 Hz
        let mut state = AnimationState {
            idle_phase: 262_144.0,
            ..AnimationState::new()
        };
        let mut last = state.idle_phase();
        let mut offsets = Vec::new();
        for _ in 0..100 {
            state.advance();
            assert!(state.idle_phase() > last);
            last = state.idle_phase();
            offsets.push(state.idle_offset());
        }
        assert!((last - 262_145.0).abs() < 1e-6);
        assert!(offsets.windows(2).any(|w| w[0] != w[1]));
        assert!(offsets.iter().all(|o| o.abs() <= IDLE_AMPLITUDE));
    }
}

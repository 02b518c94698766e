use glam::{Mat4, Vec3};
use std::f32::consts::PI;

pub const FOV_Y_DEGREES: f32 = 50.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;
pub const DAMPING_FACTOR: f32 = 0.05;
pub const INITIAL_POSITION: Vec3 = Vec3::new(2.5, 1.6, 3.2);
pub const INITIAL_TARGET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

const ROTATE_SPEED: f32 = 1.0;
const ZOOM_STEP: f32 = 0.95;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 20.0;
const POLAR_EPSILON: f32 = 1e-4;

/// Angular and panning motion still to be applied by damping
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct PendingMotion {
    theta: f32,
    phi: f32,
    pan: Vec3,
}

/// Perspective camera orbiting a target point with damped motion
///
/// Pointer input only queues motion; `update` feeds a fraction of it into
/// the orbit every frame, so the camera keeps gliding after input stops.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z
    theta: f32,
    /// Polar angle from +Y
    phi: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub damping_factor: f32,
    pending: PendingMotion,
    zoom_scale: f32,
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(MIN_DISTANCE);
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: 1.0,
            near: NEAR,
            far: FAR,
            damping_factor: DAMPING_FACTOR,
            pending: PendingMotion::default(),
            zoom_scale: 1.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Queues an orbit from a pointer drag in physical pixels
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.pending.theta -= 2.0 * PI * dx / height * ROTATE_SPEED;
        self.pending.phi -= 2.0 * PI * dy / height * ROTATE_SPEED;
    }

    /// Queues a pan so the target follows the pointer
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        let world_per_pixel = 2.0 * self.radius * (self.fov_y * 0.5).tan() / height;
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.pending.pan += (-right * dx + up * dy) * world_per_pixel;
    }

    /// Zooms by scroll steps, positive moves closer
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_scale *= ZOOM_STEP.powf(steps);
    }

    /// Advances damping, returns true while the camera is still moving
    pub fn update(&mut self) -> bool {
        let k = self.damping_factor;
        self.theta += self.pending.theta * k;
        self.phi = (self.phi + self.pending.phi * k).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.target += self.pending.pan * k;
        self.radius = (self.radius * self.zoom_scale).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.zoom_scale = 1.0;

        self.pending.theta *= 1.0 - k;
        self.pending.phi *= 1.0 - k;
        self.pending.pan *= 1.0 - k;

        self.pending.theta.abs() > 1e-6
            || self.pending.phi.abs() > 1e-6
            || self.pending.pan.length_squared() > 1e-12
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(INITIAL_POSITION, INITIAL_TARGET)
    }
}

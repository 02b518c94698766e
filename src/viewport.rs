/// Highest device pixel ratio rendered at, denser displays are upscaled
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Physical window size reduced so the effective pixel ratio stays at or
/// below `MAX_PIXEL_RATIO`. Non-zero sides stay at least one pixel.
pub fn capped_render_size(width: u32, height: u32, scale_factor: f64) -> (u32, u32) {
    if scale_factor <= MAX_PIXEL_RATIO {
        return (width, height);
    }
    let ratio = MAX_PIXEL_RATIO / scale_factor;
    let cap = |side: u32| {
        if side == 0 {
            0
        } else {
            ((side as f64 * ratio).round() as u32).max(1)
        }
    };
    (cap(width), cap(height))
}

/// Render-target dimensions tracked across window resizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Records the new display surface size, returns true if it changed
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        changed
    }

    /// Render target size in physical pixels
    pub fn render_target(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width over height, with the height clamped to at least one pixel
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

use std::time::Instant;

pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame clock: delta time per tick plus an FPS figure refreshed once per interval
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frame_count: u32,
    fps_timer: f32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_count: 0,
            fps_timer: 0.0,
            fps: 0.0,
        }
    }

    /// Advances the clock, returns seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.record(delta);
        delta
    }

    /// Counts one frame of `delta` seconds toward the FPS average
    pub fn record(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::traits::FrameScheduler;
use crate::viewport::capped_render_size;

/// Wrapper around the winit window the configurator draws into
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.inner.request_redraw();
    }

    fn surface_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        capped_render_size(size.width, size.height, self.inner.scale_factor())
    }
}

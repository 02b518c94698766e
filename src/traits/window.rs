/// Host-side frame scheduling - the display loop that calls back once per refresh
pub trait FrameScheduler {
    /// Ask the host to run the frame callback again on the next refresh
    fn request_frame(&self);

    /// Current render target size in physical pixels, after any pixel ratio cap
    fn surface_size(&self) -> (u32, u32);
}

use winit::window::Window;

use crate::device::Gpu;
use crate::time::FrameTime;

/// Per-window handles passed to the application each frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Sets the window title.
    ///
    /// This is the tracer's status surface, so it changes once per rendered
    /// frame rather than once per run.
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Notifies the windowing system that presentation is imminent.
    ///
    /// Call right before presenting the acquired surface texture.
    pub fn pre_present_notify(&self) {
        self.window.pre_present_notify();
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
///
/// The application drives the device directly through `gpu`: acquire with
/// [`Gpu::begin_frame`], record, [`Gpu::submit`], then present the returned
/// surface texture once post-submit work is done.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

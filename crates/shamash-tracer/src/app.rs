use shamash_engine::core::{App, AppControl, FrameCtx};
use shamash_engine::device::{Gpu, GpuTimer, SurfaceErrorAction};
use shamash_engine::input::{InputEvent, Key, KeyState};
use winit::event::WindowEvent;

use crate::render::{SceneBuffers, TraceParams, TracerPipeline};
use crate::scene::{self, Scene};
use crate::state::{RenderPhase, RenderState};

const TITLE_PREFIX: &str = "shamash";

/// GPU-side scene mirror and pipeline, created on the first frame once a
/// device exists.
struct GpuResources {
    buffers: SceneBuffers,
    pipeline: TracerPipeline,
    timer: GpuTimer,
}

impl GpuResources {
    fn new(gpu: &Gpu<'_>, scene: &Scene) -> Self {
        let buffers = SceneBuffers::new(gpu.device(), scene);
        let pipeline = TracerPipeline::new(gpu.device(), gpu.surface_format(), &buffers);
        let timer = GpuTimer::new(gpu.device(), gpu.queue());

        Self {
            buffers,
            pipeline,
            timer,
        }
    }
}

/// Interactive path tracer application.
///
/// Frames are rendered on demand: the scene starts stale, every accepted
/// keystroke or geometry change marks it stale again, and the runtime only
/// schedules a redraw while that flag holds.
pub struct TracerApp {
    scene: Scene,
    state: RenderState,
    resources: Option<GpuResources>,
}

impl TracerApp {
    pub fn new() -> Self {
        Self {
            scene: scene::demo_scene(),
            state: RenderState::new(),
            resources: None,
        }
    }
}

impl Default for TracerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for TracerApp {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let InputEvent::Key { key, state, repeat } = event else {
            return AppControl::Continue;
        };

        // Initial presses only; holds and releases have no effect.
        if *state != KeyState::Pressed || *repeat {
            return AppControl::Continue;
        }

        if *key == Key::Escape {
            return AppControl::Exit;
        }

        self.state.apply_key(*key);
        AppControl::Continue
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        // Geometry changes invalidate the presented image.
        if matches!(
            event,
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. }
        ) {
            self.state.mark_dirty();
        }
        AppControl::Continue
    }

    fn needs_redraw(&self) -> bool {
        self.state.phase() == RenderPhase::Dirty
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The OS can request redraws the app never asked for (expose,
        // focus). With nothing pending there is nothing to trace.
        if self.state.phase() != RenderPhase::Dirty {
            return AppControl::Continue;
        }

        let scene = &self.scene;
        let resources = self
            .resources
            .get_or_insert_with(|| GpuResources::new(ctx.gpu, scene));

        let mut frame = match ctx.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                // The phase stays Dirty, so the runtime retries the frame.
                log::warn!("frame acquisition failed: {err}");
                let action = ctx.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        self.state.begin_render();

        // The interactive sphere tracks its keyboard-controlled offset,
        // anchored to the camera like the rest of the scene.
        let position = scene::camera::POSITION + self.state.sphere_offset();
        self.scene.move_sphere(scene::INTERACTIVE_SPHERE, position);
        resources
            .buffers
            .write_sphere(ctx.gpu.queue(), &self.scene, scene::INTERACTIVE_SPHERE);

        let size = ctx.gpu.size();
        resources.pipeline.write_params(
            ctx.gpu.queue(),
            &TraceParams {
                bounces: self.state.bounces(),
                samples: self.state.samples(),
                width: size.width,
                height: size.height,
            },
        );

        resources.pipeline.record(
            &mut frame.encoder,
            &frame.view,
            resources.timer.timestamp_writes(),
        );
        resources.timer.resolve(&mut frame.encoder);

        let surface_texture = ctx.gpu.submit(frame);

        // Timing is read back before presentation so the title update
        // describes the frame that is about to be shown.
        let elapsed = resources.timer.read_elapsed_ms(ctx.gpu.device());
        ctx.window.set_title(&format_title(
            self.state.bounces(),
            self.state.samples(),
            elapsed,
        ));
        log::debug!(
            "frame {} rendered: bounces={} samples={} dt={:.1}ms",
            ctx.time.frame_index,
            self.state.bounces(),
            self.state.samples(),
            ctx.time.dt * 1000.0,
        );

        ctx.window.pre_present_notify();
        surface_texture.present();

        self.state.finish_render();
        AppControl::Continue
    }
}

/// Formats the window title: trace parameters plus the last measured pass
/// time, or `n/a` when the device cannot time passes.
fn format_title(bounces: u32, samples: u32, elapsed_ms: Option<f64>) -> String {
    match elapsed_ms {
        Some(ms) => format!(
            "{TITLE_PREFIX} | bounces: {bounces} | samples: {samples} | last frame time: {ms:.2} ms"
        ),
        None => format!(
            "{TITLE_PREFIX} | bounces: {bounces} | samples: {samples} | last frame time: n/a"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    fn pressed(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    // ── input policy ─────────────────────────────────────────────────────

    #[test]
    fn escape_requests_exit() {
        let mut app = TracerApp::new();
        assert_eq!(app.on_input(&pressed(Key::Escape)), AppControl::Exit);
    }

    #[test]
    fn presses_drive_the_render_state() {
        let mut app = TracerApp::new();
        assert_eq!(app.on_input(&pressed(Key::Digit2)), AppControl::Continue);
        assert_eq!(app.state.bounces(), 2);
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        let mut app = TracerApp::new();
        let before = app.state.sphere_offset();

        app.on_input(&InputEvent::Key {
            key: Key::W,
            state: KeyState::Released,
            repeat: false,
        });
        app.on_input(&InputEvent::Key {
            key: Key::W,
            state: KeyState::Pressed,
            repeat: true,
        });

        assert_eq!(app.state.sphere_offset(), before);
    }

    #[test]
    fn focus_changes_leave_the_render_state_alone() {
        let mut app = TracerApp::new();
        assert_eq!(app.state.phase(), RenderPhase::Dirty);

        // Were this routed through the key policy, the pending render
        // would be cancelled.
        assert_eq!(
            app.on_input(&InputEvent::Focused(false)),
            AppControl::Continue
        );
        assert_eq!(app.state.phase(), RenderPhase::Dirty);
    }

    // ── window events ────────────────────────────────────────────────────

    #[test]
    fn resize_marks_the_image_stale() {
        let mut app = TracerApp::new();
        app.state.begin_render();
        app.state.finish_render();
        assert_eq!(app.state.phase(), RenderPhase::Idle);

        app.on_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480)));
        assert_eq!(app.state.phase(), RenderPhase::Dirty);
        assert!(app.needs_redraw());
    }

    #[test]
    fn redraw_demand_follows_the_phase() {
        let mut app = TracerApp::new();
        assert!(app.needs_redraw());

        app.state.begin_render();
        app.state.finish_render();
        assert!(!app.needs_redraw());
    }

    // ── title formatting ─────────────────────────────────────────────────

    #[test]
    fn title_reports_timing_when_available() {
        assert_eq!(
            format_title(2, 8, Some(4.567)),
            "shamash | bounces: 2 | samples: 8 | last frame time: 4.57 ms"
        );
    }

    #[test]
    fn title_degrades_without_timing() {
        assert_eq!(
            format_title(1, 1, None),
            "shamash | bounces: 1 | samples: 1 | last frame time: n/a"
        );
    }
}

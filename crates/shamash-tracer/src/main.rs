mod app;
mod render;
mod scene;
mod state;

use anyhow::Result;
use winit::dpi::LogicalSize;

use shamash_engine::device::GpuInit;
use shamash_engine::logging::{LoggingConfig, init_logging};
use shamash_engine::window::{Runtime, RuntimeConfig};

use crate::app::TracerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Fixed square window: the camera hardcodes a 1:1 aspect ratio.
    let config = RuntimeConfig {
        title: "shamash".to_string(),
        initial_size: LogicalSize::new(800.0, 800.0),
        resizable: false,
    };

    // Pass timing is best-effort; the tracer falls back to an untimed
    // title when the adapter cannot provide timestamp queries.
    let gpu_init = GpuInit {
        optional_features: wgpu::Features::TIMESTAMP_QUERY,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, TracerApp::new())
}

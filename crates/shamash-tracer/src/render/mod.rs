//! GPU mirror of the scene and the fullscreen trace pipeline.

mod buffers;
mod tracer;

pub use buffers::SceneBuffers;
pub use tracer::{TraceParams, TracerPipeline};

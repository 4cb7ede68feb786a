//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - render pass timing via timestamp queries

mod gpu;
mod timing;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use timing::GpuTimer;

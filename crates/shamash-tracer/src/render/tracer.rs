use bytemuck::{Pod, Zeroable};

use crate::scene::{Plane, Sphere};

use super::buffers::SceneBuffers;

/// Per-frame trace settings, mirrored by the WGSL `TraceParams` uniform
/// (16 bytes):
///
///  offset  0  bounces  u32
///  offset  4  samples  u32
///  offset  8  width    u32
///  offset 12  height   u32
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TraceParams {
    pub bounces: u32,
    pub samples: u32,
    pub width: u32,
    pub height: u32,
}

const _: () = assert!(std::mem::size_of::<TraceParams>() == 16);

/// Fullscreen path tracing pipeline.
///
/// Bind contract, shared with `shaders/path_tracer.wgsl`:
/// - group 0, binding 0: sphere storage buffer (read-only)
/// - group 0, binding 1: plane storage buffer (read-only)
/// - group 1, binding 0: `TraceParams` uniform
pub struct TracerPipeline {
    pipeline: wgpu::RenderPipeline,
    scene_bind_group: wgpu::BindGroup,
    params_bind_group: wgpu::BindGroup,
    params_ubo: wgpu::Buffer,
}

impl TracerPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        buffers: &SceneBuffers,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shamash path tracer shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/path_tracer.wgsl").into()),
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shamash scene bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            std::num::NonZeroU64::new(std::mem::size_of::<Sphere>() as u64)
                                .unwrap(),
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            std::num::NonZeroU64::new(std::mem::size_of::<Plane>() as u64)
                                .unwrap(),
                        ),
                    },
                    count: None,
                },
            ],
        });

        let params_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shamash params bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(
                        std::num::NonZeroU64::new(std::mem::size_of::<TraceParams>() as u64)
                            .unwrap(),
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shamash tracer pipeline layout"),
            bind_group_layouts: &[&scene_bgl, &params_bgl],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shamash tracer pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                // Fullscreen triangle is generated from the vertex index.
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let params_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shamash params ubo"),
            size: std::mem::size_of::<TraceParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shamash scene bind group"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffers.spheres().as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: buffers.planes().as_entire_binding(),
                },
            ],
        });

        let params_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shamash params bind group"),
            layout: &params_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_ubo.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            scene_bind_group,
            params_bind_group,
            params_ubo,
        }
    }

    /// Uploads the trace settings for the upcoming pass.
    pub fn write_params(&self, queue: &wgpu::Queue, params: &TraceParams) {
        queue.write_buffer(&self.params_ubo, 0, bytemuck::bytes_of(params));
    }

    /// Records the fullscreen trace pass.
    ///
    /// The pass clears to black first, so stale swapchain contents never
    /// bleed into the traced image.
    pub fn record(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        timestamp_writes: Option<wgpu::RenderPassTimestampWrites<'_>>,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shamash trace pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.scene_bind_group, &[]);
        rpass.set_bind_group(1, &self.params_bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    #[test]
    fn params_layout_matches_wgsl() {
        assert_eq!(offset_of!(TraceParams, bounces), 0);
        assert_eq!(offset_of!(TraceParams, samples), 4);
        assert_eq!(offset_of!(TraceParams, width), 8);
        assert_eq!(offset_of!(TraceParams, height), 12);
    }
}

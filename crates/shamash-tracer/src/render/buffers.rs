use wgpu::util::DeviceExt;

use crate::scene::{Scene, Sphere};

/// GPU mirror of the scene geometry.
///
/// Both buffers are uploaded in full once at startup. After that, the only
/// mutation the tracer performs is repositioning a single sphere, so updates
/// go through [`SceneBuffers::write_sphere`] and touch exactly one element's
/// byte range.
pub struct SceneBuffers {
    spheres: wgpu::Buffer,
    planes: wgpu::Buffer,
}

impl SceneBuffers {
    pub fn new(device: &wgpu::Device, scene: &Scene) -> Self {
        let spheres = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shamash sphere storage"),
            contents: bytemuck::cast_slice(scene.spheres()),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        let planes = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shamash plane storage"),
            contents: bytemuck::cast_slice(scene.planes()),
            usage: wgpu::BufferUsages::STORAGE,
        });

        Self { spheres, planes }
    }

    pub fn spheres(&self) -> &wgpu::Buffer {
        &self.spheres
    }

    pub fn planes(&self) -> &wgpu::Buffer {
        &self.planes
    }

    /// Re-uploads a single sphere from the scene into its buffer slot.
    ///
    /// Neighboring elements are never rewritten; the write covers exactly
    /// `[index * stride, (index + 1) * stride)`.
    pub fn write_sphere(&self, queue: &wgpu::Queue, scene: &Scene, index: usize) -> bool {
        let Some(sphere) = scene.spheres().get(index) else {
            log::warn!(
                "write_sphere: index {index} out of range ({} spheres)",
                scene.spheres().len()
            );
            return false;
        };

        queue.write_buffer(
            &self.spheres,
            sphere_byte_offset(index),
            bytemuck::bytes_of(sphere),
        );
        true
    }
}

/// Byte offset of sphere `index` within the sphere storage buffer.
fn sphere_byte_offset(index: usize) -> u64 {
    (index * std::mem::size_of::<Sphere>()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{INTERACTIVE_SPHERE, demo_scene};
    use glam::Vec3;

    #[test]
    fn offsets_advance_by_one_stride() {
        assert_eq!(sphere_byte_offset(0), 0);
        assert_eq!(sphere_byte_offset(1), 48);
        assert_eq!(sphere_byte_offset(2), 96);
    }

    #[test]
    fn single_sphere_patch_reproduces_a_full_upload() {
        let mut scene = demo_scene();
        let baseline: Vec<u8> = bytemuck::cast_slice(scene.spheres()).to_vec();

        scene.move_sphere(INTERACTIVE_SPHERE, Vec3::new(9.0, 9.0, 9.0));

        // Apply the same byte range write_sphere would issue.
        let offset = sphere_byte_offset(INTERACTIVE_SPHERE) as usize;
        let len = std::mem::size_of::<Sphere>();
        let mut patched = baseline.clone();
        patched[offset..offset + len]
            .copy_from_slice(bytemuck::bytes_of(&scene.spheres()[INTERACTIVE_SPHERE]));

        let full: Vec<u8> = bytemuck::cast_slice(scene.spheres()).to_vec();
        assert_eq!(patched, full);

        // Bytes outside the slot are untouched.
        assert_eq!(&patched[..offset], &baseline[..offset]);
        assert_eq!(&patched[offset + len..], &baseline[offset + len..]);
    }
}

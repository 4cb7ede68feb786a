use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Surface properties shared by spheres and planes.
///
/// Layout mirrors the WGSL `Material` struct (32 bytes):
///
///  offset  0  color              vec3f
///  offset 12  emission_strength  f32
///  offset 16  emission_color     vec3f
///  offset 28  (pad)              f32
///
/// WGSL packs a scalar into the 4 bytes after a `vec3f`, which is why
/// `emission_strength` sits inside what looks like the color's padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Material {
    pub color: Vec3,
    pub emission_strength: f32,
    pub emission_color: Vec3,
    pub _pad: f32,
}

impl Material {
    /// A non-emissive diffuse material.
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            emission_strength: 0.0,
            emission_color: Vec3::ZERO,
            _pad: 0.0,
        }
    }
}

/// Sphere primitive as uploaded to the sphere storage buffer.
///
/// Layout mirrors the WGSL `Sphere` struct (48 bytes):
///
///  offset  0  position  vec3f
///  offset 12  radius    f32
///  offset 16  material  Material
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(position: Vec3, radius: f32, material: Material) -> Self {
        Self {
            position,
            radius,
            material,
        }
    }
}

/// Plane primitive as uploaded to the plane storage buffer.
///
/// Layout mirrors the WGSL `Plane` struct (64 bytes):
///
///  offset  0  position  vec3f
///  offset 12  (pad)     f32
///  offset 16  normal    vec3f
///  offset 28  (pad)     f32
///  offset 32  material  Material
///
/// Unlike `Sphere`, no scalar follows either vector, so the 16-byte
/// alignment of the next member shows up as explicit padding here.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Plane {
    pub position: Vec3,
    pub _pad0: f32,
    pub normal: Vec3,
    pub _pad1: f32,
    pub material: Material,
}

impl Plane {
    pub fn new(position: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            position,
            _pad0: 0.0,
            normal,
            _pad1: 0.0,
            material,
        }
    }
}

// Strides are load-bearing: the shader indexes storage arrays of these
// structs at fixed stride, so a drifted size corrupts every element after
// the first.
const _: () = assert!(std::mem::size_of::<Material>() == 32);
const _: () = assert!(std::mem::size_of::<Sphere>() == 48);
const _: () = assert!(std::mem::size_of::<Plane>() == 64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    // ── field offsets against the WGSL declarations ───────────────────────

    #[test]
    fn material_field_offsets() {
        assert_eq!(offset_of!(Material, color), 0);
        assert_eq!(offset_of!(Material, emission_strength), 12);
        assert_eq!(offset_of!(Material, emission_color), 16);
    }

    #[test]
    fn sphere_field_offsets() {
        assert_eq!(offset_of!(Sphere, position), 0);
        assert_eq!(offset_of!(Sphere, radius), 12);
        assert_eq!(offset_of!(Sphere, material), 16);
    }

    #[test]
    fn plane_field_offsets() {
        assert_eq!(offset_of!(Plane, position), 0);
        assert_eq!(offset_of!(Plane, normal), 16);
        assert_eq!(offset_of!(Plane, material), 32);
    }

    // ── padding bytes ─────────────────────────────────────────────────────

    #[test]
    fn constructors_zero_the_padding() {
        // Uploads are byte-for-byte reproducible only if padding is zeroed.
        let material = Material::new(Vec3::new(0.8, 0.3, 0.3));
        assert_eq!(&bytemuck::bytes_of(&material)[28..32], &[0u8; 4]);

        let plane = Plane::new(Vec3::ZERO, Vec3::Y, material);
        let bytes = bytemuck::bytes_of(&plane);
        assert_eq!(&bytes[12..16], &[0u8; 4]);
        assert_eq!(&bytes[28..32], &[0u8; 4]);
    }
}

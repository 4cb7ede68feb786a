//! Scene data model: authoritative CPU-side copy of everything the shader
//! traces. GPU mirroring lives in `crate::render`.

mod primitives;

pub use primitives::{Material, Plane, Sphere};

use glam::Vec3;

/// Pinhole camera shared with the shader.
///
/// The shader hardcodes the same constants for ray generation; the host only
/// needs them to place geometry relative to the view frustum.
pub mod camera {
    use glam::Vec3;

    pub const POSITION: Vec3 = Vec3::new(0.0, 0.0, -4.0);
    /// Vertical field of view in radians.
    pub const FOV: f32 = 0.8;
    pub const NEAR_CLIP: f32 = 0.1;
    pub const ASPECT: f32 = 1.0;

    /// Half extents `(width, height)` of the image plane at the near clip.
    pub fn viewport_half_extents() -> (f32, f32) {
        let half_height = NEAR_CLIP * (FOV / 2.0).tan();
        (ASPECT * half_height, half_height)
    }
}

/// Index of the keyboard-driven sphere in [`demo_scene`].
pub const INTERACTIVE_SPHERE: usize = 1;

/// Starting offset of the interactive sphere, relative to the camera.
pub const INITIAL_SPHERE_OFFSET: Vec3 = Vec3::new(0.01, -0.015, 0.13);

/// Authoritative scene geometry.
///
/// Element order is part of the GPU contract: storage buffer slots are
/// addressed by index, so reordering primitives invalidates partial updates.
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, planes: Vec<Plane>) -> Self {
        Self { spheres, planes }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Repositions the sphere at `index`.
    ///
    /// Out-of-range indices are a caller bug; they assert in debug builds
    /// and leave the scene unchanged in release builds.
    pub fn move_sphere(&mut self, index: usize, position: Vec3) -> bool {
        debug_assert!(
            index < self.spheres.len(),
            "sphere index {index} out of range"
        );

        let Some(sphere) = self.spheres.get_mut(index) else {
            log::warn!(
                "move_sphere: index {index} out of range ({} spheres)",
                self.spheres.len()
            );
            return false;
        };

        sphere.position = position;
        true
    }
}

/// Builds the demo scene: three small spheres boxed in by five planes that
/// close off the view frustum, lit entirely by the sky.
///
/// Sphere and plane order is fixed; see [`INTERACTIVE_SPHERE`].
pub fn demo_scene() -> Scene {
    let (half_width, half_height) = camera::viewport_half_extents();
    let gray = Material::new(Vec3::splat(0.8));

    let spheres = vec![
        Sphere::new(
            camera::POSITION + Vec3::new(-0.025, -0.025, 0.1),
            0.01,
            Material::new(Vec3::new(0.3, 0.3, 0.8)),
        ),
        Sphere::new(
            camera::POSITION + INITIAL_SPHERE_OFFSET,
            0.02,
            Material::new(Vec3::new(0.8, 0.8, 0.3)),
        ),
        Sphere::new(
            camera::POSITION + Vec3::new(-0.02, 0.01, 0.15),
            0.01,
            Material::new(Vec3::new(0.3, 0.8, 0.8)),
        ),
    ];

    let planes = vec![
        // Ceiling and floor sit on the frustum's top and bottom edges.
        Plane::new(Vec3::new(0.0, half_height, 0.0), Vec3::NEG_Y, gray),
        Plane::new(Vec3::new(0.0, -half_height, 0.0), Vec3::Y, gray),
        // Red and green side walls.
        Plane::new(
            Vec3::new(half_width, 0.0, 0.0),
            Vec3::NEG_X,
            Material::new(Vec3::new(0.8, 0.3, 0.3)),
        ),
        Plane::new(
            Vec3::new(-half_width, 0.0, 0.0),
            Vec3::X,
            Material::new(Vec3::new(0.3, 0.8, 0.3)),
        ),
        // Back wall just past the spheres.
        Plane::new(
            Vec3::new(0.0, 0.0, camera::POSITION.z + 0.2),
            Vec3::NEG_Z,
            gray,
        ),
    ];

    Scene::new(spheres, planes)
}

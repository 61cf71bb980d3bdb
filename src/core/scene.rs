//! Scene description consumed by the renderer.
//!
//! This is deliberately a flat model rather than a scene graph: one whole-scene
//! rotation, a list of top-level models, the particle field and the lights.
//! Everything here is plain data so the per-frame logic can be exercised on
//! the host without a GPU.

use crate::core::color::{Color, FogExp2};
use crate::core::orientation::SceneOrientation;
use crate::core::particles::ParticleField;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;
use std::rc::Rc;

/// Interleaved position + normal vertex, non-indexed triangle list.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Immutable triangle soup shared between meshes and instances.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
}

impl Geometry {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Flat disk in the XY plane facing +Z, built as a triangle fan around the
    /// center. Three segments give the triangular "shards" used for particles.
    pub fn circle(radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let normal = [0.0, 0.0, 1.0];
        let rim = |i: u32| {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            [radius * theta.cos(), radius * theta.sin(), 0.0]
        };
        let mut vertices = Vec::with_capacity(segments as usize * 3);
        for i in 0..segments {
            vertices.push(Vertex {
                position: [0.0, 0.0, 0.0],
                normal,
            });
            vertices.push(Vertex {
                position: rim(i),
                normal,
            });
            vertices.push(Vertex {
                position: rim(i + 1),
                normal,
            });
        }
        Self { vertices }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Phong-style surface parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub shininess: f32,
    pub reflectivity: f32,
}

impl Material {
    pub fn phong(color: Color, shininess: f32, reflectivity: f32) -> Self {
        Self {
            color,
            shininess,
            reflectivity,
        }
    }
}

/// One drawable part of a loaded mesh (an OBJ object/group/material run).
#[derive(Clone, Debug)]
pub struct MeshSegment {
    pub name: String,
    pub geometry: Rc<Geometry>,
    pub material: Option<Rc<Material>>,
}

/// A loaded asset: an ordered list of child segments.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub children: SmallVec<[MeshSegment; 4]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.children.iter().map(|c| c.geometry.vertices.len()).sum()
    }
}

/// Position, Euler XYZ rotation and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            euler_xyz(self.rotation),
            self.position,
        )
    }
}

#[inline]
pub fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

/// A mesh placed in the scene.
#[derive(Clone, Debug)]
pub struct Model {
    pub mesh: Mesh,
    pub transform: Transform,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Sky/ground gradient keyed on the surface normal's up component.
    Hemisphere {
        sky: Color,
        ground: Color,
        intensity: f32,
    },
    /// Parallel light shining from `position` towards `target`.
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
        target: Vec3,
    },
}

/// Everything the renderer needs for one frame, minus the camera.
pub struct Scene {
    pub background: Option<Color>,
    pub fog: Option<FogExp2>,
    pub orientation: SceneOrientation,
    pub lights: Vec<Light>,
    pub objects: Vec<Model>,
    pub particles: ParticleField,
}

impl Scene {
    pub fn new(particles: ParticleField) -> Self {
        Self {
            background: None,
            fog: None,
            orientation: SceneOrientation::default(),
            lights: Vec::new(),
            objects: Vec::new(),
            particles,
        }
    }

    pub fn add(&mut self, model: Model) -> usize {
        self.objects.push(model);
        self.objects.len() - 1
    }

    /// Whole-scene rotation; applied on top of every child's own transform.
    pub fn root_matrix(&self) -> Mat4 {
        Mat4::from_quat(euler_xyz(Vec3::new(
            self.orientation.x,
            self.orientation.y,
            0.0,
        )))
    }
}

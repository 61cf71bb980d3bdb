//! CPU-side packing of a [`Scene`] into GPU-ready uniforms and instances.
//!
//! Kept free of wgpu so the layout can be checked on the host.

use crate::core::{Camera, Color, Geometry, Light, Material, Scene};
use glam::{Mat4, Vec3};
use std::rc::Rc;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub fog: [f32; 4], // rgb + density (0 disables)
    pub hemi_sky: [f32; 4],
    pub hemi_ground: [f32; 4],
    pub hemi_up: [f32; 4],
    pub light_dir: [f32; 4], // towards the light, world space
    pub light_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4], // shininess, reflectivity
}

impl InstanceRaw {
    fn new(model: Mat4, material: Option<&Material>) -> Self {
        let (color, shininess, reflectivity) = match material {
            Some(m) => (m.color, m.shininess, m.reflectivity),
            None => (Color::WHITE, 30.0, 1.0),
        };
        Self {
            model: model.to_cols_array_2d(),
            color: [color.r, color.g, color.b, 1.0],
            params: [shininess, reflectivity, 0.0, 0.0],
        }
    }
}

/// One draw call: a geometry and a contiguous run of instances.
#[derive(Clone, Debug)]
pub struct DrawBatch {
    pub geometry: Rc<Geometry>,
    pub first_instance: u32,
    pub instance_count: u32,
}

#[derive(Default)]
pub struct DrawList {
    pub instances: Vec<InstanceRaw>,
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    /// Rebuild from the scene; reuses the allocations of the previous frame.
    pub fn rebuild(&mut self, scene: &Scene) {
        self.instances.clear();
        self.batches.clear();
        let root = scene.root_matrix();

        let field = &scene.particles;
        if !field.is_empty() {
            let first = self.instances.len() as u32;
            for p in &field.particles {
                let local = Mat4::from_rotation_translation(
                    crate::core::euler_xyz(p.rotation),
                    p.position,
                );
                self.instances
                    .push(InstanceRaw::new(root * local, Some(field.material.as_ref())));
            }
            self.batches.push(DrawBatch {
                geometry: field.geometry.clone(),
                first_instance: first,
                instance_count: field.len() as u32,
            });
        }

        for model in &scene.objects {
            let world = root * model.transform.matrix();
            for child in &model.mesh.children {
                let first = self.instances.len() as u32;
                self.instances
                    .push(InstanceRaw::new(world, child.material.as_deref()));
                self.batches.push(DrawBatch {
                    geometry: child.geometry.clone(),
                    first_instance: first,
                    instance_count: 1,
                });
            }
        }
    }
}

pub fn clear_color(scene: &Scene) -> Color {
    scene.background.unwrap_or(Color::BLACK)
}

/// Camera, fog and lights. Lights hang off the scene root and turn with it.
pub fn pack_globals(scene: &Scene, camera: &Camera) -> Globals {
    let root = scene.root_matrix();
    let fog = scene
        .fog
        .map(|f| [f.color.r, f.color.g, f.color.b, f.density])
        .unwrap_or([0.0; 4]);

    let mut g = Globals {
        view: camera.view_matrix().to_cols_array_2d(),
        proj: camera.projection_matrix().to_cols_array_2d(),
        camera_pos: camera.position.extend(1.0).to_array(),
        fog,
        hemi_sky: [0.0; 4],
        hemi_ground: [0.0; 4],
        hemi_up: root.transform_vector3(Vec3::Y).extend(0.0).to_array(),
        light_dir: [0.0, 1.0, 0.0, 0.0],
        light_color: [0.0; 4],
    };

    let scaled = |c: Color, i: f32| [c.r * i, c.g * i, c.b * i, 1.0];
    let mut have_hemi = false;
    let mut have_dir = false;
    for light in &scene.lights {
        match *light {
            Light::Hemisphere {
                sky,
                ground,
                intensity,
            } if !have_hemi => {
                g.hemi_sky = scaled(sky, intensity);
                g.hemi_ground = scaled(ground, intensity);
                have_hemi = true;
            }
            Light::Directional {
                color,
                intensity,
                position,
                target,
            } if !have_dir => {
                let dir = root.transform_vector3(position - target).normalize_or_zero();
                g.light_dir = dir.extend(0.0).to_array();
                g.light_color = scaled(color, intensity);
                have_dir = true;
            }
            _ => {}
        }
    }
    g
}

use crate::core::scene::{Geometry, Material};
use glam::Vec3;
use rand::Rng;
use std::rc::Rc;

/// Difference of two independent uniform draws scaled by `n`.
///
/// The result lies in `(-n, n)` with a triangular density peaking at zero,
/// so particles cluster toward the origin rather than filling a cube.
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, n: f32) -> f32 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    -u * n + v * n
}

#[inline]
fn rand_vec3<R: Rng + ?Sized>(rng: &mut R, n: f32) -> Vec3 {
    let x = rand_range(rng, n);
    let y = rand_range(rng, n);
    let z = rand_range(rng, n);
    Vec3::new(x, y, z)
}

/// Per-instance transform; geometry and material live on the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Layout knobs for `ParticleField::generate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub spread: f32,
    pub rotation_spread: f32,
}

/// Fixed set of particle transforms over one shared geometry/material pair.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub geometry: Rc<Geometry>,
    pub material: Rc<Material>,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        params: &FieldParams,
        geometry: Rc<Geometry>,
        material: Rc<Material>,
    ) -> Self {
        let particles = (0..params.count)
            .map(|_| {
                let position = rand_vec3(rng, params.spread);
                let rotation = rand_vec3(rng, params.rotation_spread);
                Particle { position, rotation }
            })
            .collect();
        Self {
            geometry,
            material,
            particles,
        }
    }

    /// An empty field, for scenes without particles.
    pub fn empty(geometry: Rc<Geometry>, material: Rc<Material>) -> Self {
        Self {
            geometry,
            material,
            particles: Vec::new(),
        }
    }

    /// Rotate every particle about its own y axis.
    pub fn spin(&mut self, delta_y: f32) {
        for p in &mut self.particles {
            p.rotation.y += delta_y;
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

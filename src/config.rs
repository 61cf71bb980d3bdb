//! Startup configuration, defaulted from `constants.rs`.

use crate::constants::*;
use crate::core::{
    AssetLoadHook, Camera, Color, Environment, FieldParams, Geometry, Light, LoopParams,
    Material, OrientationParams, ParticleField, Scene,
};
use glam::Vec3;
use rand::Rng;
use std::rc::Rc;

/// Selectors, hook names and asset location on the hosting page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub canvas_selector: String,
    pub loader_selector: String,
    pub asset_path: String,
    pub color_source_fn: String,
    pub tiles_fn: String,
    pub menu_fn: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_selector: CANVAS_SELECTOR.to_string(),
            loader_selector: LOADER_SELECTOR.to_string(),
            asset_path: ASSET_PATH.to_string(),
            color_source_fn: COLOR_SOURCE_FN.to_string(),
            tiles_fn: TILES_FN.to_string(),
            menu_fn: MENU_FN.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub field: FieldParams,
    pub spin_per_frame: f32,
    pub radius: f32,
    pub segments: u32,
    pub material: Material,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            field: FieldParams {
                count: PARTICLE_COUNT,
                spread: PARTICLE_SPREAD,
                rotation_spread: PARTICLE_ROTATION_SPREAD,
            },
            spin_per_frame: PARTICLE_SPIN_PER_FRAME,
            radius: PARTICLE_RADIUS,
            segments: PARTICLE_SEGMENTS,
            material: Material::phong(
                Color::from_hex(PARTICLE_COLOR),
                PARTICLE_SHININESS,
                PARTICLE_REFLECTIVITY,
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub material: Material,
    pub scale: Vec3,
    pub rotation_y: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            material: Material::phong(Color::from_hex(MODEL_COLOR), MODEL_SHININESS, 1.0),
            scale: Vec3::from_array(MODEL_SCALE),
            rotation_y: MODEL_ROTATION_Y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub camera: Camera,
    pub orientation: OrientationParams,
    pub touch_sensitivity: f32,
    pub particles: ParticleConfig,
    pub model: ModelConfig,
    pub fog_density: f32,
    pub fallback_color: Color,
    pub lights: Vec<Light>,
    pub page: PageConfig,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            orientation: OrientationParams::default(),
            touch_sensitivity: TOUCH_SENSITIVITY,
            particles: ParticleConfig::default(),
            model: ModelConfig::default(),
            fog_density: FOG_DENSITY,
            fallback_color: Color::from_hex(FALLBACK_COLOR),
            lights: default_lights(),
            page: PageConfig::default(),
        }
    }
}

/// Hemisphere fill plus one directional key light aimed at the origin.
pub fn default_lights() -> Vec<Light> {
    vec![
        Light::Hemisphere {
            sky: Color::from_hex(HEMI_SKY_COLOR),
            ground: Color::from_hex(HEMI_GROUND_COLOR),
            intensity: HEMI_INTENSITY,
        },
        Light::Directional {
            color: Color::from_hex(DIR_LIGHT_COLOR),
            intensity: DIR_LIGHT_INTENSITY,
            position: Vec3::from_array(DIR_LIGHT_POSITION),
            target: Vec3::ZERO,
        },
    ]
}

impl BackdropConfig {
    /// Lights plus a freshly scattered particle field; no model yet.
    pub fn build_scene<R: Rng + ?Sized>(&self, rng: &mut R) -> Scene {
        let p = &self.particles;
        let field = ParticleField::generate(
            rng,
            &p.field,
            Rc::new(Geometry::circle(p.radius, p.segments)),
            Rc::new(p.material.clone()),
        );
        let mut scene = Scene::new(field);
        scene.lights = self.lights.clone();
        scene
    }

    pub fn asset_hook(&self) -> AssetLoadHook {
        AssetLoadHook {
            material: Rc::new(self.model.material.clone()),
            scale: self.model.scale,
            rotation_y: self.model.rotation_y,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::new(self.fog_density, self.fallback_color)
    }

    pub fn loop_params(&self) -> LoopParams {
        LoopParams {
            orientation: self.orientation,
            particle_spin: self.particles.spin_per_frame,
        }
    }
}

//! Scene, interaction and rendering tuning constants.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ASPECT: f32 = 2.0; // canvas default until the first resize
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 8.0, 9.0];

// Scene orientation
pub const CAMERA_DAMPING: f32 = 0.0005; // per-frame chase factor
pub const CAMERA_RANGE: f32 = 0.3; // symmetric clamp for both scene angles (radians)
pub const YAW_GAIN: f32 = 8.0; // horizontal pointer response
pub const PITCH_GAIN: f32 = 2.0; // vertical pointer response

// Touch input scaling (pixels from window center -> pointer units)
pub const TOUCH_SENSITIVITY: f32 = 0.0005;

// Particle field
pub const PARTICLE_COUNT: usize = 400;
pub const PARTICLE_SPREAD: f32 = 15.0;
pub const PARTICLE_ROTATION_SPREAD: f32 = 8.0;
pub const PARTICLE_SPIN_PER_FRAME: f32 = 0.005;
pub const PARTICLE_RADIUS: f32 = 0.3;
pub const PARTICLE_SEGMENTS: u32 = 3;
pub const PARTICLE_COLOR: u32 = 0xffffff;
pub const PARTICLE_SHININESS: f32 = 1.0;
pub const PARTICLE_REFLECTIVITY: f32 = 0.5;

// Environment
pub const FOG_DENSITY: f32 = 0.15;
pub const FALLBACK_COLOR: u32 = 0x5e5e5e; // light gray, used when the color source misbehaves

// Loaded model
pub const MODEL_COLOR: u32 = 0xf3d3bd;
pub const MODEL_SHININESS: f32 = 30.0;
pub const MODEL_SCALE: [f32; 3] = [0.008, 0.008, 0.008];
pub const MODEL_ROTATION_Y: f32 = -std::f32::consts::FRAC_PI_2;

// Lighting rig
pub const HEMI_SKY_COLOR: u32 = 0xffffff;
pub const HEMI_GROUND_COLOR: u32 = 0x000000;
pub const HEMI_INTENSITY: f32 = 1.0;
pub const DIR_LIGHT_COLOR: u32 = 0xffffff;
pub const DIR_LIGHT_INTENSITY: f32 = 1.0;
pub const DIR_LIGHT_POSITION: [f32; 3] = [20.0, 14.0, 0.0];

// Page wiring
pub const CANVAS_SELECTOR: &str = "#c";
pub const LOADER_SELECTOR: &str = ".loader";
pub const ASSET_PATH: &str = "./assets/deer.obj";
pub const COLOR_SOURCE_FN: &str = "mainColor";
pub const TILES_FN: &str = "tiles";
pub const MENU_FN: &str = "enableMenu";

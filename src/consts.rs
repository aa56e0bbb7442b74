pub const WIDTH: u16 = 320;
pub const HEIGHT: u16 = 240;

pub const CAMERA_POS: [f32; 3] = [159.0, 119.0, -100.0];
pub const HIT_THRESHOLD: f32 = 2.0;
pub const MAX_RAY_MARCHES: usize = 50;
pub const MAX_RAY_DISTANCE: f32 = 180.0;

pub const NEAR_THRESHOLD: f32 = 100.0;
pub const FAR_THRESHOLD: f32 = 300.0;
pub const CHANNEL_SCALES: [f32; 3] = [0.31, 0.63, 0.2];
pub const BACKGROUND_BASE: u16 = 0x0005;
pub const BACKGROUND_STEP: u16 = 5;

pub const PIXEL_STRIDE: u16 = 10;
pub const PIXEL_BLOCK: u16 = 2;
pub const MAX_TICK: u32 = 1000;

// reference scene
pub const SCENE_DEPTH: f32 = 60.0;
pub const DEGREES_PER_TICK: f32 = 10.0;
pub const BOB_AMPLITUDE: f32 = 15.0;
pub const SPHERE_RADIUS: f32 = 10.0;
pub const TORUS_A_RADIUS: f32 = 30.0;
pub const TORUS_B_RADIUS: f32 = 45.0;
pub const TORUS_THICKNESS: f32 = 5.0;

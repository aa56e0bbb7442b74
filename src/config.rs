//! Tunables for a render, fixed for its whole duration.
//!
//! [`RenderConfig::default`] reproduces the reference setup: a 320x240
//! display sampled every 10 pixels for 1001 ticks, camera 100 units in front
//! of the display plane.

use crate::consts::*;
use crate::error::ConfigError;

use glam::Vec3;

/// Everything the marcher needs besides the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchConfig {
    pub camera: Vec3,
    /// Distances below this count as a hit.
    pub epsilon: f32,
    pub max_steps: usize,
    /// Draw distance, also the depth reported for a miss.
    pub max_depth: f32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            camera: Vec3::from(CAMERA_POS),
            epsilon: HIT_THRESHOLD,
            max_steps: MAX_RAY_MARCHES,
            max_depth: MAX_RAY_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorConfig {
    pub near_threshold: f32,
    pub far_threshold: f32,
    /// Per-channel falloff for red, green and blue.
    pub channel_scales: [f32; 3],
    pub background_base: u16,
    pub background_step: u16,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            near_threshold: NEAR_THRESHOLD,
            far_threshold: FAR_THRESHOLD,
            channel_scales: CHANNEL_SCALES,
            background_base: BACKGROUND_BASE,
            background_step: BACKGROUND_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    pub width: u16,
    pub height: u16,
    pub stride: u16,
    /// Extra pixels covered right of and below each sample.
    pub block: u16,
    /// Last tick rendered, inclusive.
    pub max_tick: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            width: WIDTH,
            height: HEIGHT,
            stride: PIXEL_STRIDE,
            block: PIXEL_BLOCK,
            max_tick: MAX_TICK,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderConfig {
    pub march: MarchConfig,
    pub color: ColorConfig,
    pub sampling: SamplingConfig,
}

impl RenderConfig {
    pub fn with_camera(mut self, camera: Vec3) -> Self {
        self.march.camera = camera;
        self
    }

    pub fn with_display(mut self, width: u16, height: u16) -> Self {
        self.sampling.width = width;
        self.sampling.height = height;
        self
    }

    pub fn with_stride(mut self, stride: u16) -> Self {
        self.sampling.stride = stride;
        self
    }

    pub fn with_max_tick(mut self, max_tick: u32) -> Self {
        self.sampling.max_tick = max_tick;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let SamplingConfig { width, height, stride, .. } = self.sampling;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyDisplay { width, height });
        }
        if stride == 0 {
            return Err(ConfigError::ZeroStride);
        }

        let march = &self.march;
        if march.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        if !(march.epsilon > 0.0) {
            return Err(ConfigError::NonPositiveEpsilon(march.epsilon));
        }
        if !(march.max_depth > 0.0) {
            return Err(ConfigError::NonPositiveDrawDistance(march.max_depth));
        }
        // every ray targets a point on z = 0
        if march.camera.z == 0.0 {
            return Err(ConfigError::CameraOnDisplayPlane(march.camera.z));
        }

        let color = &self.color;
        if !(color.near_threshold < color.far_threshold) {
            return Err(ConfigError::ThresholdOrder {
                near: color.near_threshold,
                far: color.far_threshold,
            });
        }

        Ok(())
    }
}

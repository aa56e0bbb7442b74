use crate::config::MarchConfig;
use crate::field::DistanceField;

#[cfg(feature = "profile")]
use thread_profiler::profile_scope;

use glam::{ vec3, Vec3 };

/// How a march ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarchOutcome {
    Hit { depth: f32, steps: usize },
    /// Marched past the draw distance.
    Escaped,
    /// Ran out of steps before resolving.
    Exhausted,
}

impl MarchOutcome {
    /// Collapses both misses onto `max_depth`.
    pub fn depth(self, max_depth: f32) -> f32 {
        match self {
            MarchOutcome::Hit { depth, .. } => depth,
            MarchOutcome::Escaped | MarchOutcome::Exhausted => max_depth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
    pub len: f32,
}

impl Ray {
    /// `dir` must be unit length.
    pub fn new(origin: Vec3, dir: Vec3) -> Ray {
        Ray { origin, dir, len: 0.0 }
    }

    /// Ray from the camera through display-plane point `(x, y, 0)`.
    /// The camera must not lie on that point.
    pub fn through_pixel(camera: Vec3, x: u16, y: u16) -> Ray {
        let target = vec3(x as f32, y as f32, 0.0);
        Ray::new(camera, (target - camera).normalize())
    }

    fn advance(&mut self, dist: f32) { self.len += dist }
    pub fn get_pos(&self) -> Vec3 { self.origin + self.dir * self.len }
}

pub fn march_ray<F>(field: &F, mut ray: Ray, tick: u32, config: &MarchConfig) -> MarchOutcome
where
    F: DistanceField + ?Sized,
{
    #[cfg(feature = "profile")]
    profile_scope!("march");

    for step in 0..config.max_steps {
        let dist = field.evaluate_distance(ray.get_pos(), tick);

        if dist < config.epsilon {
            log::trace!("hit at depth {} after {} steps", ray.len, step);
            return MarchOutcome::Hit { depth: ray.len, steps: step };
        }

        ray.advance(dist);

        if ray.len >= config.max_depth {
            return MarchOutcome::Escaped;
        }
    }

    MarchOutcome::Exhausted
}

/// Depth along the ray through pixel `(x, y)` at `tick`, or `max_depth` on a miss.
pub fn march<F>(field: &F, x: u16, y: u16, tick: u32, config: &MarchConfig) -> f32
where
    F: DistanceField + ?Sized,
{
    let ray = Ray::through_pixel(config.camera, x, y);
    march_ray(field, ray, tick, config).depth(config.max_depth)
}

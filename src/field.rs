//! Signed distance primitives, combinators and the scene tree built from them.
//!
//! All distances are exact for the primitives here, so a marcher may step by
//! the returned value without passing through a surface. Radii must be
//! positive; [`Field::validate`] checks a whole tree up front.

use crate::error::ConfigError;

use glam::{ Quat, Vec3 };

/// Anything that can report the distance from a point to its nearest surface
/// at a given animation tick.
pub trait DistanceField: Send + Sync {
    fn evaluate_distance(&self, from: Vec3, tick: u32) -> f32;
}

pub fn sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Torus whose ring lies in the local xz plane, centred on the origin.
pub fn torus(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = (p.x * p.x + p.z * p.z).sqrt() - major_radius;
    (q * q + p.y * p.y).sqrt() - minor_radius
}

pub fn union(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Removes the interior of `b` from `a`.
pub fn difference(a: f32, b: f32) -> f32 {
    a.max(-b)
}

/// Time-dependent part of a [`Field::Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Still,
    /// Rotates incoming points about `axis` by `tick * degrees_per_tick`.
    Spin { axis: Vec3, degrees_per_tick: f32 },
    /// Displaces the child along `axis` by `amplitude * sin(tick * degrees_per_tick)`.
    Bob { axis: Vec3, amplitude: f32, degrees_per_tick: f32 },
}

impl Motion {
    fn angle(degrees_per_tick: f32, tick: u32) -> f32 {
        (tick as f32 * degrees_per_tick).to_radians()
    }

    /// Maps a point from the parent frame into the moving frame.
    pub fn apply(&self, p: Vec3, tick: u32) -> Vec3 {
        match *self {
            Motion::Still => p,
            Motion::Spin { axis, degrees_per_tick } => {
                let theta = Motion::angle(degrees_per_tick, tick);
                Quat::from_axis_angle(axis.normalize(), theta) * p
            }
            Motion::Bob { axis, amplitude, degrees_per_tick } => {
                let bob = amplitude * Motion::angle(degrees_per_tick, tick).sin();
                p - axis * bob
            }
        }
    }
}

/// A scene described as data: primitives at the leaves, combinators and
/// placements above them.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Sphere { radius: f32 },
    Torus { major_radius: f32, minor_radius: f32 },
    Union(Box<Field>, Box<Field>),
    Difference(Box<Field>, Box<Field>),
    /// Points reaching `child` are `rotate * motion(p - translate)`.
    Transform {
        translate: Vec3,
        rotate: Quat,
        motion: Motion,
        child: Box<Field>,
    },
}

impl Field {
    pub fn sphere(radius: f32) -> Field {
        Field::Sphere { radius }
    }

    pub fn torus(major_radius: f32, minor_radius: f32) -> Field {
        Field::Torus { major_radius, minor_radius }
    }

    pub fn union(self, other: Field) -> Field {
        Field::Union(Box::new(self), Box::new(other))
    }

    pub fn difference(self, other: Field) -> Field {
        Field::Difference(Box::new(self), Box::new(other))
    }

    pub fn translate(self, offset: Vec3) -> Field {
        Field::Transform {
            translate: offset,
            rotate: Quat::IDENTITY,
            motion: Motion::Still,
            child: Box::new(self),
        }
    }

    pub fn rotate(self, rotation: Quat) -> Field {
        Field::Transform {
            translate: Vec3::ZERO,
            rotate: rotation,
            motion: Motion::Still,
            child: Box::new(self),
        }
    }

    pub fn animate(self, motion: Motion) -> Field {
        Field::Transform {
            translate: Vec3::ZERO,
            rotate: Quat::IDENTITY,
            motion,
            child: Box::new(self),
        }
    }

    pub fn distance(&self, p: Vec3, tick: u32) -> f32 {
        match self {
            Field::Sphere { radius } => sphere(p, *radius),
            Field::Torus { major_radius, minor_radius } => torus(p, *major_radius, *minor_radius),
            Field::Union(a, b) => union(a.distance(p, tick), b.distance(p, tick)),
            Field::Difference(a, b) => difference(a.distance(p, tick), b.distance(p, tick)),
            Field::Transform { translate, rotate, motion, child } => {
                let local = *rotate * motion.apply(p - *translate, tick);
                child.distance(local, tick)
            }
        }
    }

    /// Rejects shapes whose distance would be meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Field::Sphere { radius } => positive("sphere", *radius),
            Field::Torus { major_radius, minor_radius } => {
                positive("torus major", *major_radius)?;
                positive("torus minor", *minor_radius)
            }
            Field::Union(a, b) | Field::Difference(a, b) => {
                a.validate()?;
                b.validate()
            }
            Field::Transform { child, .. } => child.validate(),
        }
    }
}

fn positive(shape: &'static str, radius: f32) -> Result<(), ConfigError> {
    // also rejects NaN
    if radius > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveRadius { shape, radius })
    }
}

impl DistanceField for Field {
    fn evaluate_distance(&self, from: Vec3, tick: u32) -> f32 {
        self.distance(from, tick)
    }
}

impl<F> DistanceField for F
where
    F: Fn(Vec3, u32) -> f32 + Send + Sync,
{
    fn evaluate_distance(&self, from: Vec3, tick: u32) -> f32 {
        self(from, tick)
    }
}

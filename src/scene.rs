use crate::consts::*;
use crate::error::ConfigError;
use crate::field::{ DistanceField, Field, Motion };

use glam::{ vec3, Quat, Vec3 };

use std::f32::consts::FRAC_PI_2;

/// The whole scene as a single distance field over (point, tick).
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub root: Field,
}

impl Scene {
    pub fn new(root: Field) -> Result<Scene, ConfigError> {
        root.validate()?;
        Ok(Scene { root })
    }

    /// Two spinning tori and a bobbing sphere, centred on the camera's
    /// forward axis `SCENE_DEPTH` units behind the display plane.
    pub fn reference(camera: Vec3) -> Scene {
        // stand the rings up so they face a camera looking down +z
        let upright = Quat::from_rotation_x(FRAC_PI_2);

        let ring_a = Field::Transform {
            translate: Vec3::ZERO,
            rotate: upright,
            motion: Motion::Spin { axis: Vec3::X, degrees_per_tick: DEGREES_PER_TICK },
            child: Box::new(Field::torus(TORUS_A_RADIUS, TORUS_THICKNESS)),
        };
        let ring_b = Field::Transform {
            translate: Vec3::ZERO,
            rotate: upright,
            motion: Motion::Spin { axis: Vec3::Y, degrees_per_tick: DEGREES_PER_TICK },
            child: Box::new(Field::torus(TORUS_B_RADIUS, TORUS_THICKNESS)),
        };
        let ball = Field::sphere(SPHERE_RADIUS).animate(Motion::Bob {
            axis: Vec3::NEG_Y,
            amplitude: BOB_AMPLITUDE,
            degrees_per_tick: DEGREES_PER_TICK,
        });

        let root = ring_a
            .union(ball.union(ring_b))
            .translate(camera + vec3(0.0, 0.0, SCENE_DEPTH));

        Scene { root }
    }

    pub fn distance(&self, p: Vec3, tick: u32) -> f32 {
        self.root.distance(p, tick)
    }
}

impl DistanceField for Scene {
    fn evaluate_distance(&self, from: Vec3, tick: u32) -> f32 {
        self.distance(from, tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-3;

    fn camera() -> Vec3 {
        Vec3::from(CAMERA_POS)
    }

    fn centre() -> Vec3 {
        camera() + vec3(0.0, 0.0, SCENE_DEPTH)
    }

    #[test]
    fn centre_is_inside_sphere_at_rest() {
        // rings: 30 - 5 = 25 and 45 - 5 = 40, sphere: -10
        let scene = Scene::reference(camera());
        assert!((scene.distance(centre(), 0) + 10.0).abs() < TOL);
    }

    #[test]
    fn ring_a_faces_camera() {
        let scene = Scene::reference(camera());
        // top of ring A's tube centre line, in the display plane's y direction
        let on_ring = centre() + vec3(0.0, 30.0, 0.0);
        assert!((scene.distance(on_ring, 0) + 5.0).abs() < TOL);
    }

    #[test]
    fn ring_b_is_wider() {
        let scene = Scene::reference(camera());
        let on_ring = centre() + vec3(45.0, 0.0, 0.0);
        assert!((scene.distance(on_ring, 0) + 5.0).abs() < TOL);
    }

    #[test]
    fn sphere_bobs_up_the_screen() {
        let scene = Scene::reference(camera());
        // at tick 9 the sphere is sampled at p.y + 15, so its centre sits at y - 15
        let raised = centre() - vec3(0.0, BOB_AMPLITUDE, 0.0);
        let sphere_only = Field::sphere(SPHERE_RADIUS).animate(Motion::Bob {
            axis: Vec3::NEG_Y,
            amplitude: BOB_AMPLITUDE,
            degrees_per_tick: DEGREES_PER_TICK,
        });
        assert!((sphere_only.distance(raised - centre(), 9) + SPHERE_RADIUS).abs() < TOL);
        assert!(scene.distance(raised, 9) <= -SPHERE_RADIUS + TOL);
    }

    #[test]
    fn new_validates_tree() {
        assert!(Scene::new(Field::sphere(-1.0)).is_err());
        assert!(Scene::new(Field::sphere(1.0)).is_ok());
    }

    #[test]
    fn arbitrary_scenes_plug_in() {
        let scene = Scene::new(Field::torus(8.0, 2.0).translate(vec3(0.0, 0.0, 20.0))).unwrap();
        assert!((scene.evaluate_distance(vec3(8.0, 0.0, 20.0), 0) + 2.0).abs() < TOL);
    }
}

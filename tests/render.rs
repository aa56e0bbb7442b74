use sdfmarch::color::background;
use sdfmarch::{
    map_color, march, DistanceField, Field, FrameDriver, Framebuffer, PixelWrite, Rect,
    RenderConfig, Rgb565, Samples, Scene, Surface,
};

use glam::{ vec3, Vec3 };

/// Records every fill and counts presents; closes after `open_for` presents.
struct Recorder {
    fills: Vec<(Rect, Rgb565)>,
    presents: usize,
    open_for: usize,
}

impl Recorder {
    fn new(open_for: usize) -> Recorder {
        Recorder { fills: Vec::new(), presents: 0, open_for }
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Rgb565) {
        self.fills.push((rect, color));
    }

    fn present(&mut self) -> Result<(), sdfmarch::DisplayError> {
        self.presents += 1;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.presents < self.open_for
    }
}

fn small_config() -> RenderConfig {
    RenderConfig::default()
        .with_display(40, 40)
        .with_camera(vec3(20.0, 20.0, -50.0))
        .with_max_tick(2)
}

fn ball() -> Scene {
    Scene::new(Field::sphere(10.0).translate(vec3(20.0, 20.0, 0.0))).unwrap()
}

#[test]
fn clears_then_writes_blocks_in_sample_order() {
    let config = small_config();
    config.validate().unwrap();

    let mut surface = Recorder::new(usize::MAX);
    let stats = FrameDriver::new(config).run(&ball(), &mut surface).unwrap();

    assert_eq!(stats.ticks, 3);
    assert_eq!(stats.pixels, 3 * 16);
    assert_eq!(surface.presents, 3);
    assert_eq!(surface.fills[0], (Rect::new(0, 39, 0, 39), Rgb565::BLACK));

    let anchors: Vec<Rect> = surface.fills[1..].iter().map(|(rect, _)| *rect).collect();
    let expected: Vec<Rect> = Samples::new(config.sampling)
        .map(|s| Rect::new(s.x, s.x + 2, s.y, s.y + 2))
        .collect();
    assert_eq!(anchors, expected);
}

#[test]
fn hit_and_miss_colours() {
    let config = small_config();
    let mut surface = Recorder::new(usize::MAX);
    FrameDriver::new(config).run(&ball(), &mut surface).unwrap();

    for tick in 0..=2u32 {
        let frame = &surface.fills[1 + tick as usize * 16..1 + (tick as usize + 1) * 16];

        let centre = frame.iter().find(|(r, _)| r.left == 20 && r.top == 20).unwrap();
        assert_eq!(centre.1, map_color(40.0, tick, &config.color, config.march.max_depth));

        let corner = frame.iter().find(|(r, _)| r.left == 0 && r.top == 0).unwrap();
        assert_eq!(corner.1, background(tick, &config.color));
    }
}

#[test]
fn stops_when_surface_closes() {
    let config = small_config().with_max_tick(10);
    let mut surface = Recorder::new(2);
    let stats = FrameDriver::new(config).run(&ball(), &mut surface).unwrap();
    assert_eq!(stats.ticks, 2);
    assert_eq!(surface.presents, 2);
}

#[test]
fn parallel_shading_matches_sequential() {
    let config = RenderConfig::default();
    let scene = Scene::reference(config.march.camera);
    let driver = FrameDriver::new(config);

    let mut writes = Vec::new();
    driver.shade_tick(&scene, 4, &mut writes);

    let sequential: Vec<PixelWrite> = Samples::for_tick(config.sampling, 4)
        .map(|s| {
            let depth = march(&scene, s.x, s.y, 4, &config.march);
            PixelWrite {
                rect: Rect::block(s.x, s.y, config.sampling.block),
                color: map_color(depth, 4, &config.color, config.march.max_depth),
            }
        })
        .collect();
    assert_eq!(writes, sequential);
}

#[test]
fn reference_scene_centre_pixel() {
    let config = RenderConfig::default();
    let scene = Scene::reference(config.march.camera);

    // straight down the axis the sphere's front face is 60 - 10 units away
    let depth = march(&scene, 159, 119, 0, &config.march);
    assert!((depth - 50.0).abs() < config.march.epsilon);

    // nearest sampled pixel is one step off the axis
    let sampled = march(&scene, 160, 120, 0, &config.march);
    let expected = map_color(sampled, 0, &config.color, config.march.max_depth);

    let mut fb = Framebuffer::new(320, 240);
    FrameDriver::new(config.with_max_tick(0)).run(&scene, &mut fb).unwrap();
    assert_eq!(fb.get(160, 120), Some(expected));
    assert_eq!(fb.get(162, 122), Some(expected));
    // untouched gaps between sampled blocks keep the clear colour
    assert_eq!(fb.get(5, 5), Some(Rgb565::BLACK));
}

#[test]
fn reference_scene_golden_value() {
    let camera = Vec3::new(159.0, 119.0, -100.0);
    let scene = Scene::reference(camera);
    let centre = camera + vec3(0.0, 0.0, 60.0);
    let d = scene.evaluate_distance(centre, 0);
    assert!(d.is_finite());
    assert!((d + 10.0).abs() < 1e-3);
}

#[test]
fn sweeping_a_ray_away_from_geometry_misses() {
    let config = RenderConfig::default().with_camera(vec3(0.0, 0.0, 50.0));
    // camera sits beyond the display plane, rays head back toward -z
    let scene = Scene::new(Field::sphere(10.0).translate(vec3(0.0, 0.0, 100.0))).unwrap();
    assert_eq!(march(&scene, 0, 0, 0, &config.march), config.march.max_depth);
}

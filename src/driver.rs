//! Frame loop: sweeps ticks and sampled pixels, marches each sample and
//! writes the resulting colour blocks to a [`Surface`].
//!
//! Pixels within a tick are independent, so they are marched in parallel
//! and then written back serially in sample order.

use crate::color::{ map_color, Rgb565 };
use crate::config::{ RenderConfig, SamplingConfig };
use crate::draw::{ Rect, Surface };
use crate::error::DisplayError;
use crate::field::DistanceField;
use crate::trace::march;

#[cfg(feature = "profile")]
use thread_profiler::profile_scope;

use log::{ debug, info };
use rayon::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub tick: u32,
    pub x: u16,
    pub y: u16,
}

/// Lazy `(tick, x, y)` sweep in tick, then column, then row order.
/// Cloning restarts from the clone point.
#[derive(Clone, Debug)]
pub struct Samples {
    sampling: SamplingConfig,
    last_tick: u32,
    next: Option<Sample>,
}

impl Samples {
    /// Every sample of every tick up to `sampling.max_tick`.
    pub fn new(sampling: SamplingConfig) -> Samples {
        Samples::between(sampling, 0, sampling.max_tick)
    }

    /// Samples of a single tick.
    pub fn for_tick(sampling: SamplingConfig, tick: u32) -> Samples {
        Samples::between(sampling, tick, tick)
    }

    fn between(sampling: SamplingConfig, first_tick: u32, last_tick: u32) -> Samples {
        let empty = sampling.width == 0 || sampling.height == 0 || sampling.stride == 0 || first_tick > last_tick;
        Samples {
            sampling,
            last_tick,
            next: if empty { None } else { Some(Sample { tick: first_tick, x: 0, y: 0 }) },
        }
    }

    fn successor(&self, current: Sample) -> Option<Sample> {
        let SamplingConfig { width, height, stride, .. } = self.sampling;
        let stride = stride as u32;

        let y = current.y as u32 + stride;
        if y < height as u32 {
            return Some(Sample { y: y as u16, ..current });
        }
        let x = current.x as u32 + stride;
        if x < width as u32 {
            return Some(Sample { x: x as u16, y: 0, ..current });
        }
        if current.tick < self.last_tick {
            return Some(Sample { tick: current.tick + 1, x: 0, y: 0 });
        }
        None
    }
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let current = self.next?;
        self.next = self.successor(current);
        Some(current)
    }
}

/// One block fill produced for one sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelWrite {
    pub rect: Rect,
    pub color: Rgb565,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub ticks: u32,
    pub pixels: usize,
}

pub struct FrameDriver {
    config: RenderConfig,
}

impl FrameDriver {
    /// `config` should already have passed [`RenderConfig::validate`].
    pub fn new(config: RenderConfig) -> FrameDriver {
        FrameDriver { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Computes the writes for `tick` and appends them to `writes` in sample order.
    pub fn shade_tick<F>(&self, field: &F, tick: u32, writes: &mut Vec<PixelWrite>)
    where
        F: DistanceField + ?Sized,
    {
        #[cfg(feature = "profile")]
        profile_scope!("shade_tick");

        let RenderConfig { march: march_config, color, sampling } = &self.config;
        let samples: Vec<Sample> = Samples::for_tick(*sampling, tick).collect();

        writes.par_extend(samples.par_iter().map(|sample| {
            let depth = march(field, sample.x, sample.y, tick, march_config);
            PixelWrite {
                rect: Rect::block(sample.x, sample.y, sampling.block),
                color: map_color(depth, tick, color, march_config.max_depth),
            }
        }));
    }

    /// Clears the surface, then renders every tick until the bound is
    /// reached or the surface closes.
    pub fn run<F, S>(&self, field: &F, surface: &mut S) -> Result<FrameStats, DisplayError>
    where
        F: DistanceField + ?Sized,
        S: Surface + ?Sized,
    {
        let sampling = &self.config.sampling;
        info!(
            "rendering ticks 0..={} on {}x{} every {} pixels",
            sampling.max_tick, sampling.width, sampling.height, sampling.stride
        );

        surface.fill_rect(Rect::full(sampling.width, sampling.height), Rgb565::BLACK);

        let mut stats = FrameStats::default();
        let mut writes = Vec::new();

        for tick in 0..=sampling.max_tick {
            if !surface.is_open() {
                info!("surface closed before tick {}", tick);
                break;
            }

            self.shade_tick(field, tick, &mut writes);
            draw(&writes, surface);
            stats.pixels += writes.len();
            writes.clear();

            surface.present()?;
            stats.ticks += 1;
            debug!("tick {} done", tick);
        }

        info!("rendered {} ticks, {} samples", stats.ticks, stats.pixels);
        Ok(stats)
    }
}

pub fn draw<S>(writes: &[PixelWrite], surface: &mut S)
where
    S: Surface + ?Sized,
{
    for write in writes {
        surface.fill_rect(write.rect, write.color);
    }
}

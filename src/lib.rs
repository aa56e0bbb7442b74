//! Ray marching renderer for animated signed distance field scenes.
//!
//! A [`Scene`] is a tree of [`Field`] nodes evaluated at a point and an
//! animation tick. [`FrameDriver`] walks ticks and sampled pixels, marches a
//! ray from the camera through each one, maps the resulting depth to a 5/6/5
//! colour and fills a block on a [`Surface`].

pub mod color;
pub mod config;
pub mod consts;
pub mod draw;
pub mod driver;
pub mod error;
pub mod field;
pub mod scene;
pub mod trace;
pub mod window;

pub use color::{ map_color, Rgb565 };
pub use config::{ ColorConfig, MarchConfig, RenderConfig, SamplingConfig };
pub use draw::{ Framebuffer, Rect, Surface };
pub use driver::{ FrameDriver, FrameStats, PixelWrite, Sample, Samples };
pub use error::{ ConfigError, DisplayError };
pub use field::{ DistanceField, Field, Motion };
pub use scene::Scene;
pub use trace::{ march, march_ray, MarchOutcome, Ray };
pub use window::WindowSurface;

use crate::config::ColorConfig;

/// 16-bit packed colour, 5 bits red, 6 green, 5 blue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);

    /// Channels are masked to their field widths.
    pub const fn from_channels(r: u16, g: u16, b: u16) -> Rgb565 {
        Rgb565(((r & 0x1F) << 11) | ((g & 0x3F) << 5) | (b & 0x1F))
    }

    pub const fn red(self) -> u16 { self.0 >> 11 }
    pub const fn green(self) -> u16 { (self.0 >> 5) & 0x3F }
    pub const fn blue(self) -> u16 { self.0 & 0x1F }

    /// Expands to 0RGB with 8 bits per channel, replicating the high bits
    /// into the low ones so full intensity maps to 0xFF.
    pub fn to_rgb888(self) -> u32 {
        let r = (self.red() << 3 | self.red() >> 2) as u32;
        let g = (self.green() << 2 | self.green() >> 4) as u32;
        let b = (self.blue() << 3 | self.blue() >> 2) as u32;
        r << 16 | g << 8 | b
    }
}

fn fade(max: u16, depth: f32, scale: f32) -> u16 {
    // truncation toward zero, as an integer cast of the scaled distance
    max.saturating_sub((depth * scale).abs() as u16)
}

/// Backdrop for rays that hit nothing; shifts every tick so progress is visible.
pub fn background(tick: u32, config: &ColorConfig) -> Rgb565 {
    let shift = (config.background_step as u32).wrapping_mul(tick) as u16;
    Rgb565(config.background_base.wrapping_add(shift))
}

/// Colour for a marched depth. `max_depth` is the marcher's miss value.
pub fn map_color(depth: f32, tick: u32, config: &ColorConfig, max_depth: f32) -> Rgb565 {
    if depth >= max_depth {
        return background(tick, config);
    }

    if depth < 0.0 {
        Rgb565::WHITE
    } else if depth < config.near_threshold {
        let [r, g, b] = config.channel_scales;
        Rgb565::from_channels(fade(31, depth, r), fade(63, depth, g), fade(31, depth, b))
    } else if depth < config.far_threshold {
        Rgb565::BLACK
    } else {
        background(tick, config)
    }
}

use crate::color::Rgb565;
use crate::error::DisplayError;

/// Axis-aligned pixel region, all bounds inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Rect {
    pub fn new(left: u16, right: u16, top: u16, bottom: u16) -> Rect {
        Rect { left, right, top, bottom }
    }

    /// Block anchored at `(x, y)` extending `extra` pixels right and down.
    pub fn block(x: u16, y: u16, extra: u16) -> Rect {
        Rect::new(x, x.saturating_add(extra), y, y.saturating_add(extra))
    }

    pub fn full(width: u16, height: u16) -> Rect {
        Rect::new(0, width.saturating_sub(1), 0, height.saturating_sub(1))
    }
}

/// The only display capability the renderer needs.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb565);

    /// Makes everything filled so far visible.
    fn present(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// `false` once the surface can no longer be drawn to.
    fn is_open(&self) -> bool {
        true
    }
}

/// In-memory 16-bit surface. Writes outside the buffer are clipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Framebuffer {
        Framebuffer { width, height, pixels: vec![Rgb565::BLACK; width * height] }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn pixels(&self) -> &[Rgb565] { &self.pixels }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[x + y * self.width])
    }

    /// Converts into the 0RGB layout window systems expect.
    pub fn update_display(&self, display_buf: &mut Vec<u32>) {
        display_buf.resize(self.pixels.len(), 0);
        for (pixel, display_pixel) in self.pixels.iter().zip(display_buf.iter_mut()) {
            *display_pixel = pixel.to_rgb888();
        }
    }
}

impl Surface for Framebuffer {
    fn fill_rect(&mut self, rect: Rect, color: Rgb565) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let left = rect.left as usize;
        let top = rect.top as usize;
        if left >= self.width || top >= self.height || rect.right < rect.left || rect.bottom < rect.top {
            return;
        }
        let right = (rect.right as usize).min(self.width - 1);
        let bottom = (rect.bottom as usize).min(self.height - 1);

        for y in top..=bottom {
            let row = y * self.width;
            self.pixels[row + left..=row + right].fill(color);
        }
    }
}

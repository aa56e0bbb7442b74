use crate::color::Rgb565;
use crate::draw::{ Framebuffer, Rect, Surface };
use crate::error::DisplayError;

use minifb::{ Window, WindowOptions };

/// A desktop window standing in for the display panel. Fills land in a
/// [`Framebuffer`] and are pushed to the window on [`Surface::present`].
pub struct WindowSurface {
    window: Window,
    frame: Framebuffer,
    display_buf: Vec<u32>,
}

impl WindowSurface {
    pub fn open(title: &str, width: u16, height: u16) -> Result<WindowSurface, DisplayError> {
        let (width, height) = (width as usize, height as usize);
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(DisplayError::Open)?;
        log::info!("opened {}x{} window", width, height);

        Ok(WindowSurface {
            window,
            frame: Framebuffer::new(width, height),
            display_buf: vec![0; width * height],
        })
    }
}

impl Surface for WindowSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb565) {
        self.frame.fill_rect(rect, color);
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.frame.update_display(&mut self.display_buf);
        self.window
            .update_with_buffer(&self.display_buf, self.frame.width(), self.frame.height())
            .map_err(DisplayError::Update)
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

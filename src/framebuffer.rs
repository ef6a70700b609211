// SPDX-License-Identifier: GPL-3.0-only

use alloc::boxed::Box;
use alloc::vec;
use core::cell::Cell;

use orbclient::{Color, Mode, Renderer};

/// In-memory pixel buffer, used for host simulation and off-screen drawing.
#[derive(Clone)]
pub struct Framebuffer {
    w: u32,
    h: u32,
    data: Box<[Color]>,
    mode: Cell<Mode>,
    syncs: usize,
}

impl Framebuffer {
    /// Create a new black framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_color(width, height, Color::rgb(0, 0, 0))
    }

    /// Create a new framebuffer filled whole with color
    pub fn from_color(width: u32, height: u32, color: Color) -> Self {
        Framebuffer {
            w: width,
            h: height,
            data: vec![color; width as usize * height as usize].into_boxed_slice(),
            mode: Cell::new(Mode::Blend),
            syncs: 0,
        }
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.w && y < self.h {
            Some(self.data[(y * self.w + x) as usize])
        } else {
            None
        }
    }

    /// Count of pixels in the rectangle that have exactly `color`.
    pub fn count(&self, x: u32, y: u32, w: u32, h: u32, color: Color) -> usize {
        let mut n = 0;
        for py in y..y.saturating_add(h).min(self.h) {
            for px in x..x.saturating_add(w).min(self.w) {
                if self.data[(py * self.w + px) as usize] == color {
                    n += 1;
                }
            }
        }
        n
    }

    /// Number of times the buffer was flushed.
    pub fn syncs(&self) -> usize {
        self.syncs
    }

    /// Draw the buffer on another renderer
    pub fn draw<R: Renderer>(&self, renderer: &mut R, x: i32, y: i32) {
        renderer.image_legacy(x, y, self.w, self.h, &self.data);
    }
}

impl Renderer for Framebuffer {
    fn width(&self) -> u32 {
        self.w
    }

    fn height(&self) -> u32 {
        self.h
    }

    fn data(&self) -> &[Color] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    fn sync(&mut self) -> bool {
        self.syncs += 1;
        true
    }

    fn mode(&self) -> &Cell<Mode> {
        &self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_clipped() {
        let mut fb = Framebuffer::new(10, 10);
        let red = Color::rgb(255, 0, 0);
        fb.rect(5, 5, 20, 20, red);
        assert_eq!(fb.count(0, 0, 10, 10, red), 25);
        assert!(fb.pixel_at(4, 4) == Some(Color::rgb(0, 0, 0)));
        assert!(fb.pixel_at(10, 0).is_none());
    }

    #[test]
    fn draw_copies_pixels() {
        let blue = Color::rgb(0, 0, 255);
        let src = Framebuffer::from_color(2, 2, blue);
        let mut dst = Framebuffer::new(4, 4);
        src.draw(&mut dst, 1, 1);
        assert_eq!(dst.count(0, 0, 4, 4, blue), 4);
        assert!(dst.pixel_at(2, 2) == Some(blue));
    }
}

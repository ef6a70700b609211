// SPDX-License-Identifier: GPL-3.0-only

use core::fmt::{Result, Write};
use orbclient::{Color, Renderer};

pub const CHAR_W: i32 = 8;
pub const CHAR_H: i32 = 16;

/// Width in pixels of `s` in the unifont cell grid.
pub fn text_width(s: &str) -> i32 {
    s.chars().count() as i32 * CHAR_W
}

/// Draw `s` on one line, horizontally centered around `cx`.
pub fn draw_centered<R: Renderer>(renderer: &mut R, cx: i32, y: i32, s: &str, color: Color) {
    let mut x = cx - text_width(s) / 2;
    for c in s.chars() {
        renderer.char(x, y, c, color);
        x += CHAR_W;
    }
}

/// Wrapping text cursor over a renderer.
///
/// Only `\n` is interpreted. Callers pass untrusted strings through an
/// escaping `Display` first so that nothing else reaches here as a control.
pub struct Console<'a, R: Renderer> {
    x: i32,
    y: i32,
    left: i32,
    right: i32,
    pub bg: Color,
    pub fg: Color,
    renderer: &'a mut R,
}

impl<'a, R: Renderer> Console<'a, R> {
    pub fn new(renderer: &'a mut R, left: i32, top: i32, right: i32) -> Console<'a, R> {
        Console {
            x: left,
            y: top,
            left,
            right,
            bg: Color::rgb(0, 0, 0),
            fg: Color::rgb(255, 255, 255),
            renderer,
        }
    }

    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Top of the line below the cursor.
    pub fn next_line_y(&self) -> i32 {
        if self.x == self.left {
            self.y
        } else {
            self.y + CHAR_H
        }
    }

    pub fn newline(&mut self) {
        self.x = self.left;
        self.y += CHAR_H;
    }
}

impl<R: Renderer> Write for Console<'_, R> {
    fn write_str(&mut self, s: &str) -> Result {
        for c in s.chars() {
            if c == '\n' {
                self.newline();
                continue;
            }

            if self.x + CHAR_W > self.right && self.x > self.left {
                self.newline();
            }

            self.renderer.rect(self.x, self.y, CHAR_W as u32, CHAR_H as u32, self.bg);
            self.renderer.char(self.x, self.y, c, self.fg);
            self.x += CHAR_W;
        }

        Ok(())
    }
}

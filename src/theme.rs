// SPDX-License-Identifier: GPL-3.0-only

use orbclient::Color;

#[derive(Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub warning: Color,
    pub cancel: Color,
    pub confirm: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: Color::rgb(0x36, 0x32, 0x2f),
            fg: Color::rgb(0xff, 0xff, 0xff),
            dim: Color::rgb(0x99, 0x99, 0x99),
            warning: Color::rgb(0xff, 0x00, 0x00),
            cancel: Color::rgb(0xcd, 0x49, 0x49),
            confirm: Color::rgb(0x39, 0xa8, 0x14),
            highlight: Color::rgb(0x57, 0x52, 0x4e),
        }
    }
}

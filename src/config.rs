// SPDX-License-Identifier: GPL-3.0-only

use crate::theme::Theme;

/// Longest vendor name accepted, in bytes. Longer names are rejected, never truncated.
pub const VENDOR_NAME_MAX: usize = 64;

/// Longest version label accepted, in bytes.
pub const VERSION_LABEL_MAX: usize = 32;

/// How long the confirm key must be held for a strong confirmation.
pub const HOLD_TO_CONFIRM_MS: u32 = 1000;

pub const BANNER: &str = concat!("Bootloader ", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Copy)]
pub struct Config {
    pub hold_ms: u32,
    pub theme: Theme,
}

impl Config {
    pub fn with_hold_ms(mut self, hold_ms: u32) -> Self {
        self.hold_ms = hold_ms;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hold_ms: HOLD_TO_CONFIRM_MS,
            theme: Theme::default(),
        }
    }
}

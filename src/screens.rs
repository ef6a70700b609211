// SPDX-License-Identifier: GPL-3.0-only

use crate::config::BANNER;
use crate::status::ReturnCode;

/// Why a navigation screen was left.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Menu = 1,
    Host = 2,
    Close = 3,
    Reboot = 4,
    FactoryReset = 5,
    FirmwareInfo = 6,
    Proceed = 7,
    Timeout = 8,
    PowerEvent = 9,
}

impl ReturnCode for Action {
    fn code(&self) -> u32 {
        *self as u32
    }
}

/// What the surface saw before the screen went away.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenExit {
    Selected(Action),
    Back,
    HostConnected,
    Timeout,
    PowerEvent,
}

/// A presentation-only screen: a title, some lines, and selectable items.
#[derive(Clone, Copy, Debug)]
pub struct NavScreen<'a> {
    pub title: &'static str,
    pub lines: &'a [&'a str],
    pub items: &'static [(&'static str, Action)],
    /// Action taken on cancel/back, if the screen has one.
    pub back: Option<Action>,
}

impl NavScreen<'_> {
    pub fn action(&self, exit: ScreenExit) -> Option<Action> {
        match exit {
            ScreenExit::Selected(action) => Some(action),
            ScreenExit::Back => self.back,
            ScreenExit::HostConnected => Some(Action::Proceed),
            ScreenExit::Timeout => Some(Action::Timeout),
            ScreenExit::PowerEvent => Some(Action::PowerEvent),
        }
    }
}

pub static INTRO: NavScreen<'static> = NavScreen {
    title: "BOOTLOADER",
    lines: &[BANNER, "Connect to a host to install firmware."],
    items: &[("Connect to host", Action::Host), ("Menu", Action::Menu)],
    back: None,
};

pub static MENU: NavScreen<'static> = NavScreen {
    title: "BOOTLOADER",
    lines: &[],
    items: &[
        ("Reboot", Action::Reboot),
        ("Firmware info", Action::FirmwareInfo),
        ("Factory reset", Action::FactoryReset),
        ("Close", Action::Close),
    ],
    back: Some(Action::Close),
};

pub static CONNECT: NavScreen<'static> = NavScreen {
    title: "BOOTLOADER",
    lines: &["Waiting for host..."],
    items: &[("Cancel", Action::Close)],
    back: Some(Action::Close),
};

pub static FIRMWARE_INFO_ITEMS: &[(&str, Action)] = &[("Close", Action::Close)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_map_to_actions() {
        assert_eq!(MENU.action(ScreenExit::Back), Some(Action::Close));
        assert_eq!(INTRO.action(ScreenExit::Back), None);
        assert_eq!(CONNECT.action(ScreenExit::HostConnected), Some(Action::Proceed));
        assert_eq!(INTRO.action(ScreenExit::PowerEvent), Some(Action::PowerEvent));
        assert_eq!(
            MENU.action(ScreenExit::Selected(Action::Reboot)),
            Some(Action::Reboot)
        );
    }

    #[test]
    fn codes_match_boot_abi() {
        assert_eq!(Action::Menu.code(), 1);
        assert_eq!(Action::Host.code(), 2);
        assert_eq!(Action::PowerEvent.code(), 9);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use alloc::format;

use crate::metadata::{FirmwareCandidate, VendorText, VersionText, check_lengths};
use crate::progress::ProgressState;
use crate::screens::{self, Action, NavScreen, FIRMWARE_INFO_ITEMS};
use crate::session::Session;
use crate::status::{Result, ResultCode};
use crate::surface::Surface;

/// Entry points for the boot sequence. Owns the surface between calls.
pub struct Bootloader<S: Surface> {
    surface: S,
}

impl<S: Surface> Bootloader<S> {
    pub fn new(surface: S) -> Self {
        Bootloader { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Hand the surface to one gate invocation.
    pub fn session(&mut self) -> Session<'_, S> {
        Session::new(&mut self.surface)
    }

    /// Returns `Confirm` only after the operator approved the install.
    /// Oversized metadata returns `InvalidInput` before anything is drawn.
    pub fn confirm_install(
        &mut self,
        vendor: &[u8],
        version: &str,
        is_downgrade: bool,
        vendor_trusted: bool,
    ) -> ResultCode {
        let candidate = match FirmwareCandidate::new(vendor, version, is_downgrade, vendor_trusted) {
            Ok(candidate) => candidate,
            Err(err) => {
                log::warn!("install confirmation refused: {}", err);
                return err.code();
            }
        };

        self.session().confirm_install(&candidate).into()
    }

    pub fn confirm_wipe(&mut self) -> ResultCode {
        self.session().confirm_wipe().into()
    }

    /// Draw a progress frame without waiting for input.
    pub fn report_progress(&mut self, label: &str, percent: i32, initialize: bool) -> ResultCode {
        match ProgressState::new(label, percent) {
            Ok(state) => {
                self.surface.show_progress(&state, initialize);
                ResultCode::Success
            }
            Err(err) => {
                log::warn!("progress refused: {}", err);
                err.code()
            }
        }
    }

    /// Progress for work with no measurable completion, such as an erase.
    pub fn report_busy(&mut self, label: &str) -> ResultCode {
        self.surface
            .show_progress(&ProgressState::indeterminate(label), true);
        ResultCode::Success
    }

    pub fn show_intro(&mut self) -> Action {
        self.navigate(&screens::INTRO)
    }

    pub fn show_menu(&mut self) -> Action {
        self.navigate(&screens::MENU)
    }

    pub fn show_connect(&mut self) -> Action {
        self.navigate(&screens::CONNECT)
    }

    /// Show the installed firmware. The strings are escaped like prompt text
    /// and held to the same limits.
    pub fn show_firmware_info(&mut self, vendor: &[u8], version: &str) -> Result<Action> {
        if let Err(err) = check_lengths(vendor, version) {
            log::warn!("firmware info refused: {}", err);
            return Err(err);
        }

        let vendor = format!("Vendor: {}", VendorText(vendor));
        let version = format!("Version: {}", VersionText(version));
        let lines = [vendor.as_str(), version.as_str()];

        Ok(self.navigate(&NavScreen {
            title: "FIRMWARE INFO",
            lines: &lines,
            items: FIRMWARE_INFO_ITEMS,
            back: Some(Action::Close),
        }))
    }

    fn navigate(&mut self, screen: &NavScreen<'_>) -> Action {
        loop {
            let exit = self.surface.show_screen(screen);
            if let Some(action) = screen.action(exit) {
                log::debug!("{} left: {:?}", screen.title, action);
                return action;
            }
        }
    }
}

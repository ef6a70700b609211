// SPDX-License-Identifier: GPL-3.0-only

//! Confirmation gates run by the bootloader before it flashes or erases.
//!
//! The boot sequence calls [`Bootloader::confirm_install`] or
//! [`Bootloader::confirm_wipe`] and proceeds only on [`ResultCode::Confirm`].
//! Drawing and key handling live behind [`Surface`]; [`FramebufferSurface`]
//! is the implementation for orbclient renderers.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use self::bootloader::Bootloader;
pub use self::config::Config;
pub use self::display::FramebufferSurface;
pub use self::framebuffer::Framebuffer;
pub use self::input::{Gesture, GestureDecoder, Input, InputEvent, Key};
pub use self::metadata::{ConfirmMode, FirmwareCandidate, RiskClass, VendorText, VersionText};
pub use self::outcome::{AbortReason, ConfirmationOutcome};
pub use self::progress::ProgressState;
pub use self::prompt::{Prompt, Warning};
pub use self::screens::{Action, NavScreen, ScreenExit};
pub use self::session::{GateState, Session};
pub use self::status::{Error, Result, ResultCode, ReturnCode};
pub use self::surface::Surface;
pub use self::theme::Theme;

mod bootloader;
pub mod config;
mod display;
mod framebuffer;
mod gate;
mod input;
mod metadata;
mod outcome;
mod progress;
mod prompt;
pub mod screens;
mod session;
mod status;
mod surface;
pub mod text;
mod theme;

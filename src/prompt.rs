// SPDX-License-Identifier: GPL-3.0-only

use alloc::vec;
use alloc::vec::Vec;

use crate::metadata::{ConfirmMode, FirmwareCandidate, RiskClass, VendorText, VersionText};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Warning {
    Downgrade,
    VendorChange,
    SeedErase,
}

impl Warning {
    pub fn text(&self) -> &'static str {
        match self {
            Warning::Downgrade => "Firmware downgrade",
            Warning::VendorChange => "Vendor change",
            Warning::SeedErase => "Seed will be erased!",
        }
    }
}

/// Everything a surface must show before it may collect a gesture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prompt<'a> {
    pub title: &'static str,
    pub message: &'static str,
    pub vendor: Option<VendorText<'a>>,
    pub version: Option<VersionText<'a>>,
    pub warnings: Vec<Warning>,
    pub mode: ConfirmMode,
}

impl<'a> Prompt<'a> {
    pub fn install(candidate: &FirmwareCandidate<'a>) -> Self {
        let risk = candidate.risk();

        let title = match risk {
            RiskClass::Safe => "Update firmware",
            RiskClass::Downgrade => "Downgrade firmware",
            RiskClass::VendorMismatch => "Vendor change",
            RiskClass::DowngradeAndMismatch => "Downgrade and vendor change",
        };

        let mut warnings = Vec::new();
        if risk.downgrade() {
            warnings.push(Warning::Downgrade);
        }
        if risk.mismatch() {
            warnings.push(Warning::VendorChange);
        }
        if risk != RiskClass::Safe {
            warnings.push(Warning::SeedErase);
        }

        Prompt {
            title,
            message: "Install firmware by",
            vendor: Some(candidate.vendor()),
            version: Some(candidate.version()),
            warnings,
            mode: ConfirmMode::for_risk(risk),
        }
    }

    pub fn wipe() -> Self {
        Prompt {
            title: "Wipe device",
            message: "Do you want to wipe the device?",
            vendor: None,
            version: None,
            warnings: vec![Warning::SeedErase],
            mode: ConfirmMode::Strong,
        }
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}

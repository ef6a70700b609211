// SPDX-License-Identifier: GPL-3.0-only

use core::fmt::{self, Write};

use crate::config::{VENDOR_NAME_MAX, VERSION_LABEL_MAX};
use crate::status::{Error, Result};

/// Reject vendor or version text that would not fit on screen untruncated.
pub(crate) fn check_lengths(vendor_name: &[u8], version_label: &str) -> Result<()> {
    if vendor_name.len() > VENDOR_NAME_MAX {
        return Err(Error::VendorTooLong {
            len: vendor_name.len(),
            max: VENDOR_NAME_MAX,
        });
    }
    if version_label.len() > VERSION_LABEL_MAX {
        return Err(Error::VersionTooLong {
            len: version_label.len(),
            max: VERSION_LABEL_MAX,
        });
    }
    Ok(())
}

/// What the external verifier learned about a pending firmware image.
///
/// Borrowed from the caller for the length of one confirmation. Construction
/// is the only place lengths are checked, so a candidate that exists is
/// always displayable without truncation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FirmwareCandidate<'a> {
    vendor_name: &'a [u8],
    version_label: &'a str,
    is_downgrade: bool,
    vendor_trusted: bool,
}

impl<'a> FirmwareCandidate<'a> {
    pub fn new(
        vendor_name: &'a [u8],
        version_label: &'a str,
        is_downgrade: bool,
        vendor_trusted: bool,
    ) -> Result<Self> {
        check_lengths(vendor_name, version_label)?;

        Ok(FirmwareCandidate {
            vendor_name,
            version_label,
            is_downgrade,
            vendor_trusted,
        })
    }

    pub fn vendor(&self) -> VendorText<'a> {
        VendorText(self.vendor_name)
    }

    pub fn version(&self) -> VersionText<'a> {
        VersionText(self.version_label)
    }

    pub fn is_downgrade(&self) -> bool {
        self.is_downgrade
    }

    pub fn vendor_trusted(&self) -> bool {
        self.vendor_trusted
    }

    /// An unnamed vendor is never trusted for prompt purposes.
    pub fn vendor_mismatch(&self) -> bool {
        !self.vendor_trusted || self.vendor_name.is_empty()
    }

    pub fn risk(&self) -> RiskClass {
        RiskClass::new(self.is_downgrade, self.vendor_mismatch())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RiskClass {
    Safe,
    Downgrade,
    VendorMismatch,
    DowngradeAndMismatch,
}

impl RiskClass {
    pub fn new(downgrade: bool, mismatch: bool) -> Self {
        match (downgrade, mismatch) {
            (false, false) => RiskClass::Safe,
            (true, false) => RiskClass::Downgrade,
            (false, true) => RiskClass::VendorMismatch,
            (true, true) => RiskClass::DowngradeAndMismatch,
        }
    }

    pub fn downgrade(&self) -> bool {
        matches!(self, RiskClass::Downgrade | RiskClass::DowngradeAndMismatch)
    }

    pub fn mismatch(&self) -> bool {
        matches!(
            self,
            RiskClass::VendorMismatch | RiskClass::DowngradeAndMismatch
        )
    }
}

/// Which confirmation gesture the surface must collect.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfirmMode {
    Normal,
    Strong,
}

impl ConfirmMode {
    pub fn for_risk(risk: RiskClass) -> Self {
        match risk {
            RiskClass::Safe => ConfirmMode::Normal,
            RiskClass::Downgrade | RiskClass::VendorMismatch | RiskClass::DowngradeAndMismatch => {
                ConfirmMode::Strong
            }
        }
    }
}

/// Vendor name as inert display text.
///
/// Printable ASCII is shown as is. Every other byte becomes a visible `\xNN`
/// escape, so control characters reach the screen as text and a look-alike
/// name cannot hide its extra bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VendorText<'a>(pub &'a [u8]);

impl VendorText<'_> {
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VendorText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("unknown vendor");
        }
        for &b in self.0 {
            if is_printable(b) && b != b'\\' {
                f.write_char(b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Version label as inert display text, escaped like [`VendorText`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VersionText<'a>(pub &'a str);

impl VersionText<'_> {
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VersionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("unknown version");
        }
        for c in self.0.chars() {
            if c.is_ascii() && is_printable(c as u8) && c != '\\' {
                f.write_char(c)?;
            } else {
                write!(f, "\\u{{{:x}}}", c as u32)?;
            }
        }
        Ok(())
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..0x7f).contains(&b)
}

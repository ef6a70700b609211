// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Integer handed back to the boot control flow.
pub trait ReturnCode {
    fn code(&self) -> u32;
}

/// Closed set of results the boot sequence branches on.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResultCode {
    Success = 0,
    Cancel = 1,
    Confirm = 2,
    Aborted = 3,
    InvalidInput = 4,
}

impl ReturnCode for ResultCode {
    fn code(&self) -> u32 {
        *self as u32
    }
}

impl ResultCode {
    /// Only `Confirm` allows the caller to flash or erase.
    pub fn may_proceed(&self) -> bool {
        *self == ResultCode::Confirm
    }
}

/// Caller contract violations. Never shown to the operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("vendor name is {len} bytes, limit is {max}")]
    VendorTooLong { len: usize, max: usize },
    #[error("version label is {len} bytes, limit is {max}")]
    VersionTooLong { len: usize, max: usize },
    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(i32),
}

impl Error {
    pub fn code(&self) -> ResultCode {
        match self {
            Error::VendorTooLong { .. }
            | Error::VersionTooLong { .. }
            | Error::ProgressOutOfRange(_) => ResultCode::InvalidInput,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

impl<T> From<Result<T>> for ResultCode {
    fn from(res: Result<T>) -> Self {
        match res {
            Ok(_) => ResultCode::Success,
            Err(err) => err.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_boot_abi() {
        assert_eq!(ResultCode::Success.code(), 0);
        assert_eq!(ResultCode::Cancel.code(), 1);
        assert_eq!(ResultCode::Confirm.code(), 2);
        assert_eq!(ResultCode::Aborted.code(), 3);
        assert_eq!(ResultCode::InvalidInput.code(), 4);
    }

    #[test]
    fn only_confirm_proceeds() {
        for code in [
            ResultCode::Success,
            ResultCode::Cancel,
            ResultCode::Aborted,
            ResultCode::InvalidInput,
        ] {
            assert!(!code.may_proceed(), "{:?}", code);
        }
        assert!(ResultCode::Confirm.may_proceed());
    }

    #[test]
    fn errors_are_invalid_input() {
        let res: Result<()> = Err(Error::ProgressOutOfRange(150));
        assert_eq!(ResultCode::from(res), ResultCode::InvalidInput);
        assert_eq!(
            Error::VendorTooLong { len: 65, max: 64 }.code(),
            ResultCode::InvalidInput
        );
        assert_eq!(ResultCode::from(Ok::<(), Error>(())), ResultCode::Success);
    }
}
